#![forbid(unsafe_code)]

//! SVG output for chord diagrams.
//!
//! A small builder (attributes, elements, documents) plus the functions that
//! turn a [`DiagramScene`] or a [`ChordRequest`] into an SVG string.

mod attributes;
mod document;
mod element;
mod text;

pub use attributes::{Attribute, AttributeValue, Attributes, escape_xml_text};
pub use document::SvgDocument;
pub use element::{Element, ElementKind};
pub use text::{TextBuilder, TextMetrics, anchor_name};

use fg_catalog::{ChordDictionary, ChordRequest, resolve};
use fg_core::{ChordError, ChordStyle};
use fg_layout::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DiagramScene, PrimitiveRole, ScenePrimitive, TextAlign,
    layout_chord,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgRenderConfig {
    /// Size the root to its container instead of a fixed 160×160.
    pub responsive: bool,
    /// Add `role="img"` with a document-level title and description.
    pub accessible: bool,
    pub font_family: String,
    /// Extra classes on the root `<svg>`.
    pub root_classes: Vec<String>,
    /// Tiles per row in a variation sheet.
    pub sheet_columns: usize,
    /// Space between tiles in a variation sheet.
    pub sheet_gap: f32,
}

impl Default for SvgRenderConfig {
    fn default() -> Self {
        Self {
            responsive: false,
            accessible: false,
            font_family: String::from("Arial, sans-serif"),
            root_classes: Vec::new(),
            sheet_columns: 4,
            sheet_gap: 10.0,
        }
    }
}

/// CSS class for a primitive role.
#[must_use]
pub fn role_class(role: PrimitiveRole) -> String {
    format!("fg-{}", role.as_str())
}

/// Render a laid-out diagram.
#[must_use]
pub fn render_scene_svg(scene: &DiagramScene, config: &SvgRenderConfig) -> String {
    let mut doc = root_document(scene.width, scene.height, &scene.style, config);
    if config.accessible {
        doc = doc.accessible(scene.title.as_str(), describe_scene(scene));
    }
    doc.data("chord", &scene.title)
        .data("start-fret", &scene.start_fret.to_string())
        .children(scene_elements(scene))
        .to_string()
}

/// Resolve, lay out and render one chord.
pub fn try_render_chord_svg(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
    config: &SvgRenderConfig,
) -> Result<String, ChordError> {
    let scene = chord_scene(request, dictionary)?;
    Ok(render_scene_svg(&scene, config))
}

/// Like [`try_render_chord_svg`], but a failure becomes a placeholder diagram
/// that shows the error message.
#[must_use]
pub fn render_chord_svg(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
    config: &SvgRenderConfig,
) -> String {
    match try_render_chord_svg(request, dictionary, config) {
        Ok(svg) => svg,
        Err(err) => {
            warn!(
                chord = request.name.as_str(),
                code = err.code().as_str(),
                "Rendering placeholder: {err}"
            );
            root_document(CANVAS_WIDTH, CANVAS_HEIGHT, &request.style, config)
                .data("error-code", err.code().as_str())
                .children(placeholder_elements(&err, &request.style))
                .to_string()
        }
    }
}

/// One standalone SVG per variant of `request.name`, lowest position first.
///
/// Style and tuning carry over to every variant; an explicit encoding does
/// not. An unknown base yields an empty list.
#[must_use]
pub fn render_variations_svg(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
    config: &SvgRenderConfig,
) -> Vec<(String, String)> {
    let variants = dictionary.variants(&request.name);
    debug!(
        "Rendering {} variants of {:?}",
        variants.len(),
        request.name
    );
    variants
        .into_iter()
        .map(|name| {
            let svg = render_chord_svg(&request.for_name(name.as_str()), dictionary, config);
            (name, svg)
        })
        .collect()
}

/// Every variant of `request.name` tiled into a single document.
///
/// Returns `None` when the chord has no variants.
#[must_use]
pub fn render_variation_sheet_svg(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
    config: &SvgRenderConfig,
) -> Option<String> {
    let variants = dictionary.variants(&request.name);
    if variants.is_empty() {
        return None;
    }

    let columns = config.sheet_columns.clamp(1, variants.len());
    let rows = variants.len().div_ceil(columns);
    let gap = config.sheet_gap.max(0.0);
    let width = columns as f32 * CANVAS_WIDTH + (columns - 1) as f32 * gap;
    let height = rows as f32 * CANVAS_HEIGHT + (rows - 1) as f32 * gap;

    let tiles = variants.iter().enumerate().map(|(index, name)| {
        let x = (index % columns) as f32 * (CANVAS_WIDTH + gap);
        let y = (index / columns) as f32 * (CANVAS_HEIGHT + gap);
        let tile_request = request.for_name(name.as_str());
        let content = match chord_scene(&tile_request, dictionary) {
            Ok(scene) => scene_elements(&scene),
            Err(err) => placeholder_elements(&err, &request.style),
        };
        Element::group()
            .class("fg-tile")
            .data("chord", name)
            .transform(&format!("translate({x} {y})"))
            .children(content)
    });

    let doc = root_document(width, height, &request.style, config)
        .class("fg-sheet")
        .data("chord", &request.name)
        .data("variants", &variants.len().to_string())
        .children(tiles);
    Some(doc.to_string())
}

fn chord_scene(
    request: &ChordRequest,
    dictionary: &ChordDictionary,
) -> Result<DiagramScene, ChordError> {
    let resolved = resolve(request, dictionary)?;
    Ok(layout_chord(
        &resolved.parsed.model,
        &request.style,
        &resolved.name,
        &request.tuning,
    ))
}

fn root_document(
    width: f32,
    height: f32,
    style: &ChordStyle,
    config: &SvgRenderConfig,
) -> SvgDocument {
    let mut doc = SvgDocument::new().viewbox(0.0, 0.0, width, height);
    doc = if config.responsive {
        doc.responsive()
    } else {
        doc.width(&AttributeValue::Number(width).to_string())
            .height(&AttributeValue::Number(height).to_string())
    };
    doc = doc.attr(
        "style",
        format!(
            "font-family: {}; color: {}; background-color: {};",
            config.font_family, style.color, style.background_color
        ),
    );
    for class in &config.root_classes {
        doc = doc.class(class);
    }
    doc
}

fn scene_elements(scene: &DiagramScene) -> Vec<Element> {
    scene
        .primitives
        .iter()
        .map(|primitive| match primitive {
            ScenePrimitive::Line(line) => {
                let mut elem = Element::line()
                    .x1(line.x1)
                    .y1(line.y1)
                    .x2(line.x2)
                    .y2(line.y2)
                    .stroke(&line.stroke)
                    .stroke_width(line.stroke_width);
                if let Some(opacity) = line.stroke_opacity {
                    elem = elem.stroke_opacity(opacity);
                }
                elem.class(&role_class(line.role))
            }
            ScenePrimitive::Circle(circle) => {
                let mut elem = Element::circle()
                    .cx(circle.cx)
                    .cy(circle.cy)
                    .r(circle.r)
                    .fill(&circle.fill)
                    .class(&role_class(circle.role));
                if let Some(ref title) = circle.title {
                    elem = elem.child(Element::title(title.as_str()));
                }
                elem
            }
            ScenePrimitive::Text(text) => TextBuilder::new(&text.text)
                .x(text.x)
                .y(text.y)
                .align(text.align)
                .font_size(text.font_size)
                .font_weight(text.font_weight)
                .fill(&text.fill)
                .class(&role_class(text.role))
                .build(),
        })
        .collect()
}

fn placeholder_elements(err: &ChordError, style: &ChordStyle) -> Vec<Element> {
    let metrics = TextMetrics::default();
    let lines = metrics.wrap(&err.to_string(), CANVAS_WIDTH - 20.0);
    let block_height = metrics.line_height_px() * lines.len().saturating_sub(1) as f32;
    let message = TextBuilder::new(&lines.join("\n"))
        .x(CANVAS_WIDTH / 2.0)
        .y((CANVAS_HEIGHT - block_height) / 2.0)
        .align(TextAlign::Middle)
        .font_size(metrics.font_size)
        .line_height(metrics.line_height)
        .fill(&style.muted_string_color)
        .class("fg-error")
        .build();
    vec![message]
}

fn describe_scene(scene: &DiagramScene) -> String {
    let dots = scene.circles().count();
    format!(
        "Chord diagram for {} on {} strings, frets {} to {}, {} fretted {}",
        scene.title,
        scene.string_count,
        scene.start_fret,
        scene.start_fret + scene.visible_fret_count - 1,
        dots,
        if dots == 1 { "note" } else { "notes" }
    )
}

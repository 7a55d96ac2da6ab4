#![forbid(unsafe_code)]

//! Chord diagram layout.
//!
//! Turns a [`FrettingModel`] into a [`DiagramScene`] on a fixed 160×160
//! canvas: a title, horizontal fret rows, vertical strings in encoding order,
//! finger dots, an optional barre, and note labels under the strings.

mod scene;

pub use scene::{
    CirclePrimitive, DiagramScene, LinePrimitive, PrimitiveRole, ScenePrimitive, TextAlign,
    TextPrimitive,
};

use fg_core::{ChordStyle, FrettingModel, StringState, Tuning};
use tracing::debug;

pub const CANVAS_WIDTH: f32 = 160.0;
pub const CANVAS_HEIGHT: f32 = 160.0;
/// Y of the first fret line; strings start here.
pub const STRINGS_TOP: f32 = 30.0;
/// Left and right margin of the string area.
pub const X_MARGIN: f32 = 25.0;
/// Space kept below the last fret row for open-note labels.
pub const BOTTOM_MARGIN: f32 = 15.0;
pub const FINGER_RADIUS: f32 = 9.0;

const TITLE_Y: f32 = 15.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const TITLE_FONT_WEIGHT: u16 = 900;
const LABEL_FONT_SIZE: f32 = 12.0;
const NOTE_FONT_SIZE: f32 = 10.0;
const MARKER_FONT_WEIGHT: u16 = 600;
const NUT_STROKE_WIDTH: f32 = 5.0;
const FRET_STROKE_WIDTH: f32 = 1.0;
const STRING_STROKE_WIDTH: f32 = 1.5;
const BARRE_OPACITY: f32 = 0.5;
/// Baseline offset that visually centres 12px text on a point.
const TEXT_BASELINE_SHIFT: f32 = 4.0;
const FINGER_LABEL_SHIFT: f32 = 5.0;

/// Positions shared by every primitive of one diagram.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    start_fret: u32,
    fret_space: f32,
    string_space: f32,
    string_count: usize,
}

impl Geometry {
    fn new(model: &FrettingModel) -> Self {
        let fret_space =
            (CANVAS_HEIGHT - STRINGS_TOP - BOTTOM_MARGIN) / model.visible_fret_count as f32;
        let string_count = model.strings.len();
        let string_space = if string_count > 1 {
            (CANVAS_WIDTH - 2.0 * X_MARGIN) / (string_count - 1) as f32
        } else {
            0.0
        };
        Self {
            start_fret: model.start_fret,
            fret_space,
            string_space,
            string_count,
        }
    }

    fn string_x(&self, string_index: usize) -> f32 {
        if self.string_count == 1 {
            CANVAS_WIDTH / 2.0
        } else {
            X_MARGIN + self.string_space * string_index as f32
        }
    }

    fn row_top(&self, row: u32) -> f32 {
        STRINGS_TOP + self.fret_space * row as f32
    }

    /// Vertical centre of the row holding an absolute fret.
    fn fret_centre(&self, fret: u32) -> f32 {
        STRINGS_TOP
            + self.fret_space * (fret as f32 - self.start_fret as f32)
            + self.fret_space / 2.0
    }

    fn string_bottom(&self) -> f32 {
        CANVAS_HEIGHT - BOTTOM_MARGIN
    }
}

/// Lay out a chord diagram.
///
/// `display_name` becomes the title; `tuning` supplies the open-note labels
/// and the sounded note attached to each finger dot.
#[must_use]
pub fn layout_chord(
    model: &FrettingModel,
    style: &ChordStyle,
    display_name: &str,
    tuning: &Tuning,
) -> DiagramScene {
    let geometry = Geometry::new(model);
    let mut primitives =
        Vec::with_capacity(2 * model.visible_fret_count as usize + 4 * model.strings.len() + 2);

    primitives.push(text(
        PrimitiveRole::Title,
        CANVAS_WIDTH / 2.0,
        TITLE_Y,
        display_name,
        TextAlign::Middle,
        TITLE_FONT_SIZE,
        Some(TITLE_FONT_WEIGHT),
        &style.color,
    ));

    push_fret_rows(&mut primitives, model, &geometry, style);

    if let Some(barre) = barre_line(model, &geometry, style) {
        primitives.push(ScenePrimitive::Line(barre));
    }

    push_strings(&mut primitives, model, &geometry, style);
    push_finger_dots(&mut primitives, model, &geometry, style, tuning);
    push_open_notes(&mut primitives, model, &geometry, style, tuning);

    debug!(
        "Laid out chord {display_name:?}: frets={}..{}, strings={}, primitives={}",
        model.start_fret,
        model.end_fret(),
        model.strings.len(),
        primitives.len()
    );

    DiagramScene {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        title: display_name.to_string(),
        style: style.clone(),
        start_fret: model.start_fret,
        visible_fret_count: model.visible_fret_count,
        string_count: model.strings.len(),
        primitives,
    }
}

fn push_fret_rows(
    primitives: &mut Vec<ScenePrimitive>,
    model: &FrettingModel,
    geometry: &Geometry,
    style: &ChordStyle,
) {
    for row in 0..model.visible_fret_count {
        let fret_number = model.start_fret + row;
        let y = geometry.row_top(row);
        let is_nut = fret_number == 1;

        primitives.push(ScenePrimitive::Line(LinePrimitive {
            role: if is_nut {
                PrimitiveRole::Nut
            } else {
                PrimitiveRole::Fret
            },
            x1: X_MARGIN - 1.0,
            y1: y,
            x2: CANVAS_WIDTH - X_MARGIN + 1.0,
            y2: y,
            stroke: style.color.clone(),
            stroke_width: if is_nut {
                NUT_STROKE_WIDTH
            } else {
                FRET_STROKE_WIDTH
            },
            stroke_opacity: None,
        }));

        primitives.push(text(
            PrimitiveRole::FretLabel,
            X_MARGIN - 10.0,
            y + geometry.fret_space / 2.0 + TEXT_BASELINE_SHIFT,
            &fret_number.to_string(),
            TextAlign::End,
            LABEL_FONT_SIZE,
            None,
            &style.color,
        ));
    }
}

/// A translucent bar across the strings held by the index finger.
fn barre_line(
    model: &FrettingModel,
    geometry: &Geometry,
    style: &ChordStyle,
) -> Option<LinePrimitive> {
    let barre = model.barre()?;
    let y = geometry.fret_centre(barre.fret);
    Some(LinePrimitive {
        role: PrimitiveRole::Barre,
        x1: geometry.string_x(barre.first_string),
        y1: y,
        x2: geometry.string_x(barre.last_string),
        y2: y,
        stroke: style.color.clone(),
        stroke_width: FINGER_RADIUS * 2.0,
        stroke_opacity: Some(BARRE_OPACITY),
    })
}

fn push_strings(
    primitives: &mut Vec<ScenePrimitive>,
    model: &FrettingModel,
    geometry: &Geometry,
    style: &ChordStyle,
) {
    for (index, string) in model.strings.iter().enumerate() {
        let x = geometry.string_x(index);
        primitives.push(ScenePrimitive::Line(LinePrimitive {
            role: PrimitiveRole::String,
            x1: x,
            y1: STRINGS_TOP,
            x2: x,
            y2: geometry.string_bottom(),
            stroke: string_color(string, style).to_string(),
            stroke_width: STRING_STROKE_WIDTH,
            stroke_opacity: None,
        }));

        let marker = if string.is_muted() {
            Some("x")
        } else if string.is_open() {
            Some("o")
        } else {
            None
        };
        if let Some(marker) = marker {
            primitives.push(text(
                PrimitiveRole::StringMarker,
                x,
                STRINGS_TOP - 5.0,
                marker,
                TextAlign::Middle,
                LABEL_FONT_SIZE,
                Some(MARKER_FONT_WEIGHT),
                string_color(string, style),
            ));
        }
    }
}

fn push_finger_dots(
    primitives: &mut Vec<ScenePrimitive>,
    model: &FrettingModel,
    geometry: &Geometry,
    style: &ChordStyle,
    tuning: &Tuning,
) {
    for (index, string) in model.strings.iter().enumerate() {
        let Some(fret) = string.pressed_fret() else {
            continue;
        };
        let x = geometry.string_x(index);
        let y = geometry.fret_centre(fret);

        primitives.push(ScenePrimitive::Circle(CirclePrimitive {
            role: PrimitiveRole::FingerDot,
            cx: x,
            cy: y,
            r: FINGER_RADIUS,
            fill: style.color.clone(),
            title: tuning.sounded_note(index, Some(fret)),
        }));

        if !string.finger.is_none() {
            primitives.push(text(
                PrimitiveRole::FingerLabel,
                x,
                y + FINGER_LABEL_SHIFT,
                &string.finger.to_string(),
                TextAlign::Middle,
                LABEL_FONT_SIZE,
                None,
                &style.background_color,
            ));
        }
    }
}

fn push_open_notes(
    primitives: &mut Vec<ScenePrimitive>,
    model: &FrettingModel,
    geometry: &Geometry,
    style: &ChordStyle,
    tuning: &Tuning,
) {
    for (index, string) in model.strings.iter().enumerate() {
        primitives.push(text(
            PrimitiveRole::OpenNote,
            geometry.string_x(index),
            CANVAS_HEIGHT - 5.0,
            tuning.note(index).unwrap_or_default(),
            TextAlign::Middle,
            NOTE_FONT_SIZE,
            Some(MARKER_FONT_WEIGHT),
            string_color(string, style),
        ));
    }
}

fn string_color<'a>(string: &StringState, style: &'a ChordStyle) -> &'a str {
    if string.is_muted() {
        &style.muted_string_color
    } else {
        &style.color
    }
}

#[allow(clippy::too_many_arguments)]
fn text(
    role: PrimitiveRole,
    x: f32,
    y: f32,
    content: &str,
    align: TextAlign,
    font_size: f32,
    font_weight: Option<u16>,
    fill: &str,
) -> ScenePrimitive {
    ScenePrimitive::Text(TextPrimitive {
        role,
        x,
        y,
        text: content.to_string(),
        align,
        font_size,
        font_weight,
        fill: fill.to_string(),
    })
}

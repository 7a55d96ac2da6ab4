//! Drawable primitives produced by chord layout.

use fg_core::ChordStyle;
use serde::{Deserialize, Serialize};

/// What a primitive depicts. Materializers map roles to classes or glyphs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveRole {
    Title,
    /// Fret line at the head of the neck, drawn heavier.
    Nut,
    Fret,
    FretLabel,
    Barre,
    String,
    /// `x` / `o` marker above a string.
    StringMarker,
    FingerDot,
    FingerLabel,
    OpenNote,
}

impl PrimitiveRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Nut => "nut",
            Self::Fret => "fret",
            Self::FretLabel => "fret-label",
            Self::Barre => "barre",
            Self::String => "string",
            Self::StringMarker => "string-marker",
            Self::FingerDot => "finger-dot",
            Self::FingerLabel => "finger-label",
            Self::OpenNote => "open-note",
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePrimitive {
    pub role: PrimitiveRole,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: String,
    pub stroke_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CirclePrimitive {
    pub role: PrimitiveRole,
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: String,
    /// Hover text; for finger dots, the sounded note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextPrimitive {
    pub role: PrimitiveRole,
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub align: TextAlign,
    pub font_size: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    pub fill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenePrimitive {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl ScenePrimitive {
    #[must_use]
    pub const fn role(&self) -> PrimitiveRole {
        match self {
            Self::Line(line) => line.role,
            Self::Circle(circle) => circle.role,
            Self::Text(text) => text.role,
        }
    }
}

/// A chord diagram ready to be materialized. Primitives are in paint order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramScene {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub style: ChordStyle,
    pub start_fret: u32,
    pub visible_fret_count: u32,
    pub string_count: usize,
    pub primitives: Vec<ScenePrimitive>,
}

impl DiagramScene {
    pub fn with_role(&self, role: PrimitiveRole) -> impl Iterator<Item = &ScenePrimitive> {
        self.primitives
            .iter()
            .filter(move |primitive| primitive.role() == role)
    }

    /// The barre line, if the chord has one.
    #[must_use]
    pub fn barre(&self) -> Option<&LinePrimitive> {
        self.primitives.iter().find_map(|primitive| match primitive {
            ScenePrimitive::Line(line) if line.role == PrimitiveRole::Barre => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self, role: PrimitiveRole) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(move |primitive| match primitive {
            ScenePrimitive::Text(text) if text.role == role => Some(text),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            ScenePrimitive::Circle(circle) => Some(circle),
            _ => None,
        })
    }
}

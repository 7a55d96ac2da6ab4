//! SVG attribute lists with XML escaping.

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Number(f32),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(&escape_xml_attr(s)),
            // Whole coordinates print without a fraction; the rest keep two places.
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n:.2}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f32> for AttributeValue {
    fn from(n: f32) -> Self {
        Self::Number(n)
    }
}

/// Ordered attribute list; rendering keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    attrs: Vec<Attribute>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set<K: Into<String>, V: Into<AttributeValue>>(mut self, name: K, value: V) -> Self {
        self.attrs.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn str<K: Into<String>>(self, name: K, value: &str) -> Self {
        self.set(name, value)
    }

    #[must_use]
    pub fn num<K: Into<String>>(self, name: K, value: f32) -> Self {
        self.set(name, value)
    }

    #[must_use]
    pub fn data(self, name: &str, value: &str) -> Self {
        self.set(format!("data-{name}"), value)
    }

    /// Append a class; repeated calls extend a single `class` attribute.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        for attr in &mut self.attrs {
            if attr.name == "class"
                && let AttributeValue::String(ref mut existing) = attr.value
            {
                existing.push(' ');
                existing.push_str(class);
                return self;
            }
        }
        self.set("class", class)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for attr in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", attr.name, attr.value);
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

pub(crate) fn escape_xml_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text content. Chord names such as `D#/Eb` and `C<3>` must survive.
pub fn escape_xml_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_zero_fraction() {
        let rendered = Attributes::new()
            .num("x1", 24.0)
            .num("y1", 68.333_336)
            .render();
        assert_eq!(rendered, " x1=\"24\" y1=\"68.33\"");
    }

    #[test]
    fn quotes_in_colors_are_escaped() {
        let rendered = Attributes::new().str("fill", "red\" onload=\"x").render();
        assert_eq!(rendered, " fill=\"red&quot; onload=&quot;x\"");
    }

    #[test]
    fn classes_accumulate() {
        let attrs = Attributes::new()
            .class("fg-string")
            .num("x1", 25.0)
            .class("fg-muted");
        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs.get("class"),
            Some(&AttributeValue::String(String::from("fg-string fg-muted")))
        );
    }

    #[test]
    fn data_attributes_are_prefixed() {
        let attrs = Attributes::new().data("chord", "Am");
        assert!(attrs.has("data-chord"));
        assert!(!attrs.is_empty());
    }

    #[test]
    fn text_escaping_keeps_quotes() {
        assert_eq!(escape_xml_text("A&B \"x\" <y>"), "A&amp;B \"x\" &lt;y&gt;");
    }
}

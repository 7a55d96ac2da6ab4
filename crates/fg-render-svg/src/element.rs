//! SVG elements with a fluent builder API.

use std::fmt::Write;

use crate::attributes::{Attributes, escape_xml_text};

/// The element kinds a chord diagram uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Line,
    Circle,
    Text,
    Tspan,
    Title,
    Group,
}

impl ElementKind {
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Text => "text",
            Self::Tspan => "tspan",
            Self::Title => "title",
            Self::Group => "g",
        }
    }

    /// Whether an empty element of this kind is written as `<tag/>`.
    #[must_use]
    pub const fn is_self_closing(self) -> bool {
        matches!(self, Self::Line | Self::Circle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attrs: Attributes,
    children: Vec<Element>,
    text_content: Option<String>,
}

impl Element {
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attrs: Attributes::new(),
            children: Vec::new(),
            text_content: None,
        }
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(ElementKind::Line)
    }

    #[must_use]
    pub fn circle() -> Self {
        Self::new(ElementKind::Circle)
    }

    #[must_use]
    pub fn text() -> Self {
        Self::new(ElementKind::Text)
    }

    #[must_use]
    pub fn tspan() -> Self {
        Self::new(ElementKind::Tspan)
    }

    /// A `<title>` child; browsers show it as a tooltip on the parent.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Title).content(text)
    }

    #[must_use]
    pub fn group() -> Self {
        Self::new(ElementKind::Group)
    }

    #[must_use]
    pub fn x(self, value: f32) -> Self {
        self.attr_num("x", value)
    }

    #[must_use]
    pub fn y(self, value: f32) -> Self {
        self.attr_num("y", value)
    }

    #[must_use]
    pub fn x1(self, value: f32) -> Self {
        self.attr_num("x1", value)
    }

    #[must_use]
    pub fn y1(self, value: f32) -> Self {
        self.attr_num("y1", value)
    }

    #[must_use]
    pub fn x2(self, value: f32) -> Self {
        self.attr_num("x2", value)
    }

    #[must_use]
    pub fn y2(self, value: f32) -> Self {
        self.attr_num("y2", value)
    }

    #[must_use]
    pub fn cx(self, value: f32) -> Self {
        self.attr_num("cx", value)
    }

    #[must_use]
    pub fn cy(self, value: f32) -> Self {
        self.attr_num("cy", value)
    }

    #[must_use]
    pub fn r(self, value: f32) -> Self {
        self.attr_num("r", value)
    }

    #[must_use]
    pub fn fill(self, color: &str) -> Self {
        self.attr("fill", color)
    }

    #[must_use]
    pub fn stroke(self, color: &str) -> Self {
        self.attr("stroke", color)
    }

    #[must_use]
    pub fn stroke_width(self, width: f32) -> Self {
        self.attr_num("stroke-width", width)
    }

    #[must_use]
    pub fn stroke_opacity(self, value: f32) -> Self {
        self.attr_num("stroke-opacity", value)
    }

    #[must_use]
    pub fn transform(self, value: &str) -> Self {
        self.attr("transform", value)
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs = self.attrs.class(class);
        self
    }

    #[must_use]
    pub fn data(mut self, name: &str, value: &str) -> Self {
        self.attrs = self.attrs.data(name, value);
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs = self.attrs.str(name, value);
        self
    }

    #[must_use]
    pub fn attr_num(mut self, name: &str, value: f32) -> Self {
        self.attrs = self.attrs.num(name, value);
        self
    }

    #[must_use]
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, elem: Element) -> Self {
        self.children.push(elem);
        self
    }

    #[must_use]
    pub fn children<I: IntoIterator<Item = Element>>(mut self, elems: I) -> Self {
        self.children.extend(elems);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(128);
        self.write_to_string(&mut output);
        output
    }

    pub fn write_to_string(&self, output: &mut String) {
        let tag = self.kind.tag_name();
        let _ = write!(output, "<{tag}");
        output.push_str(&self.attrs.render());

        if self.kind.is_self_closing() && self.children.is_empty() && self.text_content.is_none() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        if let Some(ref text) = self.text_content {
            output.push_str(&escape_xml_text(text));
        }
        for child in &self.children {
            child.write_to_string(output);
        }
        let _ = write!(output, "</{tag}>");
    }
}

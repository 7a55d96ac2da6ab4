//! Root `<svg>` element.

use std::fmt::{self, Write};

use crate::attributes::{Attributes, escape_xml_attr, escape_xml_text};
use crate::element::Element;

#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    attrs: Attributes,
    viewbox: Option<(f32, f32, f32, f32)>,
    width: Option<String>,
    height: Option<String>,
    title: Option<String>,
    desc: Option<String>,
    children: Vec<Element>,
}

impl SvgDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn viewbox(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.viewbox = Some((x, y, width, height));
        self
    }

    #[must_use]
    pub fn width(mut self, w: &str) -> Self {
        self.width = Some(w.to_string());
        self
    }

    #[must_use]
    pub fn height(mut self, h: &str) -> Self {
        self.height = Some(h.to_string());
        self
    }

    /// Let the host size the diagram; the viewBox keeps proportions.
    #[must_use]
    pub fn responsive(self) -> Self {
        self.width("100%").height("100%")
    }

    /// Mark the document as an image with a title and description.
    #[must_use]
    pub fn accessible(mut self, title: impl Into<String>, desc: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.desc = Some(desc.into());
        self.attrs = self.attrs.str("role", "img");
        self
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
    pub fn attr<V: Into<String>>(mut self, name: &str, value: V) -> Self {
        self.attrs = self.attrs.set(name, value.into());
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

    pub fn write_to_string(&self, output: &mut String) {
        output.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");

        if let Some((x, y, w, h)) = self.viewbox {
            let _ = write!(output, " viewBox=\"{x} {y} {w} {h}\"");
        }
        if let Some(ref w) = self.width {
            let _ = write!(output, " width=\"{}\"", escape_xml_attr(w));
        }
        if let Some(ref h) = self.height {
            let _ = write!(output, " height=\"{}\"", escape_xml_attr(h));
        }
        output.push_str(&self.attrs.render());
        output.push('>');

        if let Some(ref title) = self.title {
            let _ = write!(output, "<title>{}</title>", escape_xml_text(title));
        }
        if let Some(ref desc) = self.desc {
            let _ = write!(output, "<desc>{}</desc>", escape_xml_text(desc));
        }

        for child in &self.children {
            child.write_to_string(output);
        }

        output.push_str("</svg>");
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::with_capacity(4096);
        self.write_to_string(&mut output);
        f.write_str(&output)
    }
}

//! Text elements and rough width estimates for wrapping.

use fg_layout::TextAlign;

use crate::element::Element;

/// `text-anchor` value for a layout alignment.
#[must_use]
pub const fn anchor_name(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Middle => "middle",
        TextAlign::End => "end",
    }
}

/// Character-count width heuristic; no font metrics are available.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub avg_char_width: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            avg_char_width: 6.5,
            font_size: 12.0,
            line_height: 1.3,
        }
    }
}

impl TextMetrics {
    #[must_use]
    pub fn estimate_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| match c {
                'W' | 'M' | '@' | '%' => self.avg_char_width * 1.5,
                'i' | 'l' | '|' | '!' | '\'' | '.' | ',' => self.avg_char_width * 0.4,
                ' ' => self.avg_char_width * 0.5,
                _ => self.avg_char_width,
            })
            .sum()
    }

    #[must_use]
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Greedy word wrap to `max_width`. A single word wider than the limit
    /// gets a line of its own.
    #[must_use]
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if self.estimate_width(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

#[derive(Debug, Clone)]
pub struct TextBuilder {
    text: String,
    x: f32,
    y: f32,
    font_size: Option<f32>,
    font_weight: Option<u16>,
    fill: Option<String>,
    align: TextAlign,
    class: Option<String>,
    line_height: f32,
}

impl TextBuilder {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: 0.0,
            y: 0.0,
            font_size: None,
            font_weight: None,
            fill: None,
            align: TextAlign::Start,
            class: None,
            line_height: 1.3,
        }
    }

    #[must_use]
    pub fn x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    #[must_use]
    pub fn y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: Option<u16>) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub fn fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    #[must_use]
    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Build a `<text>`; multi-line text becomes one `<tspan>` per line.
    #[must_use]
    pub fn build(self) -> Element {
        let mut elem = Element::text()
            .x(self.x)
            .y(self.y)
            .attr("text-anchor", anchor_name(self.align));

        if let Some(size) = self.font_size {
            elem = elem.attr_num("font-size", size);
        }
        if let Some(weight) = self.font_weight {
            elem = elem.attr("font-weight", &weight.to_string());
        }
        if let Some(ref fill) = self.fill {
            elem = elem.fill(fill);
        }
        if let Some(ref class) = self.class {
            elem = elem.class(class);
        }

        let lines: Vec<&str> = self.text.lines().collect();
        if lines.len() <= 1 {
            return elem.content(self.text);
        }

        let line_height_px = self.font_size.unwrap_or(12.0) * self.line_height;
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { line_height_px };
            elem = elem.child(Element::tspan().x(self.x).attr_num("dy", dy).content(*line));
        }
        elem
    }
}

#![forbid(unsafe_code)]

//! Text chord boxes for terminals.
//!
//! ```text
//!          C
//!   x        o     o
//!   ╒══╤══╤══╤══╤══╕
//! 1 │  │  │  │  1  │
//!   ├──┼──┼──┼──┼──┤
//! 2 │  │  2  │  │  │
//!   ├──┼──┼──┼──┼──┤
//! 3 │  3  │  │  │  │
//!   └──┴──┴──┴──┴──┘
//!   E  A  D  G  B  E
//! ```

mod config;
mod glyphs;

pub use config::TermRenderConfig;
pub use glyphs::{ChordGlyphs, GlyphMode};

use fg_core::{Finger, FrettingModel, StringState, Tuning};

/// Columns from one string to the next.
const CELL_WIDTH: usize = 3;

/// Draw `model` as a chord box titled `name`.
#[must_use]
pub fn render_term(
    model: &FrettingModel,
    name: &str,
    tuning: &Tuning,
    config: &TermRenderConfig,
) -> String {
    let glyphs = ChordGlyphs::for_mode(config.glyph_mode);
    let string_count = model.strings.len();
    let label_width = if config.show_fret_labels {
        model.end_fret().to_string().len() + 1
    } else {
        0
    };
    let indent = " ".repeat(label_width);
    let grid_width = string_count.saturating_sub(1) * CELL_WIDTH + 1;

    let mut lines = Vec::new();
    if config.show_title {
        let pad = grid_width.saturating_sub(name.chars().count()) / 2;
        lines.push(format!("{indent}{}{name}", " ".repeat(pad)));
    }
    if string_count == 0 {
        return lines.join("\n");
    }

    lines.push(grid_line(
        &indent,
        string_count,
        |index| marker(&model.strings[index]),
        |_| ' ',
    ));

    lines.push(if model.start_fret == 1 {
        rule(
            &indent,
            string_count,
            glyphs.nut_left,
            glyphs.nut_joint,
            glyphs.nut_right,
            glyphs.nut,
        )
    } else {
        rule(
            &indent,
            string_count,
            glyphs.top_left,
            glyphs.t_down,
            glyphs.top_right,
            glyphs.horizontal,
        )
    });

    let barre = model.barre();
    for row in 0..model.visible_fret_count {
        let fret = model.start_fret + row;
        let label = if config.show_fret_labels {
            format!("{fret:>width$} ", width = label_width - 1)
        } else {
            String::new()
        };
        let on_barre = |gap: usize| {
            barre.is_some_and(|b| {
                b.fret == fret && b.first_string <= gap && gap < b.last_string
            })
        };
        lines.push(grid_line(
            &label,
            string_count,
            |index| fret_cell(&model.strings[index], fret, &glyphs, config.show_fingers),
            |gap| if on_barre(gap) { glyphs.barre } else { ' ' },
        ));

        let last = row + 1 == model.visible_fret_count;
        lines.push(if last {
            rule(
                &indent,
                string_count,
                glyphs.bottom_left,
                glyphs.t_up,
                glyphs.bottom_right,
                glyphs.horizontal,
            )
        } else {
            rule(
                &indent,
                string_count,
                glyphs.t_right,
                glyphs.cross,
                glyphs.t_left,
                glyphs.horizontal,
            )
        });
    }

    if config.show_notes {
        lines.push(note_line(&indent, string_count, tuning));
    }

    lines.join("\n")
}

fn marker(string: &StringState) -> char {
    if string.is_muted() {
        'x'
    } else if string.is_open() {
        'o'
    } else {
        ' '
    }
}

fn fret_cell(string: &StringState, fret: u32, glyphs: &ChordGlyphs, show_fingers: bool) -> char {
    if string.pressed_fret() != Some(fret) {
        return glyphs.vertical;
    }
    if !show_fingers {
        return glyphs.dot;
    }
    match string.finger {
        Finger::None => glyphs.dot,
        Finger::Digit(digit) => char::from_digit(u32::from(digit), 10).unwrap_or(glyphs.dot),
        Finger::Thumb => 'T',
    }
}

/// One row of string cells; `gap(i)` fills the space between strings `i`
/// and `i + 1`.
fn grid_line(
    prefix: &str,
    count: usize,
    cell: impl Fn(usize) -> char,
    gap: impl Fn(usize) -> char,
) -> String {
    let mut line = String::from(prefix);
    for index in 0..count {
        if index > 0 {
            let fill = gap(index - 1);
            line.extend(std::iter::repeat_n(fill, CELL_WIDTH - 1));
        }
        line.push(cell(index));
    }
    line.trim_end().to_string()
}

fn rule(indent: &str, count: usize, left: char, joint: char, right: char, fill: char) -> String {
    grid_line(
        indent,
        count,
        |index| match index {
            _ if count == 1 => joint,
            0 => left,
            i if i + 1 == count => right,
            _ => joint,
        },
        |_| fill,
    )
}

fn note_line(indent: &str, count: usize, tuning: &Tuning) -> String {
    let mut line = String::from(indent);
    for index in 0..count {
        let target = indent.len() + index * CELL_WIDTH;
        let width = line.chars().count();
        if width < target {
            line.extend(std::iter::repeat_n(' ', target - width));
        } else if index > 0 {
            line.push(' ');
        }
        line.push_str(tuning.note(index).unwrap_or_default());
    }
    line.trim_end().to_string()
}

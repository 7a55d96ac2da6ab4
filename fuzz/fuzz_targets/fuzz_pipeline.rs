#![no_main]

use fg_core::{ChordStyle, Tuning};
use fg_layout::layout_chord;
use fg_parser::parse;
use fg_render_svg::{SvgRenderConfig, render_scene_svg};
use fg_render_term::{TermRenderConfig, render_term};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(encoding) = std::str::from_utf8(data) else {
        return;
    };

    let model = parse(encoding).model;
    let tuning = Tuning::standard();
    let scene = layout_chord(&model, &ChordStyle::default(), "Fuzz", &tuning);

    let svg = render_scene_svg(&scene, &SvgRenderConfig::default());
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));

    let _ = render_term(&model, "Fuzz", &tuning, &TermRenderConfig::ascii());
});

//! Integration tests for the fretgram pipeline and the `fg-cli` binary.
//!
//! The pipeline tests drive the library crates end to end; the CLI tests run
//! the built binary against the built-in dictionary and temporary files.

use std::fs;
use std::process::{Command, Output};

use fg_catalog::{ChordDictionary, ChordRequest, resolve};
use fg_core::{ChordStyle, Tuning};
use fg_layout::{PrimitiveRole, layout_chord};
use fg_render_svg::{SvgRenderConfig, render_scene_svg};
use fg_render_term::{TermRenderConfig, render_term};

fn fg_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fg-cli"))
        .args(args)
        .output()
        .expect("fg-cli should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Pipeline
// =============================================================================

/// A barre chord resolves, lays out with a barre, and renders it.
#[test]
fn barre_chord_flows_through_every_stage() {
    let request = ChordRequest::named("C(3)");
    let resolved = resolve(&request, ChordDictionary::builtin()).expect("C(3) is built in");
    assert!(resolved.parsed.is_clean());
    assert_eq!(resolved.parsed.model.start_fret, 3);

    let scene = layout_chord(
        &resolved.parsed.model,
        &request.style,
        &resolved.name,
        &request.tuning,
    );
    assert_eq!(scene.with_role(PrimitiveRole::Barre).count(), 1);

    let svg = render_scene_svg(&scene, &SvgRenderConfig::default());
    assert!(svg.starts_with("<svg"), "SVG should start with <svg tag");
    assert!(svg.ends_with("</svg>"), "SVG should end with </svg>");
    assert_eq!(svg.matches("class=\"fg-barre\"").count(), 1);
    assert!(svg.contains(">3</text>"), "fret label for the first row");
}

/// Custom style and tuning reach both materializers.
#[test]
fn style_and_tuning_reach_svg_and_terminal_output() {
    let style = ChordStyle {
        color: String::from("#333333"),
        background_color: String::from("#FAFAFA"),
        muted_string_color: String::from("#888888"),
    };
    let tuning: Tuning = "D|A|D|G|A|D".parse().expect("infallible");
    let request = ChordRequest::named("D")
        .with_style(style)
        .with_tuning(tuning.clone());
    let resolved = resolve(&request, ChordDictionary::builtin()).expect("D is built in");

    let scene = layout_chord(
        &resolved.parsed.model,
        &request.style,
        &resolved.name,
        &request.tuning,
    );
    let svg = render_scene_svg(&scene, &SvgRenderConfig::default());
    assert!(svg.contains("color: #333333; background-color: #FAFAFA;"));
    assert!(svg.contains("#888888"), "muted strings use the muted color");

    let text = render_term(
        &resolved.parsed.model,
        &resolved.name,
        &tuning,
        &TermRenderConfig::ascii(),
    );
    assert_eq!(text.lines().last(), Some("  D  A  D  G  A  D"));
}

/// Rendering the same chord twice gives identical documents.
#[test]
fn pipeline_output_is_deterministic() {
    let render = || {
        let request = ChordRequest::named("Am");
        let resolved = resolve(&request, ChordDictionary::builtin()).expect("Am is built in");
        let scene = layout_chord(
            &resolved.parsed.model,
            &request.style,
            &resolved.name,
            &request.tuning,
        );
        render_scene_svg(&scene, &SvgRenderConfig::default())
    };
    assert_eq!(render(), render());
}

// =============================================================================
// CLI: render
// =============================================================================

#[test]
fn render_writes_svg_to_stdout() {
    let output = fg_cli(&["render", "C"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 160 160\""));
    assert_eq!(svg.matches("class=\"fg-finger-dot\"").count(), 3);
}

#[test]
fn render_ascii_draws_chord_box() {
    let output = fg_cli(&["render", "C", "--format", "ascii"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let expected = [
        "         C",
        "  x        o     o",
        "  ================",
        "1 |  |  |  |  1  |",
        "  +--+--+--+--+--+",
        "2 |  |  2  |  |  |",
        "  +--+--+--+--+--+",
        "3 |  3  |  |  |  |",
        "  +--+--+--+--+--+",
        "  E  A  D  G  B  E",
        "",
    ]
    .join("\n");
    assert_eq!(stdout(&output), expected);
}

#[test]
fn render_unknown_chord_fails_with_message() {
    let output = fg_cli(&["render", "H13"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Missing built-in chord definition for chord H13"));
}

#[test]
fn render_explicit_encoding_to_file_with_metadata() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("barre.svg");
    let path_str = path.to_str().expect("utf-8 path");

    let output = fg_cli(&[
        "-q",
        "render",
        "F",
        "--encoding",
        "1-1|3-1|3-1|3-1|3-1|1-1",
        "-o",
        path_str,
        "--json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty(), "output goes to the file");

    let svg = fs::read_to_string(&path).expect("svg written");
    assert!(svg.contains("data-chord=\"F\""));
    assert_eq!(svg.matches("class=\"fg-barre\"").count(), 1);

    let meta: serde_json::Value = serde_json::from_str(&stderr(&output)).expect("json metadata");
    assert_eq!(meta["format"], "svg");
    assert_eq!(meta["encoding"], "1-1|3-1|3-1|3-1|3-1|1-1");
    assert_eq!(meta["has_barre"], true);
    assert_eq!(meta["width"], 160);
    assert_eq!(meta["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn render_config_file_is_overridden_by_flags() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("style.toml");
    fs::write(
        &config,
        "color = \"#123456\"\nbackground_color = \"#ABCDEF\"\n",
    )
    .expect("write config");

    let output = fg_cli(&[
        "render",
        "Am",
        "--config",
        config.to_str().expect("utf-8 path"),
        "--background-color",
        "#000000",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let svg = stdout(&output);
    assert!(svg.contains("color: #123456; background-color: #000000;"));
}

#[test]
fn render_reports_malformed_tokens_in_metadata() {
    let output = fg_cli(&[
        "-q",
        "render",
        "Broken",
        "--encoding",
        "x|3-3|garbage|o|1-1|o",
        "--format",
        "term",
        "--json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let meta: serde_json::Value = serde_json::from_str(&stderr(&output)).expect("json metadata");
    assert_eq!(meta["warnings"][0]["token"], "garbage");
    assert_eq!(meta["warnings"][0]["string_index"], 2);
    assert!(stdout(&output).contains("Broken"));
}

// =============================================================================
// CLI: variants
// =============================================================================

#[test]
fn variants_lists_positions_in_order() {
    let output = fg_cli(&["variants", "C"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "C\nC(3)\nC(5)\n");
}

#[test]
fn variants_json_includes_encodings() {
    let output = fg_cli(&["variants", "C", "--json"]);
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(result["count"], 3);
    assert_eq!(result["variants"][0]["name"], "C");
    assert_eq!(result["variants"][0]["encoding"], "x|3-3|2-2|o|1-1|o");
    assert!(result["variants"][0].get("file").is_none());
}

#[test]
fn variants_without_matches_exit_cleanly() {
    let output = fg_cli(&["variants", "H"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("no variants"));
}

#[test]
fn variants_render_writes_one_file_per_variant() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_dir = dir.path().join("out");

    let output = fg_cli(&[
        "variants",
        "C",
        "--render",
        "--out-dir",
        out_dir.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    for stem in ["C", "C_3", "C_5"] {
        let svg = fs::read_to_string(out_dir.join(format!("{stem}.svg")))
            .unwrap_or_else(|err| panic!("{stem}.svg missing: {err}"));
        assert!(svg.starts_with("<svg"));
    }
}

#[test]
fn variants_sheet_tiles_every_variant() {
    let output = fg_cli(&["variants", "C", "--sheet"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let svg = stdout(&output);
    assert!(svg.contains("data-variants=\"3\""));
    assert_eq!(svg.matches("class=\"fg-tile\"").count(), 3);
}

#[test]
fn variants_render_without_dir_prints_text_boxes() {
    let output = fg_cli(&["variants", "C", "--render"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.matches("E  A  D  G  B  E").count(), 3);
    assert!(text.contains("C(5)"));
}

// =============================================================================
// CLI: parse / list / validate
// =============================================================================

#[test]
fn parse_outputs_model_and_warnings() {
    let output = fg_cli(&["parse", "x|3-3|2-2|o|1-1|o"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(parsed["model"]["start_fret"], 1);
    assert_eq!(parsed["model"]["visible_fret_count"], 3);
    assert_eq!(parsed["model"]["strings"][0]["fret"], serde_json::Value::Null);
    assert_eq!(parsed["model"]["strings"][1]["fret"], 3);
    assert_eq!(parsed["model"]["strings"][1]["finger"], 3);
    assert_eq!(parsed["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn parse_summary_names_the_chord_in_warnings() {
    let output = fg_cli(&["-q", "parse", "x|x|1-6-4|4-2", "--name", "Odd"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(parsed["warnings"][0]["chord"], "Odd");
    assert_eq!(parsed["warnings"][0]["token"], "1-6-4");
    assert_eq!(parsed["model"]["strings"][2]["fret"], 1);

    let summary = fg_cli(&["parse", "5-1|7-3|7-4|6-2|5-1|5-1", "--summary"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&summary)).expect("json");
    assert_eq!(value["min_fret"], 5);
    assert_eq!(value["max_fret"], 7);
    assert_eq!(value["start_fret"], 5);
}

#[test]
fn list_filters_base_names() {
    let output = fg_cli(&["list", "--filter", "maj7"]);
    assert!(output.status.success());
    let names: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert!(names.contains(&String::from("Cmaj7")));
    assert!(names.iter().all(|name| name.contains("maj7")));
    assert!(names.iter().all(|name| !name.contains('(')));
}

#[test]
fn validate_accepts_clean_yaml_dictionary() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chords.yaml");
    fs::write(
        &path,
        "- name: Em\n  encoding: o|2-2|2-3|o|o|o\n- name: Em(7)\n  encoding: x|7-1|9-3|9-4|8-2|7-1\n",
    )
    .expect("write dictionary");

    let output = fg_cli(&["validate", "--dictionary", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("✓ Valid"));
    assert!(stdout(&output).contains("Chords: 2"));
}

#[test]
fn validate_strict_fails_on_malformed_tokens() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chords.json");
    fs::write(
        &path,
        r#"[{"name":"A","encoding":"x|o|2-1|2-2|2-3|o"},{"name":"A(5)","encoding":"5-1|7-3|7-4|x6|5-1|5-1"}]"#,
    )
    .expect("write dictionary");
    let path_str = path.to_str().expect("utf-8 path");

    let lenient = fg_cli(&["-q", "validate", "--dictionary", path_str]);
    assert!(lenient.status.success());

    let strict = fg_cli(&["-q", "validate", "--dictionary", path_str, "--strict", "--json"]);
    assert!(!strict.status.success());
    let result: serde_json::Value = serde_json::from_str(&stdout(&strict)).expect("json");
    assert_eq!(result["valid"], false);
    assert_eq!(result["clean_count"], 1);
    assert_eq!(result["warnings"][0]["code"], "chord/warn/malformed-token");
    assert_eq!(result["warnings"][0]["token"], "x6");
}

#[test]
fn validate_reports_builtin_data_defects() {
    let output = fg_cli(&["-q", "validate", "--json"]);
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let tokens: Vec<&str> = result["warnings"]
        .as_array()
        .expect("warnings array")
        .iter()
        .filter_map(|warning| warning["token"].as_str())
        .collect();
    assert!(tokens.contains(&"1-6-4"));
    assert!(tokens.contains(&"6-1x"));

    let parsed = fg_cli(&["-q", "parse", "x|6-1x|7-2|8-4|8-4"]);
    assert!(parsed.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&parsed)).expect("json");
    assert_eq!(value["model"]["strings"][1]["fret"], 6);
    assert_eq!(value["model"]["strings"][1]["finger"], 1);

    // The shipped data carries one entry without a name.
    assert_eq!(result["errors"][0]["code"], "chord/error/missing-name");
    assert!(!output.status.success());
}

#[test]
fn missing_dictionary_file_is_an_error() {
    let output = fg_cli(&["list", "--dictionary", "/nonexistent/chords.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load dictionary"));
}

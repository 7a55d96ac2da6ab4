#![no_main]

use fg_core::FrettingModel;
use fg_parser::{parse, parse_evidence_json, split_tokens};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(encoding) = std::str::from_utf8(data) else {
        return;
    };

    let parsed = parse(encoding);
    let model = &parsed.model;

    assert_eq!(model.strings.len(), split_tokens(encoding).len());
    assert!(model.start_fret >= 1);
    assert!(model.visible_fret_count >= FrettingModel::MIN_VISIBLE_FRETS);
    assert!(parsed.warnings.len() <= model.strings.len());

    let summary: serde_json::Value =
        serde_json::from_str(&parse_evidence_json(&parsed)).expect("summary is valid JSON");
    assert_eq!(summary["string_count"], model.strings.len());
});

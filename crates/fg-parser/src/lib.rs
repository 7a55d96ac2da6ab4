#![forbid(unsafe_code)]

//! Chord encoding parser.
//!
//! An encoding lists one token per string, separated by `|`:
//! `x` (muted), `o` (open), or `<fret>[-<finger>]`. For example the open C
//! major shape is `x|3-3|2-2|o|1-1|o`.

mod token;

use fg_core::{ChordWarning, FrettingModel, StringState};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

pub use token::{TokenMatch, parse_token};

/// Separator between per-string tokens.
pub const STRING_DELIMITER: char = '|';

/// State given to a string whose token could not be parsed.
///
/// Malformed strings fall back to "open, unlabelled" rather than muted, so the
/// bad entry still shows up on the diagram.
pub const MALFORMED_FALLBACK: StringState = StringState::open();

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub model: FrettingModel,
    pub warnings: Vec<ChordWarning>,
}

impl ParseResult {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parse an anonymous encoding.
#[must_use]
pub fn parse(encoding: &str) -> ParseResult {
    parse_named("", encoding)
}

/// Parse the encoding of a named chord. The name only appears in diagnostics.
#[must_use]
pub fn parse_named(name: &str, encoding: &str) -> ParseResult {
    let mut warnings = Vec::new();

    let strings: Vec<StringState> = split_tokens(encoding)
        .into_iter()
        .enumerate()
        .map(|(string_index, token)| {
            let matched = parse_token(token);
            if let Some(matched) = matched.filter(|matched| matched.complete) {
                return matched.state;
            }

            let warning = ChordWarning::malformed_token(name, token, string_index);
            warn!(
                chord = name,
                token,
                string_index,
                code = warning.code.as_str(),
                partial = matched.is_some(),
                "Invalid string pattern"
            );
            warnings.push(warning);
            matched.map_or(MALFORMED_FALLBACK, |matched| matched.state)
        })
        .collect();

    let model = FrettingModel::from_strings(strings);

    debug!(
        "Parsed chord {name:?}: strings={}, start_fret={}, visible_frets={}, warnings={}",
        model.strings.len(),
        model.start_fret,
        model.visible_fret_count,
        warnings.len()
    );

    ParseResult { model, warnings }
}

/// Split an encoding into per-string tokens.
///
/// Empty segments at the end (e.g. from a trailing `|`) are dropped; empty
/// segments anywhere else are kept so they are reported as malformed.
#[must_use]
pub fn split_tokens(encoding: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = encoding.split(STRING_DELIMITER).collect();
    while tokens.last().is_some_and(|token| token.trim().is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Compact JSON summary of a parse, for tooling.
#[must_use]
pub fn parse_evidence_json(parsed: &ParseResult) -> String {
    json!({
        "string_count": parsed.model.strings.len(),
        "start_fret": parsed.model.start_fret,
        "visible_fret_count": parsed.model.visible_fret_count,
        "min_fret": parsed.model.min_fret(),
        "max_fret": parsed.model.max_fret(),
        "warning_count": parsed.warnings.len(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_evidence_json, parse_named, split_tokens};
    use fg_core::{ChordWarningCode, Finger, StringState};
    use proptest::prelude::*;

    fn fretted(fret: u32, finger: u8) -> StringState {
        StringState::fretted(fret, Finger::Digit(finger))
    }

    #[test]
    fn parses_open_c_major() {
        let result = parse("x|3-3|2-2|o|1-1|o");
        assert!(result.is_clean());
        assert_eq!(
            result.model.strings,
            vec![
                StringState::muted(),
                fretted(3, 3),
                fretted(2, 2),
                StringState::open(),
                fretted(1, 1),
                StringState::open(),
            ]
        );
        assert_eq!(result.model.min_fret(), 1);
        assert_eq!(result.model.max_fret(), 3);
        assert_eq!(result.model.visible_fret_count, 3);
        assert_eq!(result.model.start_fret, 1);
    }

    #[test]
    fn malformed_token_falls_back_to_open_and_warns() {
        let result = parse_named("C", "x|3-3|garbage|o|1-1|o");
        assert_eq!(result.model.strings.len(), 6);
        assert_eq!(result.model.strings[2], StringState::open());
        assert_eq!(result.warnings.len(), 1);

        let warning = &result.warnings[0];
        assert_eq!(warning.code, ChordWarningCode::MalformedToken);
        assert_eq!(warning.chord, "C");
        assert_eq!(warning.token, "garbage");
        assert_eq!(warning.string_index, 2);
    }

    #[test]
    fn partial_token_keeps_its_leading_match_and_warns() {
        let result = parse_named("D#/Ebmaj13(6)", "x|6-1x|7-2|8-4|8-4");
        assert_eq!(
            result.model.strings[1],
            StringState::fretted(6, Finger::Digit(1))
        );
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].token, "6-1x");
        assert_eq!(result.warnings[0].string_index, 1);
        assert_eq!(result.model.start_fret, 6);

        let result = parse("x|x|1-6-4|4-2|3-1|3-1|x");
        assert_eq!(result.model.strings[2], StringState::fretted(1, Finger::None));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn trailing_delimiters_are_ignored() {
        assert_eq!(split_tokens("x|o|"), vec!["x", "o"]);
        assert_eq!(split_tokens("x|o||"), vec!["x", "o"]);
        let result = parse("x|o|2-1|");
        assert!(result.is_clean());
        assert_eq!(result.model.strings.len(), 3);
    }

    #[test]
    fn interior_empty_segments_are_malformed() {
        let result = parse("x||x|7-2|7-3|x|x");
        assert_eq!(result.model.strings.len(), 7);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].string_index, 1);
        assert_eq!(result.model.strings[1], StringState::open());
    }

    #[test]
    fn empty_encoding_has_no_strings() {
        let result = parse("");
        assert!(result.is_clean());
        assert!(result.model.strings.is_empty());
        assert_eq!(result.model.visible_fret_count, 3);
        assert_eq!(result.model.start_fret, 1);
    }

    #[test]
    fn barre_chord_high_on_the_neck() {
        let result = parse("8-1|10-3|10-4|9-2|8-1|8-1");
        assert!(result.is_clean());
        assert_eq!(result.model.start_fret, 8);
        assert_eq!(result.model.visible_fret_count, 3);
    }

    #[test]
    fn evidence_json_contains_window() {
        let result = parse("x|3-3|2-2|o|1-1|o");
        let evidence = parse_evidence_json(&result);
        assert!(evidence.contains("\"string_count\":6"));
        assert!(evidence.contains("\"start_fret\":1"));
        assert!(evidence.contains("\"visible_fret_count\":3"));
        assert!(evidence.contains("\"warning_count\":0"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_window_invariants_hold_for_any_input(input in ".{0,64}") {
            let result = parse(&input);
            prop_assert!(result.model.visible_fret_count >= 3);
            prop_assert!(result.model.start_fret >= 1);
        }

        #[test]
        fn prop_window_covers_every_pressed_fret(
            tokens in proptest::collection::vec("(x|o|[12]?[1-9](-[1-4T])?)", 1..8)
        ) {
            let encoding = tokens.join("|");
            let result = parse(&encoding);
            prop_assert!(result.is_clean());
            for string in &result.model.strings {
                if let Some(fret) = string.pressed_fret() {
                    prop_assert!(result.model.row_of(fret).is_some());
                }
            }
        }

        #[test]
        fn prop_parse_is_deterministic(input in "[xo0-9|T-]{0,32}") {
            prop_assert_eq!(parse(&input), parse(&input));
        }
    }
}

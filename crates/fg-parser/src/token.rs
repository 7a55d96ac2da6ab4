use chumsky::prelude::*;
use fg_core::{Finger, MAX_FRET, StringState};

// ---------------------------------------------------------------------------
// Chumsky grammar for a single per-string token
// ---------------------------------------------------------------------------
// token  := 'x' | 'o' | fret ('-' finger)?
// fret   := digit+   (at most MAX_FRET)
// finger := '1' | '2' | '3' | '4' | 'T'
// Letters are case-insensitive. The longest matching prefix of a token is
// taken; any remainder makes the token malformed but keeps the match.

/// Build a chumsky parser for one encoding token.
fn token_parser<'a>() -> impl Parser<'a, &'a str, StringState, extra::Err<Rich<'a, char>>> {
    let muted = any()
        .filter(|c: &char| c.eq_ignore_ascii_case(&'x'))
        .to(StringState::muted());

    let open = any()
        .filter(|c: &char| c.eq_ignore_ascii_case(&'o'))
        .to(StringState::open());

    let fret = any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<u32>()
                .ok()
                .filter(|fret| *fret <= MAX_FRET)
                .ok_or_else(|| Rich::custom(span, format!("fret out of range: {digits}")))
        });

    let finger = just('-').ignore_then(
        any()
            .filter(|c: &char| Finger::from_char(*c).is_some())
            .map(|c: char| Finger::from_char(c).unwrap_or_default()),
    );

    let fretted = fret
        .then(finger.or_not())
        .map(|(fret, finger): (u32, Option<Finger>)| {
            StringState::fretted(fret, finger.unwrap_or_default())
        });

    choice((muted, open, fretted))
}

/// Outcome of matching one token against the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    pub state: StringState,
    /// False when characters were left over after the grammar match.
    pub complete: bool,
}

/// Parse a single per-string token.
///
/// Surrounding whitespace is ignored. `6-1x` reads as fret 6 with finger 1
/// and is flagged incomplete. Returns `None` when no prefix of the token
/// matches; callers decide how to recover.
#[must_use]
pub fn parse_token(token: &str) -> Option<TokenMatch> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parser = token_parser().then(any().repeated().to_slice());
    let (output, errors) = parser.parse(trimmed).into_output_errors();
    if !errors.is_empty() {
        return None;
    }
    output.map(|(state, rest): (StringState, &str)| TokenMatch {
        state,
        complete: rest.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_token;
    use fg_core::{Finger, StringState};

    fn whole(token: &str) -> Option<StringState> {
        parse_token(token)
            .filter(|matched| matched.complete)
            .map(|matched| matched.state)
    }

    #[test]
    fn parses_muted_and_open_in_any_case() {
        assert_eq!(whole("x"), Some(StringState::muted()));
        assert_eq!(whole("X"), Some(StringState::muted()));
        assert_eq!(whole("o"), Some(StringState::open()));
        assert_eq!(whole("O"), Some(StringState::open()));
    }

    #[test]
    fn parses_fret_with_and_without_finger() {
        assert_eq!(whole("3-3"), Some(StringState::fretted(3, Finger::Digit(3))));
        assert_eq!(whole("12"), Some(StringState::fretted(12, Finger::None)));
        assert_eq!(whole("5-T"), Some(StringState::fretted(5, Finger::Thumb)));
        assert_eq!(whole("5-t"), Some(StringState::fretted(5, Finger::Thumb)));
        assert_eq!(whole(" 2-1 "), Some(StringState::fretted(2, Finger::Digit(1))));
    }

    #[test]
    fn zero_fret_is_open() {
        assert_eq!(whole("0"), Some(StringState::open()));
    }

    #[test]
    fn frets_beyond_the_neck_are_rejected() {
        assert_eq!(whole("36-4"), Some(StringState::fretted(36, Finger::Digit(4))));
        assert_eq!(parse_token("37"), None);
    }

    #[test]
    fn trailing_text_keeps_the_leading_match() {
        let cases = [
            ("6-1x", StringState::fretted(6, Finger::Digit(1))),
            ("1-6-4", StringState::fretted(1, Finger::None)),
            ("3-5", StringState::fretted(3, Finger::None)),
            ("3-", StringState::fretted(3, Finger::None)),
            ("xo", StringState::muted()),
            ("x6", StringState::muted()),
        ];
        for (token, state) in cases {
            let matched = parse_token(token).unwrap_or_else(|| panic!("{token:?} has a prefix"));
            assert_eq!(matched.state, state, "token {token:?}");
            assert!(!matched.complete, "token {token:?} has leftovers");
        }
    }

    #[test]
    fn rejects_tokens_without_a_matching_prefix() {
        for token in ["", " ", "garbage", "-2", "t", "99999999999"] {
            assert_eq!(parse_token(token), None, "token {token:?} should be rejected");
        }
    }
}

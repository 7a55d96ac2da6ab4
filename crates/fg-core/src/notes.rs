//! Twelve-tone note naming used for sounded-note labels.

/// The chromatic scale starting at C, spelled with sharps.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Resolve a note name to its pitch class (0 = C .. 11 = B).
///
/// Accepts the natural letters in either case followed by any run of sharp
/// (`#`, `♯`) or flat (`b`, `♭`) accidentals, so `Bb`, `a#` and `E` all
/// resolve. Returns `None` for anything else.
#[must_use]
pub fn pitch_class(name: &str) -> Option<usize> {
    let mut chars = name.trim().chars();
    let natural: i32 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut offset = 0_i32;
    for accidental in chars {
        match accidental {
            '#' | '♯' => offset += 1,
            'b' | '♭' => offset -= 1,
            _ => return None,
        }
    }

    usize::try_from((natural + offset).rem_euclid(12)).ok()
}

/// The note sounded by a string tuned to `open_note` when pressed at `fret`.
///
/// A muted string (`None`) sounds nothing. An open string sounds its own
/// open note as written. A fretted string is spelled from [`CHROMATIC_SCALE`];
/// if the open note cannot be resolved, nothing is reported.
#[must_use]
pub fn sounded_note(open_note: &str, fret: Option<u32>) -> Option<String> {
    match fret {
        None => None,
        Some(0) => Some(open_note.to_string()),
        Some(fret) => {
            let base = pitch_class(open_note)?;
            let steps = usize::try_from(fret % 12).ok()?;
            Some(CHROMATIC_SCALE[(base + steps) % 12].to_string())
        }
    }
}

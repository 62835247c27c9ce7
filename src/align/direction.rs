//! Roll direction for the number variant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which way a number is rolling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The value grew or stayed equal: new digits enter from below.
    #[default]
    Up,
    /// The value shrank: new digits enter from above.
    Down,
}

impl Direction {
    /// Direction of the change from `old` to `new`, compared by magnitude.
    ///
    /// Equal magnitudes count as [`Direction::Up`], so a reformatting such
    /// as `"1000"` -> `"1,000"` rolls up.
    #[must_use]
    pub fn between(old: &str, new: &str) -> Self {
        if parse_magnitude(new) >= parse_magnitude(old) {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// `+1.0` for up, `-1.0` for down.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// Numeric magnitude of a formatted number.
///
/// Every character other than ASCII digits, `.` and `-` is dropped first
/// (currency symbols, grouping separators, units). The longest numeric
/// prefix of what remains is parsed: an optional `-`, digits, and an
/// optional fractional part. Anything unparsable is `0.0`, and so is `-0`.
#[must_use]
pub fn parse_magnitude(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let bytes = cleaned.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    let value = cleaned[..end].parse::<f64>().unwrap_or(0.0);
    log::trace!("parsed magnitude {value} from {text:?}");
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

//! Fixed-width field encoding.
//!
//! Every byte of every output line passes through [`encode`]. The function is
//! total: any value and any width produce exactly `width` characters. Values
//! longer than the slot are clipped, never rejected.

use std::fmt::Display;
use std::iter;

/// Alignment of a value inside its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Value first, padding on the right.
    #[default]
    Left,
    /// Padding first, value on the right.
    Right,
}

impl Justification {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Pad `value` with `pad` to `width` characters, then clip to `width`.
///
/// Clipping always keeps the leading characters, for both justifications.
#[must_use]
pub fn encode(value: &str, width: usize, pad: char, justification: Justification) -> String {
    let len = value.chars().count();
    let fill = width.saturating_sub(len);
    let mut out = String::with_capacity(width);
    match justification {
        Justification::Left => {
            out.extend(value.chars().take(width));
            out.extend(iter::repeat_n(pad, fill));
        }
        Justification::Right => {
            out.extend(iter::repeat_n(pad, fill));
            out.extend(value.chars().take(width - fill));
        }
    }
    out
}

/// Encode an optional displayable value; `None` encodes as all padding.
#[must_use]
pub fn encode_value<T: Display>(
    value: Option<T>,
    width: usize,
    pad: char,
    justification: Justification,
) -> String {
    match value {
        Some(value) => encode(&value.to_string(), width, pad, justification),
        None => encode("", width, pad, justification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_right() {
        assert_eq!(encode("AB", 5, ' ', Justification::Left), "AB   ");
    }

    #[test]
    fn right_pads_left() {
        assert_eq!(encode("42", 9, '0', Justification::Right), "000000042");
    }

    #[test]
    fn clips_long_values_keeping_the_start() {
        assert_eq!(encode("ABCDEFG", 3, ' ', Justification::Left), "ABC");
        assert_eq!(encode("1234567", 3, '0', Justification::Right), "123");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(encode("anything", 0, ' ', Justification::Left), "");
        assert_eq!(encode("", 0, '0', Justification::Right), "");
    }

    #[test]
    fn none_is_all_padding() {
        assert_eq!(
            encode_value::<u32>(None, 4, '0', Justification::Right),
            "0000"
        );
        assert_eq!(
            encode_value(Some(7), 3, '0', Justification::Right),
            "007"
        );
    }
}

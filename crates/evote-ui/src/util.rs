//! Color conversion and width-aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maps an RGB color to the closest entry of the ANSI 256-color palette.
///
/// Grays go to the 24-step ramp; everything else to the 6x6x6 cube.
///
/// ```rust
/// use evote_ui::util::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((0x00, 0x97, 0xff)), 33);
/// assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            v => 232 + ((v as u16 - 8) * 24 / 247) as u8,
        };
    }
    let level = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Cuts `s` to at most `max_width` columns, ending in `…` when shortened.
///
/// Addresses and vote ids are long hex strings; cards shorten them to fit.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pads `s` with spaces on the right up to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(console::measure_text_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Pads `s` with spaces on the left up to `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(console::measure_text_width(s));
    format!("{}{s}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grays() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((0x42, 0x42, 0x42))));
    }

    #[test]
    fn test_rgb_to_ansi256_palette_primaries() {
        // dark primary #0097ff and light primary #0008ff land on different entries
        assert_eq!(rgb_to_ansi256((0x00, 0x97, 0xff)), 33);
        assert_eq!(rgb_to_ansi256((0x00, 0x08, 0xff)), 21);
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Poseidon", 10), "Poseidon");
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn test_truncate_long_address() {
        assert_eq!(truncate_to_width("03b805fab5e8ec2e", 8), "03b805f…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("投票投票", 5), "投票…");
    }

    #[test]
    fn test_pad_ignores_ansi() {
        let styled = console::style("ab").red().force_styling(true).to_string();
        let padded = pad_right(&styled, 4);
        assert_eq!(console::measure_text_width(&padded), 4);
        assert_eq!(pad_left("7", 3), "  7");
    }
}

// src/models/color.rs
//
// Permissive parser for web-style color text such as "rgba(10,20,30,0.5)".
// Anything it can't make sense of degrades to opaque white.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SegmentColor {
    pub const WHITE: SegmentColor = SegmentColor::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for SegmentColor {
    fn default() -> Self {
        Self::WHITE
    }
}

fn component_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d*\.\d+|\d+)").expect("valid component regex"))
}

/// Reads up to four comma-separated slots after the first '('. A slot with
/// no leading number reads as 0; a number with a fractional part is a 0..1
/// fraction of 255. Channels past the last slot stay at 255 and alpha is
/// only taken when all four slots are present.
pub fn parse_color(text: &str) -> SegmentColor {
    let Some(open) = text.find('(') else {
        return SegmentColor::WHITE;
    };
    let inner = &text[open + 1..];
    let inner = inner.split(')').next().unwrap_or(inner);
    // a trailing comma does not open another slot
    let inner = inner.trim_end().trim_end_matches(',');
    if !inner.chars().any(|c| c.is_ascii_digit()) {
        return SegmentColor::WHITE;
    }

    let mut values = [255u8; 4];
    let mut count = 0;
    for slot in inner.split(',').take(4) {
        let value = match component_regex().captures(slot) {
            Some(caps) => {
                let text = &caps[1];
                let number: f32 = text.parse().unwrap_or(0.0);
                if text.contains('.') {
                    number * 255.0
                } else {
                    number
                }
            }
            None => 0.0,
        };
        values[count] = value.round().clamp(0.0, 255.0) as u8;
        count += 1;
    }

    let alpha = if count > 3 { values[3] } else { 255 };
    SegmentColor::new(values[0], values[1], values[2], alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_with_fractional_alpha() {
        assert_eq!(
            parse_color("rgba(10,20,30,0.5)"),
            SegmentColor::new(10, 20, 30, 128)
        );
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(parse_color("rgb(1, 2, 3)"), SegmentColor::new(1, 2, 3, 255));
    }

    #[test]
    fn test_three_components_ignore_alpha_slot() {
        // the fourth slot is never read, so alpha stays opaque
        assert_eq!(parse_color("rgba(4,5,6)").a, 255);
    }

    #[test]
    fn test_defaults_to_white() {
        assert_eq!(parse_color(""), SegmentColor::WHITE);
        assert_eq!(parse_color("white"), SegmentColor::WHITE);
        assert_eq!(parse_color("rgb()"), SegmentColor::WHITE);
        assert_eq!(parse_color("rgb(x, y)"), SegmentColor::WHITE);
    }

    #[test]
    fn test_partial_values_are_kept() {
        assert_eq!(parse_color("rgb(12"), SegmentColor::new(12, 255, 255, 255));
        assert_eq!(parse_color("rgb(12, x)"), SegmentColor::new(12, 0, 255, 255));
        assert_eq!(parse_color("rgb(1,2,3,)"), SegmentColor::new(1, 2, 3, 255));
    }

    #[test]
    fn test_empty_slot_reads_zero_and_keeps_positions() {
        assert_eq!(parse_color("rgb(,5,6)"), SegmentColor::new(0, 5, 6, 255));
        assert_eq!(parse_color("rgba(7,,9,0.5)"), SegmentColor::new(7, 0, 9, 128));
    }

    #[test]
    fn test_whitespace_around_components() {
        assert_eq!(
            parse_color("rgba( 10 , 20 , 30 , 1.0 )"),
            SegmentColor::new(10, 20, 30, 255)
        );
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(parse_color("rgb(300,0,0)").r, 255);
        assert_eq!(parse_color("rgba(0,0,0,1.0)").a, 255);
    }
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use pixel_width::{CharacterWidthFunction, PixelWidthSource, Style, TextDecoration};

/// Width table of a small custom font.
///
/// - Lowercase: 3, uppercase: 5
/// - Digits: 3, or 4 when obfuscated
/// - Whitespace: 2
/// - U+10192 (a non-BMP symbol): 8
/// - Anything else: 0
pub struct CustomFontCharacterWidthFunction;

pub const NON_BMP_GLYPH: char = '\u{10192}';

impl CharacterWidthFunction for CustomFontCharacterWidthFunction {
    fn lookup(&self, c: char, style: &Style) -> Option<f32> {
        let width = if c.is_lowercase() {
            3.0
        } else if c.is_uppercase() {
            5.0
        } else if c.is_ascii_digit() {
            if style.has_decoration(TextDecoration::OBFUSCATED) { 4.0 } else { 3.0 }
        } else if c.is_whitespace() {
            2.0
        } else if c == NON_BMP_GLYPH {
            8.0
        } else {
            return None;
        };
        Some(width)
    }

    fn handle_missing(&self, _: char, _: &Style) -> f32 {
        0.0
    }
}

pub fn custom_source() -> PixelWidthSource {
    PixelWidthSource::with_function(CustomFontCharacterWidthFunction)
}

/// One pixel per code point, whatever the style.
pub fn unit_width(_: char, _: &Style) -> Option<f32> {
    Some(1.0)
}

/// Fractional widths that do not add up exactly in `f32`: lowercase 0.1,
/// space 0.3.
pub fn tenths_width(c: char, _: &Style) -> Option<f32> {
    match c {
        ' ' => Some(0.3),
        c if c.is_ascii_lowercase() => Some(0.1),
        _ => None,
    }
}

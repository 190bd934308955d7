//! Built-in width table for the default chat font.
//!
//! Widths are glyph advances in pixels, including the one pixel of spacing
//! that follows every glyph. Bold text is rendered with a one pixel offset
//! copy, so it adds one pixel to every visible glyph.

use unicode_width::UnicodeWidthChar;

use super::function::CharacterWidthFunction;
use crate::style::{Style, TextDecoration};

/// The default chat font's width table.
///
/// - Printable ASCII: see [`ascii_width`]
/// - Zero-width code points (combining marks, joiners): `0`
/// - Anything else: unknown, so the fallback applies
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCharacterWidthFunction;

impl CharacterWidthFunction for DefaultCharacterWidthFunction {
    fn lookup(&self, c: char, style: &Style) -> Option<f32> {
        let base = if c.is_ascii() {
            ascii_width(c)?
        } else if c.width() == Some(0) {
            return Some(0.0);
        } else {
            return None;
        };

        let bold = if style.has_decoration(TextDecoration::BOLD) { 1.0 } else { 0.0 };
        Some(base + bold)
    }
}

/// Advance of a printable ASCII glyph, `None` for control characters.
#[inline]
pub fn ascii_width(c: char) -> Option<f32> {
    let width = match c {
        ' ' => 1.0,
        '!' | ',' | '.' | ':' | ';' | 'i' | '|' | '\'' => 2.0,
        'l' | '`' => 3.0,
        'I' | 't' | '[' | ']' | '(' | ')' | '{' | '}' | '"' => 4.0,
        '<' | '>' | 'f' | 'k' | '*' => 5.0,
        '@' | '~' => 7.0,
        c if c.is_ascii_graphic() => 6.0,
        _ => return None,
    };
    Some(width)
}

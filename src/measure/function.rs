//! Per-glyph width tables.

use crate::style::Style;

/// Width used for glyphs a table does not know.
pub const DEFAULT_MISSING_WIDTH: f32 = 6.0;

/// Maps a code point under an effective style to its pixel width.
///
/// Implementors only have to provide [`lookup`](Self::lookup). Glyphs it
/// does not know go through [`handle_missing`](Self::handle_missing), which
/// logs and substitutes [`DEFAULT_MISSING_WIDTH`] unless overridden.
///
/// Closures `Fn(char, &Style) -> Option<f32>` are width functions too.
///
/// # Example
///
/// ```
/// use pixel_width::{CharacterWidthFunction, Style};
///
/// let monospace = |c: char, _: &Style| c.is_ascii().then_some(6.0_f32);
/// assert_eq!(monospace.width_of('a', &Style::empty()), 6.0);
/// ```
pub trait CharacterWidthFunction: Send + Sync {
    /// Width of `c`, or `None` if this table has no entry for it.
    fn lookup(&self, c: char, style: &Style) -> Option<f32>;

    /// Fallback width for a glyph [`lookup`](Self::lookup) did not know.
    fn handle_missing(&self, c: char, style: &Style) -> f32 {
        let _ = style;
        tracing::warn!(
            glyph = %c.escape_debug(),
            codepoint = c as u32,
            table = std::any::type_name::<Self>(),
            fallback = DEFAULT_MISSING_WIDTH,
            "missing character width"
        );
        DEFAULT_MISSING_WIDTH
    }

    /// Width of `c`, falling back to [`handle_missing`](Self::handle_missing).
    #[inline]
    fn width_of(&self, c: char, style: &Style) -> f32 {
        self.lookup(c, style)
            .unwrap_or_else(|| self.handle_missing(c, style))
    }
}

impl<F> CharacterWidthFunction for F
where
    F: Fn(char, &Style) -> Option<f32> + Send + Sync,
{
    fn lookup(&self, c: char, style: &Style) -> Option<f32> {
        self(c, style)
    }
}

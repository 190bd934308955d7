//! Context-aware width measurement.

use std::fmt;
use std::sync::{Arc, LazyLock};

use super::default_font::DefaultCharacterWidthFunction;
use super::function::CharacterWidthFunction;
use crate::component::Component;
use crate::flatten::Flattener;
use crate::style::Style;

type FunctionResolver<CX> = dyn Fn(Option<&CX>) -> Arc<dyn CharacterWidthFunction> + Send + Sync;

/// Sum of `function`'s widths over every code point of `text`.
///
/// Purely additive: no kerning, no dependence on neighbouring glyphs.
pub fn string_width(function: &dyn CharacterWidthFunction, text: &str, style: &Style) -> f32 {
    text.chars().map(|c| function.width_of(c, style)).sum()
}

/// Measures components and text with a width table chosen per context.
///
/// `CX` is whatever the caller keys width tables on: a viewer, a locale,
/// a client version. Every entry point takes an `Option<&CX>`; `None`
/// means "no context" and is passed to the resolver as such.
///
/// # Example
///
/// ```
/// use pixel_width::{Component, PixelWidthSource, Style};
///
/// let source = PixelWidthSource::<()>::new();
/// assert_eq!(source.width(&Component::text("CAT"), None), 18.0);
/// assert_eq!(source.width_str("CAT", &Style::empty().bold(), None), 21.0);
/// ```
pub struct PixelWidthSource<CX = ()> {
    flattener: Flattener,
    resolver: Arc<FunctionResolver<CX>>,
}

impl<CX> PixelWidthSource<CX> {
    /// Basic flattener, default chat font for every context.
    pub fn new() -> Self {
        Self::with_function(DefaultCharacterWidthFunction)
    }

    /// Basic flattener, `function` for every context.
    pub fn with_function<F>(function: F) -> Self
    where
        F: CharacterWidthFunction + 'static,
    {
        let function: Arc<dyn CharacterWidthFunction> = Arc::new(function);
        Self::contextual(move |_| Arc::clone(&function))
    }

    /// Basic flattener, width table picked by `resolver` for each call.
    pub fn contextual<R>(resolver: R) -> Self
    where
        R: Fn(Option<&CX>) -> Arc<dyn CharacterWidthFunction> + Send + Sync + 'static,
    {
        Self {
            flattener: Flattener::basic(),
            resolver: Arc::new(resolver),
        }
    }

    /// Replace the flattener, e.g. one that resolves keybinds.
    pub fn with_flattener(mut self, flattener: Flattener) -> Self {
        self.flattener = flattener;
        self
    }

    pub fn flattener(&self) -> &Flattener {
        &self.flattener
    }

    /// The width table for `context`.
    pub fn function(&self, context: Option<&CX>) -> Arc<dyn CharacterWidthFunction> {
        (self.resolver)(context)
    }

    // -------------------------------------------------------------------------
    // Measurement
    // -------------------------------------------------------------------------

    /// Width of a component tree, honouring inherited styles.
    pub fn width(&self, component: &Component, context: Option<&CX>) -> f32 {
        let function = self.function(context);
        self.flattener
            .runs(component)
            .iter()
            .map(|run| string_width(function.as_ref(), &run.text, &run.style))
            .sum()
    }

    /// Width of `text` rendered entirely in `style`.
    pub fn width_str(&self, text: &str, style: &Style, context: Option<&CX>) -> f32 {
        string_width(self.function(context).as_ref(), text, style)
    }

    /// Width of a single character.
    pub fn width_char(&self, c: char, style: &Style, context: Option<&CX>) -> f32 {
        self.function(context).width_of(c, style)
    }

    /// Width of a raw code point.
    ///
    /// Values that are not Unicode scalars (lone surrogates, anything past
    /// U+10FFFF) cannot be looked up and go straight to the table's
    /// missing-glyph fallback as U+FFFD.
    pub fn width_codepoint(&self, codepoint: u32, style: &Style, context: Option<&CX>) -> f32 {
        let function = self.function(context);
        match char::from_u32(codepoint) {
            Some(c) => function.width_of(c, style),
            None => function.handle_missing(char::REPLACEMENT_CHARACTER, style),
        }
    }

    /// Width of UTF-16 text.
    ///
    /// Surrogate pairs are reassembled and measured as the single code point
    /// they encode. Unpaired surrogates are measured as U+FFFD.
    pub fn width_utf16(&self, units: &[u16], style: &Style, context: Option<&CX>) -> f32 {
        let function = self.function(context);
        char::decode_utf16(units.iter().copied())
            .map(|decoded| function.width_of(decoded.unwrap_or(char::REPLACEMENT_CHARACTER), style))
            .sum()
    }
}

impl<CX> Default for PixelWidthSource<CX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<CX> Clone for PixelWidthSource<CX> {
    fn clone(&self) -> Self {
        Self {
            flattener: self.flattener.clone(),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<CX> fmt::Debug for PixelWidthSource<CX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelWidthSource")
            .field("flattener", &self.flattener)
            .finish_non_exhaustive()
    }
}

/// Shared source using the basic flattener and the default chat font.
pub fn pixel_width() -> &'static PixelWidthSource {
    static DEFAULT: LazyLock<PixelWidthSource> = LazyLock::new(PixelWidthSource::new);
    &DEFAULT
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Rgba, TextDecoration};

    #[derive(Debug, PartialEq)]
    enum Locale {
        English,
        French,
    }

    fn lowercase_three(c: char, _: &Style) -> Option<f32> {
        c.is_lowercase().then_some(3.0)
    }

    fn by_locale() -> PixelWidthSource<Locale> {
        PixelWidthSource::contextual(|locale: Option<&Locale>| -> Arc<dyn CharacterWidthFunction> {
            match locale {
                None | Some(Locale::English) => Arc::new(DefaultCharacterWidthFunction),
                Some(Locale::French) => Arc::new(lowercase_three),
            }
        })
    }

    // ── components ──

    #[test]
    fn empty_component_is_zero() {
        assert_eq!(pixel_width().width(&Component::empty(), None), 0.0);
        assert_eq!(pixel_width().width_str("", &Style::empty(), None), 0.0);
    }

    #[test]
    fn simple_widths() {
        let source = pixel_width();
        assert_eq!(source.width_str("wowie", &Style::empty(), None), 26.0);
        assert_eq!(source.width(&Component::text("2"), None), 6.0);
        assert_eq!(source.width_char('@', &Style::empty(), None), 7.0);
    }

    #[test]
    fn bold_widths() {
        let source = pixel_width();
        let bold = Style::empty().bold();
        assert_eq!(source.width(&Component::styled("wowie", bold), None), 31.0);
        assert_eq!(source.width_char('@', &bold, None), 8.0);
    }

    #[test]
    fn inherited_style() {
        let component = Component::styled("wowie", TextDecoration::BOLD).append(Component::text("@"));
        assert_eq!(pixel_width().width(&component, None), 39.0);
    }

    #[test]
    fn color_does_not_change_width() {
        let plain = pixel_width().width(&Component::text("abc"), None);
        let red = pixel_width().width(&Component::text("abc").color(Rgba::RED), None);
        assert_eq!(plain, red);
    }

    // ── code points ──

    #[test]
    fn invalid_codepoint_uses_fallback() {
        let source = PixelWidthSource::<()>::with_function(lowercase_three);
        assert_eq!(source.width_codepoint('a' as u32, &Style::empty(), None), 3.0);
        assert_eq!(source.width_codepoint(0xD800, &Style::empty(), None), 6.0);
    }

    #[test]
    fn utf16_pairs_are_one_codepoint() {
        let source = PixelWidthSource::<()>::with_function(|c: char, _: &Style| {
            Some(if c == '\u{10192}' { 8.0_f32 } else { 1.0 })
        });
        let units: Vec<u16> = "\u{10192}".encode_utf16().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(source.width_utf16(&units, &Style::empty(), None), 8.0);
        assert_eq!(source.width_utf16(&[0xD800], &Style::empty(), None), 1.0);
    }

    // ── context ──

    #[test]
    fn context_selects_table() {
        let source = by_locale();
        let wowie = Component::text("wowie");
        assert_eq!(source.width(&wowie, Some(&Locale::English)), 26.0);
        assert_eq!(source.width(&wowie, Some(&Locale::French)), 15.0);
        assert_eq!(source.width(&wowie, None), 26.0);
    }

    #[test]
    fn keybind_flattener() {
        let source = PixelWidthSource::<()>::new().with_flattener(
            Flattener::basic().with_keybinds(|key| match key {
                "key.jump" => Some("spacebar".to_string()),
                "key.forward" => Some("w".to_string()),
                _ => None,
            }),
        );
        assert_eq!(source.width(&Component::keybind("key.jump"), None), 48.0);
        assert_eq!(source.width(&Component::keybind("key.forward"), None), 6.0);
    }
}

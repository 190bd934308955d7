//! Text styles for chat components.
//!
//! A [`Style`] is *partial*: every decoration is either explicitly on,
//! explicitly off, or not set at all. Unset values are inherited from the
//! enclosing component when styles are merged, which is how a bold parent
//! makes its children bold unless a child opts out.
//!
//! Colour is carried for completeness but never affects width.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    // Named chat colors
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const DARK_BLUE: Self = Self::rgb(0x00, 0x00, 0xAA);
    pub const DARK_GREEN: Self = Self::rgb(0x00, 0xAA, 0x00);
    pub const DARK_AQUA: Self = Self::rgb(0x00, 0xAA, 0xAA);
    pub const DARK_RED: Self = Self::rgb(0xAA, 0x00, 0x00);
    pub const DARK_PURPLE: Self = Self::rgb(0xAA, 0x00, 0xAA);
    pub const GOLD: Self = Self::rgb(0xFF, 0xAA, 0x00);
    pub const GRAY: Self = Self::rgb(0xAA, 0xAA, 0xAA);
    pub const DARK_GRAY: Self = Self::rgb(0x55, 0x55, 0x55);
    pub const BLUE: Self = Self::rgb(0x55, 0x55, 0xFF);
    pub const GREEN: Self = Self::rgb(0x55, 0xFF, 0x55);
    pub const AQUA: Self = Self::rgb(0x55, 0xFF, 0xFF);
    pub const RED: Self = Self::rgb(0xFF, 0x55, 0x55);
    pub const LIGHT_PURPLE: Self = Self::rgb(0xFF, 0x55, 0xFF);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x55);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
}

// =============================================================================
// Decorations (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text decorations as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `TextDecoration::BOLD | TextDecoration::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextDecoration: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

/// State of a single decoration within a partial [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecorationState {
    /// Inherited from the parent when merged.
    #[default]
    NotSet,
    True,
    False,
}

impl From<bool> for DecorationState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

// =============================================================================
// Style
// =============================================================================

/// A partial text style.
///
/// `enabled` and `disabled` are always disjoint; a decoration in neither set
/// is [`DecorationState::NotSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    color: Option<Rgba>,
    enabled: TextDecoration,
    disabled: TextDecoration,
}

impl Style {
    /// A style that sets nothing.
    pub const fn empty() -> Self {
        Self {
            color: None,
            enabled: TextDecoration::empty(),
            disabled: TextDecoration::empty(),
        }
    }

    /// A style with the given decorations switched on.
    pub const fn decorated(decorations: TextDecoration) -> Self {
        Self {
            color: None,
            enabled: decorations,
            disabled: TextDecoration::empty(),
        }
    }

    /// True if this style sets no value at all.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.enabled.is_empty() && self.disabled.is_empty()
    }

    pub fn color(&self) -> Option<Rgba> {
        self.color
    }

    /// Set or clear the color.
    pub fn with_color(mut self, color: impl Into<Option<Rgba>>) -> Self {
        self.color = color.into();
        self
    }

    /// Tri-state of `decoration`. When several flags are passed, the state
    /// is only `True`/`False` if all of them agree.
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        if self.enabled.contains(decoration) {
            DecorationState::True
        } else if self.disabled.contains(decoration) {
            DecorationState::False
        } else {
            DecorationState::NotSet
        }
    }

    /// True only if `decoration` is explicitly switched on.
    #[inline]
    pub fn has_decoration(&self, decoration: TextDecoration) -> bool {
        self.enabled.contains(decoration)
    }

    /// Set the state of one or more decorations.
    pub fn with_decoration(
        mut self,
        decoration: TextDecoration,
        state: impl Into<DecorationState>,
    ) -> Self {
        self.enabled.remove(decoration);
        self.disabled.remove(decoration);
        match state.into() {
            DecorationState::True => self.enabled.insert(decoration),
            DecorationState::False => self.disabled.insert(decoration),
            DecorationState::NotSet => {}
        }
        self
    }

    /// Shorthand for switching `BOLD` on.
    pub fn bold(self) -> Self {
        self.with_decoration(TextDecoration::BOLD, true)
    }

    /// Shorthand for switching `ITALIC` on.
    pub fn italic(self) -> Self {
        self.with_decoration(TextDecoration::ITALIC, true)
    }

    /// Layer `child` over `self`.
    ///
    /// Every value `child` sets wins; everything it leaves unset is taken
    /// from `self`. Folding a stack of styles outermost-first with this
    /// yields the effective style of the innermost one.
    pub fn merge(&self, child: &Style) -> Style {
        let explicit = child.enabled | child.disabled;
        Style {
            color: child.color.or(self.color),
            enabled: child.enabled | (self.enabled - explicit),
            disabled: child.disabled | (self.disabled - explicit),
        }
    }
}

impl From<TextDecoration> for Style {
    fn from(decorations: TextDecoration) -> Self {
        Self::decorated(decorations)
    }
}

impl From<Rgba> for Style {
    fn from(color: Rgba) -> Self {
        Self::empty().with_color(color)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! # pixel-width
//!
//! Pixel width measurement, word wrapping and centering for styled chat text.
//!
//! Chat renderers draw text with a bitmap font where every glyph has a known
//! advance. This crate measures styled component trees against such a width
//! table and lays them out without touching real font metrics.
//!
//! ## Architecture
//!
//! ```text
//! Component tree → Flattener → style runs → width table → width
//!                                              ↓
//!                                   wrap (lines) | center (padded tree)
//! ```
//!
//! ## Modules
//!
//! - [`style`] - Partial styles, decorations and colors
//! - [`component`] - Styled component trees
//! - [`flatten`] - Tree traversal and effective style runs
//! - [`measure`] - Width tables and context-aware measurement
//! - [`wrap`] - Word wrapping into width-bounded lines
//! - [`center`] - Symmetric padding to a goal width
//!
//! ## Example
//!
//! ```
//! use pixel_width::{pixel_width, Component, Padding};
//!
//! let source = pixel_width();
//! let lines = source.wrap(&Component::text("hello there world"), None, 40.0)?;
//! assert_eq!(lines.len(), 3);
//!
//! let centered = source.center(&Component::text("WOW"), None, &Padding::new("-"), 320.0)?;
//! assert_eq!(source.width(&centered, None), 318.0);
//! # Ok::<(), pixel_width::Error>(())
//! ```

pub mod center;
pub mod component;
pub mod error;
pub mod flatten;
pub mod measure;
pub mod style;
pub mod wrap;

pub use center::{DEFAULT_CHAT_WIDTH, MAX_PADDING_REPEATS, Padding, center};
pub use component::{Component, Content};
pub use error::{Error, Result};
pub use flatten::{FlattenEvent, Flattener, StyleRun, StyleStack};
pub use measure::{
    CharacterWidthFunction, DEFAULT_MISSING_WIDTH, DefaultCharacterWidthFunction, PixelWidthSource,
    ascii_width, pixel_width, string_width,
};
pub use style::{DecorationState, Rgba, Style, TextDecoration};
pub use wrap::{DEFAULT_WORD_SPLIT, SplitBoundary, WrapOptions, wrap};

//! Width Measurement
//!
//! Pixel widths of text and component trees.
//!
//! # Architecture
//!
//! Measurement has two layers:
//!
//! 1. A [`CharacterWidthFunction`] maps one code point under one effective
//!    style to a width, with a fallback for glyphs it does not know
//! 2. A [`PixelWidthSource`] flattens components, picks a width function for
//!    the caller's context and sums the widths of every run
//!
//! Widths are purely additive: the width of a string is the sum of the
//! widths of its code points, with no kerning or shaping.
//!
//! # Example
//!
//! ```
//! use pixel_width::{pixel_width, Component, TextDecoration};
//!
//! let title = Component::styled("CAT", TextDecoration::BOLD);
//! assert_eq!(pixel_width().width(&title, None), 21.0);
//! ```

mod default_font;
mod function;
mod source;

pub use default_font::{DefaultCharacterWidthFunction, ascii_width};
pub use function::{CharacterWidthFunction, DEFAULT_MISSING_WIDTH};
pub use source::{PixelWidthSource, pixel_width, string_width};

//! Error types

use thiserror::Error;

/// Errors from wrapping and centering.
///
/// Measurement never fails: unknown glyphs are the width table's concern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The padding unit does not fit even once on each side of the content.
    #[error(
        "padding of width {padding_width} does not fit on both sides: at most {budget} per side for goal width {goal_width}"
    )]
    InfeasiblePadding {
        /// Width of one padding unit
        padding_width: f32,
        /// Width available on each side of the content
        budget: f32,
        /// Requested total width
        goal_width: f32,
    },

    /// Content and goal width leave no finite space to pad.
    #[error("cannot center content of width {content_width} in goal width {goal_width}")]
    InvalidGoalWidth {
        /// Requested total width
        goal_width: f32,
        /// Measured width of the content
        content_width: f32,
    },

    /// Filling one side would take more padding units than allowed.
    #[error("padding of width {padding_width} would repeat more than {limit} times to fill {budget}")]
    ExcessivePadding {
        /// Width of one padding unit
        padding_width: f32,
        /// Width available on each side of the content
        budget: f32,
        /// Maximum number of units per side
        limit: usize,
    },

    /// The padding unit has no positive, finite width.
    #[error("padding must have a positive width, got {0}")]
    InvalidPadding(f32),

    /// The maximum line width is not positive and finite.
    #[error("maximum line width must be positive, got {0}")]
    InvalidMaxWidth(f32),
}

/// Specialized Result type for wrapping and centering.
pub type Result<T> = std::result::Result<T, Error>;

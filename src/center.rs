//! Centering components in a fixed-width chat line.
//!
//! The content is surrounded by the same padding run on both sides. Padding
//! is a repeated unit of text (a space, a dash, a word) in one style, and
//! the result is built from three siblings under an unstyled parent so the
//! padding's style and the content's style never mix:
//!
//! ```text
//! (empty parent)
//! ├── padding × n   (padding style)
//! ├── content       (unchanged)
//! └── padding × n   (padding style)
//! ```

use crate::component::Component;
use crate::error::{Error, Result};
use crate::measure::PixelWidthSource;
use crate::style::Style;

/// Width of the default chat window in pixels.
pub const DEFAULT_CHAT_WIDTH: f32 = 320.0;

/// A unit of padding text and the style it is rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct Padding {
    text: String,
    style: Style,
}

impl Padding {
    /// Unstyled padding.
    pub fn new(text: impl Into<String>) -> Self {
        Self::styled(text, Style::empty())
    }

    pub fn styled(text: impl Into<String>, style: impl Into<Style>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }

    /// A single unstyled space.
    pub fn space() -> Self {
        Self::new(" ")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// One unit as a component, e.g. for measuring.
    pub fn unit(&self) -> Component {
        Component::styled(self.text.clone(), self.style)
    }

    /// `count` units joined into a single text component.
    pub fn repeated(&self, count: usize) -> Component {
        Component::styled(self.text.repeat(count), self.style)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::space()
    }
}

/// Most padding units [`center`] puts on one side.
pub const MAX_PADDING_REPEATS: usize = 1 << 16;

/// Number of whole padding units that fit on one side.
///
/// Counts units while the running total, starting at one unit, stays
/// strictly below `budget`: a unit that would reach the budget exactly is
/// not added. Closed form of that loop, evaluated in `f64` so it cannot
/// stall on large budgets.
fn repeat_count(budget: f32, padding_width: f32) -> f64 {
    let units = (f64::from(budget) / f64::from(padding_width)).ceil() - 1.0;
    units.max(0.0)
}

/// Pad `content` on both sides with whole units of `padding` so that it
/// sits centered in `goal_width`.
///
/// Widths are passed in rather than measured, so any measurement scheme
/// works. Each side receives as many units as fit strictly inside
/// `(goal_width - content_width) / 2`.
///
/// # Errors
///
/// - [`Error::InvalidPadding`] if `padding_width` is not positive and finite
/// - [`Error::InvalidGoalWidth`] if the space on each side is not finite
/// - [`Error::InfeasiblePadding`] if one unit is wider than the space on
///   either side of the content
/// - [`Error::ExcessivePadding`] if a side would need more than
///   [`MAX_PADDING_REPEATS`] units
pub fn center(
    content: &Component,
    content_width: f32,
    padding: &Padding,
    padding_width: f32,
    goal_width: f32,
) -> Result<Component> {
    if !(padding_width > 0.0 && padding_width.is_finite()) {
        return Err(Error::InvalidPadding(padding_width));
    }

    let budget = (goal_width - content_width) / 2.0;
    if !budget.is_finite() {
        return Err(Error::InvalidGoalWidth {
            goal_width,
            content_width,
        });
    }
    if padding_width > budget {
        return Err(Error::InfeasiblePadding {
            padding_width,
            budget,
            goal_width,
        });
    }

    let units = repeat_count(budget, padding_width);
    if units > MAX_PADDING_REPEATS as f64 {
        return Err(Error::ExcessivePadding {
            padding_width,
            budget,
            limit: MAX_PADDING_REPEATS,
        });
    }

    let side = padding.repeated(units as usize);
    Ok(Component::empty().children_from([side.clone(), content.clone(), side]))
}

impl<CX> PixelWidthSource<CX> {
    /// Center `component` in `goal_width` pixels.
    ///
    /// Content and padding are both measured in `context`.
    pub fn center(
        &self,
        component: &Component,
        context: Option<&CX>,
        padding: &Padding,
        goal_width: f32,
    ) -> Result<Component> {
        self.center_with(component, context, padding, |_| goal_width)
    }

    /// Center `component` in a goal width derived from `context`, for
    /// viewers whose chat window width differs.
    pub fn center_with<W>(
        &self,
        component: &Component,
        context: Option<&CX>,
        padding: &Padding,
        chat_width: W,
    ) -> Result<Component>
    where
        W: FnOnce(Option<&CX>) -> f32,
    {
        let content_width = self.width(component, context);
        let padding_width = self.width(&padding.unit(), context);
        center(
            component,
            content_width,
            padding,
            padding_width,
            chat_width(context),
        )
    }

    /// Center with space padding in the default chat width.
    pub fn center_default(&self, component: &Component, context: Option<&CX>) -> Result<Component> {
        self.center(component, context, &Padding::space(), DEFAULT_CHAT_WIDTH)
    }
}

// =============================================================================
// Tests
// =============================================================================

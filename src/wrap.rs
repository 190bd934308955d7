//! Word wrapping for styled components.
//!
//! Reflows a [`Component`] into lines no wider than a pixel budget. Styles
//! survive the trip: every line is rebuilt from the flattened runs, so each
//! character keeps its effective style and differently styled text never
//! shares a node.
//!
//! Two split modes (see [`SplitBoundary`]):
//! - **At a boundary** (default: space): words end after each boundary
//!   character and are kept whole when they fit
//! - **Everywhere**: every code point is a word. Used to force-break words
//!   wider than a whole line
//!
//! A word keeps its trailing boundary character, so `"hello world"` wraps as
//! `"hello "` + `"world"` and joining the lines' text gives back the input.
//!
//! A single code point wider than the budget cannot be broken further and
//! gets a line of its own, which is then the only line allowed to overflow.

use tracing::trace;

use crate::center::DEFAULT_CHAT_WIDTH;
use crate::component::Component;
use crate::error::{Error, Result};
use crate::flatten::{Flattener, StyleRun, push_run};
use crate::measure::{PixelWidthSource, string_width};
use crate::style::Style;

/// Default word boundary.
pub const DEFAULT_WORD_SPLIT: char = ' ';

/// Character that ends a line early when force-breaking a long word.
const LINE_BREAK_SPACE: char = ' ';

/// Where words may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBoundary {
    /// After each occurrence of this character.
    At(char),
    /// After every code point.
    Everywhere,
}

impl SplitBoundary {
    #[inline]
    fn ends_word(self, c: char) -> bool {
        match self {
            Self::At(boundary) => c == boundary,
            Self::Everywhere => true,
        }
    }
}

impl Default for SplitBoundary {
    fn default() -> Self {
        Self::At(DEFAULT_WORD_SPLIT)
    }
}

/// Options for [`wrap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapOptions {
    /// Maximum line width in pixels. Must be positive and finite.
    pub max_width: f32,
    /// Where lines may break.
    pub split: SplitBoundary,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_CHAT_WIDTH,
            split: SplitBoundary::default(),
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Wrap `component` into lines of at most `options.max_width` pixels.
///
/// `measure` is the width of a piece of text in a given effective style,
/// already bound to whatever context the caller measures in.
///
/// A component that already fits is returned unchanged as the only line.
///
/// # Errors
///
/// [`Error::InvalidMaxWidth`] if the maximum width is not positive and finite.
pub fn wrap<M>(
    component: &Component,
    flattener: &Flattener,
    measure: M,
    options: &WrapOptions,
) -> Result<Vec<Component>>
where
    M: Fn(&str, &Style) -> f32,
{
    let max_width = options.max_width;
    if !(max_width > 0.0 && max_width.is_finite()) {
        return Err(Error::InvalidMaxWidth(max_width));
    }

    let runs = flattener.runs(component);
    let width = runs_width(&runs, &measure);
    if width <= max_width {
        trace!(width, max_width, "component fits on one line");
        return Ok(vec![component.clone()]);
    }

    let lines = reflow(&runs, options.split, max_width, &measure);
    trace!(width, max_width, lines = lines.len(), "wrapped component");
    Ok(lines.into_iter().map(Line::into_component).collect())
}

impl<CX> PixelWidthSource<CX> {
    /// Wrap at spaces into lines of at most `max_width` pixels.
    pub fn wrap(
        &self,
        component: &Component,
        context: Option<&CX>,
        max_width: f32,
    ) -> Result<Vec<Component>> {
        let options = WrapOptions {
            max_width,
            ..Default::default()
        };
        self.wrap_with(component, context, &options)
    }

    /// Wrap with explicit options, measuring in `context`.
    pub fn wrap_with(
        &self,
        component: &Component,
        context: Option<&CX>,
        options: &WrapOptions,
    ) -> Result<Vec<Component>> {
        let function = self.function(context);
        wrap(
            component,
            self.flattener(),
            |text, style| string_width(function.as_ref(), text, style),
            options,
        )
    }
}

// =============================================================================
// Reflow
// =============================================================================

fn runs_width<M>(runs: &[StyleRun], measure: &M) -> f32
where
    M: Fn(&str, &Style) -> f32,
{
    runs.iter().map(|run| measure(&run.text, &run.style)).sum()
}

/// A line being accumulated: coalesced runs plus their total width.
///
/// `width` is always `runs_width` of the runs as they stand, the same sum a
/// [`PixelWidthSource`] computes for the rebuilt line. Adding word widths
/// one by one would round differently in `f32`.
#[derive(Debug, Default)]
struct Line {
    runs: Vec<StyleRun>,
    width: f32,
}

impl Line {
    /// A line made of one already-coalesced word of known width.
    fn word(runs: Vec<StyleRun>, width: f32) -> Self {
        Self { runs, width }
    }

    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// This line with `word` appended, measured as a whole.
    fn joined<M>(&self, word: &[StyleRun], measure: &M) -> Self
    where
        M: Fn(&str, &Style) -> f32,
    {
        let mut runs = self.runs.clone();
        for run in word {
            push_run(&mut runs, &run.text, run.style);
        }
        let width = runs_width(&runs, measure);
        Self { runs, width }
    }

    /// One run becomes a plain styled text node; several become siblings
    /// under an unstyled parent.
    fn into_component(self) -> Component {
        let mut parts: Vec<Component> =
            self.runs.into_iter().map(StyleRun::into_component).collect();
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Component::empty().children_from(parts)
        }
    }
}

/// Explicit fold state over the flattened runs.
struct Reflow<'m, M> {
    measure: &'m M,
    split: SplitBoundary,
    max_width: f32,
    lines: Vec<Line>,
    line: Line,
    word: Vec<StyleRun>,
}

fn reflow<M>(runs: &[StyleRun], split: SplitBoundary, max_width: f32, measure: &M) -> Vec<Line>
where
    M: Fn(&str, &Style) -> f32,
{
    let mut state = Reflow {
        measure,
        split,
        max_width,
        lines: Vec::new(),
        line: Line::default(),
        word: Vec::new(),
    };

    let mut buf = [0u8; 4];
    for run in runs {
        for c in run.text.chars() {
            push_run(&mut state.word, c.encode_utf8(&mut buf), run.style);
            if split.ends_word(c) {
                state.complete_word();
            }
        }
    }

    // End of input acts as one last boundary.
    state.complete_word();
    state.flush_line();
    state.lines
}

impl<M> Reflow<'_, M>
where
    M: Fn(&str, &Style) -> f32,
{
    fn complete_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let width = runs_width(&word, self.measure);
        let ends_in_space = word
            .last()
            .and_then(|run| run.text.chars().next_back())
            .is_some_and(|c| c == LINE_BREAK_SPACE);

        if width > self.max_width {
            self.place_oversized(word, width);
        } else {
            let joined = self.line.joined(&word, self.measure);
            if joined.width > self.max_width {
                self.flush_line();
                self.line = Line::word(word, width);
            } else {
                self.line = joined;
            }
        }

        if self.split == SplitBoundary::Everywhere && ends_in_space {
            self.flush_line();
        }
    }

    /// A word wider than a whole line.
    fn place_oversized(&mut self, word: Vec<StyleRun>, width: f32) {
        self.flush_line();

        match self.split {
            // A single code point: nothing left to split.
            SplitBoundary::Everywhere => self.line = Line::word(word, width),
            SplitBoundary::At(_) => {
                trace!(width, max_width = self.max_width, "force-breaking long word");
                let mut pieces = reflow(&word, SplitBoundary::Everywhere, self.max_width, self.measure);
                if let Some(last) = pieces.pop() {
                    self.lines.extend(pieces);
                    self.line = last;
                }
            }
        }
    }

    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            self.lines.push(std::mem::take(&mut self.line));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

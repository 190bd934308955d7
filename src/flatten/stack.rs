//! Style inheritance during flattening.
//!
//! Components inherit decorations and color from their ancestors. While a
//! tree is walked, every push/pop event passes through a [`StyleStack`] that
//! keeps the effective (fully merged) style of each open component.

use crate::style::Style;

/// Stack of effective styles, outermost first.
///
/// Each entry is already merged with everything below it, so a push is one
/// merge and a pop restores the parent's effective style exactly.
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    effective: Vec<Style>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a component with the given partial style.
    pub fn push(&mut self, style: &Style) {
        let merged = self.current().merge(style);
        self.effective.push(merged);
    }

    /// Close the innermost component. No-op on an empty stack.
    pub fn pop(&mut self) {
        self.effective.pop();
    }

    /// Effective style at the current depth.
    pub fn current(&self) -> Style {
        self.effective.last().copied().unwrap_or_default()
    }
}

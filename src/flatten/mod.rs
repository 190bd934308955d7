//! Component flattening.
//!
//! Walks a [`Component`] tree in document order and reports it as a flat
//! stream of [`FlattenEvent`]s: a push for every node's style, its resolved
//! text, its children, then a matching pop. Pushes and pops are always
//! balanced and properly nested.
//!
//! Most callers want [`Flattener::runs`], which folds the events through a
//! [`StyleStack`] into [`StyleRun`]s: text paired with its effective style.
//!
//! # Placeholders
//!
//! Keybind and translatable nodes are resolved here and nowhere else:
//!
//! - **Keybind**: resolver result, else the key name itself
//! - **Translatable**: resolver result (a component, flattened in place and
//!   inheriting the placeholder's style), else the translation key

mod stack;

use std::fmt;
use std::sync::Arc;

use crate::component::{Component, Content};
use crate::style::Style;

pub use stack::StyleStack;

type KeybindResolver = dyn Fn(&str) -> Option<String> + Send + Sync;
type TranslationResolver = dyn Fn(&str, &[Component]) -> Option<Component> + Send + Sync;

// =============================================================================
// Events & runs
// =============================================================================

/// One step of a flattened component tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlattenEvent<'a> {
    /// A component opened with this (partial) style.
    PushStyle(&'a Style),
    /// Resolved, non-empty text of the innermost open component.
    Text(&'a str),
    /// The component opened by the matching push closed.
    PopStyle(&'a Style),
}

/// A maximal span of text sharing one effective style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub text: String,
    pub style: Style,
}

impl StyleRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Rebuild this run as a standalone text component.
    pub fn into_component(self) -> Component {
        Component::text(self.text).style(self.style)
    }
}

/// Append `text` to `runs`, coalescing with the last run when the effective
/// style is identical.
pub(crate) fn push_run(runs: &mut Vec<StyleRun>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => runs.push(StyleRun::new(text, style)),
    }
}

// =============================================================================
// Flattener
// =============================================================================

/// Turns component trees into linear text.
#[derive(Clone, Default)]
pub struct Flattener {
    keybinds: Option<Arc<KeybindResolver>>,
    translations: Option<Arc<TranslationResolver>>,
}

impl Flattener {
    /// A flattener without resolvers: placeholders render as their keys.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Resolve keybind placeholders with `resolver`.
    pub fn with_keybinds<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.keybinds = Some(Arc::new(resolver));
        self
    }

    /// Resolve translatable placeholders with `resolver`.
    pub fn with_translations<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, &[Component]) -> Option<Component> + Send + Sync + 'static,
    {
        self.translations = Some(Arc::new(resolver));
        self
    }

    /// Walk `component`, feeding every event to `sink`.
    pub fn flatten<F>(&self, component: &Component, sink: &mut F)
    where
        F: FnMut(FlattenEvent<'_>),
    {
        sink(FlattenEvent::PushStyle(component.own_style()));

        match component.content() {
            Content::Text(text) => emit_text(text, sink),
            Content::Keybind(key) => {
                let resolved = self.keybinds.as_ref().and_then(|resolve| resolve(key));
                emit_text(resolved.as_deref().unwrap_or(key.as_str()), sink);
            }
            Content::Translatable { key, args } => {
                match self.translations.as_ref().and_then(|resolve| resolve(key, args)) {
                    Some(rendered) => self.flatten(&rendered, sink),
                    None => emit_text(key, sink),
                }
            }
        }

        for child in component.children() {
            self.flatten(child, sink);
        }

        sink(FlattenEvent::PopStyle(component.own_style()));
    }

    /// Flatten `component` into maximal runs of effectively-styled text.
    ///
    /// Concatenating the runs' text reproduces [`Flattener::plain_text`].
    pub fn runs(&self, component: &Component) -> Vec<StyleRun> {
        let mut stack = StyleStack::new();
        let mut runs = Vec::new();

        self.flatten(component, &mut |event| match event {
            FlattenEvent::PushStyle(style) => stack.push(style),
            FlattenEvent::Text(text) => push_run(&mut runs, text, stack.current()),
            FlattenEvent::PopStyle(_) => stack.pop(),
        });

        runs
    }

    /// All resolved text of `component`, without styles.
    pub fn plain_text(&self, component: &Component) -> String {
        let mut out = String::new();
        self.flatten(component, &mut |event| {
            if let FlattenEvent::Text(text) = event {
                out.push_str(text);
            }
        });
        out
    }
}

fn emit_text<F>(text: &str, sink: &mut F)
where
    F: FnMut(FlattenEvent<'_>),
{
    if !text.is_empty() {
        sink(FlattenEvent::Text(text));
    }
}

impl fmt::Debug for Flattener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flattener")
            .field("keybinds", &self.keybinds.is_some())
            .field("translations", &self.translations.is_some())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

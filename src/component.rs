//! Styled text components.
//!
//! A [`Component`] is an immutable tree: each node has some [`Content`], a
//! partial [`Style`], and ordered children that inherit the node's style.
//! Placeholder contents (keybinds, translations) are resolved into text by a
//! [`Flattener`](crate::Flattener); nothing else in the crate looks at them.
//!
//! # Example
//!
//! ```
//! use pixel_width::{Component, TextDecoration};
//!
//! let greeting = Component::text("Hello, ")
//!     .decoration(TextDecoration::BOLD, true)
//!     .append(Component::text("world"));
//! assert_eq!(greeting.children().len(), 1);
//! ```

use crate::style::{DecorationState, Rgba, Style, TextDecoration};

/// What a single component node renders before its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Literal text, possibly empty.
    Text(String),
    /// A key binding, e.g. `key.jump`, rendered as the bound key's name.
    Keybind(String),
    /// A translation key with positional argument components.
    Translatable { key: String, args: Vec<Component> },
}

/// A node of a styled text tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    fn with_content(content: Content) -> Self {
        Self {
            content,
            style: Style::empty(),
            children: Vec::new(),
        }
    }

    /// Empty text with an empty style. Useful as a neutral parent.
    pub fn empty() -> Self {
        Self::text("")
    }

    /// A single space.
    pub fn space() -> Self {
        Self::text(" ")
    }

    /// Unstyled literal text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(Content::Text(text.into()))
    }

    /// Literal text with a style.
    pub fn styled(text: impl Into<String>, style: impl Into<Style>) -> Self {
        Self::text(text).style(style)
    }

    /// A key binding placeholder.
    pub fn keybind(key: impl Into<String>) -> Self {
        Self::with_content(Content::Keybind(key.into()))
    }

    /// A translation placeholder.
    pub fn translatable(key: impl Into<String>, args: Vec<Component>) -> Self {
        Self::with_content(Content::Translatable {
            key: key.into(),
            args,
        })
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Replace this node's style.
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the state of a decoration on this node's style.
    pub fn decoration(mut self, decoration: TextDecoration, state: impl Into<DecorationState>) -> Self {
        self.style = self.style.with_decoration(decoration, state);
        self
    }

    /// Set this node's color.
    pub fn color(mut self, color: Rgba) -> Self {
        self.style = self.style.with_color(color);
        self
    }

    /// Append a child.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all children.
    pub fn children_from(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// This node's own, partial style (not merged with ancestors).
    pub fn own_style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Literal text of this node if it is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

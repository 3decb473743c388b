//! The rendered output of a component.

use crate::{Callback, Color};

/// A colored rectangle, optionally clickable, containing child rectangles.
///
/// Components return a tree of elements from their view. Click handlers are
/// [`Callback`]s, so cloning a tree is cheap and clones share handlers.
#[derive(Clone, Debug)]
pub struct Element {
    key: String,
    background: Color,
    on_click: Option<Callback<()>>,
    children: Vec<Element>,
}

impl Element {
    /// A rectangle with the given key and background and nothing else.
    pub fn rect(key: impl Into<String>, background: Color) -> Self {
        Self {
            key: key.into(),
            background,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn with_on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn on_click(&self) -> Option<&Callback<()>> {
        self.on_click.as_ref()
    }

    /// Fire the click handler. Returns `false` when none is registered.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler.emit(());
                true
            }
            None => false,
        }
    }

    /// Depth-first search for the element with `key`, starting at `self`.
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// Visit every element depth-first along with its depth below `self`.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Element, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&Element, usize),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

//! Renderer abstraction and the renderers shipped with the crate.

use std::io::Write;

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::Element;

/// Renderer abstraction for element trees.
///
/// [`render`](Self::render) is called once at mount and again after every
/// processed event, receiving the full tree derived from the current model.
///
/// # Example
///
/// ```rust
/// use color_lift::{Element, Renderer};
///
/// struct KeyPrinter;
///
/// impl Renderer for KeyPrinter {
///     fn render(&mut self, tree: Element) {
///         tree.walk(&mut |element, _| println!("{}", element.key()));
///     }
/// }
/// ```
pub trait Renderer {
    fn render(&mut self, tree: Element);
}

/// Writes each tree as indented lines with a 24-bit color swatch.
///
/// ```text
/// ████ parent #3E8A1F
///   ████ child-1 #FFF
///   ████ child-2 #FFF
/// ```
pub struct AnsiRenderer<W: Write> {
    out: W,
    color: bool,
    frame: usize,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            frame: 0,
        }
    }

    /// Drop the escape sequences, leaving only keys and color values.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_tree(&mut self, tree: &Element) -> std::io::Result<()> {
        writeln!(self.out, "-- frame {} --", self.frame)?;
        let mut lines = Vec::new();
        tree.walk(&mut |element, depth| {
            let indent = "  ".repeat(depth);
            let swatch = match (self.color, element.background().to_rgb()) {
                (true, Some((r, g, b))) => format!("\x1b[48;2;{r};{g};{b}m    \x1b[0m"),
                _ => "[  ]".to_string(),
            };
            lines.push(format!(
                "{indent}{swatch} {} {}",
                element.key(),
                element.background()
            ));
        });
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, tree: Element) {
        if let Err(error) = self.write_tree(&tree) {
            tracing::warn!(%error, frame = self.frame, "failed to write frame");
        }
        self.frame += 1;
    }
}

#[cfg(any(test, feature = "testing"))]
/// Renderer that captures every tree for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for
/// inspection and hand another to the [`Host`](crate::Host).
///
/// # Example
///
/// ```rust
/// use color_lift::{Color, Element, RecordingRenderer, Renderer};
///
/// let renderer = RecordingRenderer::new();
/// let mut handed_to_host = renderer.clone();
/// handed_to_host.render(Element::rect("root", Color::default()));
///
/// assert_eq!(renderer.count(), 1);
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].key(), "root");
/// });
/// ```
pub struct RecordingRenderer {
    renders: Arc<Mutex<Vec<Element>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for RecordingRenderer {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for RecordingRenderer {
    fn render(&mut self, tree: Element) {
        self.renders.lock().push(tree);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// The most recently rendered tree, if any.
    pub fn last(&self) -> Option<Element> {
        self.renders.lock().last().cloned()
    }

    /// Access the captured trees with a closure.
    ///
    /// Handlers inside the trees may be invoked from the closure; they only
    /// enqueue events, so this does not re-enter the renderer.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Element>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}

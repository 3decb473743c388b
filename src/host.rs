//! The host that mounts a component and runs its dispatch loop.

use flume::Receiver;
use thiserror::Error;

use crate::{Component, Element, Emitter, Renderer};

/// Errors returned when simulating interaction on a mounted tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("no element with key `{0}` in the current tree")]
    ElementNotFound(String),

    #[error("element `{0}` has no click handler")]
    NotClickable(String),
}

/// Mounts a [`Component`] and re-renders it whenever its state changes.
///
/// The host:
/// 1. Builds the initial model via [`Component::init`]
/// 2. Renders it via [`Component::view`] and the [`Renderer`]
/// 3. Drains queued events through [`Component::update`], rendering after each
///
/// Callbacks inside rendered elements only enqueue events on the host's
/// channel. Nothing runs until [`process_events`](Self::process_events) (or
/// [`click`](Self::click)) is called, so every update runs to completion on
/// the thread that owns the host, one event at a time.
///
/// The most recent tree is kept so interactions can be routed to it.
///
/// # Example
///
/// ```rust
/// use color_lift::{AnsiRenderer, Host, Parent, SeededColors};
///
/// let parent = Parent::new(SeededColors::new(1));
/// let mut host = Host::mount(parent, AnsiRenderer::new(std::io::sink()));
///
/// host.click("child-1").unwrap();
///
/// let tree = host.tree();
/// assert_eq!(
///     tree.find("child-1").map(|e| e.background()),
///     tree.find("child-2").map(|e| e.background()),
/// );
/// ```
pub struct Host<C, R>
where
    C: Component,
    R: Renderer,
{
    component: C,
    renderer: R,
    event_receiver: Receiver<C::Event>,
    emitter: Emitter<C::Event>,
    model: C::Model,
    tree: Element,
}

impl<C, R> Host<C, R>
where
    C: Component,
    R: Renderer,
{
    /// Initialize the component and render its first tree.
    pub fn mount(component: C, mut renderer: R) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();
        let emitter = Emitter::new(event_sender);

        let model = component.init();
        let tree = component.view(&model, &emitter);
        tracing::debug!(root = tree.key(), "mounted component");
        renderer.render(tree.clone());

        Host {
            component,
            renderer,
            event_receiver,
            emitter,
            model,
            tree,
        }
    }

    /// Process every queued event, including any queued while processing.
    ///
    /// Returns the number of events handled.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(processed, "drained event queue");
        }
        processed
    }

    /// Click the element with `key` in the current tree, then process the
    /// resulting events.
    pub fn click(&mut self, key: &str) -> Result<usize, HostError> {
        let element = self
            .tree
            .find(key)
            .ok_or_else(|| HostError::ElementNotFound(key.to_string()))?;
        if !element.click() {
            return Err(HostError::NotClickable(key.to_string()));
        }
        tracing::debug!(key, "clicked element");
        Ok(self.process_events())
    }

    fn step(&mut self, event: C::Event) {
        // Update model with event
        self.model = self.component.update(event, &self.model);

        // Reduce to a tree and render
        self.tree = self.component.view(&self.model, &self.emitter);
        self.renderer.render(self.tree.clone());
    }

    /// An emitter feeding this host's queue.
    pub fn emitter(&self) -> &Emitter<C::Event> {
        &self.emitter
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn model(&self) -> &C::Model {
        &self.model
    }

    /// The most recently rendered tree.
    pub fn tree(&self) -> &Element {
        &self.tree
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear down the host and hand back the final model.
    ///
    /// Callbacks still held elsewhere become no-ops once the queue is gone.
    pub fn unmount(self) -> C::Model {
        tracing::debug!(root = self.tree.key(), "unmounted component");
        self.model
    }
}

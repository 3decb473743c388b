//! The stateful parent that owns the color its children share.

use std::sync::Arc;

use crate::{Child, ChildProps, Color, ColorGenerator, Component, Element, Emitter};

/// Default number of children a parent renders.
pub const DEFAULT_CHILDREN: usize = 2;

/// Key of the parent's own rectangle.
pub const PARENT_KEY: &str = "parent";

/// Key of the child at `index` (zero-based): `child-1`, `child-2`, ...
pub fn child_key(index: usize) -> String {
    format!("child-{}", index + 1)
}

/// State lifted into the parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentModel {
    /// The parent's own background. Only the parent reads it.
    pub color: Color,
    /// The one color every child renders.
    pub children_color: Color,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParentEvent {
    /// A child picked a new color.
    ChangeColor(Color),
}

/// Owner of the shared children color.
///
/// The parent hands every child the same color and the same
/// `on_change_color` callback. When any child fires it, the parent
/// regenerates its own background and adopts the child's color for all
/// children, so siblings stay in step without knowing about each other.
pub struct Parent {
    generator: Arc<dyn ColorGenerator + Send + Sync>,
    child: Child,
    children: usize,
    initial_children_color: Color,
}

impl Parent {
    pub fn new<G>(generator: G) -> Self
    where
        G: ColorGenerator + Send + Sync + 'static,
    {
        Self::with_shared_generator(Arc::new(generator))
    }

    pub fn with_shared_generator(generator: Arc<dyn ColorGenerator + Send + Sync>) -> Self {
        Self {
            child: Child::new(generator.clone()),
            generator,
            children: DEFAULT_CHILDREN,
            initial_children_color: Color::default(),
        }
    }

    /// Render `count` children instead of two. Clamped to at least one.
    pub fn with_children(mut self, count: usize) -> Self {
        self.children = count.max(1);
        self
    }

    /// Color children show before any of them has been clicked.
    pub fn with_initial_children_color(mut self, color: Color) -> Self {
        self.initial_children_color = color;
        self
    }

    /// The notification handler.
    ///
    /// Always assigns a freshly generated parent color and adopts `color`
    /// for the children, without validating it. Neither new value depends
    /// on the previous model.
    pub fn change_color(&self, color: Color) -> ParentModel {
        ParentModel {
            color: self.generator.next_color(),
            children_color: color,
        }
    }

    /// Props for each child in one render pass.
    ///
    /// The `on_change_color` handler is built once and cloned, so every
    /// child holds the same callback.
    pub fn child_props(
        &self,
        model: &ParentModel,
        emitter: &Emitter<ParentEvent>,
    ) -> Vec<ChildProps> {
        let on_change_color = emitter.callback(ParentEvent::ChangeColor);
        (0..self.children)
            .map(|_| ChildProps {
                color: model.children_color.clone(),
                on_change_color: on_change_color.clone(),
            })
            .collect()
    }
}

impl Component for Parent {
    type Event = ParentEvent;
    type Model = ParentModel;

    fn init(&self) -> ParentModel {
        ParentModel {
            color: self.generator.next_color(),
            children_color: self.initial_children_color.clone(),
        }
    }

    fn update(&self, event: ParentEvent, _model: &ParentModel) -> ParentModel {
        match event {
            ParentEvent::ChangeColor(color) => {
                let next = self.change_color(color);
                tracing::debug!(
                    parent = %next.color,
                    children = %next.children_color,
                    "parent adopted child color"
                );
                next
            }
        }
    }

    fn view(&self, model: &ParentModel, emitter: &Emitter<ParentEvent>) -> Element {
        let children = self
            .child_props(model, emitter)
            .into_iter()
            .enumerate()
            .map(|(index, props)| self.child.view(&child_key(index), props))
            .collect();

        Element::rect(PARENT_KEY, model.color.clone()).with_children(children)
    }
}

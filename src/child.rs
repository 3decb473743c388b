//! The stateless child: a colored rectangle that reports new colors upward.

use std::sync::Arc;

use crate::{Callback, Color, ColorGenerator, Element};

/// Props a [`Child`] receives from its owner for one render pass.
#[derive(Clone, Debug)]
pub struct ChildProps {
    /// Background to render.
    pub color: Color,
    /// Notified with a freshly generated color on every click.
    pub on_change_color: Callback<Color>,
}

/// Leaf component with no state of its own.
///
/// On click it asks its generator for a new color and passes it to
/// `on_change_color`. What happens next is entirely up to the owner.
pub struct Child {
    generator: Arc<dyn ColorGenerator + Send + Sync>,
}

impl Child {
    pub fn new(generator: Arc<dyn ColorGenerator + Send + Sync>) -> Self {
        Self { generator }
    }

    /// Render `props` as a clickable rectangle named `key`.
    pub fn view(&self, key: &str, props: ChildProps) -> Element {
        let generator = self.generator.clone();
        let on_change_color = props.on_change_color.clone();
        let on_click = Callback::new(move |()| Self::pick(&*generator, &on_change_color));

        Element::rect(key, props.color).with_on_click(on_click)
    }

    /// The click behavior, without going through a rendered element.
    pub fn interact(&self, props: &ChildProps) {
        Self::pick(&*self.generator, &props.on_change_color);
    }

    fn pick(generator: &(dyn ColorGenerator + Send + Sync), on_change_color: &Callback<Color>) {
        let color = generator.next_color();
        tracing::trace!(%color, "child picked a color");
        on_change_color.emit(color);
    }
}

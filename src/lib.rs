//! Callback props and lifted state, on a small Model-View-Update host.
//!
//! A [`Parent`] owns two pieces of state: its own background color and the
//! color its children share. It renders two stateless [`Child`] rectangles,
//! handing each the shared color (data flowing down) and one shared
//! `on_change_color` [`Callback`] (a function flowing down). Clicking a child
//! generates a new color and calls that callback (data flowing back up).
//! The parent adopts the color for every child and regenerates its own, and
//! the [`Host`] re-renders, so both siblings always agree.
//!
//! ## Example
//!
//! ```rust
//! use color_lift::{Color, Host, Parent, RecordingRenderer, SeededColors};
//!
//! let renderer = RecordingRenderer::new();
//! let mut host = Host::mount(Parent::new(SeededColors::new(42)), renderer.clone());
//!
//! // Initial render: children start out white.
//! assert_eq!(host.model().children_color, Color::new("#FFF"));
//!
//! // A click on the first child recolors both children.
//! host.click("child-1").unwrap();
//!
//! let shared = host.model().children_color.clone();
//! let tree = host.tree();
//! assert_eq!(tree.find("child-1").unwrap().background(), &shared);
//! assert_eq!(tree.find("child-2").unwrap().background(), &shared);
//! assert_eq!(renderer.count(), 2);
//! ```

// Module declarations
mod callback;
mod child;
mod color;
mod component;
pub mod config;
mod element;
mod emitter;
mod host;
pub mod parent;
mod renderer;

// Public re-exports
pub use callback::Callback;
pub use child::{Child, ChildProps};
pub use color::{random_color, Color, ColorGenerator, ColorParseError, SeededColors, ThreadRngColors};
pub use component::Component;
pub use config::{Config, ConfigError, ConfigOverrides};
pub use element::Element;
pub use emitter::Emitter;
pub use host::{Host, HostError};
pub use parent::{child_key, Parent, ParentEvent, ParentModel};
pub use renderer::{AnsiRenderer, Renderer};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use color::MockColorGenerator;
#[cfg(any(test, feature = "testing"))]
pub use renderer::RecordingRenderer;

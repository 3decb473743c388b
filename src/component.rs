//! Stateful component trait defining the model/update/view contract.

use crate::{Element, Emitter};

/// A component that owns state and is mounted by a [`Host`](crate::Host).
///
/// Implementations provide three functions:
/// - [`init`](Self::init): build the initial model
/// - [`update`](Self::update): reduce (Event, Model) → Model
/// - [`view`](Self::view): derive the element tree from the model, wiring
///   callbacks through the emitter
///
/// Stateless components (like [`Child`](crate::Child)) are plain functions of
/// their props and do not implement this trait.
pub trait Component {
    /// Events the component's callbacks send back up.
    type Event: Send + 'static;

    /// State owned by the component for as long as it is mounted.
    type Model;

    /// Build the model at mount time.
    fn init(&self) -> Self::Model;

    /// Reduce an event to an updated model.
    ///
    /// All state changes happen here. The host re-renders after every call.
    fn update(&self, event: Self::Event, model: &Self::Model) -> Self::Model;

    /// Render the model.
    ///
    /// The provided [`Emitter`] lets the returned tree carry callbacks that
    /// enqueue new events.
    fn view(&self, model: &Self::Model, emitter: &Emitter<Self::Event>) -> Element;
}

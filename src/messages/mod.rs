//! Messages exchanged between the UI, App and Network layers.
//!
//! UI events flow into the App actor, network commands flow out to the
//! Network actor, and render state flows back to the UI loop.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;

//! App layer - routing, view state and command processing
//!
//! The App actor receives UI events and network responses, updates the
//! mounted view, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, Notification};
pub use actor::AppActor;

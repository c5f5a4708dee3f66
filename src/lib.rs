//! # Admissions TUI
//!
//! A terminal client for a school admissions backend.
//!
//! ## Features
//! - Applicant registration with full client-side validation
//! - Login through a pluggable auth service
//! - Application review: personal and academic details, exam results,
//!   uploaded documents and review status
//! - Keyboard navigation bar with a drawer for narrow terminals
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Router and view state machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod config;
pub mod constants;
pub mod routes;
pub mod validation;
pub mod auth;
pub mod decisions;
pub mod opener;
pub mod views;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use models::{Application, Document, ExamResult, ReviewBundle, Severity, Subject};
pub use routes::Route;
pub use auth::{AuthService, AuthState, HttpAuthService, LoginOutcome};
pub use decisions::{DecisionActions, LinkOnlyDecisions};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;

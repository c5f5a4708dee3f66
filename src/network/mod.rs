//! Network layer - API calls against the admissions backend
//!
//! The Network actor receives commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{ApiClient, ApiError, RegistrationOutcome};

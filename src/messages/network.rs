//! Network messages - communication between App and Network layers

use crate::auth::LoginOutcome;
use crate::models::{Credentials, RegistrationForm, ReviewBundle};
use crate::network::client::RegistrationOutcome;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch an application bundle. `seq` identifies the request for staleness checks.
    FetchReview {
        seq: u64,
        application_id: String,
        token: Option<String>,
    },
    /// Post the registration form
    SubmitRegistration {
        id: u64,
        form: RegistrationForm,
    },
    /// Hand credentials to the auth service
    Login {
        id: u64,
        credentials: Credentials,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    ReviewLoaded {
        seq: u64,
        bundle: Box<ReviewBundle>,
        time_ms: u64,
    },
    ReviewFailed {
        seq: u64,
        message: String,
        time_ms: u64,
    },
    RegistrationFinished {
        id: u64,
        outcome: RegistrationOutcome,
    },
    LoginFinished {
        id: u64,
        outcome: LoginOutcome,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::ReviewLoaded { seq, .. } => *seq,
            NetworkResponse::ReviewFailed { seq, .. } => *seq,
            NetworkResponse::RegistrationFinished { id, .. } => *id,
            NetworkResponse::LoginFinished { id, .. } => *id,
        }
    }
}

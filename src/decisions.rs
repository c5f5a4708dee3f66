//! Admit/reject actions offered on the review sidebar
//!
//! The admissions decision workflow belongs to another part of the system.
//! This trait is the seam it plugs into.

use crate::routes::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum DecisionEffect {
    Navigate(Route),
    Unavailable(String),
}

pub trait DecisionActions: Send {
    fn admit(&self, application_id: i64) -> DecisionEffect;
    fn reject(&self, application_id: i64) -> DecisionEffect;
}

/// Admit links to the admit screen; reject does nothing yet
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkOnlyDecisions;

impl DecisionActions for LinkOnlyDecisions {
    fn admit(&self, application_id: i64) -> DecisionEffect {
        DecisionEffect::Navigate(Route::AdmitStudent(application_id.to_string()))
    }

    fn reject(&self, application_id: i64) -> DecisionEffect {
        tracing::info!(application_id, "Reject requested but not wired");
        DecisionEffect::Unavailable(String::from("Rejecting students is not available yet"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_links_to_admit_route() {
        assert_eq!(
            LinkOnlyDecisions.admit(12),
            DecisionEffect::Navigate(Route::parse("/admin/admit_student/12"))
        );
        assert!(matches!(LinkOnlyDecisions.reject(12), DecisionEffect::Unavailable(_)));
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_SUBJECT_NAME;

/// A prospective student's submitted admissions record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub previous_school: Option<String>,
    pub status: String,
    #[serde(default)]
    pub fee_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_by: Option<i64>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Application {
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::from_status(&self.status)
    }
}

/// Visual classification of an application status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// Maps any status string to a severity; unknown values fall back to `Warning`.
    pub fn from_status(status: &str) -> Severity {
        match status.trim().to_ascii_lowercase().as_str() {
            "accepted" => Severity::Success,
            "rejected" => Severity::Error,
            "submitted" => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// An exam subject
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// Subject reference as sent by the backend: embedded or bare id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectRef {
    Embedded(Subject),
    Id(i64),
}

impl SubjectRef {
    pub fn into_subject(self) -> Subject {
        match self {
            SubjectRef::Embedded(subject) => subject,
            SubjectRef::Id(id) => Subject {
                id,
                name: String::from(UNKNOWN_SUBJECT_NAME),
            },
        }
    }
}

/// Exam result exactly as received
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawExamResult {
    pub id: i64,
    pub grade: String,
    pub subject: SubjectRef,
}

/// Exam result with its subject always embedded
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamResult {
    pub id: i64,
    pub grade: String,
    pub subject: Subject,
}

impl From<RawExamResult> for ExamResult {
    fn from(raw: RawExamResult) -> Self {
        ExamResult {
            id: raw.id,
            grade: raw.grade,
            subject: raw.subject.into_subject(),
        }
    }
}

/// An uploaded supporting document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", alias = "document_type")]
    pub document_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub file: String,
}

impl Document {
    pub fn is_passport_photo(&self) -> bool {
        self.document_type.to_ascii_lowercase().contains("passport")
    }
}

/// Review endpoint payload before normalization
#[derive(Clone, Debug, Deserialize)]
pub struct ReviewPayload {
    pub application: Application,
    #[serde(default)]
    pub olevel_results: Vec<RawExamResult>,
    #[serde(default)]
    pub alevel_results: Vec<RawExamResult>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Everything the review screen shows for one application
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewBundle {
    pub application: Application,
    pub olevel_results: Vec<ExamResult>,
    pub alevel_results: Vec<ExamResult>,
    pub documents: Vec<Document>,
}

impl From<ReviewPayload> for ReviewBundle {
    fn from(payload: ReviewPayload) -> Self {
        ReviewBundle {
            application: payload.application,
            olevel_results: payload.olevel_results.into_iter().map(ExamResult::from).collect(),
            alevel_results: payload.alevel_results.into_iter().map(ExamResult::from).collect(),
            documents: payload.documents,
        }
    }
}

impl ReviewBundle {
    pub fn passport_photo(&self) -> Option<&Document> {
        self.documents.iter().find(|d| d.is_passport_photo())
    }
}

/// Login form buffer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Credentials handed to the auth service
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl From<&LoginForm> for Credentials {
    fn from(form: &LoginForm) -> Self {
        Credentials {
            username: form.username.clone(),
            password: form.password.clone(),
        }
    }
}

/// Registration form buffer, serialized as the request body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub is_applicant: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        RegistrationForm {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            is_applicant: true,
        }
    }
}

/// Field error lists a failed registration may carry
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistrationErrorBody {
    #[serde(default)]
    pub email: Option<Vec<String>>,
    #[serde(default)]
    pub password: Option<Vec<String>>,
}

impl RegistrationErrorBody {
    /// First present list wins: `email`, then `password`.
    pub fn into_messages(self) -> Option<Vec<String>> {
        if let Some(email) = self.email {
            return Some(email);
        }
        self.password
    }
}

/// Authenticated session returned by a successful login
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub username: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_subject_id_gets_placeholder() {
        let raw: RawExamResult =
            serde_json::from_value(json!({"id": 5, "grade": "A", "subject": 3})).unwrap();
        let result = ExamResult::from(raw);
        assert_eq!(result.id, 5);
        assert_eq!(result.grade, "A");
        assert_eq!(result.subject, Subject { id: 3, name: "???".to_string() });
    }

    #[test]
    fn test_embedded_subject_is_unchanged() {
        let value = json!({"id": 6, "grade": "B", "subject": {"id": 4, "name": "Math"}});
        let raw: RawExamResult = serde_json::from_value(value.clone()).unwrap();
        let result = ExamResult::from(raw);
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn test_status_severity_mapping() {
        assert_eq!(Severity::from_status("REJECTED"), Severity::Error);
        assert_eq!(Severity::from_status("Rejected"), Severity::Error);
        assert_eq!(Severity::from_status("accepted"), Severity::Success);
        assert_eq!(Severity::from_status("Submitted"), Severity::Info);
        assert_eq!(Severity::from_status("pending"), Severity::Warning);
        assert_eq!(Severity::from_status(""), Severity::Warning);
    }

    #[test]
    fn test_registration_error_email_wins() {
        let body: RegistrationErrorBody = serde_json::from_value(json!({
            "email": ["already taken"],
            "password": ["too common"]
        }))
        .unwrap();
        assert_eq!(body.into_messages(), Some(vec!["already taken".to_string()]));

        let body: RegistrationErrorBody =
            serde_json::from_value(json!({"password": ["too common"]})).unwrap();
        assert_eq!(body.into_messages(), Some(vec!["too common".to_string()]));

        let body: RegistrationErrorBody = serde_json::from_value(json!({"detail": "x"})).unwrap();
        assert_eq!(body.into_messages(), None);
    }

    #[test]
    fn test_registration_form_body_shape() {
        let body = serde_json::to_value(RegistrationForm::default()).unwrap();
        assert_eq!(body["is_applicant"], json!(true));
        assert!(body.get("confirm_password").is_some());
    }
}

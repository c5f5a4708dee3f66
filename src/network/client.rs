//! HTTP client wrapper - calls the admissions API and parses its payloads

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::{REGISTER_PATH, REVIEW_APPLICATION_PATH};
use crate::models::{RegistrationErrorBody, RegistrationForm, ReviewBundle, ReviewPayload};

/// Failure talking to the API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", describe_error(.0))]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request URL: {0}")]
    Url(String),
}

/// Result of posting the registration form
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationOutcome {
    Created,
    /// Any non-201 response. `messages` holds the first field error list found.
    Rejected {
        status: u16,
        messages: Option<Vec<String>>,
    },
    /// No response at all
    Failed(String),
}

/// Human-readable description of a transport error
pub fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Typed access to the admissions endpoints
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Review endpoint with the id pushed as one encoded path segment
    fn review_url(&self, application_id: &str) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.url(REVIEW_APPLICATION_PATH))
            .map_err(|e| ApiError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(format!("{} cannot take a path", self.base_url)))?
            .push(application_id);
        Ok(url)
    }

    /// GET the application bundle and normalize its exam results
    pub async fn fetch_review(
        &self,
        application_id: &str,
        token: Option<&str>,
    ) -> Result<ReviewBundle, ApiError> {
        let url = self.review_url(application_id)?;
        let mut req = self.http.get(url).header("Accept", "application/json");
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ReviewPayload = serde_json::from_str(&body)?;
        Ok(ReviewBundle::from(payload))
    }

    /// POST the registration form; only 201 counts as success
    pub async fn register(&self, form: &RegistrationForm) -> RegistrationOutcome {
        let result = self.http.post(self.url(REGISTER_PATH)).json(form).send().await;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => return RegistrationOutcome::Failed(describe_error(&e)),
        };

        let status = resp.status();
        if status == StatusCode::CREATED {
            return RegistrationOutcome::Created;
        }

        let messages = match resp.text().await {
            Ok(body) => serde_json::from_str::<RegistrationErrorBody>(&body)
                .ok()
                .and_then(RegistrationErrorBody::into_messages),
            Err(_) => None,
        };

        RegistrationOutcome::Rejected {
            status: status.as_u16(),
            messages,
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn review_body() -> serde_json::Value {
        json!({
            "application": {
                "id": 12,
                "first_name": "Amina",
                "last_name": "Okello",
                "date_of_birth": "2006-04-02",
                "gender": "Female",
                "nationality": "Ugandan",
                "email": "amina@example.com",
                "phone": "+256700000000",
                "status": "SUBMITTED",
                "fee_paid": true,
                "created_at": "2024-01-05T10:00:00Z",
                "updated_at": "2024-01-06T10:00:00Z",
                "reviewed_by": null
            },
            "olevel_results": [
                {"id": 5, "grade": "A", "subject": 3},
                {"id": 6, "grade": "B", "subject": {"id": 4, "name": "Math"}}
            ],
            "alevel_results": [],
            "documents": [
                {
                    "id": 1,
                    "name": "Passport photo",
                    "type": "passport_photo",
                    "uploaded_at": "2024-01-05T10:00:00Z",
                    "file": "/media/docs/photo.jpg"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_review_normalizes_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admissions/review_application/12"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(review_body()))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        let bundle = api.fetch_review("12", Some("tok")).await.unwrap();

        assert_eq!(bundle.application.id, 12);
        assert_eq!(bundle.olevel_results[0].subject.name, "???");
        assert_eq!(bundle.olevel_results[1].subject.name, "Math");
        assert!(bundle.passport_photo().is_some());
    }

    #[tokio::test]
    async fn test_fetch_review_encodes_application_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admissions/review_application/1%3Fx=y%23a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(review_body()))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        let bundle = api.fetch_review("1?x=y#a", None).await.unwrap();
        assert_eq!(bundle.application.id, 12);
    }

    #[tokio::test]
    async fn test_fetch_review_bad_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"application": 1})))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        let err = api.fetch_review("12", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_review_not_found_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        match api.fetch_review("99", None).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "missing");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/register"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), format!("{}/", server.uri()));
        let outcome = api.register(&RegistrationForm::default()).await;
        assert_eq!(outcome, RegistrationOutcome::Created);
    }

    #[tokio::test]
    async fn test_register_email_error_wins() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "email": ["already taken"],
                "password": ["too common"]
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        let outcome = api.register(&RegistrationForm::default()).await;
        assert_eq!(
            outcome,
            RegistrationOutcome::Rejected {
                status: 400,
                messages: Some(vec!["already taken".to_string()]),
            }
        );
    }

    #[tokio::test]
    async fn test_register_200_is_not_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let api = ApiClient::new(reqwest::Client::new(), server.uri());
        let outcome = api.register(&RegistrationForm::default()).await;
        assert_eq!(outcome, RegistrationOutcome::Rejected { status: 200, messages: None });
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let api = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = api.fetch_review("1", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}

//! Authentication service and the shared state it drives
//!
//! Views never talk to the backend to log in. They hand credentials to an
//! injected [`AuthService`] and read the observable [`AuthState`] fields.

use futures_util::future::{BoxFuture, FutureExt};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::models::{Credentials, Session};
use crate::network::client::describe_error;
use crate::routes::Route;

/// Result of a login attempt
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Success(Session),
    /// Backend knows no active account for these credentials
    NoAccount,
    Failed(String),
}

/// Performs the login exchange with whatever backend is configured
pub trait AuthService: Send + Sync {
    fn login(&self, credentials: Credentials) -> BoxFuture<'static, LoginOutcome>;
}

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

/// Posts credentials as JSON and reads an `{access, refresh}` token pair
pub struct HttpAuthService {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthService {
    pub fn new(client: reqwest::Client, login_url: impl Into<String>) -> Self {
        HttpAuthService {
            client,
            login_url: login_url.into(),
        }
    }
}

impl AuthService for HttpAuthService {
    fn login(&self, credentials: Credentials) -> BoxFuture<'static, LoginOutcome> {
        let client = self.client.clone();
        let url = self.login_url.clone();

        async move {
            let resp = match client.post(&url).json(&credentials).send().await {
                Ok(resp) => resp,
                Err(e) => return LoginOutcome::Failed(describe_error(&e)),
            };

            match resp.status() {
                StatusCode::OK => match resp.json::<TokenPair>().await {
                    Ok(tokens) => LoginOutcome::Success(Session {
                        username: credentials.username,
                        access_token: tokens.access,
                        refresh_token: tokens.refresh,
                    }),
                    Err(e) => LoginOutcome::Failed(format!("Unexpected login response: {}", e)),
                },
                StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => LoginOutcome::NoAccount,
                status => LoginOutcome::Failed(format!("Login failed (HTTP {})", status.as_u16())),
            }
        }
        .boxed()
    }
}

/// Observable login state shared by every view
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub login_loading: bool,
    pub no_account: bool,
    pub show_error_alert: bool,
    pub error_message: Option<String>,
    pub session: Option<Session>,
    pending_login: Option<u64>,
}

impl AuthState {
    /// Marks a login as in flight. Returns false if one already is.
    pub fn begin_login(&mut self, id: u64) -> bool {
        if self.login_loading {
            return false;
        }
        self.login_loading = true;
        self.no_account = false;
        self.show_error_alert = false;
        self.error_message = None;
        self.pending_login = Some(id);
        true
    }

    /// Applies an outcome; returns the route to redirect to on success.
    pub fn finish_login(&mut self, id: u64, outcome: LoginOutcome) -> Option<Route> {
        if self.pending_login != Some(id) {
            tracing::debug!(id, "Ignoring outcome of superseded login");
            return None;
        }
        self.pending_login = None;
        self.login_loading = false;

        match outcome {
            LoginOutcome::Success(session) => {
                tracing::info!(user = %session.username, "Logged in");
                self.session = Some(session);
                Some(Route::Home)
            }
            LoginOutcome::NoAccount => {
                tracing::warn!("Login rejected: no active account");
                self.no_account = true;
                None
            }
            LoginOutcome::Failed(message) => {
                tracing::warn!(%message, "Login failed");
                self.show_error_alert = true;
                self.error_message = Some(message);
                None
            }
        }
    }

    pub fn dismiss_alerts(&mut self) {
        self.no_account = false;
        self.show_error_alert = false;
        self.error_message = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }
}

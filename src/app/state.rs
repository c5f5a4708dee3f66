//! App state - pure data structure with no I/O logic

use crate::auth::AuthState;
use crate::decisions::{DecisionActions, LinkOnlyDecisions};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Severity;
use crate::opener::{DocumentOpener, SystemOpener};
use crate::routes::Route;
use crate::views::{LoginView, NavBar, RegisterView, ReviewView};

/// A global, dismissible message shown above the status bar
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Notification {
            severity,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Router
    pub route: Route,
    pub navbar: NavBar,

    // Shared login state
    pub auth: AuthState,

    // Views
    pub login: LoginView,
    pub register: RegisterView,
    pub review: ReviewView,

    // UI state
    pub input_mode: InputMode,
    pub notification: Option<Notification>,
    pub next_request_id: u64,

    // Popups
    pub show_help: bool,
    pub show_goto: bool,
    pub goto_buffer: String,

    // Collaborators
    pub api_base_url: String,
    pub decisions: Box<dyn DecisionActions>,
    pub opener: Box<dyn DocumentOpener>,
}

impl AppState {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::with_collaborators(
            api_base_url,
            Box::new(LinkOnlyDecisions),
            Box::new(SystemOpener),
        )
    }

    pub fn with_collaborators(
        api_base_url: impl Into<String>,
        decisions: Box<dyn DecisionActions>,
        opener: Box<dyn DocumentOpener>,
    ) -> Self {
        AppState {
            route: Route::Home,
            navbar: NavBar::default(),
            auth: AuthState::default(),
            login: LoginView::default(),
            register: RegisterView::default(),
            review: ReviewView::default(),
            input_mode: InputMode::Normal,
            notification: None,
            next_request_id: 1,
            show_help: false,
            show_goto: false,
            goto_buffer: String::new(),
            api_base_url: api_base_url.into(),
            decisions,
            opener,
        }
    }

    /// Generate a unique, increasing request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.notification = Some(Notification::new(severity, text));
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            route: self.route.clone(),
            navbar: self.navbar.clone(),
            auth: self.auth.clone(),
            login: self.login.clone(),
            register: self.register.clone(),
            review: self.review.clone(),
            input_mode: self.input_mode,
            notification: self.notification.clone(),
            show_help: self.show_help,
            show_goto: self.show_goto,
            goto_buffer: self.goto_buffer.clone(),
        }
    }
}

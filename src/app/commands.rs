//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::decisions::DecisionEffect;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Severity;
use crate::opener::resolve_url;
use crate::routes::Route;
use crate::views::{Cursor, LoginView, RegistrationEffect, Submit};

impl AppState {
    // ========================
    // Routing
    // ========================

    /// Mount `route`, unmounting the current one. Mounting the review
    /// route yields the fetch to dispatch.
    pub fn navigate(&mut self, route: Route) -> Option<NetworkCommand> {
        tracing::info!(from = %self.route, to = %route, "Route change");

        match &self.route {
            Route::Login => self.login = LoginView::default(),
            Route::Register => self.register.unmount(),
            Route::ReviewApplication(_) => self.review.unmount(),
            _ => {}
        }

        self.route = route.clone();
        self.input_mode = InputMode::Normal;
        self.navbar.close_drawer();

        if let Route::ReviewApplication(application_id) = route {
            let seq = self.next_id();
            let application_id = self.review.mount(application_id, seq)?;
            return Some(NetworkCommand::FetchReview {
                seq,
                application_id,
                token: self.auth.access_token(),
            });
        }
        None
    }

    // ========================
    // Navigation bar
    // ========================

    pub fn toggle_drawer(&mut self) {
        self.navbar.toggle_drawer();
    }

    pub fn close_drawer(&mut self) {
        self.navbar.close_drawer();
    }

    pub fn drawer_next(&mut self) {
        self.navbar.next();
    }

    pub fn drawer_prev(&mut self) {
        self.navbar.prev();
    }

    pub fn drawer_select(&mut self) -> Option<NetworkCommand> {
        let route = self.navbar.select()?;
        self.navigate(route)
    }

    // ========================
    // Form editing
    // ========================

    pub fn start_editing(&mut self) {
        match self.route {
            Route::Login => {
                let focus = self.login.focus;
                self.login.cursor = Cursor::at_end(self.login.input(focus));
            }
            Route::Register => self.register.set_focus(self.register.focus),
            _ => return,
        }
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        match self.route {
            Route::Login => self.login.focus_next(),
            Route::Register => self.register.focus_next(),
            _ => {}
        }
    }

    pub fn prev_field(&mut self) {
        match self.route {
            // two fields: forward and back are the same move
            Route::Login => self.login.focus_next(),
            Route::Register => self.register.focus_prev(),
            _ => {}
        }
    }

    pub fn enter_char(&mut self, c: char) {
        match self.route {
            Route::Login => self.login.enter_char(c),
            Route::Register => self.register.enter_char(c),
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.route {
            Route::Login => self.login.delete_char(),
            Route::Register => self.register.delete_char(),
            _ => {}
        }
    }

    pub fn move_cursor_left(&mut self) {
        match self.route {
            Route::Login => self.login.cursor_left(),
            Route::Register => self.register.cursor_left(),
            _ => {}
        }
    }

    pub fn move_cursor_right(&mut self) {
        match self.route {
            Route::Login => self.login.cursor_right(),
            Route::Register => self.register.cursor_right(),
            _ => {}
        }
    }

    pub fn submit(&mut self) -> Option<NetworkCommand> {
        self.stop_editing();
        match self.route {
            Route::Login => self.submit_login(),
            Route::Register => self.submit_registration(),
            _ => None,
        }
    }

    fn submit_login(&mut self) -> Option<NetworkCommand> {
        match self.login.submit(self.auth.login_loading) {
            Submit::InFlight => None,
            Submit::Invalid => {
                self.notify(Severity::Error, "Please fill in all required fields");
                None
            }
            Submit::Ready(credentials) => {
                let id = self.next_id();
                if !self.auth.begin_login(id) {
                    return None;
                }
                tracing::info!(id, user = %credentials.username, "Dispatching login");
                Some(NetworkCommand::Login { id, credentials })
            }
        }
    }

    fn submit_registration(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        match self.register.submit(id) {
            Submit::Ready(form) => Some(NetworkCommand::SubmitRegistration { id, form }),
            Submit::InFlight => {
                tracing::debug!("Registration already in flight");
                None
            }
            Submit::Invalid => None,
        }
    }

    pub fn dismiss_alert(&mut self) {
        match self.route {
            Route::Register if !self.register.alerts.is_empty() => self.register.dismiss_alert(),
            Route::Login if self.auth.no_account || self.auth.show_error_alert => {
                self.auth.dismiss_alerts()
            }
            _ => self.notification = None,
        }
    }

    // ========================
    // Review screen
    // ========================

    pub fn scroll_up(&mut self) {
        self.review.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.review.scroll_down();
    }

    pub fn next_document(&mut self) {
        self.review.next_document();
    }

    pub fn prev_document(&mut self) {
        self.review.prev_document();
    }

    pub fn view_document(&mut self) {
        let Some(doc) = self.review.selected_document() else {
            return;
        };
        let url = resolve_url(&self.api_base_url, &doc.file);
        let name = doc.name.clone();

        match self.opener.open(&url) {
            Ok(()) => {
                tracing::info!(%url, "Opened document");
                self.notify(Severity::Info, format!("Opened {} in your browser", name));
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "Failed to open document");
                self.notify(Severity::Error, format!("Could not open {}: {}", name, e));
            }
        }
    }

    pub fn download_document(&mut self) {
        if self.review.selected_document().is_some() {
            self.notify(Severity::Warning, "Downloading documents is not available yet");
        }
    }

    /// Id of the loaded application when its decision controls are shown
    fn decision_target(&self) -> Option<i64> {
        let application = &self.review.bundle.as_ref()?.application;
        application.reviewed_by.map(|_| application.id)
    }

    pub fn admit_student(&mut self) -> Option<NetworkCommand> {
        let id = self.decision_target()?;
        let effect = self.decisions.admit(id);
        self.apply_decision(effect)
    }

    pub fn reject_student(&mut self) -> Option<NetworkCommand> {
        let id = self.decision_target()?;
        let effect = self.decisions.reject(id);
        self.apply_decision(effect)
    }

    fn apply_decision(&mut self, effect: DecisionEffect) -> Option<NetworkCommand> {
        match effect {
            DecisionEffect::Navigate(route) => self.navigate(route),
            DecisionEffect::Unavailable(message) => {
                self.notify(Severity::Warning, message);
                None
            }
        }
    }

    // ========================
    // Go-to popup
    // ========================

    pub fn open_goto(&mut self) {
        self.goto_buffer = self.route.path();
        self.show_goto = true;
    }

    pub fn goto_char(&mut self, c: char) {
        self.goto_buffer.push(c);
    }

    pub fn goto_backspace(&mut self) {
        self.goto_buffer.pop();
    }

    pub fn confirm_goto(&mut self) -> Option<NetworkCommand> {
        self.show_goto = false;
        let route = Route::parse(&std::mem::take(&mut self.goto_buffer));
        self.navigate(route)
    }

    pub fn cancel_goto(&mut self) {
        self.show_goto = false;
        self.goto_buffer.clear();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::ReviewLoaded { seq, bundle, time_ms } => {
                if self.review.apply_loaded(seq, *bundle) {
                    tracing::info!(seq, time_ms, "Application loaded");
                }
                None
            }
            NetworkResponse::ReviewFailed { seq, message, time_ms } => {
                if self.review.apply_failed(seq, message) {
                    tracing::info!(seq, time_ms, "Showing failed-to-load state");
                }
                None
            }
            NetworkResponse::RegistrationFinished { id, outcome } => {
                match self.register.finish(id, outcome) {
                    RegistrationEffect::Redirect { to, message } => {
                        self.notify(Severity::Success, message);
                        self.navigate(to)
                    }
                    RegistrationEffect::Notify(message) => {
                        tracing::warn!(id, %message, "Registration failed");
                        self.notify(Severity::Error, message);
                        None
                    }
                    RegistrationEffect::None => None,
                }
            }
            NetworkResponse::LoginFinished { id, outcome } => {
                let redirect = self.auth.finish_login(id, outcome)?;
                self.notify(Severity::Success, "Logged in");
                self.navigate(redirect)
            }
        }
    }
}

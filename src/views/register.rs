use crate::models::RegistrationForm;
use crate::network::client::RegistrationOutcome;
use crate::routes::Route;
use crate::validation::{validate_registration, Field, FieldErrors};
use crate::views::{Cursor, Submit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 6] = [
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> RegisterField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> RegisterField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegisterField::FirstName => "First name",
            RegisterField::LastName => "Last name",
            RegisterField::Email => "Email",
            RegisterField::Phone => "Phone",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::ConfirmPassword)
    }

    pub fn field(&self) -> Field {
        match self {
            RegisterField::FirstName => Field::FirstName,
            RegisterField::LastName => Field::LastName,
            RegisterField::Email => Field::Email,
            RegisterField::Phone => Field::Phone,
            RegisterField::Password => Field::Password,
            RegisterField::ConfirmPassword => Field::ConfirmPassword,
        }
    }
}

/// What the app should do after a registration response
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationEffect {
    /// Account created: announce and go to the root route
    Redirect { to: Route, message: String },
    /// Failure with nothing field-specific to show
    Notify(String),
    /// Field alerts were set on the view, or the response was stale
    None,
}

/// Registration screen
#[derive(Clone, Debug)]
pub struct RegisterView {
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    pub focus: RegisterField,
    pub cursor: Cursor,
    /// Set before the request is dispatched, cleared by its response
    pub submitting: bool,
    pending_id: Option<u64>,
    /// Server messages, dismissible one at a time
    pub alerts: Vec<String>,
}

impl Default for RegisterView {
    fn default() -> Self {
        RegisterView {
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            focus: RegisterField::FirstName,
            cursor: Cursor::default(),
            submitting: false,
            pending_id: None,
            alerts: Vec::new(),
        }
    }
}

impl RegisterView {
    pub fn input(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.form.first_name,
            RegisterField::LastName => &self.form.last_name,
            RegisterField::Email => &self.form.email,
            RegisterField::Phone => &self.form.phone,
            RegisterField::Password => &self.form.password,
            RegisterField::ConfirmPassword => &self.form.confirm_password,
        }
    }

    fn parts(&mut self) -> (&mut Cursor, &mut String) {
        let form = &mut self.form;
        let input = match self.focus {
            RegisterField::FirstName => &mut form.first_name,
            RegisterField::LastName => &mut form.last_name,
            RegisterField::Email => &mut form.email,
            RegisterField::Phone => &mut form.phone,
            RegisterField::Password => &mut form.password,
            RegisterField::ConfirmPassword => &mut form.confirm_password,
        };
        (&mut self.cursor, input)
    }

    pub fn set_focus(&mut self, field: RegisterField) {
        self.focus = field;
        self.cursor = Cursor::at_end(self.input(field));
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.focus.field();
        let (cursor, input) = self.parts();
        cursor.insert(input, c);
        self.errors.clear(field);
    }

    pub fn delete_char(&mut self) {
        let (cursor, input) = self.parts();
        cursor.backspace(input);
    }

    pub fn cursor_left(&mut self) {
        let (cursor, input) = self.parts();
        cursor.left(input);
    }

    pub fn cursor_right(&mut self) {
        let (cursor, input) = self.parts();
        cursor.right(input);
    }

    /// Drops the buffers on leaving the route. A request already in
    /// flight stays tracked so its response still lands.
    pub fn unmount(&mut self) {
        *self = RegisterView {
            submitting: self.submitting,
            pending_id: self.pending_id,
            ..RegisterView::default()
        };
    }

    pub fn dismiss_alert(&mut self) {
        if !self.alerts.is_empty() {
            self.alerts.remove(0);
        }
    }

    /// Validates everything and, if clean, marks the request in flight
    /// before handing back the body to post.
    pub fn submit(&mut self, request_id: u64) -> Submit<RegistrationForm> {
        if self.submitting {
            return Submit::InFlight;
        }

        self.errors = validate_registration(&self.form);
        if !self.errors.is_empty() {
            return Submit::Invalid;
        }

        self.submitting = true;
        self.pending_id = Some(request_id);
        self.alerts.clear();
        Submit::Ready(self.form.clone())
    }

    pub fn finish(&mut self, request_id: u64, outcome: RegistrationOutcome) -> RegistrationEffect {
        if self.pending_id != Some(request_id) {
            return RegistrationEffect::None;
        }
        self.pending_id = None;
        self.submitting = false;

        match outcome {
            RegistrationOutcome::Created => {
                self.form = RegistrationForm::default();
                self.errors = FieldErrors::new();
                self.alerts.clear();
                self.set_focus(RegisterField::FirstName);
                RegistrationEffect::Redirect {
                    to: Route::Home,
                    message: String::from("Account created. You can now log in."),
                }
            }
            RegistrationOutcome::Rejected {
                messages: Some(messages),
                ..
            } => {
                self.alerts = messages;
                RegistrationEffect::None
            }
            RegistrationOutcome::Rejected {
                status,
                messages: None,
            } => RegistrationEffect::Notify(format!("Registration failed (HTTP {})", status)),
            RegistrationOutcome::Failed(message) => {
                RegistrationEffect::Notify(format!("Registration failed: {}", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(view: &mut RegisterView, field: RegisterField, text: &str) {
        view.set_focus(field);
        for c in text.chars() {
            view.enter_char(c);
        }
    }

    fn filled_view() -> RegisterView {
        let mut view = RegisterView::default();
        type_into(&mut view, RegisterField::FirstName, "Amina");
        type_into(&mut view, RegisterField::LastName, "Okello");
        type_into(&mut view, RegisterField::Email, "a@b.co");
        type_into(&mut view, RegisterField::Phone, "0700000000");
        type_into(&mut view, RegisterField::Password, "longenough1");
        type_into(&mut view, RegisterField::ConfirmPassword, "longenough1");
        view
    }

    #[test]
    fn test_invalid_form_is_not_dispatched() {
        let mut view = RegisterView::default();
        type_into(&mut view, RegisterField::Email, "not-an-email");
        assert_eq!(view.submit(1), Submit::Invalid);
        assert!(!view.submitting);
        assert!(view.errors.get(Field::Email).is_some());
        assert!(view.errors.get(Field::FirstName).is_some());
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut view = filled_view();
        assert!(matches!(view.submit(1), Submit::Ready(_)));
        assert!(view.submitting);
        assert_eq!(view.submit(2), Submit::InFlight);
    }

    #[test]
    fn test_created_clears_form_and_redirects() {
        let mut view = filled_view();
        view.submit(1);
        let effect = view.finish(1, RegistrationOutcome::Created);
        assert!(matches!(effect, RegistrationEffect::Redirect { to: Route::Home, .. }));
        assert_eq!(view.form, RegistrationForm::default());
        assert!(!view.submitting);
    }

    #[test]
    fn test_field_errors_become_alerts() {
        let mut view = filled_view();
        view.submit(1);
        let effect = view.finish(
            1,
            RegistrationOutcome::Rejected {
                status: 400,
                messages: Some(vec!["already taken".to_string()]),
            },
        );
        assert_eq!(effect, RegistrationEffect::None);
        assert_eq!(view.alerts, vec!["already taken".to_string()]);
        assert_eq!(view.form.email, "a@b.co");
        assert!(!view.submitting);

        view.dismiss_alert();
        assert!(view.alerts.is_empty());
    }

    #[test]
    fn test_transport_failure_notifies() {
        let mut view = filled_view();
        view.submit(4);
        let effect = view.finish(4, RegistrationOutcome::Failed("Connection failed".into()));
        assert!(matches!(effect, RegistrationEffect::Notify(_)));
        assert!(view.alerts.is_empty());
    }

    #[test]
    fn test_rejection_without_field_lists_notifies() {
        let mut view = filled_view();
        view.submit(5);
        let effect = view.finish(
            5,
            RegistrationOutcome::Rejected {
                status: 500,
                messages: None,
            },
        );
        assert_eq!(effect, RegistrationEffect::Notify("Registration failed (HTTP 500)".to_string()));
        assert!(view.alerts.is_empty());
        assert_eq!(view.form.email, "a@b.co");
        assert!(!view.submitting);
    }

    #[test]
    fn test_unmount_keeps_request_in_flight() {
        let mut view = filled_view();
        assert!(matches!(view.submit(1), Submit::Ready(_)));
        view.unmount();
        assert_eq!(view.form, RegistrationForm::default());
        assert!(view.submitting);
        assert_eq!(view.submit(2), Submit::InFlight);
        assert!(matches!(
            view.finish(1, RegistrationOutcome::Created),
            RegistrationEffect::Redirect { .. }
        ));
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(RegisterField::ConfirmPassword.next(), RegisterField::FirstName);
        assert_eq!(RegisterField::FirstName.prev(), RegisterField::ConfirmPassword);
    }
}

//! Client-side form validation
//!
//! Every rule runs on every submit; all violations are collected so the
//! form can show them at once.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::MIN_PASSWORD_LEN;
use crate::models::{LoginForm, RegistrationForm};

/// Form fields that can carry a validation message
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    }
    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    }
    errors
}

pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First name is required");
    }
    if form.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Enter a valid email address");
    }

    if form.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }

    if form.confirm_password != form.password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Amina".into(),
            last_name: "Okello".into(),
            email: "a@b.co".into(),
            phone: "+256700000000".into(),
            password: "longenough1".into(),
            confirm_password: "longenough1".into(),
            is_applicant: true,
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_registration(&filled_form()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_registration(&RegistrationForm::default());
        for field in [Field::FirstName, Field::LastName, Field::Email, Field::Phone, Field::Password] {
            assert!(!errors.get(field).unwrap_or_default().is_empty(), "{:?}", field);
        }
        // both passwords empty, so they match
        assert!(!errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn test_whitespace_names_are_missing() {
        let mut form = filled_form();
        form.first_name = "   ".into();
        form.phone = "\t".into();
        let errors = validate_registration(&form);
        assert!(errors.contains(Field::FirstName));
        assert!(errors.contains(Field::Phone));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_email_shape() {
        let mut form = filled_form();
        form.email = "not-an-email".into();
        assert!(validate_registration(&form).contains(Field::Email));

        form.email = "a@b.co".into();
        assert!(!validate_registration(&form).contains(Field::Email));

        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@bco"));
    }

    #[test]
    fn test_password_length_and_confirmation() {
        let mut form = filled_form();
        form.password = "short1".into();
        form.confirm_password = "short1".into();
        let errors = validate_registration(&form);
        assert!(errors.contains(Field::Password));
        assert!(!errors.contains(Field::ConfirmPassword));

        form.password = "longenough1".into();
        form.confirm_password = "longenough1".into();
        let errors = validate_registration(&form);
        assert!(!errors.contains(Field::Password));
        assert!(!errors.contains(Field::ConfirmPassword));

        form.confirm_password = "longenough2".into();
        assert!(validate_registration(&form).contains(Field::ConfirmPassword));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(&LoginForm::default());
        assert!(errors.contains(Field::Username));
        assert!(errors.contains(Field::Password));

        let form = LoginForm { username: "admin".into(), password: "secret".into() };
        assert!(validate_login(&form).is_empty());
    }
}

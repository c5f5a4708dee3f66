use crate::models::{Credentials, LoginForm};
use crate::validation::{validate_login, Field, FieldErrors};
use crate::views::{Cursor, Submit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            LoginField::Username => Field::Username,
            LoginField::Password => Field::Password,
        }
    }
}

/// Login screen. Loading and failure banners come from the auth state.
#[derive(Clone, Debug)]
pub struct LoginView {
    pub form: LoginForm,
    pub errors: FieldErrors,
    pub focus: LoginField,
    pub cursor: Cursor,
}

impl Default for LoginView {
    fn default() -> Self {
        LoginView {
            form: LoginForm::default(),
            errors: FieldErrors::new(),
            focus: LoginField::Username,
            cursor: Cursor::default(),
        }
    }
}

impl LoginView {
    pub fn input(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.form.username,
            LoginField::Password => &self.form.password,
        }
    }

    pub fn focused_input(&self) -> &str {
        self.input(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor = Cursor::at_end(self.focused_input());
    }

    fn parts(&mut self) -> (&mut Cursor, &mut String) {
        let input = match self.focus {
            LoginField::Username => &mut self.form.username,
            LoginField::Password => &mut self.form.password,
        };
        (&mut self.cursor, input)
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

    /// Presence check only. `login_loading` is the auth state's in-flight flag.
    pub fn submit(&mut self, login_loading: bool) -> Submit<Credentials> {
        if login_loading {
            return Submit::InFlight;
        }
        self.errors = validate_login(&self.form);
        if !self.errors.is_empty() {
            return Submit::Invalid;
        }
        Submit::Ready(Credentials::from(&self.form))
    }
}

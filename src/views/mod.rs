//! View states - one per routed screen plus the navigation bar
//!
//! Views hold component-local state and pure transitions. They never do
//! I/O; the app layer turns their decisions into network commands.

pub mod login;
pub mod navbar;
pub mod register;
pub mod review;

pub use login::{LoginField, LoginView};
pub use navbar::{NavBar, NavLink};
pub use register::{RegisterField, RegisterView, RegistrationEffect};
pub use review::ReviewView;

/// What a form decided when asked to submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submit<T> {
    /// A request for this form is already in flight
    InFlight,
    /// Validation failed; errors are set on the view
    Invalid,
    Ready(T),
}

/// Byte offset into a text field, kept on a char boundary
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    pub position: usize,
}

impl Cursor {
    pub fn at_end(input: &str) -> Self {
        Cursor { position: input.len() }
    }

    pub fn left(&mut self, input: &str) {
        if self.position > 0 {
            self.position = input[..self.position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn right(&mut self, input: &str) {
        if self.position < input.len() {
            self.position = input[self.position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.position + i)
                .unwrap_or(input.len());
        }
    }

    pub fn insert(&mut self, input: &mut String, c: char) {
        if self.position <= input.len() {
            input.insert(self.position, c);
            self.position += c.len_utf8();
        }
    }

    pub fn backspace(&mut self, input: &mut String) {
        if self.position > 0 && self.position <= input.len() {
            let prev = input[..self.position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev);
            self.position = prev;
        }
    }

    /// Column of the cursor in characters
    pub fn column(&self, input: &str) -> usize {
        input[..self.position.min(input.len())].chars().count()
    }
}

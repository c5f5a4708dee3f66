//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::Notification;
use crate::auth::AuthState;
use crate::messages::ui_events::{InputMode, KeyContext, Screen};
use crate::routes::Route;
use crate::views::{LoginView, NavBar, RegisterView, ReviewView};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub route: Route,
    pub navbar: NavBar,
    pub auth: AuthState,

    // Views
    pub login: LoginView,
    pub register: RegisterView,
    pub review: ReviewView,

    // UI state
    pub input_mode: InputMode,
    pub notification: Option<Notification>,

    // Popups
    pub show_help: bool,
    pub show_goto: bool,
    pub goto_buffer: String,
}

impl RenderState {
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            screen: Screen::for_route(&self.route),
            input_mode: self.input_mode,
            show_help: self.show_help,
            show_goto: self.show_goto,
            drawer_open: self.navbar.drawer_open,
        }
    }
}

//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::routes::Route;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Navigation bar
    Navigate(Route),
    ToggleDrawer,
    CloseDrawer,
    DrawerNext,
    DrawerPrev,
    DrawerSelect,

    // Form editing
    NextField,
    PrevField,
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    Submit,
    DismissAlert,

    // Review screen
    ScrollUp,
    ScrollDown,
    NextDocument,
    PrevDocument,
    ViewDocument,
    DownloadDocument,
    AdmitStudent,
    RejectStudent,

    // Go-to popup
    OpenGoto,
    GotoChar(char),
    GotoBackspace,
    ConfirmGoto,
    CancelGoto,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Which key map applies to the mounted route
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Form,
    Review,
    Static,
}

impl Screen {
    pub fn for_route(route: &Route) -> Screen {
        match route {
            Route::Login | Route::Register => Screen::Form,
            Route::ReviewApplication(_) => Screen::Review,
            _ => Screen::Static,
        }
    }
}

/// UI context needed to interpret a key press
#[derive(Clone, Copy, Debug)]
pub struct KeyContext {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub show_goto: bool,
    pub drawer_open: bool,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.show_goto {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelGoto),
            KeyCode::Enter => Some(UiEvent::ConfirmGoto),
            KeyCode::Backspace => Some(UiEvent::GotoBackspace),
            KeyCode::Char(c) => Some(UiEvent::GotoChar(c)),
            _ => None,
        };
    }

    if ctx.drawer_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(UiEvent::CloseDrawer),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::DrawerPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::DrawerNext),
            KeyCode::Enter => Some(UiEvent::DrawerSelect),
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if ctx.input_mode == InputMode::Editing {
        return handle_editing_keys(key);
    }

    // Global keys in normal mode
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('g') => return Some(UiEvent::OpenGoto),
        KeyCode::Char('m') => return Some(UiEvent::ToggleDrawer),
        KeyCode::Char('1') => return Some(UiEvent::Navigate(Route::Home)),
        KeyCode::Char('2') => return Some(UiEvent::Navigate(Route::Login)),
        KeyCode::Char('3') => return Some(UiEvent::Navigate(Route::Register)),
        _ => {}
    }

    match ctx.screen {
        Screen::Form => handle_form_keys(key),
        Screen::Review => handle_review_keys(key),
        Screen::Static => None,
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevField),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Char('x') => Some(UiEvent::DismissAlert),
        _ => None,
    }
}

fn handle_review_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextDocument),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevDocument),
        KeyCode::PageDown => Some(UiEvent::ScrollDown),
        KeyCode::PageUp => Some(UiEvent::ScrollUp),
        KeyCode::Char('v') | KeyCode::Enter => Some(UiEvent::ViewDocument),
        KeyCode::Char('d') => Some(UiEvent::DownloadDocument),
        KeyCode::Char('a') => Some(UiEvent::AdmitStudent),
        KeyCode::Char('r') => Some(UiEvent::RejectStudent),
        KeyCode::Char('x') => Some(UiEvent::DismissAlert),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(screen: Screen, input_mode: InputMode) -> KeyContext {
        KeyContext {
            screen,
            input_mode,
            show_help: false,
            show_goto: false,
            drawer_open: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_type_while_editing() {
        let event = key_to_ui_event(press(KeyCode::Char('1')), ctx(Screen::Form, InputMode::Editing));
        assert_eq!(event, Some(UiEvent::CharInput('1')));

        let event = key_to_ui_event(press(KeyCode::Char('1')), ctx(Screen::Form, InputMode::Normal));
        assert_eq!(event, Some(UiEvent::Navigate(Route::Home)));
    }

    #[test]
    fn test_drawer_captures_keys() {
        let mut context = ctx(Screen::Review, InputMode::Normal);
        context.drawer_open = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), context), Some(UiEvent::DrawerSelect));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), context), None);
    }

    #[test]
    fn test_review_actions() {
        let context = ctx(Screen::Review, InputMode::Normal);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), context), Some(UiEvent::AdmitStudent));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), context), Some(UiEvent::RejectStudent));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut context = ctx(Screen::Form, InputMode::Editing);
        context.show_goto = true;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, context), Some(UiEvent::Quit));
    }
}

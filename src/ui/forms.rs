//! Login and registration forms

use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::ui::{cursor_x, focus_style};
use crate::views::{Cursor, LoginField, RegisterField};

/// One labelled single-line input
struct Input<'a> {
    label: &'a str,
    value: &'a str,
    secret: bool,
    focused: bool,
    error: Option<&'a str>,
}

fn draw_input(f: &mut Frame, input: Input, editing: bool, cursor: &Cursor, area: Rect) {
    let border_style = if input.error.is_some() && !input.focused {
        Style::default().fg(Color::Red)
    } else {
        focus_style(input.focused, editing)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", input.label));
    if let Some(error) = input.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(Color::Red),
        )));
    }

    let shown = if input.secret {
        "*".repeat(input.value.chars().count())
    } else {
        input.value.to_string()
    };
    f.render_widget(Paragraph::new(shown).block(block), area);

    if input.focused && editing {
        let x = cursor_x(area, cursor.column(input.value));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Form column centered horizontally, at most `max_width` wide
fn form_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn draw_login(f: &mut Frame, state: &RenderState, area: Rect) {
    let view = &state.login;
    let auth = &state.auth;
    let editing = state.input_mode == InputMode::Editing;

    let outer = Block::default().borders(Borders::ALL).title(" Sign in ");
    let inner = form_column(outer.inner(area), 60);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let banner = if auth.no_account {
        Some(Line::from(Span::styled(
            "No active account found with those credentials. Press 3 to register.",
            Style::default().fg(Color::Yellow),
        )))
    } else if auth.show_error_alert {
        let message = auth.error_message.as_deref().unwrap_or("Login failed");
        Some(Line::from(Span::styled(
            format!("Login failed: {}", message),
            Style::default().fg(Color::Red),
        )))
    } else {
        None
    };
    if let Some(line) = banner {
        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), chunks[0]);
    }

    for (field, chunk) in [(LoginField::Username, chunks[1]), (LoginField::Password, chunks[2])] {
        let input = Input {
            label: match field {
                LoginField::Username => "Username",
                LoginField::Password => "Password",
            },
            value: view.input(field),
            secret: field == LoginField::Password,
            focused: view.focus == field,
            error: view.errors.get(field.field()),
        };
        draw_input(f, input, editing, &view.cursor, chunk);
    }

    let submit = if auth.login_loading {
        Line::from(Span::styled("  Signing in...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(" [ Sign in ] ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
            Span::styled("  s to submit", Style::default().fg(Color::DarkGray)),
        ])
    };
    f.render_widget(Paragraph::new(submit), chunks[3]);
}

pub fn draw_register(f: &mut Frame, state: &RenderState, area: Rect) {
    let view = &state.register;
    let editing = state.input_mode == InputMode::Editing;

    let outer = Block::default().borders(Borders::ALL).title(" Create an account ");
    let inner = form_column(outer.inner(area), 60);
    f.render_widget(outer, area);

    let mut constraints = vec![Constraint::Length(view.alerts.len() as u16)];
    constraints.extend(RegisterField::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let alerts: Vec<Line> = view
        .alerts
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let mut spans = vec![Span::styled(format!("! {}", alert), Style::default().fg(Color::Red))];
            if i == 0 {
                spans.push(Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(alerts), chunks[0]);

    for (i, field) in RegisterField::ALL.iter().enumerate() {
        let input = Input {
            label: field.label(),
            value: view.input(*field),
            secret: field.is_secret(),
            focused: view.focus == *field,
            error: view.errors.get(field.field()),
        };
        draw_input(f, input, editing, &view.cursor, chunks[i + 1]);
    }

    let submit = if view.submitting {
        Line::from(Span::styled("  Creating account...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(" [ Register ] ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
            Span::styled("  s to submit", Style::default().fg(Color::DarkGray)),
        ])
    };
    f.render_widget(Paragraph::new(submit), chunks[RegisterField::ALL.len() + 1]);
}

#[cfg(test)]
mod tests {
    use crate::auth::LoginOutcome;
    use crate::messages::RenderState;
    use crate::routes::Route;
    use crate::ui::render_to_string;
    use crate::validation::Field;

    fn login_state() -> RenderState {
        RenderState {
            route: Route::Login,
            ..Default::default()
        }
    }

    #[test]
    fn test_login_masks_password() {
        let mut state = login_state();
        state.login.form.username = "amina".to_string();
        state.login.form.password = "hunter22".to_string();
        let screen = render_to_string(&state, 100, 20);
        assert!(screen.contains("amina"));
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("********"));
    }

    #[test]
    fn test_login_loading_hides_submit() {
        let mut state = login_state();
        state.auth.begin_login(1);
        let screen = render_to_string(&state, 100, 20);
        assert!(screen.contains("Signing in..."));
        assert!(!screen.contains("[ Sign in ]"));
    }

    #[test]
    fn test_login_no_account_banner() {
        let mut state = login_state();
        state.auth.begin_login(1);
        state.auth.finish_login(1, LoginOutcome::NoAccount);
        let screen = render_to_string(&state, 100, 20);
        assert!(screen.contains("No active account found"));
    }

    #[test]
    fn test_register_shows_field_errors_and_alerts() {
        let mut state = RenderState {
            route: Route::Register,
            ..Default::default()
        };
        state.register.errors.insert(Field::Email, "Enter a valid email address");
        state.register.alerts = vec!["user with this email already exists.".to_string()];
        let screen = render_to_string(&state, 100, 40);
        assert!(screen.contains("Enter a valid email address"));
        assert!(screen.contains("user with this email already exists."));
        assert!(screen.contains("x to dismiss"));
    }
}

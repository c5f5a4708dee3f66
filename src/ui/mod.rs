//! Terminal rendering - pure functions of RenderState

pub mod forms;
pub mod navbar;
pub mod results;
pub mod review;

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::{InputMode, Screen};
use crate::messages::RenderState;
use crate::models::Severity;
use crate::routes::Route;

/// Draw the whole frame for the mounted route
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(3),    // Mounted view
            Constraint::Length(1), // Notification
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    navbar::draw_navbar(f, state, main_chunks[0]);

    match &state.route {
        Route::Home => draw_home(f, &state.route, main_chunks[1]),
        Route::Login => forms::draw_login(f, state, main_chunks[1]),
        Route::Register => forms::draw_register(f, state, main_chunks[1]),
        Route::ReviewApplication(_) => review::draw_review(f, state, main_chunks[1]),
        Route::AdmitStudent(id) => draw_admit_placeholder(f, &state.route, id, main_chunks[1]),
        Route::NotFound(path) => draw_not_found(f, &state.route, path, main_chunks[1]),
    }

    draw_notification(f, state, main_chunks[2]);
    draw_status_bar(f, state, main_chunks[3]);

    if state.navbar.drawer_open {
        navbar::draw_drawer(f, state, main_chunks[1]);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.show_goto {
        draw_goto_popup(f, state, area);
    }
}

/// Color for a severity level
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
    }
}

/// Block title for the mounted view
pub fn view_title(route: &Route) -> String {
    format!(" {} ", route.title())
}

/// Cursor column inside a bordered input, clamped to its inner width
pub fn cursor_x(area: Rect, column: usize) -> u16 {
    let offset = u16::try_from(column).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(offset).saturating_add(1).min(max_x)
}

/// Border style for a focusable widget
pub fn focus_style(focused: bool, editing: bool) -> Style {
    if focused && editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_home(f: &mut Frame, route: &Route, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" Welcome to {} v{}", APP_NAME, APP_VERSION),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(" Applicants can create an account and sign in."),
        Line::from(" Staff can open an application for review with g and a path such as"),
        Line::from(Span::styled(
            "   /admin/review_application/42",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " 2:login  3:register  ?:help",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(view_title(route));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn draw_admit_placeholder(f: &mut Frame, route: &Route, id: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" Admit student for application {}", id),
            Style::default().bold(),
        )),
        Line::from(""),
        Line::from(" The admission decision workflow is handled elsewhere."),
    ];

    let block = Block::default().borders(Borders::ALL).title(view_title(route));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn draw_not_found(f: &mut Frame, route: &Route, path: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" Nothing lives at {}", path),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press g to go to another path or 1 for home.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(view_title(route));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn draw_notification(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(note) = &state.notification else {
        return;
    };

    let color = severity_color(note.severity);
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", note.severity.as_str().to_uppercase()),
            Style::default().fg(Color::Black).bg(color).bold(),
        ),
        Span::raw(" "),
        Span::styled(note.text.as_str(), Style::default().fg(color)),
        Span::styled(
            format!("  {}", note.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " Esc:stop editing | arrows:move | Tab:next field | Enter:submit "
    } else {
        match Screen::for_route(&state.route) {
            Screen::Form => " Tab:next field | e:edit | s:submit | x:dismiss | ?:help | q:quit ",
            Screen::Review => {
                " j/k:documents | v:view | d:download | a:admit | r:reject | PgUp/PgDn:scroll | ?:help "
            }
            Screen::Static => " 1-3:links | g:go to | m:drawer | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 ADMISSIONS - Keyboard Shortcuts

 NAVIGATION
   1 / 2 / 3          Home / Login / Register
   m                  Toggle menu drawer
   g                  Go to a path

 FORMS
   Tab / Shift+Tab    Next / previous field
   e / Enter          Edit focused field
   s                  Submit
   x                  Dismiss alert

 REVIEW
   j / k              Select document
   v / Enter          View selected document
   d                  Download selected document
   PgUp / PgDn        Scroll
   a / r              Admit / Reject (once reviewed)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_goto_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Go to (Enter to open, Esc to cancel) ")
        .style(Style::default().bg(Color::Black));

    let input = Paragraph::new(state.goto_buffer.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(input, popup_area);

    let x = cursor_x(popup_area, state.goto_buffer.chars().count());
    f.set_cursor_position(Position::new(x, popup_area.y + 1));
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) fn render_to_string(state: &RenderState, width: u16, height: u16) -> String {
    use ratatui::backend::TestBackend;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw_ui(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

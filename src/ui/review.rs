//! Application review screen

use ratatui::{prelude::*, widgets::*};

use crate::constants::NARROW_WIDTH;
use crate::messages::RenderState;
use crate::models::{Application, ReviewBundle};
use crate::ui::{results, severity_color, view_title};

const SIDEBAR_WIDTH: u16 = 32;

pub fn draw_review(f: &mut Frame, state: &RenderState, area: Rect) {
    let view = &state.review;

    if view.loading {
        let block = Block::default().borders(Borders::ALL).title(view_title(&state.route));
        let loading = Paragraph::new(Line::from(Span::styled(
            " Loading application...",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(loading, area);
        return;
    }

    let Some(bundle) = &view.bundle else {
        draw_not_loaded(f, state, area);
        return;
    };

    let (main_area, sidebar_area) = if area.width < NARROW_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(sidebar_height(&bundle.application)), Constraint::Min(3)])
            .split(area);
        (chunks[1], chunks[0])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
            .split(area);
        (chunks[0], chunks[1])
    };

    draw_details(f, state, bundle, main_area);
    draw_sidebar(f, &bundle.application, sidebar_area);
}

fn draw_not_loaded(f: &mut Frame, state: &RenderState, area: Rect) {
    let view = &state.review;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Application not found or failed to load",
            Style::default().fg(Color::Red).bold(),
        )),
    ];
    if let Some(error) = &view.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(view_title(&state.route));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).bold(),
    ))
}

/// Label/value row of a details grid
fn grid_row(label: &str, value: Option<&str>) -> Line<'static> {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or("-");
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), Style::default().fg(Color::Gray)),
        Span::raw(value.to_string()),
    ])
}

fn draw_details(f: &mut Frame, state: &RenderState, bundle: &ReviewBundle, area: Rect) {
    let view = &state.review;
    let app = &bundle.application;
    let dob = app.date_of_birth.format("%Y-%m-%d").to_string();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", app.full_name()),
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            format!(" Application #{}", app.id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        heading("Personal Information"),
        grid_row("Date of birth", Some(dob.as_str())),
        grid_row("Gender", Some(app.gender.as_str())),
        grid_row("Nationality", Some(app.nationality.as_str())),
        grid_row("Email", Some(app.email.as_str())),
        grid_row("Phone", Some(app.phone.as_str())),
        grid_row("Address", app.address.as_deref()),
        Line::from(""),
        heading("Academic Information"),
        grid_row("Program", app.program.as_deref()),
        grid_row("Batch", app.batch.as_deref()),
        grid_row("Previous school", app.previous_school.as_deref()),
        Line::from(""),
    ];

    lines.extend(results::result_lines(&bundle.olevel_results, &bundle.alevel_results));
    lines.push(Line::from(""));

    lines.push(heading("Documents"));
    if bundle.documents.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No documents uploaded",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (i, doc) in bundle.documents.iter().enumerate() {
            let selected = i == view.selected_document;
            let style = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let prefix = if selected { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<24}", prefix, doc.name), style),
                Span::styled(
                    format!(" {:<18} {}", doc.document_type, doc.uploaded_at.format("%Y-%m-%d")),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "  v:view  d:download",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.extend(results::passport_lines(bundle.passport_photo()));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} (PgUp/PgDn scroll) ", state.route.title()));
    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    f.render_widget(details, area);
}

fn sidebar_height(app: &Application) -> u16 {
    if app.reviewed_by.is_some() {
        10
    } else {
        6
    }
}

fn draw_sidebar(f: &mut Frame, app: &Application, area: Rect) {
    let severity = app.severity();
    let fee = if app.fee_paid { "Yes" } else { "No" };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", app.status.to_uppercase()),
                Style::default().fg(Color::Black).bg(severity_color(severity)).bold(),
            ),
        ]),
        Line::from(format!(" Fee paid:   {}", fee)),
        Line::from(format!(" Submitted:  {}", app.created_at.format("%Y-%m-%d"))),
    ];

    if app.reviewed_by.is_some() {
        if let Some(reviewed_at) = app.reviewed_at {
            lines.push(Line::from(format!(" Reviewed:   {}", reviewed_at.format("%Y-%m-%d"))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [a] Admit Student ",
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )));
        lines.push(Line::from(Span::styled(
            " [r] Reject Student ",
            Style::default().fg(Color::Black).bg(Color::Red).bold(),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(" Status ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

//! Exam results tables and passport photo section of the review screen

use ratatui::prelude::*;

use crate::models::{Document, ExamResult};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).bold(),
    ))
}

fn results_table(title: &str, results: &[ExamResult]) -> Vec<Line<'static>> {
    let mut lines = vec![heading(title)];

    if results.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No results recorded",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("  {:<28} {}", "Subject", "Grade"),
        Style::default().fg(Color::DarkGray),
    )));
    for result in results {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<28} ", result.subject.name)),
            Span::styled(result.grade.clone(), Style::default().bold()),
        ]));
    }
    lines
}

/// O-Level and A-Level tables
pub fn result_lines(olevel: &[ExamResult], alevel: &[ExamResult]) -> Vec<Line<'static>> {
    let mut lines = results_table("O-Level Results", olevel);
    lines.push(Line::from(""));
    lines.extend(results_table("A-Level Results", alevel));
    lines
}

pub fn passport_lines(photo: Option<&Document>) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Passport Photo")];
    match photo {
        Some(doc) => {
            lines.push(Line::from(format!("  {}", doc.name)));
            lines.push(Line::from(Span::styled(
                format!("  {}", doc.file),
                Style::default().fg(Color::Blue).underlined(),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "  No passport photo uploaded",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines
}

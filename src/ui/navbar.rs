//! Navigation bar and menu drawer

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, NARROW_WIDTH};
use crate::messages::RenderState;
use crate::views::navbar::links;

pub fn draw_navbar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
    ];

    if area.width < NARROW_WIDTH {
        spans.push(Span::styled(" m:menu ", Style::default().fg(Color::Gray)));
    } else {
        for (i, link) in links().iter().enumerate() {
            let style = if link.route == state.route {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, link.label), style));
            spans.push(Span::raw(" "));
        }
    }

    spans.push(Span::styled(
        format!(" {}", state.route.path()),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Drawer overlay anchored to the top-left of the content area
pub fn draw_drawer(f: &mut Frame, state: &RenderState, area: Rect) {
    let entries = links();
    let drawer_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(24),
        height: area.height.min(entries.len() as u16 + 2),
    };

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == state.navbar.selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let prefix = if i == state.navbar.selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, link.label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Menu ")
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, drawer_area);
    f.render_widget(list, drawer_area);
}

#[cfg(test)]
mod tests {
    use crate::messages::RenderState;
    use crate::ui::render_to_string;

    #[test]
    fn test_wide_terminal_shows_links() {
        let screen = render_to_string(&RenderState::default(), 100, 12);
        assert!(screen.contains("2:Login"));
        assert!(!screen.contains("m:menu"));
    }

    #[test]
    fn test_narrow_terminal_collapses_links() {
        let screen = render_to_string(&RenderState::default(), 60, 12);
        assert!(screen.contains("m:menu"));
        assert!(!screen.contains("2:Login"));
    }

    #[test]
    fn test_open_drawer_lists_links() {
        let mut state = RenderState::default();
        state.navbar.drawer_open = true;
        state.navbar.selected = 2;
        let screen = render_to_string(&state, 60, 12);
        assert!(screen.contains("Menu"));
        assert!(screen.contains("> Register"));
    }
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::model::SnippetList;

pub(super) fn render_view_chrome(frame: &mut ratatui::Frame, title: &str, area: Rect) -> Rect {
    let header = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    ));
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Single-line rendering of a snippet for list rows and previews.
pub(super) fn row_label(text: &str) -> String {
    if text.is_empty() {
        return "(empty)".to_string();
    }
    text.replace("\r\n", "\n").replace('\n', " ⏎ ")
}

pub(super) fn render_snippets(
    frame: &mut ratatui::Frame,
    area: Rect,
    list: &SnippetList,
    selected: Option<usize>,
) {
    let inner = render_view_chrome(frame, "Snippets", area);

    let rows: Vec<ListItem> = if list.is_empty() {
        vec![ListItem::new("(no snippets; press `a` to add one)")]
    } else {
        list.iter()
            .map(|s| {
                let style = if s.is_empty() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(row_label(s)).style(style)
            })
            .collect()
    };

    let mut state = ListState::default();
    state.select(selected);

    let widget = List::new(rows)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(widget, inner, &mut state);
}

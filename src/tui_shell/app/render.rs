use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let count = app.store.len();
    let header = Line::from(vec![
        Span::styled(
            "CopyCat",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", count, if count == 1 { "item" } else { "items" }),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(app.store.location(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    view::render_snippets(frame, chunks[1], app.store.list(), app.selected_index());

    // Last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Key hints
    let hints = [
        ("Enter", "copy"),
        ("a", "add"),
        ("e", "edit"),
        ("d", "delete"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(" {}", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

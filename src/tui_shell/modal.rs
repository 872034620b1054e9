use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 12);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();

    match &modal.kind {
        super::ModalKind::ConfirmDelete { .. } => {
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }

        super::ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

            let field_w = parts[1].width.saturating_sub(2) as usize;
            let prompt_w = prompt.width();
            let room = field_w.saturating_sub(prompt_w + 1).max(1);
            let (skip, cursor_col) = input_window(&modal.input.buf, modal.input.cursor, room);
            let visible: String = modal.input.buf.chars().skip(skip).collect();

            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(visible),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Text")),
                parts[1],
            );

            let x = (prompt_w + cursor_col) as u16;
            let y = parts[1].y + 1;
            frame.set_cursor_position((parts[1].x + 1 + x, y));
        }
    }
}

/// Chars to scroll off the left and the cursor's display column, so the
/// cursor stays within `room` columns. Widths are terminal cells.
fn input_window(buf: &str, cursor: usize, room: usize) -> (usize, usize) {
    let widths: Vec<usize> = buf
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect();
    let mut col: usize = widths.iter().sum();
    let mut skip = 0;
    while col > room && skip < widths.len() {
        col -= widths[skip];
        skip += 1;
    }
    (skip, col)
}

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        ConfirmDelete(usize),
        SubmitTextInput {
            action: super::TextInputAction,
            value: String,
        },
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };

        match &mut m.kind {
            super::ModalKind::TextInput { action, .. } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                // Stored as typed: no trimming, empty is allowed.
                KeyCode::Enter => ModalAction::SubmitTextInput {
                    action: *action,
                    value: m.input.buf.clone(),
                },
                KeyCode::Backspace => {
                    m.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    m.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    m.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    m.input.move_right();
                    ModalAction::None
                }
                KeyCode::Home => {
                    m.input.move_home();
                    ModalAction::None
                }
                KeyCode::End => {
                    m.input.move_end();
                    ModalAction::None
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    m.input.clear();
                    ModalAction::None
                }
                KeyCode::Char(c) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        m.input.insert_char(c);
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            super::ModalKind::ConfirmDelete { index } => match key.code {
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    ModalAction::ConfirmDelete(*index)
                }
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            app.close_modal();
        }
        ModalAction::ConfirmDelete(index) => {
            app.close_modal();
            app.confirm_delete(index);
        }
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
    }
}

fn modal_title(modal: &super::Modal) -> Line<'static> {
    let confirm = match modal.kind {
        super::ModalKind::TextInput { .. } => "Enter",
        super::ModalKind::ConfirmDelete { .. } => "y/Enter",
    };
    Line::from(vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(confirm, Style::default().fg(Color::Gray)),
    ])
}

#[cfg(test)]
#[path = "../tests/tui_shell/modal_tests.rs"]
mod tests;

use ratatui::backend::TestBackend;

use crate::clipboard::RecordingClipboard;
use crate::store::MemoryBackend;

use super::*;

fn app_with(contents: &str) -> (App, MemoryBackend, RecordingClipboard) {
    let backend = MemoryBackend::with_contents(contents);
    let clipboard = RecordingClipboard::default();
    let app = App::new(
        SnippetStore::open(backend.clone()),
        Box::new(clipboard.clone()),
    );
    (app, backend, clipboard)
}

fn press(app: &mut App, code: KeyCode) {
    event_loop::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn persisted(backend: &MemoryBackend) -> serde_json::Value {
    serde_json::from_slice(&backend.contents().unwrap_or_default()).unwrap()
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| render::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn enter_copies_selected_row() {
    let (mut app, backend, clipboard) = app_with(r#"{"strings":["first","second"]}"#);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(clipboard.last().as_deref(), Some("second"));
    assert!(clipboard.held().is_empty());
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn add_prompt_appends_and_persists() {
    let (mut app, backend, _) = app_with(r#"{"strings":["a"]}"#);
    press(&mut app, KeyCode::Char('a'));
    assert!(app.modal.is_some());
    type_text(&mut app, "  new ✂ ");
    press(&mut app, KeyCode::Enter);

    assert!(app.modal.is_none());
    assert_eq!(app.selected_index(), Some(1));
    assert_eq!(
        persisted(&backend),
        serde_json::json!({"strings": ["a", "  new ✂ "]})
    );
}

#[test]
fn add_accepts_empty_text() {
    let (mut app, backend, _) = app_with("");
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(persisted(&backend), serde_json::json!({"strings": [""]}));
}

#[test]
fn edit_prompt_is_prefilled_and_updates_row() {
    let (mut app, backend, _) = app_with(r#"{"strings":["a","b","c"]}"#);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));

    let prefill = app.modal.as_ref().map(|m| m.input.buf.clone());
    assert_eq!(prefill.as_deref(), Some("b"));

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "B!");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        persisted(&backend),
        serde_json::json!({"strings": ["a", "B!", "c"]})
    );
}

#[test]
fn cancel_leaves_store_untouched() {
    let (mut app, backend, _) = app_with(r#"{"strings":["a"]}"#);
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "zzz");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));

    assert!(app.modal.is_none());
    assert!(!app.quit);
    assert_eq!(app.store.list().strings, vec!["a".to_string()]);
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn delete_confirm_removes_row_and_clamps_selection() {
    let (mut app, backend, _) = app_with(r#"{"strings":["a","b","c"]}"#);
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(persisted(&backend), serde_json::json!({"strings": ["a", "b"]}));
    assert_eq!(app.selected_index(), Some(1));

    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Enter);
    assert_eq!(persisted(&backend), serde_json::json!({"strings": ["b"]}));
    assert_eq!(app.selected_index(), Some(0));
}

#[test]
fn row_actions_on_empty_list_are_noops() {
    let (mut app, backend, clipboard) = app_with("");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Down);

    assert!(app.modal.is_none());
    assert!(clipboard.copied().is_empty());
    assert_eq!(backend.write_count(), 0);
    assert_eq!(app.selected_index(), None);
}

#[test]
fn paste_inserts_into_text_prompt() {
    let (mut app, backend, _) = app_with("");
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "<");
    event_loop::handle_paste(&mut app, "pasted ✓\ttext");
    type_text(&mut app, ">");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        persisted(&backend),
        serde_json::json!({"strings": ["<pasted ✓\ttext>"]})
    );
}

#[test]
fn paste_outside_text_prompt_is_ignored() {
    let (mut app, backend, _) = app_with(r#"{"strings":["keep"]}"#);
    event_loop::handle_paste(&mut app, "stray");
    assert!(app.modal.is_none());

    press(&mut app, KeyCode::Char('d'));
    event_loop::handle_paste(&mut app, "stray");
    let buf = app.modal.as_ref().map(|m| m.input.buf.clone());
    assert_eq!(buf.as_deref(), Some(""));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.store.list().strings, vec!["keep".to_string()]);
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn write_failure_is_not_shown_as_error() {
    let (mut app, backend, _) = app_with("");
    backend.set_fail_writes(true);
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "kept");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.list().strings, vec!["kept".to_string()]);
    let last = app.last_result.as_ref().map(|r| r.kind);
    assert_eq!(last, Some(EntryKind::Output));
}

#[test]
fn quit_keys_stop_the_loop() {
    let (mut app, _, _) = app_with("");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);
}

#[test]
fn screen_lists_rows_and_marks_empty_snippets() {
    let (app, _, _) = app_with(r#"{"strings":["hello","","multi\nline"]}"#);
    let text = screen_text(&app);
    assert!(text.contains("CopyCat"));
    assert!(text.contains("3 items"));
    assert!(text.contains("hello"));
    assert!(text.contains("(empty)"));
    assert!(text.contains("multi ⏎ line"));
}

#[test]
fn screen_shows_delete_confirmation() {
    let (mut app, _, _) = app_with(r#"{"strings":["gone soon"]}"#);
    press(&mut app, KeyCode::Char('d'));
    let text = screen_text(&app);
    assert!(text.contains("Delete row 1"));
    assert!(text.contains("Delete this item? (y/n)"));
}

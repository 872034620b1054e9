use super::*;

#[test]
fn edits_at_cursor_with_multibyte_text() {
    let mut input = Input::default();
    input.set("héllo".to_string());
    assert_eq!(input.cursor, 5);

    input.move_left();
    input.move_left();
    input.insert_char('ß');
    assert_eq!(input.buf, "hélßlo");

    input.move_home();
    input.delete();
    assert_eq!(input.buf, "élßlo");

    input.move_end();
    input.backspace();
    assert_eq!(input.buf, "élßl");
    assert_eq!(input.cursor, 4);
}

#[test]
fn insert_str_advances_by_chars() {
    let mut input = Input::default();
    input.insert_str("日本");
    input.insert_char('!');
    assert_eq!(input.buf, "日本!");
    assert_eq!(input.cursor, 3);
}

#[test]
fn cursor_stays_in_bounds() {
    let mut input = Input::default();
    input.backspace();
    input.delete();
    input.move_left();
    input.move_right();
    assert_eq!(input.cursor, 0);

    input.set("ab".to_string());
    input.move_right();
    assert_eq!(input.cursor, 2);
    input.clear();
    assert_eq!((input.buf.as_str(), input.cursor), ("", 0));
}

use super::*;

#[test]
fn ascii_cursor_column_matches_char_count() {
    assert_eq!(input_window("hello", 5, 20), (0, 5));
    assert_eq!(input_window("hello", 2, 20), (0, 2));
}

#[test]
fn wide_chars_count_two_columns() {
    // Each CJK char occupies two terminal cells.
    assert_eq!(input_window("日本語", 3, 20), (0, 6));
    assert_eq!(input_window("a日b", 2, 20), (0, 3));
    assert_eq!(input_window("🐈x", 1, 20), (0, 2));
}

#[test]
fn scrolls_by_display_width_to_keep_cursor_visible() {
    // 10 wide chars = 20 columns; only 7 fit before the cursor.
    let buf = "日".repeat(10);
    let (skip, col) = input_window(&buf, 10, 7);
    assert_eq!(skip, 7);
    assert_eq!(col, 6);

    let (skip, col) = input_window("abcdefghij", 10, 4);
    assert_eq!((skip, col), (6, 4));
}

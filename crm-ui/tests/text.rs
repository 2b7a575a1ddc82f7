use crm_ui::text::{align_offset, char_width, display_width, truncate_to_width};
use crm_ui::{Color, Line, Span, Style, TextAlign, Tone};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("", 5), "");
}

#[test]
fn test_truncate_does_not_split_wide_chars() {
    // "日本語" is 6 cells; 4 cells leaves room for one wide char + ellipsis
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(3, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(3, 10, TextAlign::Right), 7);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}

#[test]
fn test_line_text_and_width() {
    let line = Line::raw("Priya").push(Span::raw(" Sharma"));
    assert_eq!(line.text(), "Priya Sharma");
    assert_eq!(line.width(), 12);
    assert!(!line.is_empty());
    assert!(Line::default().is_empty());
}

#[test]
fn test_badge_uses_tone_color() {
    let badge = Line::badge("Customer", Tone::Green);
    assert_eq!(badge.text(), "[Customer]");
    assert_eq!(
        badge.spans[0].style.foreground,
        Some(Color::tone(Tone::Green))
    );
}

#[test]
fn test_patch_style_keeps_span_colors() {
    let line = Line::badge("Lost", Tone::Red).patch_style(Style::new().foreground(Color::rgb(1, 2, 3)).underline());
    let style = line.spans[0].style;
    assert_eq!(style.foreground, Some(Color::tone(Tone::Red)));
    assert!(style.text_style.underline);
    assert!(style.text_style.bold);
}

#[test]
fn test_line_truncate_across_spans() {
    let line = Line::raw("Priya").push(Span::styled(" Sharma", Style::new().bold()));
    let cut = line.truncate(8);
    assert_eq!(cut.text(), "Priya S…");
    assert_eq!(cut.width(), 8);
    assert!(cut.spans.last().unwrap().style.text_style.bold);
}

#[test]
fn test_line_truncate_noop_and_zero() {
    let line = Line::raw("Pune");
    assert_eq!(line.truncate(4), line);
    assert!(line.truncate(0).is_empty());
}

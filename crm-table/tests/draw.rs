use crm_table::{Column, DataTable, DrawState, EmptyState, TableStyle, draw};
use crm_ui::{Buffer, Rect, Theme};
use serde::Serialize;

#[derive(Serialize)]
struct Lead {
    id: String,
    name: String,
    value: u32,
}

fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "L001".into(),
            name: "Alpha Corp Inquiry".into(),
            value: 500,
        },
        Lead {
            id: "L002".into(),
            name: "Beta Solutions Demo Request".into(),
            value: 75000,
        },
    ]
}

fn columns() -> Vec<Column<Lead>> {
    vec![
        Column::new("name", "Name"),
        Column::new("value", "Value").numeric().fixed(10),
    ]
}

fn rows(buf: &Buffer) -> Vec<String> {
    (0..buf.height()).map(|y| buf.row_text(y)).collect()
}

#[test]
fn test_draws_caption_header_separator_and_rows() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data).caption("Leads").render();
    let mut buf = Buffer::new(40, 6);
    let area = buf.area();

    draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());
    let rows = rows(&buf);

    assert_eq!(rows[0].trim_end(), " Leads");
    assert!(rows[1].starts_with(" NAME"));
    assert!(rows[1].trim_end().ends_with("VALUE"));
    assert!(rows[2].chars().all(|c| c == '─'));
    assert!(rows[3].starts_with(" Alpha Corp Inquiry"));
    // numeric column is right-aligned inside its padding
    assert!(rows[3].ends_with("500 "));
    assert!(rows[4].ends_with("75000 "));
}

#[test]
fn test_long_cells_are_truncated_with_ellipsis() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data).render();
    let mut buf = Buffer::new(24, 5);
    let area = buf.area();

    draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());

    // name column gets 14 cells, 12 after padding
    assert!(buf.row_text(3).starts_with(" Beta Soluti… "));
}

#[test]
fn test_skeleton_rows_fill_cells() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data)
        .loading(true)
        .loading_row_count(3)
        .render();
    let mut buf = Buffer::new(30, 8);
    let area = buf.area();

    let drawn = draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());

    assert!(drawn.rows.is_empty());
    for y in 2..5 {
        assert!(buf.row_text(y).contains('░'), "row {} should be a skeleton", y);
    }
    assert!(!buf.row_text(5).contains('░'));
}

#[test]
fn test_empty_state_is_centered_without_header() {
    let columns = columns();
    let data: Vec<Lead> = Vec::new();
    let view = DataTable::new(&columns, &data)
        .empty_state(EmptyState::new("No Leads Found"))
        .render();
    let mut buf = Buffer::new(40, 9);
    let area = buf.area();

    let drawn = draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());

    assert!(drawn.rows.is_empty());
    let text = rows(&buf).join("\n");
    assert!(text.contains("No Leads Found"));
    assert!(!text.contains("NAME"));
    assert!(text.contains('╭'));
}

#[test]
fn test_row_regions_map_clicks_to_data_indices() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data)
        .on_row_click(|_: &Lead| {})
        .render();
    let area = Rect::new(2, 1, 30, 6);
    let mut buf = Buffer::new(40, 10);

    let drawn = draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());

    assert_eq!(drawn.rows.len(), 2);
    assert_eq!(drawn.row_at(5, 3), Some(0));
    assert_eq!(drawn.row_at(31, 4), Some(1));
    assert_eq!(drawn.row_at(5, 1), None);
    assert_eq!(drawn.row_at(1, 3), None);
}

#[test]
fn test_rows_without_handler_have_no_regions() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data).render();
    let mut buf = Buffer::new(30, 6);
    let area = buf.area();

    let drawn = draw(&view, &mut buf, area, &Theme::light(), &DrawState::default());

    assert!(drawn.rows.is_empty());
    assert_eq!(drawn.row_at(3, 2), None);
}

#[test]
fn test_offset_skips_leading_rows() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data)
        .on_row_click(|_: &Lead| {})
        .style(TableStyle {
            borders: false,
            ..TableStyle::default()
        })
        .render();
    let mut buf = Buffer::new(40, 3);
    let area = buf.area();
    let state = DrawState {
        selected: Some(1),
        offset: 1,
    };

    let drawn = draw(&view, &mut buf, area, &Theme::light(), &state);

    assert_eq!(drawn.viewport_rows, 2);
    assert!(buf.row_text(1).starts_with(" Beta"));
    assert_eq!(drawn.rows.len(), 1);
    assert_eq!(drawn.rows[0].0, 1);
}

#[test]
fn test_selected_row_uses_selected_background() {
    let columns = columns();
    let data = leads();
    let view = DataTable::new(&columns, &data).render();
    let theme = Theme::light();
    let mut buf = Buffer::new(30, 6);
    let area = buf.area();
    let state = DrawState {
        selected: Some(0),
        offset: 0,
    };

    draw(&view, &mut buf, area, &theme, &state);

    let selected_bg = theme.resolve(crm_ui::Color::token(crm_ui::Token::Selected));
    let surface_bg = theme.resolve(crm_ui::Color::token(crm_ui::Token::Surface));
    assert_eq!(buf.get(0, 2).unwrap().bg, selected_bg);
    assert_eq!(buf.get(0, 3).unwrap().bg, surface_bg);
}

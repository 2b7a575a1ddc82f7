//! Painting a [`TableView`] into a cell buffer.

use crm_ui::text::align_offset;
use crm_ui::{Buffer, Color, Line, Rect, Style, TextAlign, Theme, Token};

use crate::column::ColumnWidth;
use crate::view::{Body, CellView, EmptyState, HeaderCell, RowView, TableView};

/// Caller-owned interaction state, kept between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawState {
    /// Highlighted body row, by data index.
    pub selected: Option<usize>,
    /// Body rows scrolled past the top.
    pub offset: usize,
}

/// What ended up on screen, for mapping mouse input back to rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawnTable {
    /// Screen rect of every activatable row that was painted.
    pub rows: Vec<(usize, Rect)>,
    /// Number of body rows that fit.
    pub viewport_rows: usize,
}

impl DrawnTable {
    /// Data index of the activatable row under `(x, y)`.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(index, _)| *index)
    }
}

const CELL_PADDING: u16 = 1;
const SKELETON: char = '░';

/// Split `available` cells between columns: fixed widths first, then the
/// rest by flex weight. Rounding leftovers go to the last flex column.
pub fn column_widths(header: &[HeaderCell], available: u16) -> Vec<u16> {
    let fixed_total: u16 = header
        .iter()
        .map(|cell| match cell.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Flex(_) => 0,
        })
        .fold(0u16, u16::saturating_add);
    let remaining = available.saturating_sub(fixed_total) as u32;
    let total_weight: u32 = header
        .iter()
        .map(|cell| match cell.width {
            ColumnWidth::Flex(weight) => weight as u32,
            ColumnWidth::Fixed(_) => 0,
        })
        .sum();

    let mut widths: Vec<u16> = header
        .iter()
        .map(|cell| match cell.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Flex(weight) if total_weight > 0 => {
                (remaining * weight as u32 / total_weight) as u16
            }
            ColumnWidth::Flex(_) => 0,
        })
        .collect();

    let last_flex = header
        .iter()
        .rposition(|cell| matches!(cell.width, ColumnWidth::Flex(weight) if weight > 0));
    if let Some(last) = last_flex {
        let used: u32 = widths
            .iter()
            .zip(header)
            .filter(|(_, cell)| matches!(cell.width, ColumnWidth::Flex(_)))
            .map(|(width, _)| *width as u32)
            .sum();
        widths[last] += (remaining - used) as u16;
    }

    widths
}

/// Offset that keeps `selected` inside a viewport of `viewport` rows.
pub fn scroll_offset_for(selected: Option<usize>, offset: usize, viewport: usize) -> usize {
    let Some(selected) = selected else {
        return offset;
    };
    if viewport == 0 {
        return selected;
    }
    if selected < offset {
        selected
    } else if selected >= offset + viewport {
        selected + 1 - viewport
    } else {
        offset
    }
}

/// Paint `view` into `area`.
pub fn draw(view: &TableView, buf: &mut Buffer, area: Rect, theme: &Theme, state: &DrawState) -> DrawnTable {
    buf.fill(area, Color::token(Token::Surface), theme);
    let mut area = area;

    if let Some(caption) = &view.caption {
        let (line, rest) = area.split_top(1);
        buf.write_str(
            line.x + CELL_PADDING,
            line.y,
            caption,
            Style::new().foreground(Color::token(Token::Heading)).bold(),
            line.width.saturating_sub(CELL_PADDING * 2),
            theme,
        );
        area = rest;
    }

    match &view.body {
        Body::Empty(empty) => {
            draw_empty(empty, buf, area, theme);
            DrawnTable::default()
        }
        Body::Loading { header, rows } | Body::Populated { header, rows } => {
            draw_grid(view, header, rows, buf, area, theme, state)
        }
    }
}

fn draw_grid(
    view: &TableView,
    header: &[HeaderCell],
    rows: &[RowView],
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    state: &DrawState,
) -> DrawnTable {
    let widths = column_widths(header, area.width);
    let mut area = area;

    if !header.is_empty() {
        let (line, rest) = area.split_top(1);
        buf.fill(line, Color::token(Token::HeaderBg), theme);
        let style = Style::new().foreground(Color::token(Token::HeaderText)).bold();
        let mut x = line.x;
        for (cell, width) in header.iter().zip(&widths) {
            let label = Line::styled(cell.label.as_str(), style);
            draw_cell(buf, Rect::new(x, line.y, *width, 1), &label, cell.align, theme);
            x = x.saturating_add(*width);
        }
        area = rest;

        if view.style.borders {
            let (line, rest) = area.split_top(1);
            buf.fill_char(line, '─', Style::new().foreground(Color::token(Token::Border)), theme);
            area = rest;
        }
    }

    let viewport_rows = area.height as usize;
    let mut drawn = DrawnTable {
        rows: Vec::new(),
        viewport_rows,
    };

    for (slot, row) in rows.iter().skip(state.offset).take(viewport_rows).enumerate() {
        let line = area.row(slot as u16);
        let background = if !view.is_loading() && state.selected == Some(row.index) {
            Token::Selected
        } else if view.style.striped && row.index % 2 == 1 {
            Token::Background
        } else {
            Token::Surface
        };
        buf.fill(line, Color::token(background), theme);

        let mut x = line.x;
        for ((cell, width), column) in row.cells.iter().zip(&widths).zip(header) {
            let rect = Rect::new(x, line.y, *width, 1);
            match cell {
                CellView::Skeleton => {
                    let inner = rect.shrink(0, CELL_PADDING, 0, CELL_PADDING);
                    buf.fill_char(inner, SKELETON, Style::new().foreground(Color::token(Token::Border)), theme);
                }
                CellView::Content(content) => {
                    let content = content
                        .clone()
                        .patch_style(Style::new().foreground(Color::token(Token::Text)));
                    draw_cell(buf, rect, &content, column.align, theme);
                }
            }
            x = x.saturating_add(*width);
        }

        if row.activatable {
            drawn.rows.push((row.index, line));
        }
    }

    drawn
}

fn draw_cell(buf: &mut Buffer, rect: Rect, content: &Line, align: TextAlign, theme: &Theme) {
    let inner = rect.shrink(0, CELL_PADDING, 0, CELL_PADDING);
    if inner.is_empty() {
        return;
    }
    let fitted = content.truncate(inner.width as usize);
    let offset = align_offset(fitted.width(), inner.width as usize, align) as u16;
    buf.write_line(inner.x + offset, inner.y, &fitted, inner.width - offset, theme);
}

fn draw_empty(empty: &EmptyState, buf: &mut Buffer, area: Rect, theme: &Theme) {
    let width = area.width.min(64);
    let height = area.height.min(7);
    if width < 4 || height < 3 {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let frame = Rect::new(x, y, width, height);

    let border = Style::new().foreground(Color::token(Token::Border));
    buf.fill(frame, Color::token(Token::Background), theme);
    buf.fill_char(Rect::new(x, y, width, 1), '─', border, theme);
    buf.fill_char(Rect::new(x, frame.bottom() - 1, width, 1), '─', border, theme);
    buf.fill_char(Rect::new(x, y, 1, height), '│', border, theme);
    buf.fill_char(Rect::new(frame.right() - 1, y, 1, height), '│', border, theme);
    buf.write_str(x, y, "╭", border, 1, theme);
    buf.write_str(frame.right() - 1, y, "╮", border, 1, theme);
    buf.write_str(x, frame.bottom() - 1, "╰", border, 1, theme);
    buf.write_str(frame.right() - 1, frame.bottom() - 1, "╯", border, 1, theme);

    let mut lines = Vec::new();
    if let Some(icon) = empty.icon {
        lines.push(Line::styled(icon.to_string(), Style::new().foreground(Color::token(Token::Muted))));
    }
    lines.push(
        empty
            .title
            .clone()
            .patch_style(Style::new().foreground(Color::token(Token::Text)).bold()),
    );
    if let Some(message) = &empty.message {
        lines.push(
            message
                .clone()
                .patch_style(Style::new().foreground(Color::token(Token::Muted))),
        );
    }

    let inner = frame.inset(1);
    let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate().take(inner.height as usize) {
        let fitted = line.truncate(inner.width as usize);
        let offset = align_offset(fitted.width(), inner.width as usize, TextAlign::Center) as u16;
        buf.write_line(inner.x + offset, top + i as u16, &fitted, inner.width - offset, theme);
    }
}

use crm_ui::{Buffer, Color, Line, Rect, Span, Theme, Token};

use super::{Hits, draw_heading, draw_page_table, fg};
use crate::app::{App, Focus, ListScreen};

const SEARCH_WIDTH: u16 = 38;

pub(super) fn draw(app: &App, list: &ListScreen, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let section = list.section;
    let area = draw_heading(buf, area, section.heading(), section.subtitle(), theme);
    let (bar, rest) = area.split_top(2);
    draw_filter_bar(app, list, buf, bar.row(0), theme, hits);
    draw_page_table(app, buf, rest, theme, hits);
}

fn draw_filter_bar(app: &App, list: &ListScreen, buf: &mut Buffer, row: Rect, theme: &Theme, hits: &mut Hits) {
    let focused = app.focus() == Focus::Search;
    let width = SEARCH_WIDTH.min(row.width);
    let search = Rect::new(row.x, row.y, width, 1);
    buf.fill(
        search,
        Color::token(if focused { Token::Selected } else { Token::Surface }),
        theme,
    );

    let text = list.filter.search();
    let content = if text.is_empty() && !focused {
        Line::styled(format!("⌕ {}", list.filter.search_placeholder()), fg(Token::Muted))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::styled("⌕ ", fg(Token::Muted)).push(Span::styled(format!("{text}{cursor}"), fg(Token::Text)))
    };
    buf.write_line(search.x + 1, search.y, &content, search.width.saturating_sub(2), theme);
    hits.search = Some(search);

    let mut x = search.right() + 2;
    for (label, value) in list.filter.chips() {
        if x >= row.right() {
            break;
        }
        let chip = Line::styled(format!("{label}: "), fg(Token::Muted))
            .push(Span::styled(value, fg(Token::Primary).bold()));
        x += buf.write_line(x, row.y, &chip, row.right() - x, theme) + 3;
    }
}

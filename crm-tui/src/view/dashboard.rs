use crm_lib::DashboardSummary;
use crm_ui::{Buffer, Color, Rect, Style, Theme, Token};

use super::{Hits, draw_box, draw_heading, draw_page_table, fg};
use crate::app::{App, Section};

const CARD_HEIGHT: u16 = 4;
const CARD_GAP: u16 = 2;
const CHART_MIN_WIDTH: u16 = 30;

pub(super) fn draw(app: &App, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let heading = match app.session() {
        Some(session) => format!("Welcome back, {}", session.user.name),
        None => Section::Dashboard.heading().to_string(),
    };
    let area = draw_heading(buf, area, &heading, Section::Dashboard.subtitle(), theme);

    let summary = DashboardSummary::from_store(app.store());
    let (cards, rest) = area.split_top(CARD_HEIGHT + 1);
    draw_stats(&summary, buf, cards, theme);

    // Recent activities on the left, the chart placeholder beside them when there is room.
    let chart_width = if rest.width >= CHART_MIN_WIDTH * 3 { rest.width / 3 } else { 0 };
    let (table, chart) = rest.split_left(rest.width - chart_width);
    draw_page_table(app, buf, table.shrink(0, if chart_width > 0 { 2 } else { 0 }, 0, 0), theme, hits);
    if chart_width > 0 {
        draw_chart_placeholder(buf, chart, theme);
    }
}

fn draw_stats(summary: &DashboardSummary, buf: &mut Buffer, area: Rect, theme: &Theme) {
    let stats = summary.stats();
    let count = stats.len() as u16;
    let width = area.width.saturating_sub(CARD_GAP * (count - 1)) / count;
    if width < 8 {
        return;
    }
    for (i, stat) in stats.iter().enumerate() {
        let card = Rect::new(area.x + i as u16 * (width + CARD_GAP), area.y, width, CARD_HEIGHT);
        buf.fill(card, Color::token(Token::Surface), theme);
        draw_box(buf, card, None, theme);
        let inner = card.shrink(1, 2, 1, 2);
        buf.write_str(inner.x, inner.y, stat.label, fg(Token::Muted), inner.width, theme);
        buf.write_str(
            inner.x,
            inner.y + 1,
            &stat.value.to_string(),
            Style::new().foreground(Color::tone(stat.tone)).bold(),
            inner.width,
            theme,
        );
    }
}

fn draw_chart_placeholder(buf: &mut Buffer, area: Rect, theme: &Theme) {
    buf.fill(area, Color::token(Token::Surface), theme);
    draw_box(buf, area, Some("Sales Performance"), theme);
    let inner = area.inset(2);
    if inner.is_empty() {
        return;
    }
    let message = "Sales Performance Chart Placeholder";
    let y = inner.y + inner.height / 2;
    let x = inner.x + inner.width.saturating_sub(message.len() as u16) / 2;
    buf.write_str(x, y, message, fg(Token::Muted), inner.right() - x, theme);
}

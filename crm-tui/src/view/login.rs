use crm_lib::Form;
use crm_ui::{Buffer, Color, Rect, Theme, Token};

use super::form::draw_fields;
use super::{BRAND, Hits, draw_box, fg, heading_style, hint_line};
use crate::app::FormScreen;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 17;

pub(super) fn draw(form: &FormScreen, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let card = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    buf.fill(card, Color::token(Token::Surface), theme);
    draw_box(buf, card, None, theme);

    let inner = card.shrink(1, 3, 1, 3);
    buf.write_str(inner.x, inner.y, BRAND, fg(Token::Primary).bold(), inner.width, theme);
    buf.write_str(inner.x, inner.y + 2, form.kind.form().title(), heading_style(), inner.width, theme);
    buf.write_str(
        inner.x,
        inner.y + 3,
        "Sign in to manage your customers and pipeline.",
        fg(Token::Muted),
        inner.width,
        theme,
    );

    let (_, fields) = inner.split_top(5);
    let (fields, footer) = fields.split_top(fields.height.saturating_sub(1));
    draw_fields(form, buf, fields, 16, theme, hits);
    buf.write_line(
        footer.x,
        footer.y,
        &hint_line(&[("Enter", "sign in"), ("Space", "toggle"), ("Ctrl-Q", "quit")]),
        footer.width,
        theme,
    );
}

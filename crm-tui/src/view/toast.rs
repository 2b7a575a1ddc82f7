use crm_ui::{Buffer, Color, Line, Rect, Span, Style, Theme, Token};

use super::fg;
use crate::app::Toasts;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Stack toasts down from the top-right corner, newest at the top.
pub(super) fn draw(toasts: &Toasts, buf: &mut Buffer, area: Rect, theme: &Theme) {
    let width = TOAST_WIDTH.min(area.width);
    if width < 6 {
        return;
    }
    let x = area.right() - width - if area.width > width { 1 } else { 0 };
    let mut y = area.y + 1;

    for toast in toasts.iter().rev() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let tone = Style::new().foreground(Color::tone(toast.notice.status.tone()));
        buf.fill(rect, Color::token(Token::Surface), theme);
        buf.fill_char(Rect::new(x, y, 1, TOAST_HEIGHT), '▌', tone, theme);

        let inner = rect.shrink(0, 1, 0, 2);
        let title = Line::styled(toast.notice.title.as_str(), tone.bold());
        buf.write_line(inner.x, inner.y, &title.truncate(inner.width as usize), inner.width, theme);
        let description = Line::default().push(Span::styled(toast.notice.description.as_str(), fg(Token::Text)));
        buf.write_line(
            inner.x,
            inner.y + 1,
            &description.truncate(inner.width as usize),
            inner.width,
            theme,
        );
        y += TOAST_HEIGHT + 1;
    }
}

use crm_lib::{FieldKind, FieldSpec, Form, Store};
use crm_ui::{Buffer, Color, Line, Rect, Span, Theme, Token, Tone};

use super::{Hits, draw_heading, fg};
use crate::app::{App, FormScreen};

const LABEL_WIDTH: u16 = 28;
const VALUE_WIDTH: u16 = 44;
/// A field row plus a row for its error.
const ROWS_PER_FIELD: u16 = 2;

pub(super) fn draw(app: &App, form: &FormScreen, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let area = draw_heading(
        buf,
        area,
        form.kind.form().title(),
        "Fields marked * are required.",
        theme,
    );
    draw_fields_with(form, Some(app.store()), buf, area, LABEL_WIDTH, theme, hits);
}

/// Draw every field of `form` that fits, scrolled to keep the focused one visible.
pub(super) fn draw_fields(form: &FormScreen, buf: &mut Buffer, area: Rect, label_width: u16, theme: &Theme, hits: &mut Hits) {
    draw_fields_with(form, None, buf, area, label_width, theme, hits);
}

fn draw_fields_with(
    form: &FormScreen,
    store: Option<&Store>,
    buf: &mut Buffer,
    area: Rect,
    label_width: u16,
    theme: &Theme,
    hits: &mut Hits,
) {
    let fields = form.kind.form().fields();
    let visible = (area.height / ROWS_PER_FIELD).max(1) as usize;
    let first = (form.field + 1).saturating_sub(visible);

    for (slot, (index, spec)) in fields.iter().enumerate().skip(first).take(visible).enumerate() {
        let y = area.y + slot as u16 * ROWS_PER_FIELD;
        let row = Rect::new(area.x, y, area.width, 1);
        let focused = index == form.field;

        let marker = if spec.required { " *" } else { "" };
        let label_style = if focused { fg(Token::Primary).bold() } else { fg(Token::Text) };
        let label = Line::styled(spec.label, label_style).push(Span::styled(marker, fg(Token::Tone(Tone::Red))));
        buf.write_line(row.x, y, &label, label_width.min(row.width), theme);

        let value_x = row.x + label_width.min(row.width);
        let value_rect = Rect::new(value_x, y, VALUE_WIDTH.min(row.right().saturating_sub(value_x)), 1);
        let background = if focused { Token::Selected } else { Token::Surface };
        buf.fill(value_rect, Color::token(background), theme);
        let value = field_value(form, spec, store, focused);
        buf.write_line(value_rect.x + 1, y, &value, value_rect.width.saturating_sub(2), theme);
        hits.fields.push((index, Rect::new(row.x, y, value_rect.right() - row.x, 1)));

        if let Some(error) = form.error(spec.name) {
            buf.write_str(
                value_x + 1,
                y + 1,
                error,
                fg(Token::Tone(Tone::Red)),
                row.right().saturating_sub(value_x + 1),
                theme,
            );
        }
    }
}

/// Shipping fields are read-only while they copy billing.
fn is_locked(form: &dyn Form, spec: &FieldSpec) -> bool {
    spec.name.starts_with("shipping.") && form.flag("copy_billing") == Some(true)
}

fn field_value(form: &FormScreen, spec: &FieldSpec, store: Option<&Store>, focused: bool) -> Line {
    let editor = form.kind.form();
    let text = editor.value(spec.name).unwrap_or_default();
    let cursor = if focused { "▏" } else { "" };
    let muted = fg(Token::Muted);
    let normal = fg(Token::Text);

    match spec.kind {
        FieldKind::Toggle => {
            let on = editor.flag(spec.name).unwrap_or(false);
            Line::styled(if on { "[x] Yes" } else { "[ ] No" }, normal)
        }
        _ if is_locked(editor, spec) => Line::styled(text, muted),
        FieldKind::Secret => Line::styled(format!("{}{cursor}", "•".repeat(text.chars().count())), normal),
        FieldKind::Choice(_) if text.is_empty() => Line::styled("‹ Select... ›", muted),
        FieldKind::Choice(_) => Line::styled(format!("‹ {text} ›"), normal),
        FieldKind::AccountRef => {
            let name = store
                .and_then(|store| store.account(text).ok())
                .map_or_else(|| "None".to_string(), |account| account.name.clone());
            let style = if text.is_empty() { muted } else { normal };
            Line::styled(format!("‹ {name} ›"), style)
        }
        FieldKind::Text | FieldKind::TextArea => Line::styled(format!("{text}{cursor}"), normal),
    }
}

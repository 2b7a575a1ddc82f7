use crm_lib::{Account, Choice, Contact, Lead, User};
use crm_ui::{Buffer, Line, Rect, Theme, Token};

use super::{Hits, draw_box, draw_heading, draw_page_table, fg, heading_style, record_title};
use crate::app::{App, DetailScreen, Focus, Record};
use crate::columns::{format_date, format_datetime, format_inr};

const LABEL_WIDTH: u16 = 17;

type Fields = Vec<(&'static str, Line)>;

fn text(value: impl Into<String>) -> Line {
    let value = value.into();
    if value.trim().is_empty() {
        Line::styled("-", fg(Token::Muted))
    } else {
        Line::styled(value, fg(Token::Text))
    }
}

fn optional(value: Option<impl ToString>) -> Line {
    value.map_or_else(|| text(""), |v| text(v.to_string()))
}

fn badge<C: Choice>(choice: C) -> Line {
    Line::badge(choice.label(), choice.tone())
}

fn account_fields(account: &Account) -> (String, Fields) {
    let subtitle = format!("{} · {}", account.industry, account.account_type.label());
    let fields = vec![
        ("Industry", text(account.industry.as_str())),
        ("Type", badge(account.account_type)),
        ("Phone", text(account.phone.as_str())),
        ("Website", optional(account.website.as_ref())),
        ("Annual Revenue", optional(account.revenue.map(format_inr))),
        ("Employees", optional(account.employees)),
        (
            "Primary Contact",
            optional(account.primary_contact.as_ref().map(|c| match &c.title {
                Some(title) => format!("{} ({})", c.name, title),
                None => c.name.clone(),
            })),
        ),
        ("Last Activity", optional(account.last_activity.map(format_date))),
        ("Billing Address", optional(account.billing_address.as_ref())),
        ("Shipping Address", optional(account.shipping_address.as_ref())),
        ("Created", text(format_date(account.created.date_naive()))),
        ("Description", optional(account.description.as_ref())),
    ];
    (subtitle, fields)
}

fn contact_fields(contact: &Contact) -> (String, Fields) {
    let subtitle = if contact.company.is_empty() {
        contact.role.clone()
    } else {
        format!("{} at {}", contact.role, contact.company)
    };
    let fields = vec![
        ("Email", text(contact.email.as_str())),
        ("Phone", text(contact.phone.as_str())),
        ("Mobile", optional(contact.mobile.as_ref())),
        ("Company", text(contact.company.as_str())),
        ("Job Title", text(contact.role.as_str())),
        ("Department", optional(contact.department.as_ref())),
        ("Address", optional(contact.address.as_ref())),
        ("Created", text(format_date(contact.created_date))),
        ("Last Activity", optional(contact.last_activity.map(format_date))),
        ("Description", optional(contact.description.as_ref())),
    ];
    (subtitle, fields)
}

fn lead_fields(lead: &Lead) -> (String, Fields) {
    let fields = vec![
        ("Company", text(lead.company.as_str())),
        ("Status", badge(lead.status)),
        ("Potential Value", optional(lead.potential_value.map(format_inr))),
        ("Contact Person", optional(lead.contact_person.as_ref())),
        ("Email", text(lead.email.as_str())),
        ("Phone", text(lead.phone.as_str())),
        ("Assigned To", text(lead.assigned_to.as_str())),
        ("Created", text(format_date(lead.created_date))),
        ("Notes", optional(lead.notes.as_ref())),
    ];
    (lead.company.clone(), fields)
}

fn user_fields(user: &User) -> (String, Fields) {
    let fields = vec![
        ("Email", text(user.email.as_str())),
        ("Role", badge(user.role)),
        ("Status", badge(user.status)),
        ("Last Login", optional(user.last_login.map(format_datetime))),
    ];
    (user.role.label().to_string(), fields)
}

pub(super) fn draw(app: &App, detail: &DetailScreen, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let store = app.store();
    let found = match &detail.record {
        Record::Account(id) => store.account(id).map(account_fields),
        Record::Contact(id) => store.contact(id).map(contact_fields),
        Record::Lead(id) => store.lead(id).map(lead_fields),
        Record::User(id) => store.user(id).map(user_fields),
    };
    let title = record_title(app, &detail.record);
    let (subtitle, fields) = match found {
        Ok(found) => found,
        Err(e) => {
            draw_heading(buf, area, &title, &e.to_string(), theme);
            return;
        }
    };

    let area = draw_heading(buf, area, &title, &subtitle, theme);
    let rows = fields.len().div_ceil(2) as u16;
    let (info, rest) = area.split_top(rows + 2);
    draw_box(buf, info, Some("Details"), theme);
    draw_fields(&fields, buf, info.inset(1).shrink(0, 1, 0, 1), theme);

    let tabs = detail.record.tabs();
    if tabs.is_empty() {
        return;
    }
    let (bar, rest) = rest.shrink(1, 0, 0, 0).split_top(2);
    let mut x = bar.x;
    for (i, tab) in tabs.iter().enumerate() {
        if x >= bar.right() {
            break;
        }
        let label = format!(" {tab} ");
        let active = i == detail.tab;
        let style = if active { heading_style().underline() } else { fg(Token::Muted) };
        let width = buf.write_str(x, bar.y, &label, style, bar.right() - x, theme);
        hits.tabs.push((i, Rect::new(x, bar.y, width, 1)));
        x += width + 1;
    }
    if app.focus() == Focus::Table && x < bar.right() {
        buf.write_str(x + 1, bar.y, "[ ] switch", fg(Token::Muted), bar.right() - x - 1, theme);
    }
    draw_page_table(app, buf, rest, theme, hits);
}

/// Label/value pairs in two columns.
fn draw_fields(fields: &[(&str, Line)], buf: &mut Buffer, area: Rect, theme: &Theme) {
    let column_width = area.width / 2;
    for (i, (label, value)) in fields.iter().enumerate() {
        let row = (i / 2) as u16;
        if row >= area.height {
            break;
        }
        let x = area.x + (i % 2) as u16 * column_width;
        let y = area.y + row;
        let line = Line::styled(format!("{label:<width$}", width = LABEL_WIDTH as usize), fg(Token::Muted));
        let written = buf.write_line(x, y, &line, column_width, theme);
        buf.write_line(x + written, y, value, column_width.saturating_sub(written + 1), theme);
    }
}

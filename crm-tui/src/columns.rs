//! Column definitions for every record table.

use chrono::{DateTime, NaiveDate, Utc};
use crm_lib::{Account, Activity, Choice, Contact, Lead, RelatedKind, User};
use crm_table::Column;
use crm_ui::{Color, Line, Span, Style, Token};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const PLACEHOLDER: &str = "-";

fn muted(text: impl Into<String>) -> Line {
    Line::styled(text, Style::new().foreground(Color::token(Token::Muted)))
}

fn strong(text: impl Into<String>) -> Line {
    Line::styled(text, Style::new().foreground(Color::token(Token::Heading)).bold())
}

fn badge<C: Choice>(choice: C) -> Line {
    Line::badge(choice.label(), choice.tone())
}

/// `Oct 15, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `Oct 15, 2025 14:30`, in UTC.
pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

fn optional_date(date: Option<NaiveDate>) -> Line {
    date.map_or_else(|| muted(PLACEHOLDER), |d| Line::raw(format_date(d)))
}

/// Rupees with Indian digit grouping, rounded to whole units: `₹1,00,000`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round().to_i128().unwrap_or_default();
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };
    format!("{sign}₹{grouped}")
}

fn optional_money(amount: Option<Decimal>) -> Line {
    amount.map_or_else(|| muted(PLACEHOLDER), |a| Line::raw(format_inr(a)))
}

pub fn accounts() -> Vec<Column<Account>> {
    vec![
        Column::new("name", "Account Name")
            .flex(3)
            .cell(|a: &Account, _| strong(a.name.as_str())),
        Column::new("industry", "Industry").flex(2),
        Column::new("type", "Type")
            .fixed(12)
            .cell(|a: &Account, _| badge(a.account_type)),
        Column::new("primaryContact.name", "Primary Contact")
            .flex(2)
            .cell(|a: &Account, _| match &a.primary_contact {
                Some(contact) => Line::raw(contact.name.as_str()),
                None => muted(PLACEHOLDER),
            }),
        Column::new("phone", "Phone").flex(2),
        Column::new("lastActivity", "Last Activity")
            .fixed(14)
            .cell(|a: &Account, _| optional_date(a.last_activity)),
    ]
}

pub fn contacts() -> Vec<Column<Contact>> {
    vec![
        Column::new("name", "Name")
            .flex(2)
            .cell(|c: &Contact, _| strong(c.name.as_str())),
        Column::new("email", "Email").flex(3),
        Column::new("phone", "Phone").flex(2),
        Column::new("company", "Company").flex(2),
        Column::new("role", "Role").flex(2),
    ]
}

pub fn leads() -> Vec<Column<Lead>> {
    vec![
        Column::new("name", "Lead Name")
            .flex(3)
            .cell(|l: &Lead, _| strong(l.name.as_str())),
        Column::new("company", "Company").flex(2),
        Column::new("status", "Status")
            .fixed(16)
            .cell(|l: &Lead, _| badge(l.status)),
        Column::new("potentialValue", "Value")
            .numeric()
            .fixed(12)
            .cell(|l: &Lead, _| optional_money(l.potential_value)),
        Column::new("assignedTo", "Assigned To").flex(2),
        Column::new("createdDate", "Created")
            .fixed(14)
            .cell(|l: &Lead, _| Line::raw(format_date(l.created_date))),
    ]
}

fn related(activity: &Activity) -> Line {
    let kind = match activity.related_to.kind {
        RelatedKind::Account => "Account",
        RelatedKind::Contact => "Contact",
        RelatedKind::Lead => "Lead",
    };
    muted(format!("{kind}: ")).push(Span::raw(activity.related_to.name.as_str()))
}

fn activity_kind(activity: &Activity) -> Line {
    Line::raw(format!("{} {}", activity.kind.icon(), activity.kind.label()))
}

pub fn activities() -> Vec<Column<Activity>> {
    vec![
        Column::new("type", "Type").fixed(10).cell(|a: &Activity, _| activity_kind(a)),
        Column::new("subject", "Subject")
            .flex(3)
            .cell(|a: &Activity, _| strong(a.subject.as_str())),
        Column::new("relatedTo.name", "Related To")
            .flex(3)
            .cell(|a: &Activity, _| related(a)),
        Column::new("dueDate", "Due Date")
            .fixed(19)
            .cell(|a: &Activity, _| Line::raw(format_datetime(a.due_date))),
        Column::new("status", "Status")
            .fixed(11)
            .cell(|a: &Activity, _| badge(a.status)),
        Column::new("priority", "Priority")
            .fixed(10)
            .cell(|a: &Activity, _| badge(a.priority)),
        Column::new("assignedTo", "Assigned To").flex(2),
    ]
}

/// The shorter activity table on the dashboard.
pub fn recent_activities() -> Vec<Column<Activity>> {
    vec![
        Column::new("type", "Type").fixed(10).cell(|a: &Activity, _| activity_kind(a)),
        Column::new("subject", "Subject").flex(3),
        Column::new("relatedTo.name", "Related To")
            .flex(2)
            .cell(|a: &Activity, _| related(a)),
        Column::new("dueDate", "Due")
            .fixed(19)
            .cell(|a: &Activity, _| Line::raw(format_datetime(a.due_date))),
    ]
}

pub fn users() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").flex(3).cell(|u: &User, _| {
            muted(format!("({}) ", u.initials())).push(Span::styled(
                u.name.as_str(),
                Style::new().foreground(Color::token(Token::Heading)).bold(),
            ))
        }),
        Column::new("email", "Email").flex(3),
        Column::new("role", "Role").flex(2).cell(|u: &User, _| badge(u.role)),
        Column::new("status", "Status")
            .fixed(10)
            .cell(|u: &User, _| badge(u.status)),
        Column::new("lastLogin", "Last Login")
            .fixed(19)
            .cell(|u: &User, _| match u.last_login {
                Some(at) => Line::raw(format_datetime(at)),
                None => muted("Never"),
            }),
    ]
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_format_inr_groups_indian_style() {
        let inr = |s: &str| format_inr(Decimal::from_str(s).unwrap());
        assert_eq!(inr("0"), "₹0");
        assert_eq!(inr("950"), "₹950");
        assert_eq!(inr("5000"), "₹5,000");
        assert_eq!(inr("75000"), "₹75,000");
        assert_eq!(inr("100000"), "₹1,00,000");
        assert_eq!(inr("12345678.6"), "₹1,23,45,679");
        assert_eq!(inr("-2500"), "-₹2,500");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        assert_eq!(format_date(date), "Oct 05, 2025");
    }
}

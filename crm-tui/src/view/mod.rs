//! Painting the application into a cell buffer.
//!
//! Views read the [`App`] and return the clickable regions they drew, which
//! the app keeps for mouse handling until the next frame.

mod dashboard;
mod detail;
mod form;
mod list;
mod login;
mod toast;

use crm_table::{DrawState, DrawnTable, draw, scroll_offset_for};
use crm_ui::{Buffer, Color, Line, Rect, Span, Style, Theme, Token};

use crate::app::{App, Focus, Record, Screen, Section};

const SIDEBAR_WIDTH: u16 = 24;
const BRAND: &str = "◆ CRM Desk";

/// Clickable regions of one frame.
#[derive(Debug, Clone, Default)]
pub struct Hits {
    pub sidebar: Vec<(Section, Rect)>,
    /// Detail tabs, by index.
    pub tabs: Vec<(usize, Rect)>,
    /// Form fields, by index.
    pub fields: Vec<(usize, Rect)>,
    pub search: Option<Rect>,
    pub table: DrawnTable,
    /// Scroll offset the table was drawn with.
    pub table_offset: usize,
}

pub(crate) fn fg(token: Token) -> Style {
    Style::new().foreground(Color::token(token))
}

pub(crate) fn heading_style() -> Style {
    fg(Token::Heading).bold()
}

/// Paint the whole screen.
pub fn render(app: &App, buf: &mut Buffer) -> Hits {
    let theme = *app.theme();
    let area = buf.area();
    buf.fill(area, Color::token(Token::Background), &theme);
    let mut hits = Hits::default();

    match app.screen() {
        Screen::Login(form) => login::draw(form, buf, area, &theme, &mut hits),
        screen => {
            let (sidebar, main) = area.split_left(SIDEBAR_WIDTH.min(area.width));
            draw_sidebar(app, buf, sidebar, &theme, &mut hits);
            let body = draw_header(app, buf, main.shrink(0, 1, 0, 2), &theme);
            let (body, hints) = body.split_top(body.height.saturating_sub(1));
            draw_hints(screen, buf, hints, &theme);
            match screen {
                Screen::Dashboard(_) => dashboard::draw(app, buf, body, &theme, &mut hits),
                Screen::List(list) => list::draw(app, list, buf, body, &theme, &mut hits),
                Screen::Detail(detail) => detail::draw(app, detail, buf, body, &theme, &mut hits),
                Screen::Create(form) => form::draw(app, form, buf, body, &theme, &mut hits),
                Screen::Login(_) => {}
            }
        }
    }

    toast::draw(app.toasts(), buf, area, &theme);
    hits
}

fn draw_sidebar(app: &App, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    if area.width < 4 {
        return;
    }
    buf.fill(area, Color::token(Token::Surface), theme);
    let border_x = area.right() - 1;
    buf.fill_char(Rect::new(border_x, area.y, 1, area.height), '│', fg(Token::Border), theme);
    let inner = Rect::new(area.x, area.y, area.width - 1, area.height);

    buf.write_str(inner.x + 2, inner.y + 1, BRAND, fg(Token::Primary).bold(), inner.width - 2, theme);

    let current = app.screen().section();
    let focused = app.focus() == Focus::Sidebar;
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let y = inner.y + 3 + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let active = current == Some(section);
        if active {
            buf.fill(row, Color::token(Token::Selected), theme);
        }
        let marker = if focused && app.sidebar_cursor() == i { '›' } else { ' ' };
        let style = if active { fg(Token::Primary).bold() } else { fg(Token::Text) };
        let line = Line::styled(format!("{marker} {} {}", section.glyph(), section.label()), style);
        buf.write_line(row.x + 1, y, &line, row.width - 1, theme);
        hits.sidebar.push((section, row));
    }

    if inner.height < 12 {
        return;
    }
    let footer = inner.bottom() - 3;
    match app.session() {
        Some(session) => {
            let user = &session.user;
            let line = Line::styled(format!("({}) ", user.initials()), fg(Token::Primary).bold())
                .push(Span::styled(user.name.as_str(), fg(Token::Heading)));
            buf.write_line(inner.x + 2, footer, &line, inner.width - 2, theme);
            buf.write_str(inner.x + 2, footer + 1, user.email.as_str(), fg(Token::Muted), inner.width - 2, theme);
        }
        None => {
            buf.write_str(inner.x + 2, footer, "Guest", fg(Token::Muted), inner.width - 2, theme);
        }
    }
}

/// Title of a record for breadcrumbs and headings.
pub(crate) fn record_title(app: &App, record: &Record) -> String {
    let store = app.store();
    let name = match record {
        Record::Account(id) => store.account(id).map(|a| a.name.clone()),
        Record::Contact(id) => store.contact(id).map(|c| c.name.clone()),
        Record::Lead(id) => store.lead(id).map(|l| l.name.clone()),
        Record::User(id) => store.user(id).map(|u| u.name.clone()),
    };
    name.unwrap_or_else(|_| record.id().to_string())
}

fn breadcrumb(app: &App) -> Vec<String> {
    let mut trail = vec![Section::Dashboard.label().to_string()];
    match app.screen() {
        Screen::Login(_) | Screen::Dashboard(_) => {}
        Screen::List(list) => trail.push(list.section.label().to_string()),
        Screen::Detail(detail) => {
            trail.push(detail.record.section().label().to_string());
            trail.push(record_title(app, &detail.record));
        }
        Screen::Create(form) => {
            if let Some(section) = form.kind.section() {
                trail.push(section.label().to_string());
            }
            trail.push("New".to_string());
        }
    }
    trail
}

/// Breadcrumb line and divider. Returns the area below.
fn draw_header(app: &App, buf: &mut Buffer, area: Rect, theme: &Theme) -> Rect {
    let (top, rest) = area.split_top(2);
    let trail = breadcrumb(app);
    let mut line = Line::default();
    for (i, part) in trail.iter().enumerate() {
        if i > 0 {
            line = line.push(Span::styled(" › ", fg(Token::Border)));
        }
        let style = if i + 1 == trail.len() { fg(Token::Text) } else { fg(Token::Muted) };
        line = line.push(Span::styled(part.as_str(), style));
    }
    buf.write_line(top.x, top.y, &line, top.width, theme);
    if top.height > 1 {
        buf.fill_char(top.row(1), '─', fg(Token::Border), theme);
    }
    rest.shrink(1, 0, 0, 0)
}

fn draw_hints(screen: &Screen, buf: &mut Buffer, area: Rect, theme: &Theme) {
    let hints: &[(&str, &str)] = match screen {
        Screen::List(list) if list.section.can_create() => &[
            ("Tab", "focus"),
            ("/", "search"),
            ("f/F", "filter"),
            ("Enter", "open"),
            ("n", "new"),
            ("Esc", "back"),
            ("Ctrl-Q", "quit"),
        ],
        Screen::List(_) => &[
            ("Tab", "focus"),
            ("/", "search"),
            ("f/F", "filter"),
            ("Enter", "open"),
            ("Esc", "back"),
            ("Ctrl-Q", "quit"),
        ],
        Screen::Detail(detail) if matches!(detail.record, Record::User(_)) => {
            &[("s", "activate/deactivate"), ("Esc", "back"), ("Ctrl-Q", "quit")]
        }
        Screen::Detail(_) => &[
            ("[ ]", "tabs"),
            ("Enter", "open"),
            ("Esc", "back"),
            ("Ctrl-Q", "quit"),
        ],
        Screen::Create(_) => &[
            ("↑/↓", "field"),
            ("←/→", "option"),
            ("Space", "toggle"),
            ("Enter", "submit"),
            ("Esc", "cancel"),
        ],
        Screen::Dashboard(_) | Screen::Login(_) => {
            &[("Tab", "focus"), ("Enter", "open"), ("Ctrl-L", "sign out"), ("Ctrl-Q", "quit")]
        }
    };
    buf.write_line(area.x, area.y, &hint_line(hints), area.width, theme);
}

pub(crate) fn hint_line(hints: &[(&str, &str)]) -> Line {
    let mut line = Line::default();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            line = line.push(Span::styled("  ", fg(Token::Muted)));
        }
        line = line
            .push(Span::styled(*key, fg(Token::Primary).bold()))
            .push(Span::styled(format!(" {action}"), fg(Token::Muted)));
    }
    line
}

/// Heading and subtitle. Returns the area below.
pub(crate) fn draw_heading(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    subtitle: &str,
    theme: &Theme,
) -> Rect {
    let (top, rest) = area.split_top(3);
    buf.write_str(top.x, top.y, title, heading_style(), top.width, theme);
    if top.height > 1 {
        buf.write_str(top.x, top.y + 1, subtitle, fg(Token::Muted), top.width, theme);
    }
    rest
}

/// Rounded frame around `area`, with an optional title in the top edge.
pub(crate) fn draw_box(buf: &mut Buffer, area: Rect, title: Option<&str>, theme: &Theme) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let border = fg(Token::Border);
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    buf.fill_char(Rect::new(area.x, area.y, area.width, 1), '─', border, theme);
    buf.fill_char(Rect::new(area.x, bottom, area.width, 1), '─', border, theme);
    buf.fill_char(Rect::new(area.x, area.y, 1, area.height), '│', border, theme);
    buf.fill_char(Rect::new(right, area.y, 1, area.height), '│', border, theme);
    buf.write_str(area.x, area.y, "╭", border, 1, theme);
    buf.write_str(right, area.y, "╮", border, 1, theme);
    buf.write_str(area.x, bottom, "╰", border, 1, theme);
    buf.write_str(right, bottom, "╯", border, 1, theme);
    if let Some(title) = title {
        buf.write_str(area.x + 2, area.y, &format!(" {title} "), heading_style(), area.width.saturating_sub(4), theme);
    }
}

/// Draw the current page table into `area`.
pub(crate) fn draw_page_table(app: &App, buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Hits) {
    let Some(table) = app.page_table() else { return };
    let loading = app.screen().is_loading();
    let view = table.view(loading, app.config().loading_row_count);

    let state = app.screen().table_state().copied().unwrap_or_default();
    let len = if loading { 0 } else { table.len() };
    let selected = state.selected.filter(|index| *index < len);
    let viewport = match app.hits().table.viewport_rows {
        0 => area.height as usize,
        rows => rows,
    };
    let offset = scroll_offset_for(selected, state.offset.min(len), viewport);

    let draw_state = DrawState { selected, offset };
    hits.table = draw(&view, buf, area, theme, &draw_state);
    hits.table_offset = offset;
}

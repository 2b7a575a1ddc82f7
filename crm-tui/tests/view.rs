use std::time::Instant;

use crm_lib::Store;
use crm_tui::app::{Record, Screen};
use crm_tui::{App, Config};
use crm_ui::{Buffer, Event, Key};

const WIDTH: u16 = 160;
const HEIGHT: u16 = 40;

fn app_with(start_page: &str, loading_delay_ms: u64) -> (App, Instant) {
    let config = Config {
        start_page: start_page.to_string(),
        loading_delay_ms,
        ..Config::default()
    };
    let now = Instant::now();
    (App::new(config, Store::seeded(), now).unwrap(), now)
}

fn render(app: &mut App) -> String {
    let mut buf = Buffer::new(WIDTH, HEIGHT);
    app.render(&mut buf);
    (0..HEIGHT).map(|y| buf.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_login_card() {
    let (mut app, _) = app_with("login", 0);
    let screen = render(&mut app);
    assert!(screen.contains("Sign In"));
    assert!(screen.contains("Email Address"));
    assert!(screen.contains("Remember me"));
}

#[test]
fn test_dashboard_after_sign_in() {
    let (mut app, now) = app_with("login", 0);
    for c in "priya.patel@example.com".chars() {
        app.handle_event(Event::key(Key::Char(c)), now);
    }
    app.handle_event(Event::key(Key::Tab), now);
    app.handle_event(Event::key(Key::Char('x')), now);
    app.handle_event(Event::key(Key::Enter), now);

    let screen = render(&mut app);
    assert!(screen.contains("Welcome back, Priya Patel"));
    assert!(screen.contains("Active Leads"));
    assert!(screen.contains("Recent Activities"));
    assert!(screen.contains("Sales Performance Chart Placeholder"));
    assert!(screen.contains("Signed In"));
}

#[test]
fn test_list_hides_rows_while_loading() {
    let (mut app, _) = app_with("accounts", 600);
    let screen = render(&mut app);
    assert!(screen.contains("Accounts"));
    assert!(!screen.contains("Innovatech Solutions Ltd."));
    assert!(app.hits().table.rows.is_empty());
}

#[test]
fn test_clicking_a_row_opens_the_record() {
    let (mut app, now) = app_with("accounts", 0);
    let screen = render(&mut app);
    assert!(screen.contains("Innovatech Solutions Ltd."));
    assert!(screen.contains("All Industries"));

    let (index, rect) = app.hits().table.rows[1];
    assert_eq!(index, 1);
    app.handle_event(Event::click(rect.x + 1, rect.y), now);
    match app.screen() {
        Screen::Detail(detail) => assert_eq!(detail.record, Record::Account("acc_002".to_string())),
        _ => panic!("expected a detail page"),
    }

    let screen = render(&mut app);
    assert!(screen.contains("GreenHarvest AgriCorp"));
    assert!(screen.contains("Details"));
}

#[test]
fn test_clicking_a_tab_switches_it() {
    let (mut app, now) = app_with("accounts", 0);
    app.open_record(Record::Account("acc_001".to_string()), now);
    render(&mut app);

    let (index, rect) = app.hits().tabs[2];
    assert_eq!(index, 2);
    app.handle_event(Event::click(rect.x, rect.y), now);
    match app.screen() {
        Screen::Detail(detail) => assert_eq!(detail.tab, 2),
        _ => panic!("expected a detail page"),
    }
    assert_eq!(app.page_table().unwrap().len(), 4);
}

#[test]
fn test_filtered_empty_state() {
    let (mut app, now) = app_with("contacts", 0);
    app.handle_event(Event::key(Key::Char('/')), now);
    for c in "zzz".chars() {
        app.handle_event(Event::key(Key::Char(c)), now);
    }
    let screen = render(&mut app);
    assert!(screen.contains("No contacts match your filters"));
    assert!(app.hits().table.rows.is_empty());
}

#[test]
fn test_validation_errors_are_drawn() {
    let (mut app, now) = app_with("users", 0);
    app.handle_event(Event::key(Key::Char('n')), now);
    app.handle_event(Event::key(Key::Enter), now);
    let screen = render(&mut app);
    assert!(screen.contains("Add New User"));
    assert!(screen.contains("Validation Error"));
}

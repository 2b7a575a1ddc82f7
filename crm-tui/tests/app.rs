use std::time::{Duration, Instant};

use crm_lib::{Store, UserStatus};
use crm_tui::app::{Focus, FormKind, Record, Screen, Section};
use crm_tui::{App, Config};
use crm_ui::{Event, Key};

fn app_with(start_page: &str, loading_delay_ms: u64) -> (App, Instant) {
    let config = Config {
        start_page: start_page.to_string(),
        loading_delay_ms,
        ..Config::default()
    };
    let now = Instant::now();
    (App::new(config, Store::seeded(), now).unwrap(), now)
}

fn press(app: &mut App, key: Key, now: Instant) {
    app.handle_event(Event::key(key), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, Key::Char(c), now);
    }
}

fn sign_in(app: &mut App, email: &str, now: Instant) {
    type_text(app, email, now);
    press(app, Key::Tab, now);
    type_text(app, "secret", now);
    press(app, Key::Enter, now);
}

fn detail_record(app: &App) -> Option<&Record> {
    match app.screen() {
        Screen::Detail(detail) => Some(&detail.record),
        _ => None,
    }
}

#[test]
fn test_starts_on_login() {
    let (app, _) = app_with("login", 600);
    assert!(matches!(app.screen(), Screen::Login(_)));
    assert!(app.session().is_none());
    assert!(app.next_deadline().is_none());
}

#[test]
fn test_sign_in_opens_dashboard() {
    let (mut app, now) = app_with("login", 600);
    sign_in(&mut app, "priya.patel@example.com", now);

    assert!(matches!(app.screen(), Screen::Dashboard(_)));
    assert_eq!(app.session().unwrap().user.id, "usr_002");
    assert_eq!(app.toasts().titles(), vec!["Signed In"]);
    assert_eq!(app.history_len(), 0);
}

#[test]
fn test_empty_sign_in_shows_field_errors() {
    let (mut app, now) = app_with("login", 600);
    press(&mut app, Key::Tab, now);
    press(&mut app, Key::Enter, now);

    let Screen::Login(form) = app.screen() else {
        panic!("expected the login screen");
    };
    assert_eq!(form.error("email"), Some("Email is required."));
    assert_eq!(form.error("password"), Some("Password is required."));
    assert_eq!(form.field, 0);
    assert_eq!(app.toasts().titles(), vec!["Validation Error"]);
}

#[test]
fn test_inactive_user_cannot_sign_in() {
    let (mut app, now) = app_with("login", 600);
    sign_in(&mut app, "sneha.reddy@example.com", now);

    assert!(matches!(app.screen(), Screen::Login(_)));
    assert_eq!(app.toasts().titles(), vec!["Sign-in Failed"]);
}

#[test]
fn test_sign_out_and_quit() {
    let (mut app, now) = app_with("login", 600);
    sign_in(&mut app, "rohan.das@example.com", now);

    app.handle_event(Event::ctrl('l'), now);
    assert!(matches!(app.screen(), Screen::Login(_)));
    assert!(app.session().is_none());
    assert!(app.toasts().titles().contains(&"Signed Out"));

    assert!(!app.should_quit());
    app.handle_event(Event::ctrl('q'), now);
    assert!(app.should_quit());
}

#[test]
fn test_list_loads_after_delay() {
    let (mut app, now) = app_with("accounts", 600);
    assert!(app.screen().is_loading());
    assert_eq!(app.next_deadline(), Some(now + Duration::from_millis(600)));

    // Rows cannot be selected while loading.
    press(&mut app, Key::Down, now);
    assert_eq!(app.screen().table_state().unwrap().selected, None);

    assert!(!app.tick(now + Duration::from_millis(599)));
    assert!(app.screen().is_loading());
    assert!(app.tick(now + Duration::from_millis(600)));
    assert!(!app.screen().is_loading());
    assert!(app.next_deadline().is_none());
}

#[test]
fn test_zero_delay_skips_loading() {
    let (app, _) = app_with("leads", 0);
    assert!(!app.screen().is_loading());
    assert_eq!(app.page_table().unwrap().len(), 7);
}

#[test]
fn test_enter_opens_selected_row_and_esc_returns() {
    let (mut app, now) = app_with("accounts", 0);
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Enter, now);

    assert_eq!(detail_record(&app), Some(&Record::Account("acc_002".to_string())));
    assert_eq!(app.history_len(), 1);

    press(&mut app, Key::Escape, now);
    let Screen::List(list) = app.screen() else {
        panic!("expected the accounts list");
    };
    assert_eq!(list.section, Section::Accounts);
    assert_eq!(list.table.selected, Some(1));
}

#[test]
fn test_search_and_filters_narrow_the_table() {
    let (mut app, now) = app_with("accounts", 0);
    press(&mut app, Key::Char('/'), now);
    assert_eq!(app.focus(), Focus::Search);

    type_text(&mut app, "innova", now);
    assert_eq!(app.page_table().unwrap().len(), 1);

    // Filter keys are plain text while searching.
    press(&mut app, Key::Char('f'), now);
    let Screen::List(list) = app.screen() else {
        panic!("expected the accounts list");
    };
    assert_eq!(list.filter.search(), "innovaf");
    assert_eq!(app.page_table().unwrap().len(), 0);

    for _ in 0.."innovaf".len() {
        press(&mut app, Key::Backspace, now);
    }
    press(&mut app, Key::Enter, now);
    assert_eq!(app.focus(), Focus::Table);
    assert_eq!(app.page_table().unwrap().len(), 4);

    press(&mut app, Key::Char('f'), now);
    let Screen::List(list) = app.screen() else {
        panic!("expected the accounts list");
    };
    assert_eq!(list.filter.chips()[0].1, "Agriculture");
    assert_eq!(app.page_table().unwrap().len(), 1);
}

#[test]
fn test_tab_cycles_focus() {
    let (mut app, now) = app_with("leads", 0);
    assert_eq!(app.focus(), Focus::Table);
    press(&mut app, Key::Tab, now);
    assert_eq!(app.focus(), Focus::Sidebar);
    press(&mut app, Key::Tab, now);
    assert_eq!(app.focus(), Focus::Search);
    press(&mut app, Key::BackTab, now);
    assert_eq!(app.focus(), Focus::Sidebar);

    // Sidebar navigation
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Enter, now);
    assert_eq!(app.screen().section(), Some(Section::Contacts));
}

#[test]
fn test_activity_rows_open_related_record() {
    let (mut app, now) = app_with("activities", 0);
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Enter, now);
    let first = app.store().activities()[0].related_to.id.clone();
    assert_eq!(detail_record(&app).map(Record::id), Some(first.as_str()));
}

#[test]
fn test_detail_tabs_switch_tables() {
    let (mut app, now) = app_with("accounts", 0);
    app.open_record(Record::Account("acc_001".to_string()), now);
    assert_eq!(app.page_table().unwrap().len(), 3);

    press(&mut app, Key::Char(']'), now);
    assert_eq!(app.page_table().unwrap().len(), 2);
    press(&mut app, Key::Char(']'), now);
    assert_eq!(app.page_table().unwrap().len(), 4);
    press(&mut app, Key::Char(']'), now);
    let Screen::Detail(detail) = app.screen() else {
        panic!("expected a detail page");
    };
    assert_eq!(detail.tab, 0);

    // Opening a contact from the Contacts tab
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Enter, now);
    assert_eq!(detail_record(&app), Some(&Record::Contact("cont_001".to_string())));
    assert_eq!(app.history_len(), 2);
}

#[test]
fn test_unknown_record_shows_notice() {
    let (mut app, now) = app_with("leads", 0);
    app.open_record(Record::Lead("L404".to_string()), now);
    assert!(matches!(app.screen(), Screen::List(_)));
    assert_eq!(app.toasts().titles(), vec!["Not Found"]);
}

#[test]
fn test_toggle_user_status() {
    let (mut app, now) = app_with("users", 0);
    app.open_record(Record::User("usr_003".to_string()), now);
    press(&mut app, Key::Char('s'), now);

    assert_eq!(app.store().user("usr_003").unwrap().status, UserStatus::Inactive);
    assert_eq!(app.toasts().titles(), vec!["User Deactivated"]);
}

#[test]
fn test_create_lead() {
    let (mut app, now) = app_with("leads", 0);
    press(&mut app, Key::Char('n'), now);
    let Screen::Create(form) = app.screen() else {
        panic!("expected the create form");
    };
    assert!(matches!(form.kind, FormKind::Lead(_)));

    type_text(&mut app, "Acme Rollout", now);
    press(&mut app, Key::Tab, now);
    type_text(&mut app, "Acme Corp", now);
    press(&mut app, Key::Tab, now);
    type_text(&mut app, "25000", now);
    press(&mut app, Key::Tab, now);
    press(&mut app, Key::Tab, now);
    type_text(&mut app, "ops@acme.com", now);
    press(&mut app, Key::Enter, now);

    assert_eq!(detail_record(&app), Some(&Record::Lead("L008".to_string())));
    assert_eq!(app.toasts().titles(), vec!["Lead Created"]);
    assert_eq!(app.store().leads().len(), 8);

    press(&mut app, Key::Escape, now);
    assert_eq!(app.page_table().unwrap().len(), 8);
}

#[test]
fn test_create_form_keeps_errors_until_edited() {
    let (mut app, now) = app_with("accounts", 0);
    press(&mut app, Key::Char('n'), now);
    press(&mut app, Key::Enter, now);

    let Screen::Create(form) = app.screen() else {
        panic!("expected the create form");
    };
    assert_eq!(form.error("name"), Some("Account name is required."));
    assert!(form.error("industry").is_some());
    assert_eq!(app.store().accounts().len(), 4);

    type_text(&mut app, "Acme", now);
    let Screen::Create(form) = app.screen() else {
        panic!("expected the create form");
    };
    assert_eq!(form.error("name"), None);
    assert!(form.error("industry").is_some());

    // Choice fields cycle with the arrow keys.
    press(&mut app, Key::Down, now);
    press(&mut app, Key::Right, now);
    let Screen::Create(form) = app.screen() else {
        panic!("expected the create form");
    };
    let FormKind::Account(account) = &form.kind else {
        panic!("expected the account form");
    };
    assert_eq!(account.industry, "Technology");

    press(&mut app, Key::Escape, now);
    assert!(matches!(app.screen(), Screen::List(_)));
}

#[test]
fn test_activities_have_no_create_form() {
    let (mut app, now) = app_with("activities", 0);
    press(&mut app, Key::Char('n'), now);
    assert!(matches!(app.screen(), Screen::List(_)));
}

#[test]
fn test_toasts_expire_on_tick() {
    let (mut app, now) = app_with("leads", 0);
    app.open_record(Record::Lead("L404".to_string()), now);
    let deadline = app.next_deadline().unwrap();
    assert!(app.tick(deadline));
    assert!(app.toasts().is_empty());
}

use crm_lib::{CrmError, DashboardSummary, LoginForm, Store, authenticate};

fn login(email: &str) -> LoginForm {
    LoginForm {
        email: email.into(),
        password: "anything".into(),
        remember_me: true,
    }
}

#[test]
fn test_active_user_signs_in() {
    let store = Store::seeded();
    let session = authenticate(&login("PRIYA.PATEL@example.com"), &store).unwrap();
    assert_eq!(session.user.id, "usr_002");
    assert!(session.remember_me);
    assert_eq!(session.notice.description, "Welcome back, Priya Patel.");
}

#[test]
fn test_inactive_user_is_refused() {
    let store = Store::seeded();
    let err = authenticate(&login("sneha.reddy@example.com"), &store).unwrap_err();
    assert!(matches!(err, CrmError::Authentication(_)));
    assert_eq!(err.notice().title, "Sign-in Failed");
    assert_eq!(err.notice().duration.as_secs(), 3);
}

#[test]
fn test_unknown_user_is_refused() {
    let store = Store::seeded();
    let err = authenticate(&login("nobody@example.com"), &store).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: No user found for nobody@example.com.");
}

#[test]
fn test_invalid_form_is_a_validation_error() {
    let store = Store::seeded();
    let err = authenticate(&LoginForm::default(), &store).unwrap_err();
    let CrmError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_dashboard_summary() {
    let store = Store::seeded();
    let summary = DashboardSummary::from_store(&store);

    // L005 is closed
    assert_eq!(summary.active_leads, 6);
    assert_eq!(summary.contacts, 6);
    assert_eq!(summary.deals_won, 1);
    assert_eq!(summary.upcoming_activities, 2);

    let recent: Vec<&str> = summary.recent_activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(recent, ["act_003", "act_001", "act_004"]);

    let stats = summary.stats();
    assert_eq!(stats[0].label, "Active Leads");
    assert_eq!(stats[0].value, 6);
}

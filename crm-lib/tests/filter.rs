use crm_lib::{
    AccountFilter, AccountType, ActivityFilter, ActivityKind, ActivityStatus, ContactFilter, LeadFilter, LeadStatus,
    RecordFilter, Role, Store, UserFilter, UserStatus, cycle_choice,
};

#[test]
fn test_empty_filters_match_everything_in_order() {
    let store = Store::seeded();

    let accounts = AccountFilter::default().apply(store.accounts());
    assert_eq!(accounts, store.accounts());
    let leads = LeadFilter::default().apply(store.leads());
    assert_eq!(leads, store.leads());
    assert!(!LeadFilter::default().is_active());
}

#[test]
fn test_account_filter_combines_constraints() {
    let store = Store::seeded();

    let filter = AccountFilter {
        account_type: Some(AccountType::Customer),
        ..AccountFilter::default()
    };
    let names: Vec<String> = filter.apply(store.accounts()).into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["Innovatech Solutions Ltd.", "MediCare Hospitals Group"]);

    let filter = AccountFilter {
        search: "medi".into(),
        industry: Some("Information Technology".into()),
        account_type: Some(AccountType::Customer),
    };
    assert!(filter.apply(store.accounts()).is_empty());
    assert!(filter.is_active());
}

#[test]
fn test_contact_filter_searches_name_email_company() {
    let store = Store::seeded();

    let by_company = ContactFilter { search: "innovate hub".into() };
    assert_eq!(by_company.apply(store.contacts()).len(), 1);

    let by_email = ContactFilter { search: "BUSINESS.ORG".into() };
    assert_eq!(by_email.apply(store.contacts())[0].name, "Vikram Singh");

    let by_name = ContactFilter { search: "sneha".into() };
    assert_eq!(by_name.apply(store.contacts()).len(), 2);
}

#[test]
fn test_lead_filter_status_and_search() {
    let store = Store::seeded();

    let filter = LeadFilter {
        search: "solutions".into(),
        status: None,
    };
    // company "Beta Solutions" plus the two Innovatech Solutions leads
    assert_eq!(filter.apply(store.leads()).len(), 3);

    let filter = LeadFilter {
        search: "solutions".into(),
        status: Some(LeadStatus::Negotiation),
    };
    let leads = filter.apply(store.leads());
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id, "L007");
}

#[test]
fn test_activity_filter() {
    let store = Store::seeded();

    let filter = ActivityFilter {
        search: String::new(),
        kind: Some(ActivityKind::Meeting),
        status: Some(ActivityStatus::Upcoming),
    };
    let activities = filter.apply(store.activities());
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].id, "act_003");
}

#[test]
fn test_user_filter() {
    let store = Store::seeded();

    let filter = UserFilter {
        search: String::new(),
        role: Some(Role::SalesRepresentative),
        status: Some(UserStatus::Active),
    };
    let users = filter.apply(store.users());
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Rohan Das");

    let filter = UserFilter {
        search: "example.com".into(),
        ..UserFilter::default()
    };
    assert_eq!(filter.apply(store.users()).len(), 5);
}

#[test]
fn test_cycle_choice_wraps_through_none() {
    let mut status = None;
    let mut seen = Vec::new();
    for _ in 0..4 {
        status = cycle_choice::<ActivityStatus>(status);
        seen.push(status);
    }
    assert_eq!(
        seen,
        [
            Some(ActivityStatus::Upcoming),
            Some(ActivityStatus::Completed),
            Some(ActivityStatus::Overdue),
            None
        ]
    );
}

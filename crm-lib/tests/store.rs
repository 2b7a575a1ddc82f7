use crm_lib::{AccountForm, Choice, CrmError, LeadStatus, RelatedKind, Store, UserStatus};

#[test]
fn test_seeded_counts() {
    let store = Store::seeded();
    assert_eq!(store.accounts().len(), 4);
    assert_eq!(store.contacts().len(), 6);
    assert_eq!(store.leads().len(), 7);
    assert_eq!(store.activities().len(), 7);
    assert_eq!(store.users().len(), 5);
}

#[test]
fn test_lookup_by_id() {
    let store = Store::seeded();
    let account = store.account("acc_003").unwrap();
    assert_eq!(account.name, "BuildStrong Constructions");
    assert_eq!(store.lead("L005").unwrap().status, LeadStatus::ClosedWon);
}

#[test]
fn test_lookup_missing_id() {
    let store = Store::seeded();
    let err = store.contact("cont_999").unwrap_err();
    assert!(matches!(err, CrmError::NotFound { kind: "contact", .. }));
    assert_eq!(err.to_string(), "contact 'cont_999' not found");
}

#[test]
fn test_account_related_records() {
    let store = Store::seeded();

    let contacts = store.contacts_for_account("acc_001");
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Priya Sharma", "Arjun Mehta", "Sneha Reddy"]);

    let leads = store.leads_for_account("acc_001");
    assert_eq!(leads.len(), 2);

    // own activity plus those of its contacts and leads
    let ids: Vec<String> = store.activities_for_account("acc_001").into_iter().map(|a| a.id).collect();
    assert_eq!(ids, ["act_001", "act_005", "act_006", "act_007"]);

    assert!(store.contacts_for_account("acc_004").is_empty());
}

#[test]
fn test_contact_and_lead_related_records() {
    let store = Store::seeded();

    let activities = store.activities_for_contact("cont_001");
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].related_to.kind, RelatedKind::Contact);

    let leads = store.leads_for_contact("cont_002");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Cloud Migration Services");

    let lead = store.lead("L006").unwrap().clone();
    assert_eq!(store.activities_for_lead("L006").len(), 1);
    assert_eq!(store.contacts_for_lead(&lead).len(), 3);
}

#[test]
fn test_insert_assigns_next_prefixed_id() {
    let mut store = Store::seeded();
    let form = AccountForm {
        name: "Acme Retail".into(),
        industry: "Retail".into(),
        account_type: "Vendor".into(),
        ..AccountForm::default()
    };
    let draft = form.validate().unwrap();

    let id = store.insert_account(draft.clone()).id.clone();
    assert_eq!(id, "acc_005");
    let id = store.insert_account(draft).id.clone();
    assert_eq!(id, "acc_006");
    assert_eq!(store.accounts().len(), 6);
    // appended, not reordered
    assert_eq!(store.accounts()[0].id, "acc_001");
}

#[test]
fn test_industries_are_distinct_and_sorted() {
    let store = Store::seeded();
    assert_eq!(
        store.industries(),
        ["Agriculture", "Construction", "Healthcare", "Information Technology"]
    );
}

#[test]
fn test_toggle_user_status() {
    let mut store = Store::seeded();

    let notice = store.toggle_user_status("usr_004").unwrap();
    assert_eq!(store.user("usr_004").unwrap().status, UserStatus::Active);
    assert_eq!(notice.title, "User Activated");
    assert_eq!(notice.description, "Sneha Reddy's status has been changed to Active.");

    let notice = store.toggle_user_status("usr_004").unwrap();
    assert_eq!(notice.title, "User Deactivated");
    assert_eq!(store.user("usr_004").unwrap().status.label(), "Inactive");

    assert!(store.toggle_user_status("usr_404").is_err());
}

#[test]
fn test_user_by_email_ignores_case() {
    let store = Store::seeded();
    let user = store.user_by_email("  Rohan.Das@Example.com ").unwrap();
    assert_eq!(user.id, "usr_003");
}

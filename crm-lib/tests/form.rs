use crm_lib::{
    AccountForm, AccountType, ContactForm, CrmError, Form, LeadForm, LeadStatus, LoginForm, NoticeStatus, Store,
    UserForm, UserStatus,
};
use rust_decimal::Decimal;

fn valid_lead() -> LeadForm {
    LeadForm {
        lead_name: "Zeta Analytics Pilot".into(),
        company_name: "Zeta Analytics".into(),
        potential_value: "125000.50".into(),
        email: "hello@zeta.in".into(),
        ..LeadForm::default()
    }
}

#[test]
fn test_login_requires_email_and_password() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required."));
    assert_eq!(errors.get("password"), Some("Password is required."));
    assert_eq!(errors.notice.description, "Please check your email and password.");
    assert_eq!(errors.notice.duration.as_secs(), 3);
}

#[test]
fn test_login_rejects_bad_email_format() {
    let form = LoginForm {
        email: "aarav.sharma@example".into(),
        password: "secret".into(),
        remember_me: false,
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields.len(), 1);
    assert_eq!(errors.get("email"), Some("Invalid email format."));
}

#[test]
fn test_lead_defaults() {
    let form = LeadForm::default();
    assert_eq!(form.status, "New");
    assert_eq!(form.assigned_to, "Sales Rep A");
}

#[test]
fn test_lead_errors_are_in_field_order() {
    let form = LeadForm {
        potential_value: "-5".into(),
        email: "not-an-email".into(),
        ..LeadForm::default()
    };
    let errors = form.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, ["lead_name", "company_name", "potential_value", "email"]);
    assert_eq!(errors.get("potential_value"), Some("Potential value cannot be negative."));
    assert_eq!(errors.notice.title, "Validation Error");
    assert_eq!(errors.notice.description, "Please check the form for errors.");
    assert_eq!(errors.notice.status, NoticeStatus::Error);
}

#[test]
fn test_lead_potential_value_must_be_number() {
    let form = LeadForm {
        potential_value: "lots".into(),
        ..valid_lead()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("potential_value"), Some("Potential value must be a number."));
}

#[test]
fn test_lead_short_status_labels() {
    let form = LeadForm {
        status: "Won".into(),
        ..valid_lead()
    };
    assert_eq!(form.validate().unwrap().status, LeadStatus::ClosedWon);
}

#[test]
fn test_lead_submit_inserts_and_notifies() {
    let mut store = Store::seeded();
    let submitted = valid_lead().submit(&mut store).unwrap();

    assert_eq!(submitted.record.id, "L008");
    assert_eq!(submitted.record.potential_value, Some(Decimal::new(12500050, 2)));
    assert_eq!(submitted.notice.title, "Lead Created");
    assert_eq!(store.leads().last().map(|l| l.id.as_str()), Some("L008"));
}

#[test]
fn test_invalid_submit_leaves_store_untouched() {
    let mut store = Store::seeded();
    let err = LeadForm::default().submit(&mut store).unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
    assert_eq!(err.notice().title, "Validation Error");
    assert_eq!(store.leads().len(), 7);
}

#[test]
fn test_account_copy_billing_into_shipping() {
    let mut form = AccountForm {
        name: "Acme Retail".into(),
        industry: "Retail".into(),
        account_type: "Customer".into(),
        ..AccountForm::default()
    };
    form.billing.street = "12 MG Road".into();
    form.billing.city = "Pune".into();
    form.shipping.street = "old".into();

    assert!(form.toggle("copy_billing"));
    assert_eq!(form.shipping.street, "12 MG Road");
    // shipping is read-only while copying
    assert!(form.value_mut("shipping.city").is_none());

    form.billing.city = "Mumbai".into();
    assert_eq!(form.value("shipping.city"), Some("Mumbai"));

    let account = form.validate().unwrap();
    assert_eq!(account.account_type, AccountType::Customer);
    assert_eq!(account.shipping_address.unwrap().city, "Mumbai");
}

#[test]
fn test_account_requires_name_industry_type() {
    let errors = AccountForm::default().validate().unwrap_err();
    assert!(errors.has("name"));
    assert!(errors.has("industry"));
    assert!(errors.has("account_type"));
    assert!(!errors.has("annual_revenue"));
}

#[test]
fn test_account_submit_notice() {
    let mut store = Store::seeded();
    let form = AccountForm {
        name: "Acme Retail".into(),
        industry: "Retail".into(),
        account_type: "Prospect".into(),
        annual_revenue: "1000000".into(),
        ..AccountForm::default()
    };
    let submitted = form.submit(&mut store).unwrap();
    assert_eq!(submitted.record.id, "acc_005");
    assert_eq!(submitted.notice.description, "Acme Retail has been successfully created. (Mock)");
    assert!(submitted.record.billing_address.is_none());
}

#[test]
fn test_contact_links_account() {
    let mut store = Store::seeded();
    let form = ContactForm {
        first_name: "Kavya".into(),
        last_name: "Iyer".into(),
        email: "kavya.iyer@innovatech.com".into(),
        account_id: "acc_001".into(),
        ..ContactForm::default()
    };
    let submitted = form.submit(&mut store).unwrap();
    assert_eq!(submitted.record.name, "Kavya Iyer");
    assert_eq!(submitted.record.company, "Innovatech Solutions Ltd.");
    assert_eq!(submitted.notice.description, "Kavya Iyer has been successfully added.");
    assert_eq!(store.contacts_for_account("acc_001").len(), 4);
}

#[test]
fn test_contact_unknown_account() {
    let store = Store::seeded();
    let form = ContactForm {
        first_name: "Kavya".into(),
        last_name: "Iyer".into(),
        email: "kavya@example.com".into(),
        account_id: "acc_999".into(),
        ..ContactForm::default()
    };
    let errors = form.validate(&store).unwrap_err();
    assert_eq!(errors.get("account_id"), Some("Unknown account."));
}

#[test]
fn test_user_password_mismatch() {
    let form = UserForm {
        first_name: "Meera".into(),
        last_name: "Nair".into(),
        email: "meera.nair@example.com".into(),
        role: "Sales Manager".into(),
        password: "hunter22".into(),
        confirm_password: "hunter23".into(),
        ..UserForm::default()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    assert_eq!(errors.notice.title, "Password Mismatch");
    assert_eq!(errors.notice.description, "Passwords do not match. Please check and try again.");
}

#[test]
fn test_user_submit() {
    let mut store = Store::seeded();
    let form = UserForm {
        first_name: "Meera".into(),
        last_name: "Nair".into(),
        email: "meera.nair@example.com".into(),
        role: "Sales Manager".into(),
        password: "hunter22".into(),
        confirm_password: "hunter22".into(),
        ..UserForm::default()
    };
    let submitted = form.submit(&mut store).unwrap();
    assert_eq!(submitted.record.id, "usr_006");
    assert_eq!(submitted.record.status, UserStatus::Active);
    assert_eq!(submitted.notice.title, "User Created");
}

#[test]
fn test_form_field_access() {
    let mut form = UserForm::default();
    for spec in form.fields() {
        if let Some(value) = form.value_mut(spec.name) {
            value.push('x');
        }
    }
    assert_eq!(form.first_name, "x");
    assert_eq!(form.status, "Activex");
    assert_eq!(form.value("nope"), None);
}

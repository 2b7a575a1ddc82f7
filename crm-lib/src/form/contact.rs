//! New contact form

use chrono::Utc;

use super::{AddressForm, COUNTRY_OPTIONS, FieldKind, FieldSpec, Form, Submitted, Validator, optional_text};
use crate::error::{CrmError, ValidationErrors};
use crate::model::Contact;
use crate::notice::Notice;
use crate::store::Store;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("first_name", "First Name").required(),
    FieldSpec::text("last_name", "Last Name").required(),
    FieldSpec::text("email", "Email Address").required(),
    FieldSpec::text("phone", "Phone Number"),
    FieldSpec::text("mobile", "Mobile Number"),
    FieldSpec::text("account_id", "Account (Company)").kind(FieldKind::AccountRef),
    FieldSpec::text("title", "Job Title"),
    FieldSpec::text("department", "Department"),
    FieldSpec::text("address.street", "Street Address"),
    FieldSpec::text("address.city", "City"),
    FieldSpec::text("address.state", "State / Province"),
    FieldSpec::text("address.postal_code", "Postal Code"),
    FieldSpec::text("address.country", "Country").kind(FieldKind::Choice(COUNTRY_OPTIONS)),
    FieldSpec::text("description", "Description / Notes").kind(FieldKind::TextArea),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    /// Id of the linked account; blank for none.
    pub account_id: String,
    pub title: String,
    pub department: String,
    pub address: AddressForm,
    pub description: String,
}

impl ContactForm {
    /// Checks every field and builds a contact without an id.
    ///
    /// The company comes from the linked account when there is one.
    pub fn validate(&self, store: &Store) -> Result<Contact, ValidationErrors> {
        let mut v = Validator::new();
        v.field("first_name", &self.first_name).required("First name is required.");
        v.field("last_name", &self.last_name).required("Last name is required.");
        v.field("email", &self.email)
            .required("Email is required.")
            .email("Invalid email format.");
        v.field("account_id", &self.account_id)
            .rule(|id| store.account(id).is_ok(), "Unknown account.");
        v.finish(Notice::error("Validation Error", "Please check the form for errors."))?;

        let account_id = optional_text(&self.account_id);
        let company = account_id
            .as_deref()
            .and_then(|id| store.account(id).ok())
            .map(|account| account.name.clone())
            .unwrap_or_default();

        Ok(Contact {
            id: String::new(),
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            mobile: optional_text(&self.mobile),
            company,
            account_id,
            role: self.title.trim().to_string(),
            department: optional_text(&self.department),
            address: self.address.to_address(),
            description: optional_text(&self.description),
            created_date: Utc::now().date_naive(),
            last_activity: None,
        })
    }

    /// Validates and adds the contact to the session store.
    pub fn submit(&self, store: &mut Store) -> Result<Submitted<Contact>, CrmError> {
        let draft = self.validate(store)?;
        let contact = store.insert_contact(draft).clone();
        let notice = Notice::success(
            "Contact Created.",
            format!("{} has been successfully added.", contact.name),
        );
        Ok(Submitted { record: contact, notice })
    }
}

impl Form for ContactForm {
    fn title(&self) -> &'static str {
        "Create New Contact"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<&str> {
        if let Some(part) = field.strip_prefix("address.") {
            return self.address.field(part).map(String::as_str);
        }
        let value = match field {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "mobile" => &self.mobile,
            "account_id" => &self.account_id,
            "title" => &self.title,
            "department" => &self.department,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        if let Some(part) = field.strip_prefix("address.") {
            return self.address.field_mut(part);
        }
        match field {
            "first_name" => Some(&mut self.first_name),
            "last_name" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "mobile" => Some(&mut self.mobile),
            "account_id" => Some(&mut self.account_id),
            "title" => Some(&mut self.title),
            "department" => Some(&mut self.department),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

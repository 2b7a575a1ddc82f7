//! New lead form

use chrono::Utc;

use super::{FieldKind, FieldSpec, Form, Submitted, Validator, optional_decimal, optional_text};
use crate::error::{CrmError, ValidationErrors};
use crate::model::{Choice, Lead, LeadStatus};
use crate::notice::Notice;
use crate::store::Store;

/// Status labels offered by the form.
pub const LEAD_STATUS_OPTIONS: &[&str] = &["New", "Contacted", "Qualified", "Proposal Sent", "Negotiation", "Won", "Lost"];

/// People a new lead can be assigned to.
pub const ASSIGNABLE_USERS: &[&str] = &["Sales Rep A", "Sales Rep B", "Sales Manager"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("lead_name", "Lead Name").required(),
    FieldSpec::text("company_name", "Company Name").required(),
    FieldSpec::text("potential_value", "Potential Value (INR)"),
    FieldSpec::text("contact_person", "Contact Person"),
    FieldSpec::text("email", "Email").required(),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("status", "Lead Status")
        .required()
        .kind(FieldKind::Choice(LEAD_STATUS_OPTIONS)),
    FieldSpec::text("assigned_to", "Assigned To")
        .required()
        .kind(FieldKind::Choice(ASSIGNABLE_USERS)),
    FieldSpec::text("notes", "Notes").kind(FieldKind::TextArea),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub lead_name: String,
    pub company_name: String,
    pub potential_value: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub assigned_to: String,
    pub notes: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            lead_name: String::new(),
            company_name: String::new(),
            potential_value: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            status: LeadStatus::New.label().to_string(),
            assigned_to: ASSIGNABLE_USERS[0].to_string(),
            notes: String::new(),
        }
    }
}

impl LeadForm {
    /// Checks every field and builds a lead without an id.
    pub fn validate(&self) -> Result<Lead, ValidationErrors> {
        let mut v = Validator::new();
        v.field("lead_name", &self.lead_name).required("Lead name is required.");
        v.field("company_name", &self.company_name)
            .required("Company name is required.");
        v.field("potential_value", &self.potential_value)
            .decimal("Potential value must be a number.")
            .non_negative("Potential value cannot be negative.");
        v.field("email", &self.email)
            .required("Email is required.")
            .email("Invalid email format.");
        v.field("status", &self.status)
            .required("Lead status is required.")
            .rule(|s| LeadStatus::from_label(s).is_some(), "Lead status is required.");
        v.field("assigned_to", &self.assigned_to)
            .required("Assigned user is required.");
        v.finish(Notice::error("Validation Error", "Please check the form for errors."))?;

        Ok(Lead {
            id: String::new(),
            name: self.lead_name.trim().to_string(),
            company: self.company_name.trim().to_string(),
            account_id: None,
            contact_id: None,
            contact_person: optional_text(&self.contact_person),
            status: LeadStatus::from_label(&self.status).unwrap_or(LeadStatus::New),
            assigned_to: self.assigned_to.trim().to_string(),
            created_date: Utc::now().date_naive(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            potential_value: optional_decimal(&self.potential_value),
            notes: optional_text(&self.notes),
        })
    }

    /// Validates and adds the lead to the session store.
    pub fn submit(&self, store: &mut Store) -> Result<Submitted<Lead>, CrmError> {
        let lead = store.insert_lead(self.validate()?).clone();
        let notice = Notice::success(
            "Lead Created",
            format!("{} has been successfully created. (Mock)", lead.name),
        );
        Ok(Submitted { record: lead, notice })
    }
}

impl Form for LeadForm {
    fn title(&self) -> &'static str {
        "Create New Lead"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "lead_name" => &self.lead_name,
            "company_name" => &self.company_name,
            "potential_value" => &self.potential_value,
            "contact_person" => &self.contact_person,
            "email" => &self.email,
            "phone" => &self.phone,
            "status" => &self.status,
            "assigned_to" => &self.assigned_to,
            "notes" => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "lead_name" => Some(&mut self.lead_name),
            "company_name" => Some(&mut self.company_name),
            "potential_value" => Some(&mut self.potential_value),
            "contact_person" => Some(&mut self.contact_person),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "status" => Some(&mut self.status),
            "assigned_to" => Some(&mut self.assigned_to),
            "notes" => Some(&mut self.notes),
            _ => None,
        }
    }
}

//! New account form

use chrono::Utc;

use super::{FieldKind, FieldSpec, Form, Submitted, Validator, optional_decimal, optional_text};
use crate::error::{CrmError, ValidationErrors};
use crate::model::{Account, AccountType, Address, Choice};
use crate::notice::Notice;
use crate::store::Store;

pub const INDUSTRY_OPTIONS: &[&str] = &["Technology", "Finance", "Healthcare", "Manufacturing", "Retail"];

pub const ACCOUNT_TYPE_OPTIONS: &[&str] = &["Prospect", "Customer", "Partner", "Vendor"];

pub const COUNTRY_OPTIONS: &[&str] = &["India", "United States", "United Kingdom"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Account Name").required(),
    FieldSpec::text("industry", "Industry")
        .required()
        .kind(FieldKind::Choice(INDUSTRY_OPTIONS)),
    FieldSpec::text("account_type", "Type")
        .required()
        .kind(FieldKind::Choice(ACCOUNT_TYPE_OPTIONS)),
    FieldSpec::text("website", "Website"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("annual_revenue", "Annual Revenue (INR)"),
    FieldSpec::text("billing.street", "Billing Street"),
    FieldSpec::text("billing.city", "Billing City"),
    FieldSpec::text("billing.state", "Billing State / Province"),
    FieldSpec::text("billing.postal_code", "Billing Postal Code"),
    FieldSpec::text("billing.country", "Billing Country").kind(FieldKind::Choice(COUNTRY_OPTIONS)),
    FieldSpec::text("copy_billing", "Shipping same as billing").kind(FieldKind::Toggle),
    FieldSpec::text("shipping.street", "Shipping Street"),
    FieldSpec::text("shipping.city", "Shipping City"),
    FieldSpec::text("shipping.state", "Shipping State / Province"),
    FieldSpec::text("shipping.postal_code", "Shipping Postal Code"),
    FieldSpec::text("shipping.country", "Shipping Country").kind(FieldKind::Choice(COUNTRY_OPTIONS)),
    FieldSpec::text("description", "Description / Notes").kind(FieldKind::TextArea),
];

/// Raw address input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressForm {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for AddressForm {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: COUNTRY_OPTIONS[0].to_string(),
        }
    }
}

impl AddressForm {
    /// The address, or `None` when only the country is filled in.
    pub fn to_address(&self) -> Option<Address> {
        let address = Address {
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
        };
        let blank = address.street.is_empty()
            && address.city.is_empty()
            && address.state.is_empty()
            && address.postal_code.is_empty();
        (!blank).then_some(address)
    }

    pub(crate) fn field(&self, name: &str) -> Option<&String> {
        match name {
            "street" => Some(&self.street),
            "city" => Some(&self.city),
            "state" => Some(&self.state),
            "postal_code" => Some(&self.postal_code),
            "country" => Some(&self.country),
            _ => None,
        }
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "street" => Some(&mut self.street),
            "city" => Some(&mut self.city),
            "state" => Some(&mut self.state),
            "postal_code" => Some(&mut self.postal_code),
            "country" => Some(&mut self.country),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub industry: String,
    pub account_type: String,
    pub website: String,
    pub phone: String,
    pub annual_revenue: String,
    pub billing: AddressForm,
    pub shipping: AddressForm,
    /// Shipping mirrors billing while set.
    pub copy_billing: bool,
    pub description: String,
}

impl AccountForm {
    /// Turns copying on or off; turning it on copies the billing fields into shipping.
    pub fn set_copy_billing(&mut self, copy: bool) {
        self.copy_billing = copy;
        if copy {
            self.shipping = self.billing.clone();
        }
    }

    /// Checks every field and builds an account without an id.
    pub fn validate(&self) -> Result<Account, ValidationErrors> {
        let mut v = Validator::new();
        v.field("name", &self.name).required("Account name is required.");
        v.field("industry", &self.industry).required("Industry is required.");
        v.field("account_type", &self.account_type)
            .required("Account type is required.")
            .rule(|s| AccountType::from_label(s).is_some(), "Account type is required.");
        v.field("annual_revenue", &self.annual_revenue)
            .decimal("Annual revenue must be a number.")
            .non_negative("Annual revenue cannot be negative.");
        v.finish(Notice::error("Validation Error", "Please check the form for errors."))?;

        let shipping = if self.copy_billing { &self.billing } else { &self.shipping };
        Ok(Account {
            id: String::new(),
            name: self.name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            account_type: AccountType::from_label(&self.account_type).unwrap_or(AccountType::Prospect),
            primary_contact: None,
            phone: self.phone.trim().to_string(),
            website: optional_text(&self.website),
            last_activity: None,
            revenue: optional_decimal(&self.annual_revenue),
            employees: None,
            description: optional_text(&self.description),
            billing_address: self.billing.to_address(),
            shipping_address: shipping.to_address(),
            created: Utc::now(),
        })
    }

    /// Validates and adds the account to the session store.
    pub fn submit(&self, store: &mut Store) -> Result<Submitted<Account>, CrmError> {
        let account = store.insert_account(self.validate()?).clone();
        let notice = Notice::success(
            "Account Created",
            format!("{} has been successfully created. (Mock)", account.name),
        );
        Ok(Submitted { record: account, notice })
    }
}

impl Form for AccountForm {
    fn title(&self) -> &'static str {
        "Create New Account"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<&str> {
        let value = match field.split_once('.') {
            Some(("billing", part)) => self.billing.field(part)?,
            Some(("shipping", part)) if self.copy_billing => self.billing.field(part)?,
            Some(("shipping", part)) => self.shipping.field(part)?,
            Some(_) => return None,
            None => match field {
                "name" => &self.name,
                "industry" => &self.industry,
                "account_type" => &self.account_type,
                "website" => &self.website,
                "phone" => &self.phone,
                "annual_revenue" => &self.annual_revenue,
                "description" => &self.description,
                _ => return None,
            },
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        match field.split_once('.') {
            Some(("billing", part)) => self.billing.field_mut(part),
            // shipping is locked while it mirrors billing
            Some(("shipping", _)) if self.copy_billing => None,
            Some(("shipping", part)) => self.shipping.field_mut(part),
            Some(_) => None,
            None => match field {
                "name" => Some(&mut self.name),
                "industry" => Some(&mut self.industry),
                "account_type" => Some(&mut self.account_type),
                "website" => Some(&mut self.website),
                "phone" => Some(&mut self.phone),
                "annual_revenue" => Some(&mut self.annual_revenue),
                "description" => Some(&mut self.description),
                _ => None,
            },
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        (field == "copy_billing").then_some(self.copy_billing)
    }

    fn toggle(&mut self, field: &str) -> bool {
        if field == "copy_billing" {
            self.set_copy_billing(!self.copy_billing);
            true
        } else {
            false
        }
    }
}

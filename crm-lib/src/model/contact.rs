//! Contacts (people)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Address;

/// A person the business is in touch with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub mobile: Option<String>,
    pub company: String,
    /// The account this contact belongs to, if any.
    pub account_id: Option<String>,
    /// Job title.
    pub role: String,
    pub department: Option<String>,
    pub address: Option<Address>,
    pub description: Option<String>,
    pub created_date: NaiveDate,
    pub last_activity: Option<NaiveDate>,
}

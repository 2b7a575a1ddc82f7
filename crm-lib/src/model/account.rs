//! Accounts (companies)

use chrono::{DateTime, NaiveDate, Utc};
use crm_ui::Tone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Address, Choice};

/// Relationship of an account to the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Customer,
    Prospect,
    Partner,
    Vendor,
}

impl Choice for AccountType {
    const ALL: &'static [Self] = &[Self::Prospect, Self::Customer, Self::Partner, Self::Vendor];

    fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Prospect => "Prospect",
            Self::Partner => "Partner",
            Self::Vendor => "Vendor",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Customer => Tone::Green,
            Self::Prospect => Tone::Blue,
            Self::Partner => Tone::Purple,
            Self::Vendor => Tone::Orange,
        }
    }
}

/// The main person to talk to at an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryContact {
    pub name: String,
    pub title: Option<String>,
}

/// A company the business deals with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub primary_contact: Option<PrimaryContact>,
    pub phone: String,
    pub website: Option<String>,
    pub last_activity: Option<NaiveDate>,
    /// Annual revenue in INR.
    pub revenue: Option<Decimal>,
    pub employees: Option<u32>,
    pub description: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub created: DateTime<Utc>,
}

//! Users of the CRM

use chrono::{DateTime, Utc};
use crm_ui::Tone;
use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    #[serde(rename = "Sales Manager")]
    SalesManager,
    #[serde(rename = "Sales Representative")]
    SalesRepresentative,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[Self::Administrator, Self::SalesManager, Self::SalesRepresentative];

    fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::SalesManager => "Sales Manager",
            Self::SalesRepresentative => "Sales Representative",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Administrator => Tone::Purple,
            Self::SalesManager => Tone::Blue,
            Self::SalesRepresentative => Tone::Teal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl Choice for UserStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Green,
            Self::Inactive => Tone::Red,
        }
    }
}

/// A person who signs in to the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Up to two uppercase initials, used in place of an avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

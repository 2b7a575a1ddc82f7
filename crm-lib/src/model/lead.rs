//! Leads (sales opportunities)

use chrono::NaiveDate;
use crm_ui::Tone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Choice;

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    Negotiation,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl LeadStatus {
    /// Whether the lead has left the pipeline.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }
}

impl Choice for LeadStatus {
    const ALL: &'static [Self] = &[
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::ProposalSent,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::ProposalSent => "Proposal Sent",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::New => Tone::Blue,
            Self::Contacted => Tone::Teal,
            Self::Qualified => Tone::Yellow,
            Self::ProposalSent => Tone::Orange,
            Self::Negotiation => Tone::Purple,
            Self::ClosedWon => Tone::Green,
            Self::ClosedLost => Tone::Red,
        }
    }

    /// Also accepts the short form labels "Won" and "Lost".
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("won") {
            return Some(Self::ClosedWon);
        }
        if label.eq_ignore_ascii_case("lost") {
            return Some(Self::ClosedLost);
        }
        Self::ALL.iter().copied().find(|status| status.label().eq_ignore_ascii_case(label))
    }
}

/// A potential deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub account_id: Option<String>,
    pub contact_id: Option<String>,
    pub contact_person: Option<String>,
    pub status: LeadStatus,
    pub assigned_to: String,
    pub created_date: NaiveDate,
    pub email: String,
    pub phone: String,
    /// Expected deal value in INR.
    pub potential_value: Option<Decimal>,
    pub notes: Option<String>,
}

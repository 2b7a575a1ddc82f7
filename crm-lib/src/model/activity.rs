//! Activities (calls, emails, meetings, notes)

use chrono::{DateTime, Utc};
use crm_ui::Tone;
use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    Note,
}

impl ActivityKind {
    /// Single-glyph icon shown next to the subject.
    pub fn icon(self) -> char {
        match self {
            Self::Call => '☎',
            Self::Email => '✉',
            Self::Meeting => '◎',
            Self::Note => '✎',
        }
    }
}

impl Choice for ActivityKind {
    const ALL: &'static [Self] = &[Self::Call, Self::Email, Self::Meeting, Self::Note];

    fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Meeting => "Meeting",
            Self::Note => "Note",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Call => Tone::Teal,
            Self::Email => Tone::Blue,
            Self::Meeting => Tone::Purple,
            Self::Note => Tone::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    Upcoming,
    Completed,
    Overdue,
}

impl Choice for ActivityStatus {
    const ALL: &'static [Self] = &[Self::Upcoming, Self::Completed, Self::Overdue];

    fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Upcoming => Tone::Blue,
            Self::Completed => Tone::Green,
            Self::Overdue => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Red,
            Self::Medium => Tone::Orange,
            Self::Low => Tone::Gray,
        }
    }
}

/// Kind of record an activity is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelatedKind {
    Account,
    Contact,
    Lead,
}

/// The record an activity is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTo {
    #[serde(rename = "type")]
    pub kind: RelatedKind,
    pub name: String,
    pub id: String,
}

impl RelatedTo {
    pub fn new(kind: RelatedKind, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            id: id.into(),
        }
    }
}

/// A scheduled or logged interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub subject: String,
    pub related_to: RelatedTo,
    pub due_date: DateTime<Utc>,
    pub assigned_to: String,
    pub status: ActivityStatus,
    pub priority: Priority,
    pub notes: Option<String>,
}

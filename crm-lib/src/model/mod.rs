//! CRM record types

mod account;
mod activity;
mod contact;
mod lead;
mod user;

pub use account::*;
pub use activity::*;
pub use contact::*;
pub use lead::*;
pub use user::*;

use crm_ui::Tone;
use serde::{Deserialize, Serialize};

/// A closed set of labelled values, such as a status or a type.
///
/// Every choice has a display label and a colour tone used for badges.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn tone(self) -> Tone;

    /// Parses a display label, ignoring case and surrounding whitespace.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|choice| choice.label().eq_ignore_ascii_case(label))
    }

    /// The value after this one, wrapping around.
    fn next(self) -> Self {
        let index = Self::ALL.iter().position(|choice| *choice == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Cycles an optional filter value: `None` → first → … → last → `None`.
pub fn cycle_choice<C: Choice>(current: Option<C>) -> Option<C> {
    match current {
        None => C::ALL.first().copied(),
        Some(choice) => {
            let index = C::ALL.iter().position(|c| *c == choice).unwrap_or(0);
            C::ALL.get(index + 1).copied()
        }
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.postal_code, self.country
        )
    }
}

//! List page filters
//!
//! Each filter is the local state of one list page: a free-text search plus
//! optional choice constraints. An empty search and unset choices match
//! everything, and filtering never reorders records.

use crate::model::{Account, AccountType, Activity, ActivityKind, ActivityStatus, Contact, Lead, LeadStatus, Role, User, UserStatus};

/// A predicate over one record type.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// The matching records, in their original order.
    fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// Whether any constraint is set.
    fn is_active(&self) -> bool;
}

/// Case-insensitive substring match; an empty needle matches everything.
fn contains(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn choice_matches<C: PartialEq>(wanted: Option<C>, actual: C) -> bool {
    wanted.is_none_or(|wanted| wanted == actual)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilter {
    /// Matched against the account name.
    pub search: String,
    pub industry: Option<String>,
    pub account_type: Option<AccountType>,
}

impl RecordFilter<Account> for AccountFilter {
    fn matches(&self, account: &Account) -> bool {
        contains(&account.name, &self.search)
            && self.industry.as_deref().is_none_or(|industry| account.industry == industry)
            && choice_matches(self.account_type, account.account_type)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.industry.is_some() || self.account_type.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Matched against name, email and company.
    pub search: String,
}

impl RecordFilter<Contact> for ContactFilter {
    fn matches(&self, contact: &Contact) -> bool {
        contains(&contact.name, &self.search)
            || contains(&contact.email, &self.search)
            || contains(&contact.company, &self.search)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Matched against name, company and email.
    pub search: String,
    pub status: Option<LeadStatus>,
}

impl RecordFilter<Lead> for LeadFilter {
    fn matches(&self, lead: &Lead) -> bool {
        (contains(&lead.name, &self.search) || contains(&lead.company, &self.search) || contains(&lead.email, &self.search))
            && choice_matches(self.status, lead.status)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Matched against the subject.
    pub search: String,
    pub kind: Option<ActivityKind>,
    pub status: Option<ActivityStatus>,
}

impl RecordFilter<Activity> for ActivityFilter {
    fn matches(&self, activity: &Activity) -> bool {
        contains(&activity.subject, &self.search)
            && choice_matches(self.kind, activity.kind)
            && choice_matches(self.status, activity.status)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.kind.is_some() || self.status.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Matched against name and email.
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        (contains(&user.name, &self.search) || contains(&user.email, &self.search))
            && choice_matches(self.role, user.role)
            && choice_matches(self.status, user.status)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.role.is_some() || self.status.is_some()
    }
}

//! What is on screen, and the local state of each page.

use std::time::Instant;

use crm_lib::{
    AccountFilter, AccountForm, ActivityFilter, Choice, ContactFilter, ContactForm, CrmError, Form, LeadFilter,
    LeadForm, LoginForm, Notice, RecordFilter, Store, UserFilter, UserForm, ValidationErrors, cycle_choice,
};
use crm_table::DrawState;

use super::Section;

/// Which part of the page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Search,
    Table,
}

/// A single record, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Account(String),
    Contact(String),
    Lead(String),
    User(String),
}

impl Record {
    /// The list page the record belongs to.
    pub fn section(&self) -> Section {
        match self {
            Record::Account(_) => Section::Accounts,
            Record::Contact(_) => Section::Contacts,
            Record::Lead(_) => Section::Leads,
            Record::User(_) => Section::Users,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Account(id) | Record::Contact(id) | Record::Lead(id) | Record::User(id) => id,
        }
    }

    /// Related-record tabs on the detail page.
    pub fn tabs(&self) -> &'static [&'static str] {
        match self {
            Record::Account(_) => &["Contacts", "Leads", "Activities"],
            Record::Contact(_) => &["Activities", "Linked Leads"],
            Record::Lead(_) => &["Activities", "Related Contacts"],
            Record::User(_) => &[],
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Login(FormScreen),
    Dashboard(DashboardScreen),
    List(ListScreen),
    Detail(DetailScreen),
    Create(FormScreen),
}

impl Screen {
    /// The sidebar entry to highlight.
    pub fn section(&self) -> Option<Section> {
        match self {
            Screen::Login(_) => None,
            Screen::Dashboard(_) => Some(Section::Dashboard),
            Screen::List(list) => Some(list.section),
            Screen::Detail(detail) => Some(detail.record.section()),
            Screen::Create(form) => form.kind.section(),
        }
    }

    /// Interaction state of the screen's table, if it has one.
    pub fn table_state(&self) -> Option<&DrawState> {
        match self {
            Screen::Dashboard(dashboard) => Some(&dashboard.table),
            Screen::List(list) => Some(&list.table),
            Screen::Detail(detail) if !detail.record.tabs().is_empty() => Some(&detail.table),
            _ => None,
        }
    }

    pub fn table_state_mut(&mut self) -> Option<&mut DrawState> {
        match self {
            Screen::Dashboard(dashboard) => Some(&mut dashboard.table),
            Screen::List(list) => Some(&mut list.table),
            Screen::Detail(detail) if !detail.record.tabs().is_empty() => Some(&mut detail.table),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::List(list) if list.loading_until.is_some())
    }
}

#[derive(Debug, Default)]
pub struct DashboardScreen {
    pub table: DrawState,
}

#[derive(Debug)]
pub struct ListScreen {
    pub section: Section,
    pub filter: ListFilter,
    pub table: DrawState,
    /// Rows are hidden behind skeletons until then.
    pub loading_until: Option<Instant>,
}

#[derive(Debug)]
pub struct DetailScreen {
    pub record: Record,
    pub tab: usize,
    pub table: DrawState,
}

impl DetailScreen {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            tab: 0,
            table: DrawState::default(),
        }
    }

    /// Move `delta` tabs, wrapping around.
    pub fn switch_tab(&mut self, delta: isize) {
        let count = self.record.tabs().len() as isize;
        if count == 0 {
            return;
        }
        self.tab = (self.tab as isize + delta).rem_euclid(count) as usize;
        self.table = DrawState::default();
    }
}

/// Search text plus the choice filters of one list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    Accounts(AccountFilter),
    Contacts(ContactFilter),
    Leads(LeadFilter),
    Activities(ActivityFilter),
    Users(UserFilter),
}

impl ListFilter {
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Dashboard => None,
            Section::Leads => Some(Self::Leads(LeadFilter::default())),
            Section::Contacts => Some(Self::Contacts(ContactFilter::default())),
            Section::Accounts => Some(Self::Accounts(AccountFilter::default())),
            Section::Activities => Some(Self::Activities(ActivityFilter::default())),
            Section::Users => Some(Self::Users(UserFilter::default())),
        }
    }

    pub fn search(&self) -> &str {
        match self {
            Self::Accounts(f) => &f.search,
            Self::Contacts(f) => &f.search,
            Self::Leads(f) => &f.search,
            Self::Activities(f) => &f.search,
            Self::Users(f) => &f.search,
        }
    }

    pub fn search_mut(&mut self) -> &mut String {
        match self {
            Self::Accounts(f) => &mut f.search,
            Self::Contacts(f) => &mut f.search,
            Self::Leads(f) => &mut f.search,
            Self::Activities(f) => &mut f.search,
            Self::Users(f) => &mut f.search,
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Self::Accounts(_) => "Search accounts by name...",
            Self::Contacts(_) => "Search by name, email, company...",
            Self::Leads(_) => "Search leads...",
            Self::Activities(_) => "Search by subject...",
            Self::Users(_) => "Search by name or email...",
        }
    }

    /// Advance the first choice filter (`f`). Industries come from the store.
    pub fn cycle_primary(&mut self, store: &Store) -> bool {
        match self {
            Self::Accounts(f) => {
                let industries = store.industries();
                f.industry = match &f.industry {
                    None => industries.first().cloned(),
                    Some(current) => industries
                        .iter()
                        .position(|i| i == current)
                        .and_then(|index| industries.get(index + 1))
                        .cloned(),
                };
            }
            Self::Contacts(_) => return false,
            Self::Leads(f) => f.status = cycle_choice(f.status),
            Self::Activities(f) => f.kind = cycle_choice(f.kind),
            Self::Users(f) => f.role = cycle_choice(f.role),
        }
        true
    }

    /// Advance the second choice filter (`F`).
    pub fn cycle_secondary(&mut self) -> bool {
        match self {
            Self::Accounts(f) => f.account_type = cycle_choice(f.account_type),
            Self::Activities(f) => f.status = cycle_choice(f.status),
            Self::Users(f) => f.status = cycle_choice(f.status),
            Self::Contacts(_) | Self::Leads(_) => return false,
        }
        true
    }

    /// `(label, current value)` of each choice filter, for the filter bar.
    pub fn chips(&self) -> Vec<(&'static str, String)> {
        fn show<C: Choice>(value: Option<C>, all: &str) -> String {
            value.map_or_else(|| all.to_string(), |c| c.label().to_string())
        }
        match self {
            Self::Accounts(f) => vec![
                (
                    "Industry",
                    f.industry.clone().unwrap_or_else(|| "All Industries".to_string()),
                ),
                ("Type", show(f.account_type, "All Types")),
            ],
            Self::Contacts(_) => Vec::new(),
            Self::Leads(f) => vec![("Status", show(f.status, "All Statuses"))],
            Self::Activities(f) => vec![
                ("Type", show(f.kind, "All Types")),
                ("Status", show(f.status, "All Statuses")),
            ],
            Self::Users(f) => vec![
                ("Role", show(f.role, "All Roles")),
                ("Status", show(f.status, "All Statuses")),
            ],
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::Accounts(f) => f.is_active(),
            Self::Contacts(f) => f.is_active(),
            Self::Leads(f) => f.is_active(),
            Self::Activities(f) => f.is_active(),
            Self::Users(f) => f.is_active(),
        }
    }
}

/// The form behind a form screen.
#[derive(Debug, Clone)]
pub enum FormKind {
    Login(LoginForm),
    Account(AccountForm),
    Contact(ContactForm),
    Lead(LeadForm),
    User(UserForm),
}

impl FormKind {
    /// Empty create form for a section.
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Accounts => Some(Self::Account(AccountForm::default())),
            Section::Contacts => Some(Self::Contact(ContactForm::default())),
            Section::Leads => Some(Self::Lead(LeadForm::default())),
            Section::Users => Some(Self::User(UserForm::default())),
            Section::Dashboard | Section::Activities => None,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Login(_) => None,
            Self::Account(_) => Some(Section::Accounts),
            Self::Contact(_) => Some(Section::Contacts),
            Self::Lead(_) => Some(Section::Leads),
            Self::User(_) => Some(Section::Users),
        }
    }

    pub fn form(&self) -> &dyn Form {
        match self {
            Self::Login(form) => form,
            Self::Account(form) => form,
            Self::Contact(form) => form,
            Self::Lead(form) => form,
            Self::User(form) => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut dyn Form {
        match self {
            Self::Login(form) => form,
            Self::Account(form) => form,
            Self::Contact(form) => form,
            Self::Lead(form) => form,
            Self::User(form) => form,
        }
    }

    /// Insert the record into the store. `None` for the login form.
    pub fn submit(&self, store: &mut Store) -> Option<Result<(Record, Notice), CrmError>> {
        let submitted = match self {
            Self::Login(_) => return None,
            Self::Account(form) => form
                .submit(store)
                .map(|s| (Record::Account(s.record.id), s.notice)),
            Self::Contact(form) => form
                .submit(store)
                .map(|s| (Record::Contact(s.record.id), s.notice)),
            Self::Lead(form) => form.submit(store).map(|s| (Record::Lead(s.record.id), s.notice)),
            Self::User(form) => form.submit(store).map(|s| (Record::User(s.record.id), s.notice)),
        };
        Some(submitted)
    }
}

/// A form being edited, with the focused field and the last validation result.
#[derive(Debug, Clone)]
pub struct FormScreen {
    pub kind: FormKind,
    pub field: usize,
    pub errors: Option<ValidationErrors>,
}

impl FormScreen {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            field: 0,
            errors: None,
        }
    }

    pub fn login() -> Self {
        Self::new(FormKind::Login(LoginForm::default()))
    }

    /// Move focus `delta` fields, wrapping around.
    pub fn move_field(&mut self, delta: isize) {
        let count = self.kind.form().fields().len() as isize;
        if count > 0 {
            self.field = (self.field as isize + delta).rem_euclid(count) as usize;
        }
    }

    /// Error message for a field from the last submit.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.as_ref().and_then(|errors| errors.get(field))
    }
}

//! The table shown on each screen, with its rows taken from the store.

use std::cell::Cell;

use crm_lib::{
    Account, Activity, Contact, DashboardSummary, Lead, RecordFilter, RelatedKind, Store, User,
};
use crm_table::{Column, DataTable, EmptyState, TableView};
use serde::Serialize;

use crate::app::{DetailScreen, ListFilter, Record, Screen};
use crate::columns;

/// A screen table with its element type erased.
pub trait PageTable {
    /// Number of data rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn view(&self, loading: bool, loading_rows: usize) -> TableView;

    /// The record a row opens, if rows open anything.
    fn activate(&self, index: usize, loading: bool) -> Option<Record>;
}

/// Columns and rows for one table, plus what activating a row opens.
pub struct TableSource<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    open: Option<fn(&T) -> Record>,
    empty: EmptyState,
    caption: Option<String>,
}

impl<T> TableSource<T> {
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        Self {
            columns,
            rows,
            open: None,
            empty: EmptyState::default(),
            caption: None,
        }
    }

    pub fn open(mut self, open: fn(&T) -> Record) -> Self {
        self.open = Some(open);
        self
    }

    pub fn empty(mut self, empty: EmptyState) -> Self {
        self.empty = empty;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl<T: Serialize> PageTable for TableSource<T> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn view(&self, loading: bool, loading_rows: usize) -> TableView {
        let mut table = DataTable::new(&self.columns, &self.rows)
            .loading(loading)
            .loading_row_count(loading_rows)
            .empty_state(self.empty.clone());
        if let Some(caption) = &self.caption {
            table = table.caption(caption.as_str());
        }
        if self.open.is_some() {
            // Rows only render as activatable when a handler is attached.
            table = table.on_row_click(|_| {});
        }
        table.render()
    }

    fn activate(&self, index: usize, loading: bool) -> Option<Record> {
        let open = self.open?;
        let opened = Cell::new(None);
        let activated = DataTable::new(&self.columns, &self.rows)
            .loading(loading)
            .on_row_click(|row: &T| opened.set(Some(open(row))))
            .activate(index);
        if activated { opened.into_inner() } else { None }
    }
}

fn open_account(account: &Account) -> Record {
    Record::Account(account.id.clone())
}

fn open_contact(contact: &Contact) -> Record {
    Record::Contact(contact.id.clone())
}

fn open_lead(lead: &Lead) -> Record {
    Record::Lead(lead.id.clone())
}

fn open_user(user: &User) -> Record {
    Record::User(user.id.clone())
}

/// Activities open the record they are attached to.
fn open_related(activity: &Activity) -> Record {
    let id = activity.related_to.id.clone();
    match activity.related_to.kind {
        RelatedKind::Account => Record::Account(id),
        RelatedKind::Contact => Record::Contact(id),
        RelatedKind::Lead => Record::Lead(id),
    }
}

fn list_empty(noun: &str, filtered: bool) -> EmptyState {
    if filtered {
        EmptyState::new(format!("No {noun} match your filters"))
            .icon('⌕')
            .message("Try a different search or clear the filters.")
    } else {
        EmptyState::new(format!("No {noun} found"))
            .icon('∅')
            .message(format!("Get started by adding new {noun}."))
    }
}

fn related_empty(noun: &str, owner: &str) -> EmptyState {
    EmptyState::new(format!("No {noun} linked to this {owner}")).icon('∅')
}

/// The table on `screen`, if it has one.
pub fn for_screen(screen: &Screen, store: &Store) -> Option<Box<dyn PageTable>> {
    match screen {
        Screen::Dashboard(_) => {
            let summary = DashboardSummary::from_store(store);
            Some(Box::new(
                TableSource::new(columns::recent_activities(), summary.recent_activities)
                    .open(open_related)
                    .caption("Recent Activities")
                    .empty(EmptyState::new("No recent activity").icon('◷')),
            ))
        }
        Screen::List(list) => Some(list_table(&list.filter, store)),
        Screen::Detail(detail) => detail_table(detail, store),
        Screen::Login(_) | Screen::Create(_) => None,
    }
}

fn list_table(filter: &ListFilter, store: &Store) -> Box<dyn PageTable> {
    let filtered = filter.is_active();
    match filter {
        ListFilter::Accounts(f) => Box::new(
            TableSource::new(columns::accounts(), f.apply(store.accounts()))
                .open(open_account)
                .empty(list_empty("accounts", filtered)),
        ),
        ListFilter::Contacts(f) => Box::new(
            TableSource::new(columns::contacts(), f.apply(store.contacts()))
                .open(open_contact)
                .empty(list_empty("contacts", filtered)),
        ),
        ListFilter::Leads(f) => Box::new(
            TableSource::new(columns::leads(), f.apply(store.leads()))
                .open(open_lead)
                .empty(list_empty("leads", filtered)),
        ),
        ListFilter::Activities(f) => Box::new(
            TableSource::new(columns::activities(), f.apply(store.activities()))
                .open(open_related)
                .empty(list_empty("activities", filtered)),
        ),
        ListFilter::Users(f) => Box::new(
            TableSource::new(columns::users(), f.apply(store.users()))
                .open(open_user)
                .empty(list_empty("users", filtered)),
        ),
    }
}

fn detail_table(detail: &DetailScreen, store: &Store) -> Option<Box<dyn PageTable>> {
    if detail.tab >= detail.record.tabs().len() {
        return None;
    }
    let table: Box<dyn PageTable> = match &detail.record {
        Record::Account(id) => match detail.tab {
            0 => Box::new(
                TableSource::new(columns::contacts(), store.contacts_for_account(id))
                    .open(open_contact)
                    .empty(related_empty("contacts", "account")),
            ),
            1 => Box::new(
                TableSource::new(columns::leads(), store.leads_for_account(id))
                    .open(open_lead)
                    .empty(related_empty("leads", "account")),
            ),
            _ => Box::new(
                TableSource::new(columns::activities(), store.activities_for_account(id))
                    .open(open_related)
                    .empty(related_empty("activities", "account")),
            ),
        },
        Record::Contact(id) => match detail.tab {
            0 => Box::new(
                TableSource::new(columns::activities(), store.activities_for_contact(id))
                    .empty(related_empty("activities", "contact")),
            ),
            _ => Box::new(
                TableSource::new(columns::leads(), store.leads_for_contact(id))
                    .open(open_lead)
                    .empty(related_empty("leads", "contact")),
            ),
        },
        Record::Lead(id) => match detail.tab {
            0 => Box::new(
                TableSource::new(columns::activities(), store.activities_for_lead(id))
                    .empty(related_empty("activities", "lead")),
            ),
            _ => {
                let contacts = store
                    .lead(id)
                    .map(|lead| store.contacts_for_lead(lead))
                    .unwrap_or_default();
                Box::new(
                    TableSource::new(columns::contacts(), contacts)
                        .open(open_contact)
                        .empty(related_empty("contacts", "lead")),
                )
            }
        },
        Record::User(_) => return None,
    };
    Some(table)
}

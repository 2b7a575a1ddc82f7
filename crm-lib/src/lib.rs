//! CRM domain layer: records, a seeded session store, list filters, create
//! forms with validation, notices and a mock sign-in.
//!
//! # Example
//!
//! ```
//! use crm_lib::{RecordFilter, LeadFilter, LeadStatus, Store};
//!
//! let store = Store::seeded();
//! let filter = LeadFilter {
//!     status: Some(LeadStatus::Qualified),
//!     ..LeadFilter::default()
//! };
//! let leads = filter.apply(store.leads());
//! assert_eq!(leads.len(), 1);
//! assert_eq!(leads[0].name, "Beta Solutions Demo Request");
//! ```

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod form;
pub mod model;
pub mod notice;
pub mod store;

pub use auth::{Session, authenticate};
pub use dashboard::{DashboardSummary, Stat};
pub use error::{CrmError, FieldValidationError, ValidationErrors};
pub use filter::{AccountFilter, ActivityFilter, ContactFilter, LeadFilter, RecordFilter, UserFilter};
pub use form::{AccountForm, ContactForm, FieldKind, FieldSpec, Form, LeadForm, LoginForm, Submitted, UserForm};
pub use model::*;
pub use notice::{Notice, NoticeStatus};
pub use store::Store;

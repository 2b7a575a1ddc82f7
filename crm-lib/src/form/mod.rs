//! Create forms and their validation
//!
//! Forms hold raw text input. `validate` turns them into a record draft or a
//! [`ValidationErrors`] listing the first failure of each field, in field
//! order. `submit` additionally inserts the record into the [`Store`].
//!
//! [`Store`]: crate::store::Store

mod account;
mod contact;
mod lead;
mod login;
mod user;

pub use account::*;
pub use contact::*;
pub use lead::*;
pub use login::*;
pub use user::*;

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{FieldValidationError, ValidationErrors};
use crate::notice::Notice;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("Invalid email pattern"));

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// A successfully submitted form.
#[derive(Debug, Clone)]
pub struct Submitted<T> {
    pub record: T,
    pub notice: Notice,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked text.
    Secret,
    /// Multi-line free text.
    TextArea,
    /// One of a fixed list of labels.
    Choice(&'static [&'static str]),
    /// An account picked from the store, or none.
    AccountRef,
    /// An on/off switch.
    Toggle,
}

/// Describes one input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            kind: FieldKind::Text,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Uniform access to a form's inputs, for generic editors.
pub trait Form {
    /// Title shown above the form.
    fn title(&self) -> &'static str;

    /// The inputs, in display order.
    fn fields(&self) -> &'static [FieldSpec];

    /// Current text of a field; `None` for unknown or toggle fields.
    fn value(&self, field: &str) -> Option<&str>;

    /// Mutable text of a field; `None` for unknown or toggle fields.
    fn value_mut(&mut self, field: &str) -> Option<&mut String>;

    /// State of a toggle field.
    fn flag(&self, _field: &str) -> Option<bool> {
        None
    }

    /// Flip a toggle field. Returns `false` if there is no such toggle.
    fn toggle(&mut self, _field: &str) -> bool {
        false
    }
}

/// Collects the first failure of each field.
///
/// # Example
///
/// ```ignore
/// let mut v = Validator::new();
/// v.field("email", &self.email)
///     .required("Email is required.")
///     .email("Invalid email format.");
/// v.finish(notice)?;
/// ```
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start checking a field.
    pub(crate) fn field<'v>(&'v mut self, name: &'static str, value: &'v str) -> FieldCheck<'v> {
        FieldCheck {
            errors: &mut self.errors,
            name,
            value,
            failed: false,
        }
    }

    /// Record a failure that does not belong to a single rule chain.
    pub(crate) fn fail(&mut self, name: &'static str, message: impl Into<String>) {
        if !self.errors.iter().any(|e| e.field == name) {
            self.errors.push(FieldValidationError::new(name, message));
        }
    }

    pub(crate) fn has_error(&self, name: &str) -> bool {
        self.errors.iter().any(|e| e.field == name)
    }

    /// Ok if nothing failed, otherwise every failure with `notice`.
    pub(crate) fn finish(self, notice: Notice) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                fields: self.errors,
                notice,
            })
        }
    }
}

/// Rule chain for a single field; rules after the first failure are skipped.
pub(crate) struct FieldCheck<'v> {
    errors: &'v mut Vec<FieldValidationError>,
    name: &'static str,
    value: &'v str,
    failed: bool,
}

impl FieldCheck<'_> {
    /// Add a custom rule. Empty values are left to `required`.
    pub(crate) fn rule(mut self, f: impl FnOnce(&str) -> bool, msg: impl Into<String>) -> Self {
        if !self.failed && !self.value.trim().is_empty() && !f(self.value.trim()) {
            self.errors.push(FieldValidationError::new(self.name, msg));
            self.failed = true;
        }
        self
    }

    /// Require a non-blank value.
    pub(crate) fn required(mut self, msg: impl Into<String>) -> Self {
        if !self.failed && self.value.trim().is_empty() {
            self.errors.push(FieldValidationError::new(self.name, msg));
            self.failed = true;
        }
        self
    }

    /// Require a valid email address.
    pub(crate) fn email(self, msg: impl Into<String>) -> Self {
        self.rule(is_valid_email, msg)
    }

    /// Require a decimal number.
    pub(crate) fn decimal(self, msg: impl Into<String>) -> Self {
        self.rule(|v| Decimal::from_str(v).is_ok(), msg)
    }

    /// Require a decimal that is not negative. Non-numbers pass; chain after `decimal`.
    pub(crate) fn non_negative(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| match Decimal::from_str(v) {
                Ok(d) => d >= Decimal::ZERO,
                Err(_) => true,
            },
            msg,
        )
    }
}

/// Parses an optional decimal input; blank is `None`.
pub(crate) fn optional_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Decimal::from_str(value).ok()
    }
}

/// Trimmed text, or `None` when blank.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

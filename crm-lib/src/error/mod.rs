//! Error types

mod validation;

pub use validation::*;

use crate::notice::{Notice, SHORT_NOTICE_DURATION};

/// Errors produced by the CRM domain layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CrmError {
    /// No record of the given kind has this id.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Record kind (e.g. "account").
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A form failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Sign-in was refused.
    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl CrmError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    /// The notice to show the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotFound { kind, id } => Notice::error("Not Found", format!("No {} with id {}.", kind, id)),
            Self::Validation(errors) => errors.notice.clone(),
            Self::Authentication(message) => {
                Notice::error("Sign-in Failed", message.clone()).with_duration(SHORT_NOTICE_DURATION)
            }
        }
    }
}

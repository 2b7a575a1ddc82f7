//! Mock sign-in
//!
//! There is no backend: any active user may sign in with their email, and
//! the password is only checked for presence.

use log::{info, warn};

use crate::error::CrmError;
use crate::form::LoginForm;
use crate::model::User;
use crate::notice::Notice;
use crate::store::Store;

/// A signed-in user.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub remember_me: bool,
    /// Welcome notice to show after signing in.
    pub notice: Notice,
}

/// Validates the form, then looks the user up by email (case-insensitive).
pub fn authenticate(form: &LoginForm, store: &Store) -> Result<Session, CrmError> {
    let credentials = form.validate()?;

    let Some(user) = store.user_by_email(&credentials.email) else {
        warn!("Sign-in refused: unknown email {}", credentials.email);
        return Err(CrmError::Authentication(format!(
            "No user found for {}.",
            credentials.email
        )));
    };

    if !user.is_active() {
        warn!("Sign-in refused: user {} is inactive", user.id);
        return Err(CrmError::Authentication(format!(
            "{}'s account is inactive.",
            user.name
        )));
    }

    info!("Signed in as {} ({})", user.name, user.id);
    Ok(Session {
        user: user.clone(),
        remember_me: credentials.remember_me,
        notice: Notice::success("Signed In", format!("Welcome back, {}.", user.name)),
    })
}

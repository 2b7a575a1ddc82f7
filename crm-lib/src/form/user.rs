//! New user form

use super::{FieldKind, FieldSpec, Form, Submitted, Validator};
use crate::error::{CrmError, ValidationErrors};
use crate::model::{Choice, Role, User, UserStatus};
use crate::notice::Notice;
use crate::store::Store;

pub const ROLE_OPTIONS: &[&str] = &["Administrator", "Sales Manager", "Sales Representative"];

pub const USER_STATUS_OPTIONS: &[&str] = &["Active", "Inactive"];

const PASSWORD_MISMATCH: &str = "Passwords do not match";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("first_name", "First Name").required(),
    FieldSpec::text("last_name", "Last Name").required(),
    FieldSpec::text("email", "Email Address").required(),
    FieldSpec::text("role", "Role")
        .required()
        .kind(FieldKind::Choice(ROLE_OPTIONS)),
    FieldSpec::text("password", "Password").required().kind(FieldKind::Secret),
    FieldSpec::text("confirm_password", "Confirm Password")
        .required()
        .kind(FieldKind::Secret),
    FieldSpec::text("status", "Status").kind(FieldKind::Choice(USER_STATUS_OPTIONS)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
    pub status: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            status: UserStatus::Active.label().to_string(),
        }
    }
}

impl UserForm {
    /// Checks every field and builds a user without an id.
    ///
    /// A password mismatch reports a "Password Mismatch" notice instead of
    /// the generic one.
    pub fn validate(&self) -> Result<User, ValidationErrors> {
        let mut v = Validator::new();
        v.field("first_name", &self.first_name).required("First name is required.");
        v.field("last_name", &self.last_name).required("Last name is required.");
        v.field("email", &self.email)
            .required("Email is required.")
            .email("Invalid email format.");
        v.field("role", &self.role)
            .required("Role is required.")
            .rule(|r| Role::from_label(r).is_some(), "Role is required.");
        v.field("password", &self.password).required("Password is required.");
        v.field("confirm_password", &self.confirm_password)
            .required("Please confirm the password.");
        let mismatch =
            !v.has_error("password") && !v.has_error("confirm_password") && self.password != self.confirm_password;
        if mismatch {
            v.fail("confirm_password", PASSWORD_MISMATCH);
        }

        let notice = if mismatch {
            Notice::error("Password Mismatch", "Passwords do not match. Please check and try again.")
        } else {
            Notice::error("Validation Error", "Please check the form for errors.")
        };
        v.finish(notice)?;

        Ok(User {
            id: String::new(),
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            role: Role::from_label(&self.role).unwrap_or(Role::SalesRepresentative),
            status: UserStatus::from_label(&self.status).unwrap_or(UserStatus::Active),
            last_login: None,
        })
    }

    /// Validates and adds the user to the session store.
    pub fn submit(&self, store: &mut Store) -> Result<Submitted<User>, CrmError> {
        let user = store.insert_user(self.validate()?).clone();
        let notice = Notice::success(
            "User Created",
            format!("User {} has been successfully created (simulated).", user.name),
        );
        Ok(Submitted { record: user, notice })
    }
}

impl Form for UserForm {
    fn title(&self) -> &'static str {
        "Add New User"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "role" => &self.role,
            "password" => &self.password,
            "confirm_password" => &self.confirm_password,
            "status" => &self.status,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "first_name" => Some(&mut self.first_name),
            "last_name" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "role" => Some(&mut self.role),
            "password" => Some(&mut self.password),
            "confirm_password" => Some(&mut self.confirm_password),
            "status" => Some(&mut self.status),
            _ => None,
        }
    }
}

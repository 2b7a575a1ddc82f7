//! Sign-in form

use super::{FieldKind, FieldSpec, Form, Validator};
use crate::error::ValidationErrors;
use crate::notice::{Notice, SHORT_NOTICE_DURATION};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("email", "Email Address").required(),
    FieldSpec::text("password", "Password").required().kind(FieldKind::Secret),
    FieldSpec::text("remember_me", "Remember me").kind(FieldKind::Toggle),
];

/// Validated sign-in input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut v = Validator::new();
        v.field("email", &self.email)
            .required("Email is required.")
            .email("Invalid email format.");
        v.field("password", &self.password).required("Password is required.");
        v.finish(
            Notice::error("Validation Error", "Please check your email and password.")
                .with_duration(SHORT_NOTICE_DURATION),
        )?;

        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }
}

impl Form for LoginForm {
    fn title(&self) -> &'static str {
        "Sign In"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(self.email.as_str()),
            "password" => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn value_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        (field == "remember_me").then_some(self.remember_me)
    }

    fn toggle(&mut self, field: &str) -> bool {
        if field == "remember_me" {
            self.remember_me = !self.remember_me;
            true
        } else {
            false
        }
    }
}

//! Terminal front end of the CRM desk.
//!
//! [`App`] holds all state and is driven by [`App::handle_event`] and
//! [`App::tick`]; [`runtime::run`] connects it to a real terminal.

pub mod app;
pub mod columns;
pub mod config;
pub mod error;
pub mod paths;
pub mod runtime;
pub mod tables;
pub mod view;

pub use app::App;
pub use config::{Config, ConfigError};
pub use error::AppError;

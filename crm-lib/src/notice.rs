//! Transient user-facing notices (toasts)

use std::time::Duration;

use crm_ui::Tone;

/// Default duration for notices.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Shorter duration used for sign-in and status-change feedback.
pub const SHORT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeStatus {
    pub fn tone(self) -> Tone {
        match self {
            Self::Success => Tone::Green,
            Self::Error => Tone::Red,
            Self::Warning => Tone::Orange,
            Self::Info => Tone::Blue,
        }
    }
}

/// A short message shown to the user for a limited time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use crm_lib::{Notice, NoticeStatus};
///
/// let notice = Notice::success("Account Created", "Acme has been successfully created. (Mock)");
/// assert_eq!(notice.status, NoticeStatus::Success);
/// assert_eq!(notice.duration, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub status: NoticeStatus,
    pub duration: Duration,
}

impl Notice {
    pub fn new(status: NoticeStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeStatus::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeStatus::Error, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeStatus::Warning, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeStatus::Info, title, description)
    }

    /// Set a custom duration for this notice.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

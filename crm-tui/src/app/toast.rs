//! Transient notices in the corner of the screen.

use std::time::Instant;

use crm_lib::Notice;
use log::debug;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice, now: Instant) {
        debug!("toast: {} ({:?})", notice.title, notice.status);
        let expires_at = now + notice.duration;
        self.items.push(Toast { notice, expires_at });
    }

    /// Drop expired toasts. Returns whether any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.expires_at > now);
        self.items.len() != before
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.items.iter().map(|toast| toast.expires_at).min()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|toast| toast.notice.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_expiry_follows_duration() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push(Notice::info("Short", "").with_duration(Duration::from_secs(3)), now);
        toasts.push(Notice::info("Long", ""), now);

        assert_eq!(toasts.next_expiry(), Some(now + Duration::from_secs(3)));
        assert!(!toasts.expire(now + Duration::from_secs(2)));
        assert!(toasts.expire(now + Duration::from_secs(3)));
        assert_eq!(toasts.titles(), vec!["Long"]);
        assert!(toasts.expire(now + Duration::from_secs(5)));
        assert!(toasts.is_empty());
        assert_eq!(toasts.next_expiry(), None);
    }
}

use std::{borrow::Cow, time::Instant};

use crate::constants::NOTIFICATION_TIMEOUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown over the UI until it expires.
#[derive(Debug, Clone)]
pub struct Notification {
    kind: NotificationKind,
    message: Cow<'static, str>,
    expires_at: Instant,
}

impl Notification {
    fn new<M: Into<Cow<'static, str>>>(kind: NotificationKind, message: M, now: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: now + NOTIFICATION_TIMEOUT,
        }
    }

    pub fn success<M: Into<Cow<'static, str>>>(message: M, now: Instant) -> Self {
        Self::new(NotificationKind::Success, message, now)
    }

    pub fn error<M: Into<Cow<'static, str>>>(message: M, now: Instant) -> Self {
        Self::new(NotificationKind::Error, message, now)
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

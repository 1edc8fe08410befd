use std::time::Duration;

use log::debug;

use crate::constants::NOTIFICATION_LIFETIME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Icon name rendered next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "alert-circle",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    age: Duration,
}

impl Notification {
    pub fn age(&self) -> Duration {
        self.age
    }
}

/// Toast area showing at most one notification at a time.
#[derive(Debug, Clone)]
pub struct Notifications {
    current: Option<Notification>,
    lifetime: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_LIFETIME)
    }
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces whatever is showing.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        debug!("Notification ({:?}): {}", kind, message);
        self.current = Some(Notification {
            message,
            kind,
            age: Duration::ZERO,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn update(&mut self, dt: Duration) {
        let expired = match self.current.as_mut() {
            Some(notification) => {
                notification.age += dt;
                notification.age >= self.lifetime
            }
            None => false,
        };
        if expired {
            self.current = None;
        }
    }
}

use std::time::{Duration, Instant};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    #[default]
    Info,
    Warning,
    Error,
}

impl NotificationType {
    /// `None` keeps the notification until it is replaced
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(6)),
            NotificationType::Error => None,
        }
    }

    pub fn colors(self) -> &'static theme::notification::NotificationColors {
        match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
            NotificationType::Error => &theme::notification::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration
            .is_some_and(|duration| self.created_at.elapsed() > duration)
    }
}

/// At most one notification at a time; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        self.current = Some(Notification::new(message, notification_type));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn current_type(&self) -> Option<NotificationType> {
        self.current.as_ref().map(|n| n.notification_type)
    }
}

//! Reminder dispatch stub and transient notifications.
//!
//! Actual delivery (email, SMS) is out of scope; the services only need a
//! collaborator to call and a success/failure notification to hand back.

/// Outcome surfaced to the user as a transient toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Collaborator that delivers a reminder for a request.
pub trait ReminderSink {
    fn send_reminder(&self, request_id: &str) -> Result<(), String>;
}

/// Default sink: logs the reminder and reports success.
pub struct LogReminderSink;

impl ReminderSink for LogReminderSink {
    fn send_reminder(&self, request_id: &str) -> Result<(), String> {
        tracing::info!(request_id, "Sending reminder");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_reports_success() {
        assert!(LogReminderSink.send_reminder("req1").is_ok());
    }

    #[test]
    fn notification_constructors_set_kind() {
        assert_eq!(
            Notification::success("ok").kind,
            NotificationKind::Success
        );
        assert_eq!(Notification::error("nope").kind, NotificationKind::Error);
    }
}

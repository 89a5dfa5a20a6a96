//! Transient status messages shown after user actions.

use serde::Serialize;

/// Shown after a settings document is applied.
pub const SETTINGS_APPLIED: &str = "Settings applied successfully!";
/// Shown when a settings document cannot be decoded.
pub const SETTINGS_INVALID: &str = "Invalid JSON format. Please check your input.";
/// Shown after the settings are exported for copying.
pub const SETTINGS_EXPORTED: &str = "Settings copied to clipboard!";

/// Whether a status reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// A message that expires after a fixed amount of session time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    remaining: f64,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>, duration: f64) -> Self {
        Self::new(text, StatusKind::Success, duration)
    }

    pub fn error(text: impl Into<String>, duration: f64) -> Self {
        Self::new(text, StatusKind::Error, duration)
    }

    fn new(text: impl Into<String>, kind: StatusKind, duration: f64) -> Self {
        Self {
            text: text.into(),
            kind,
            remaining: duration.max(0.0),
        }
    }

    /// Seconds left before the message disappears.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Count down by `elapsed` seconds.
    pub(crate) fn age(&mut self, elapsed: f64) {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.remaining -= elapsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let mut status = StatusMessage::success(SETTINGS_APPLIED, 3.0);
        status.age(2.0);
        assert!(!status.is_expired());
        assert_eq!(status.remaining(), 1.0);
        status.age(1.0);
        assert!(status.is_expired());
    }

    #[test]
    fn test_bad_elapsed_is_ignored() {
        let mut status = StatusMessage::error(SETTINGS_INVALID, 3.0);
        status.age(-1.0);
        status.age(f64::NAN);
        assert_eq!(status.remaining(), 3.0);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let status = StatusMessage::error("boom", 1.0);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["kind"], "error");
    }
}

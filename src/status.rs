//! Transient status-bar notices that fall back to "Ready" after a delay

use std::time::{Duration, Instant};

pub const READY: &str = "Ready";

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    revert_at: Option<Instant>,
    delay: Duration,
}

impl StatusLine {
    pub fn new(delay: Duration) -> Self {
        Self {
            message: READY.to_string(),
            revert_at: None,
            delay,
        }
    }

    /// Show `message` until `now + delay`. A pending revert from an earlier
    /// message is replaced, so the new message always gets the full delay.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.revert_at = Some(now + self.delay);
    }

    /// Text to display at `now`
    pub fn text(&self, now: Instant) -> &str {
        match self.revert_at {
            Some(at) if now >= at => READY,
            _ => &self.message,
        }
    }

    /// Most recent message, regardless of expiry
    pub fn last_message(&self) -> &str {
        &self.message
    }

    /// Apply an expired revert. Returns true when the text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(at) if now >= at => {
                self.revert_at = None;
                self.message = READY.to_string();
                true
            }
            _ => false,
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

//! Modal notice state (success, error, warning, progress).
//!
//! DESIGN
//! ======
//! One notice is visible at a time. Each `show` bumps a sequence number so an
//! auto-dismiss timer started for an older notice cannot close a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a success notice stays up before closing itself.
pub const SUCCESS_DISMISS_MS: u32 = 1200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    /// A long-running request is in flight; not dismissible.
    Progress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: Option<String>,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str) -> Self {
        Self { level, title: title.to_owned(), text: None, auto_dismiss_ms: None }
    }

    pub fn success(title: &str) -> Self {
        Self::new(NoticeLevel::Success, title)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, "Error").with_text(text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, "Warning").with_text(text)
    }

    pub fn progress(title: &str) -> Self {
        Self::new(NoticeLevel::Progress, title)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_auto_dismiss(mut self, ms: u32) -> Self {
        self.auto_dismiss_ms = Some(ms);
        self
    }

    pub fn dismissible(&self) -> bool {
        self.level != NoticeLevel::Progress
    }
}

/// The currently displayed notice, if any.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace any visible notice; returns the new notice's sequence number.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if `seq` is still the visible notice.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}

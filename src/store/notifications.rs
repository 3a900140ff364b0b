// SPDX-License-Identifier: MPL-2.0
//! Notification banner slice: visibility flag plus the notice being shown.

use std::time::{Duration, Instant};

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s).
    #[default]
    Success,
    /// Informational message (3s).
    Info,
    /// Warning that doesn't block operation (5s).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A message for the banner, resolved through i18n at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notice {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn shown_at(mut self, at: Instant) -> Self {
        self.shown_at = at;
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the notice has outlived its display time at `now`.
    /// `dismiss_after` overrides the severity default.
    #[must_use]
    pub fn is_expired(&self, now: Instant, dismiss_after: Option<Duration>) -> bool {
        match dismiss_after.or_else(|| self.severity.auto_dismiss_duration()) {
            Some(limit) => now.saturating_duration_since(self.shown_at) >= limit,
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Shows `notice`, replacing whatever was displayed.
    Show(Notice),
    /// Sets the visibility flag without touching the notice.
    SetVisible(bool),
    /// Hides and forgets the current notice.
    Dismiss,
    /// Hides the notice if it expired by `now`. A visible flag without a
    /// notice is always cleared.
    Expire(Instant),
}

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    show: bool,
    notice: Option<Notice>,
    dismiss_after: Option<Duration>,
}

impl NotificationsState {
    #[must_use]
    pub fn with_dismiss_after(dismiss_after: Option<Duration>) -> Self {
        Self {
            dismiss_after,
            ..Self::default()
        }
    }

    /// The visibility flag handed to the overlay.
    #[must_use]
    pub fn show(&self) -> bool {
        self.show
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::Show(notice) => {
                self.notice = Some(notice);
                self.show = true;
                true
            }
            Action::SetVisible(show) => {
                let changed = self.show != show;
                self.show = show;
                changed
            }
            Action::Dismiss => {
                let changed = self.show || self.notice.is_some();
                self.show = false;
                self.notice = None;
                changed
            }
            Action::Expire(now) => {
                // A flag raised without a notice has nothing to show.
                let expired = self.show
                    && self
                        .notice
                        .as_ref()
                        .is_none_or(|notice| notice.is_expired(now, self.dismiss_after));
                if expired {
                    self.show = false;
                    self.notice = None;
                }
                expired
            }
        }
    }
}

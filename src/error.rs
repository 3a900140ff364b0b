// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    PageLoad(PageLoadError),
}

/// Failure raised while bringing a page body into the route outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoadError {
    /// Stable page name (e.g. `task-detail`), used in logs.
    pub page: &'static str,
    /// Human-readable reason, never shown untranslated in the UI.
    pub reason: String,
}

impl PageLoadError {
    pub fn new(page: &'static str, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }

    /// Returns the i18n message key shown in the outlet for this failure.
    pub fn i18n_key(&self) -> &'static str {
        "page-load-error"
    }
}

impl fmt::Display for PageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page '{}' failed to load: {}", self.page, self.reason)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::PageLoad(e) => write!(f, "Page Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PageLoadError> for Error {
    fn from(err: PageLoadError) -> Self {
        Error::PageLoad(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn page_load_error_names_the_page() {
        let err: Error = PageLoadError::new("settings", "module missing").into();
        let rendered = format!("{}", err);
        assert!(rendered.contains("'settings'"));
        assert!(rendered.contains("module missing"));
    }

    #[test]
    fn page_load_error_has_outlet_key() {
        let err = PageLoadError::new("task-list", "boom");
        assert_eq!(err.i18n_key(), "page-load-error");
    }
}

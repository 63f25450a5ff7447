//! Error type shared by the navbar fade controller and its page hosts.

use thiserror::Error;

/// Failures raised while wiring the controller to a page.
///
/// Per-event paths (scroll, resize) never return these to the caller; they
/// are logged and the previously applied state stays in place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FadeError {
    #[error("no browser window is available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("could not update class `{class}`: {reason}")]
    ClassList { class: String, reason: String },

    #[error("viewport metric `{metric}` unavailable: {reason}")]
    Metric { metric: &'static str, reason: String },

    #[error("failed to register `{signal}` listener: {reason}")]
    Listener { signal: &'static str, reason: String },

    #[error("invalid navbar fade config: {0}")]
    Config(String),

    #[error("failed to parse navbar fade config: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, FadeError>;

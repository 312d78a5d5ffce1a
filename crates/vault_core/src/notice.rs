//! Human-readable outcome messages forwarded to the toast surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual weight of a notice.
pub enum NoticeLevel {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Operation failed.
    Error,
}

impl NoticeLevel {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A message produced by a registry operation.
pub struct Notice {
    /// Visual weight.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

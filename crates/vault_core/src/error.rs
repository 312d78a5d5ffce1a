//! Registry error types.

use thiserror::Error;

use crate::model::FileId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry errors for operations that reference a file no longer present.
pub enum RegistryError {
    /// The file id is not live (never issued, or already removed).
    #[error("{0} not found")]
    NotFound(FileId),
}

impl RegistryError {
    /// Short user-facing text for notices.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "File not found",
        }
    }
}

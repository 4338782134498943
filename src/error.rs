//! Client error type.
//!
//! Every backend failure is reported as a single error kind carrying the
//! [`Action`] that failed. Its `Display` text is what ends up in the toast.

use thiserror::Error;

/// The user-visible operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadNotes,
    LoadCategories,
    Search,
    CreateNote,
    UpdateNote,
    DeleteNote,
    LoadStats,
}

impl Action {
    /// Fixed message shown when this action fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::LoadNotes => "Failed to load notes",
            Action::LoadCategories => "Failed to load categories",
            Action::Search => "Search failed",
            Action::CreateNote => "Failed to create note",
            Action::UpdateNote => "Failed to update note",
            Action::DeleteNote => "Failed to delete note",
            Action::LoadStats => "Failed to load stats",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, ...).
    #[error("{action}: {source}")]
    Transport {
        action: Action,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{action}")]
    Status { action: Action, status: u16 },

    /// A 2xx response whose body was not the expected JSON.
    #[error("{action}: invalid response ({source})")]
    Decode {
        action: Action,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

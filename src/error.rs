//! Unified pipeline error type used across all phases.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. Every variant names the offending entity where one
/// exists; none of them leaves a partial output artifact behind.
#[derive(Debug, Error)]
pub enum OrgError {
    /// The source document is not a valid org description.
    #[error("invalid org input: {0}")]
    Input(String),

    /// The same role id appears more than once across all groups.
    #[error("duplicate role id '{0}'")]
    DuplicateRoleId(String),

    /// A role reports to an id that matches no known role.
    #[error("role '{role}' reports to unknown role '{parent}'")]
    DanglingParent { role: String, parent: String },

    /// A role sits on a reporting cycle, or is otherwise unreachable from
    /// every root of the hierarchy.
    #[error("role '{0}' is part of a reporting cycle or unreachable from any root")]
    CyclicOrUnreachable(String),

    /// Defense in depth: the tree builder refuses to recurse forever if an
    /// invalid hierarchy slips past validation.
    #[error("hierarchy exceeds maximum depth of {max} at role '{role}'")]
    ExcessiveDepth { role: String, max: usize },

    /// Payload serialization failed.
    #[error("payload encode: {0}")]
    Encode(#[from] serde_json::Error),

    /// Source unreadable or destination unwritable.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filesystem watcher could not be set up.
    #[error("file watcher: {0}")]
    Watch(#[from] notify::Error),
}

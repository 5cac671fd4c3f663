use pod_rdf::RdfError;
use thiserror::Error;

use crate::ResourceIdentifier;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The requested document does not exist
    #[error("Resource not found: {0}")]
    NotFound(ResourceIdentifier),

    /// The backend failed for a reason other than absence
    #[error("Storage backend error reading {identifier}: {message}")]
    Backend {
        /// The identifier being read
        identifier: ResourceIdentifier,
        /// Description of the underlying failure
        message: String,
    },

    /// The document exists but its contents are not valid statements
    #[error("Malformed document {identifier}: {source}")]
    Malformed {
        /// The identifier being read
        identifier: ResourceIdentifier,
        /// The parse failure
        #[source]
        source: RdfError,
    },

    /// The identifier is not part of the hierarchy managed by a strategy
    #[error("Identifier {0} is outside of the configured hierarchy")]
    Unsupported(ResourceIdentifier),

    /// A parent was requested for a root container
    #[error("Cannot obtain the parent of {0} because it is a root container")]
    RootContainer(ResourceIdentifier),

    /// A subject was requested for an identifier that is not auxiliary
    #[error("{0} is not an auxiliary identifier")]
    NotAuxiliary(ResourceIdentifier),
}

impl StorageError {
    /// True if this error only signals that a document is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

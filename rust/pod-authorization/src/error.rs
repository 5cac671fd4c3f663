use std::collections::BTreeSet;

use pod_rdf::RdfError;
use pod_storage::{ResourceIdentifier, StorageError};
use thiserror::Error;

use crate::AccessMode;

/// Errors that can occur while resolving or enforcing permissions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthorizationError {
    /// The root container has no access control document, so nothing below
    /// it can be authorized
    #[error("No access control document found for root container {0}")]
    MissingRootPolicy(ResourceIdentifier),

    /// A document read failed for a reason other than absence, or a document
    /// vanished between being found and being read
    #[error("Error reading access control document {identifier}: {source}")]
    BackendFailure {
        /// The document being read
        identifier: ResourceIdentifier,
        /// The underlying failure
        #[source]
        source: StorageError,
    },

    /// A document exists but could not be parsed
    #[error("Malformed access control document {identifier}: {source}")]
    MalformedDocument {
        /// The document being read
        identifier: ResourceIdentifier,
        /// The parse failure
        #[source]
        source: RdfError,
    },

    /// The identifier hierarchy could not answer a question about a target
    #[error("Identifier hierarchy error: {0}")]
    Hierarchy(#[source] StorageError),

    /// Access was denied to a request that asserted no agent
    #[error("Unauthenticated access to {identifier} denied for modes {modes:?}")]
    Unauthorized {
        /// The target that was denied
        identifier: ResourceIdentifier,
        /// The modes that were missing
        modes: BTreeSet<AccessMode>,
    },

    /// Access was denied to a request that asserted an agent
    #[error("Access to {identifier} forbidden for modes {modes:?}")]
    Forbidden {
        /// The target that was denied
        identifier: ResourceIdentifier,
        /// The modes that were missing
        modes: BTreeSet<AccessMode>,
    },

    /// The authorization configuration is invalid
    #[error("Invalid authorization configuration: {0}")]
    Configuration(String),
}

/// The discriminant of an [AuthorizationError], for callers that branch on
/// the kind of failure rather than its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationErrorKind {
    /// See [AuthorizationError::MissingRootPolicy]
    MissingRootPolicy,
    /// See [AuthorizationError::BackendFailure]
    BackendFailure,
    /// See [AuthorizationError::MalformedDocument]
    MalformedDocument,
    /// See [AuthorizationError::Hierarchy]
    Hierarchy,
    /// See [AuthorizationError::Unauthorized]
    Unauthorized,
    /// See [AuthorizationError::Forbidden]
    Forbidden,
    /// See [AuthorizationError::Configuration]
    Configuration,
}

impl AuthorizationError {
    /// The kind of this error
    pub fn kind(&self) -> AuthorizationErrorKind {
        match self {
            AuthorizationError::MissingRootPolicy(_) => AuthorizationErrorKind::MissingRootPolicy,
            AuthorizationError::BackendFailure { .. } => AuthorizationErrorKind::BackendFailure,
            AuthorizationError::MalformedDocument { .. } => {
                AuthorizationErrorKind::MalformedDocument
            }
            AuthorizationError::Hierarchy(_) => AuthorizationErrorKind::Hierarchy,
            AuthorizationError::Unauthorized { .. } => AuthorizationErrorKind::Unauthorized,
            AuthorizationError::Forbidden { .. } => AuthorizationErrorKind::Forbidden,
            AuthorizationError::Configuration(_) => AuthorizationErrorKind::Configuration,
        }
    }

    /// Classify a failed document read. Absence is not special-cased here;
    /// callers that tolerate it must check before converting.
    pub fn from_read(identifier: &ResourceIdentifier, error: StorageError) -> Self {
        match error {
            StorageError::Malformed { source, .. } => AuthorizationError::MalformedDocument {
                identifier: identifier.clone(),
                source,
            },
            source => AuthorizationError::BackendFailure {
                identifier: identifier.clone(),
                source,
            },
        }
    }
}

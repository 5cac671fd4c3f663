use std::sync::Arc;

use async_trait::async_trait;
use pod_rdf::Graph;

use crate::{ResourceIdentifier, StorageError};

mod memory;
pub use memory::*;

mod measure;
pub use measure::*;

/// A [StatementReader] is a read-only facade over a document store that
/// returns documents as parsed statements.
///
/// Implementations must report an absent document as
/// [StorageError::NotFound] and any other failure as a different variant.
#[async_trait]
pub trait StatementReader: Send + Sync {
    /// Check whether a document exists without reading it
    async fn has_resource(&self, identifier: &ResourceIdentifier) -> Result<bool, StorageError>;

    /// Read and parse the document stored at `identifier`
    async fn get_statements(&self, identifier: &ResourceIdentifier) -> Result<Graph, StorageError>;
}

#[async_trait]
impl<T> StatementReader for Arc<T>
where
    T: StatementReader + ?Sized,
{
    async fn has_resource(&self, identifier: &ResourceIdentifier) -> Result<bool, StorageError> {
        self.as_ref().has_resource(identifier).await
    }

    async fn get_statements(&self, identifier: &ResourceIdentifier) -> Result<Graph, StorageError> {
        self.as_ref().get_statements(identifier).await
    }
}

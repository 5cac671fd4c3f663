use std::{collections::HashMap, sync::Arc};

use pod_rdf::Graph;
use pod_storage::{ResourceIdentifier, StatementReader};

use crate::AuthorizationError;

/// How [DocumentCache::load] treats a document that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Absent {
    /// Treat the document as empty
    Empty,
    /// Fail with [AuthorizationError::BackendFailure]
    Fail,
}

/// A [DocumentCache] remembers the documents read during one resolution so
/// that targets sharing a document trigger a single read.
///
/// A cache is created at the start of a `resolve` call, passed by mutable
/// reference to whatever needs documents, and dropped when the call returns.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: HashMap<ResourceIdentifier, Arc<Graph>>,
}

impl DocumentCache {
    /// Return the document at `identifier`, reading it from `reader` only if
    /// this cache has not seen it yet.
    pub async fn load<R>(
        &mut self,
        reader: &R,
        identifier: &ResourceIdentifier,
        absent: Absent,
    ) -> Result<Arc<Graph>, AuthorizationError>
    where
        R: StatementReader + ?Sized,
    {
        if let Some(graph) = self.documents.get(identifier) {
            tracing::trace!(%identifier, "Document cache hit");
            return Ok(graph.clone());
        }

        let graph = match reader.get_statements(identifier).await {
            Ok(graph) => graph,
            Err(error) if error.is_not_found() && absent == Absent::Empty => {
                tracing::trace!(%identifier, "Document absent, treating as empty");
                Graph::default()
            }
            Err(error) => return Err(AuthorizationError::from_read(identifier, error)),
        };

        let graph = Arc::new(graph);
        self.documents.insert(identifier.clone(), graph.clone());
        Ok(graph)
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

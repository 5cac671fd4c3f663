use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use pod_rdf::{Graph, parse_n_triples};
use tokio::sync::RwLock;

use crate::{ResourceIdentifier, StatementReader, StorageError};

/// A trivial implementation of [StatementReader] - backed by a [HashMap] -
/// where documents are kept in memory as N-Triples text and parsed on every
/// read.
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStatementStore {
    entries: Arc<RwLock<HashMap<ResourceIdentifier, String>>>,
}

impl MemoryStatementStore {
    /// Store `document` at `identifier`, replacing what was there
    pub async fn set(&self, identifier: impl Into<ResourceIdentifier>, document: impl Into<String>) {
        let mut entries = self.entries.write().await;
        entries.insert(identifier.into(), document.into());
    }

    /// Remove the document at `identifier`, returning whether one existed
    pub async fn remove(&self, identifier: &ResourceIdentifier) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(identifier).is_some()
    }
}

#[async_trait]
impl StatementReader for MemoryStatementStore {
    async fn has_resource(&self, identifier: &ResourceIdentifier) -> Result<bool, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(identifier))
    }

    async fn get_statements(&self, identifier: &ResourceIdentifier) -> Result<Graph, StorageError> {
        let entries = self.entries.read().await;
        let document = entries
            .get(identifier)
            .ok_or_else(|| StorageError::NotFound(identifier.clone()))?;

        parse_n_triples(document).map_err(|source| StorageError::Malformed {
            identifier: identifier.clone(),
            source,
        })
    }
}

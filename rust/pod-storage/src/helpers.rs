use std::collections::HashSet;

use async_trait::async_trait;
use pod_rdf::Graph;

use crate::{ResourceIdentifier, StatementReader, StorageError};

/// A [StatementReader] proxy that fails every probe and read of selected
/// identifiers with [StorageError::Backend], for exercising error paths.
pub struct FailingStatementReader<Reader> {
    reader: Reader,
    failing: HashSet<ResourceIdentifier>,
}

impl<Reader> FailingStatementReader<Reader>
where
    Reader: StatementReader,
{
    /// Wrap `reader`; no identifier fails until [Self::fail] is called
    pub fn new(reader: Reader) -> Self {
        Self {
            reader,
            failing: HashSet::new(),
        }
    }

    /// Make every access to `identifier` fail
    pub fn fail(mut self, identifier: impl Into<ResourceIdentifier>) -> Self {
        self.failing.insert(identifier.into());
        self
    }

    fn check(&self, identifier: &ResourceIdentifier) -> Result<(), StorageError> {
        if self.failing.contains(identifier) {
            tracing::debug!(%identifier, "Injecting storage failure");
            return Err(StorageError::Backend {
                identifier: identifier.clone(),
                message: "injected failure".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<Reader> StatementReader for FailingStatementReader<Reader>
where
    Reader: StatementReader,
{
    async fn has_resource(&self, identifier: &ResourceIdentifier) -> Result<bool, StorageError> {
        self.check(identifier)?;
        self.reader.has_resource(identifier).await
    }

    async fn get_statements(&self, identifier: &ResourceIdentifier) -> Result<Graph, StorageError> {
        self.check(identifier)?;
        self.reader.get_statements(identifier).await
    }
}

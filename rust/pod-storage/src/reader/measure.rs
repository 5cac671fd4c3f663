use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use parking_lot::Mutex;
use pod_rdf::Graph;

use crate::{ResourceIdentifier, StatementReader, StorageError};

/// A [MeasuredStatementReader] acts as a proxy over a [StatementReader]
/// implementation that counts existence probes and document reads.
#[derive(Clone)]
pub struct MeasuredStatementReader<Reader>
where
    Reader: StatementReader,
{
    probes: Arc<AtomicUsize>,
    reads: Arc<AtomicUsize>,
    reads_by_identifier: Arc<Mutex<HashMap<ResourceIdentifier, usize>>>,
    reader: Reader,
}

impl<Reader> MeasuredStatementReader<Reader>
where
    Reader: StatementReader,
{
    /// Wrap the provided [StatementReader] so that access to it may be
    /// measured.
    pub fn new(reader: Reader) -> Self {
        Self {
            probes: Arc::new(AtomicUsize::default()),
            reads: Arc::new(AtomicUsize::default()),
            reads_by_identifier: Arc::new(Mutex::new(HashMap::new())),
            reader,
        }
    }

    /// The aggregate number of existence probes
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }

    /// The aggregate number of document reads
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// The number of reads of one identifier
    pub fn reads_of(&self, identifier: &ResourceIdentifier) -> usize {
        self.reads_by_identifier
            .lock()
            .get(identifier)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl<Reader> StatementReader for MeasuredStatementReader<Reader>
where
    Reader: StatementReader,
{
    async fn has_resource(&self, identifier: &ResourceIdentifier) -> Result<bool, StorageError> {
        self.probes.fetch_add(1, Ordering::Relaxed);
        self.reader.has_resource(identifier).await
    }

    async fn get_statements(&self, identifier: &ResourceIdentifier) -> Result<Graph, StorageError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        *self
            .reads_by_identifier
            .lock()
            .entry(identifier.clone())
            .or_default() += 1;
        self.reader.get_statements(identifier).await
    }
}

//! In-memory session double for exercising the fixture without a cluster.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::bail;
use async_trait::async_trait;
use ksmeta_schema::{KeyspaceIdentifier, KeyspaceMetadata};

use crate::session::{MetadataSnapshot, Session};
use crate::statement::SimpleStatement;

/// Record of one statement the stub was asked to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedStatement {
    pub cql: String,
    pub execution_profile: Option<String>,
}

/// A [`Session`] backed by canned metadata and a statement log.
///
/// Execution failures can be scripted one at a time with
/// [`fail_next_execute`](Self::fail_next_execute); the attempt counter lets
/// tests prove that a failed execution was not retried.
#[derive(Default)]
pub struct StubSession {
    keyspaces: Mutex<BTreeMap<KeyspaceIdentifier, KeyspaceMetadata>>,
    executed: Mutex<Vec<ExecutedStatement>>,
    next_failure: Mutex<Option<String>>,
    execute_attempts: AtomicUsize,
}

impl StubSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyspace(metadata: KeyspaceMetadata) -> Self {
        let stub = Self::new();
        stub.put_keyspace(metadata);
        stub
    }

    /// Installs or replaces the canned metadata for one keyspace.
    pub fn put_keyspace(&self, metadata: KeyspaceMetadata) {
        self.keyspaces
            .lock()
            .expect("stub keyspace map poisoned")
            .insert(metadata.name().clone(), metadata);
    }

    pub fn remove_keyspace(&self, name: &KeyspaceIdentifier) {
        self.keyspaces
            .lock()
            .expect("stub keyspace map poisoned")
            .remove(name);
    }

    /// Scripts the next `execute` call to fail with `message`. Later calls
    /// succeed again.
    pub fn fail_next_execute(&self, message: impl Into<String>) {
        *self.next_failure.lock().expect("stub failure slot poisoned") = Some(message.into());
    }

    /// Statements executed so far, in order, including failed attempts.
    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.executed
            .lock()
            .expect("stub statement log poisoned")
            .clone()
    }

    pub fn execute_attempts(&self) -> usize {
        self.execute_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Session for StubSession {
    async fn execute(&self, statement: SimpleStatement) -> anyhow::Result<()> {
        self.execute_attempts.fetch_add(1, Ordering::SeqCst);
        self.executed
            .lock()
            .expect("stub statement log poisoned")
            .push(ExecutedStatement {
                cql: statement.cql().to_string(),
                execution_profile: statement.execution_profile().map(str::to_string),
            });
        if let Some(message) = self
            .next_failure
            .lock()
            .expect("stub failure slot poisoned")
            .take()
        {
            bail!("{message}");
        }
        Ok(())
    }

    fn metadata(&self) -> MetadataSnapshot {
        MetadataSnapshot::new(
            self.keyspaces
                .lock()
                .expect("stub keyspace map poisoned")
                .clone(),
        )
    }
}

//! The driver-session boundary the fixture calls into.

use std::collections::BTreeMap;

use async_trait::async_trait;
use ksmeta_schema::{KeyspaceIdentifier, KeyspaceMetadata};

use crate::statement::SimpleStatement;

/// Point-in-time view of the driver's client-side schema metadata.
///
/// A snapshot is cloned out of the session at call time. The fixture never
/// caches or refreshes one; callers wanting fresher metadata take a new
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct MetadataSnapshot {
    keyspaces: BTreeMap<KeyspaceIdentifier, KeyspaceMetadata>,
}

impl MetadataSnapshot {
    pub fn new(keyspaces: BTreeMap<KeyspaceIdentifier, KeyspaceMetadata>) -> Self {
        Self { keyspaces }
    }

    /// Metadata for one keyspace, if the driver knows it.
    pub fn keyspace(&self, name: &KeyspaceIdentifier) -> Option<&KeyspaceMetadata> {
        self.keyspaces.get(name)
    }

    pub fn keyspaces(&self) -> impl Iterator<Item = &KeyspaceMetadata> {
        self.keyspaces.values()
    }
}

/// A live driver session.
///
/// Execution errors (connectivity, server-side failures, timeouts) surface
/// as [`anyhow::Error`] and are propagated to the caller unchanged; this
/// layer never interprets, wraps, or retries them.
#[async_trait]
pub trait Session: Send + Sync {
    /// Runs one statement to completion against the cluster.
    async fn execute(&self, statement: SimpleStatement) -> anyhow::Result<()>;

    /// Current client-side metadata view.
    fn metadata(&self) -> MetadataSnapshot;
}

//! Shared helpers for fixture integration tests.

use std::sync::Arc;

use ksmeta_fixture::{MetadataFixture, SessionContext, StubSession};
use ksmeta_schema::{
    BaseKeyspaceMetadata, ExtendedKeyspaceMetadata, KeyspaceIdentifier, KeyspaceMetadata,
};

pub const TEST_KEYSPACE: &str = "test_ks";

pub fn test_keyspace_id() -> KeyspaceIdentifier {
    KeyspaceIdentifier::from_internal(TEST_KEYSPACE)
}

/// Extended-variant metadata for `name` with a representative replication
/// config and graph engine.
pub fn extended_keyspace(name: &str) -> KeyspaceMetadata {
    let mut extended = ExtendedKeyspaceMetadata::new(KeyspaceIdentifier::from_internal(name));
    extended.base.replication.insert(
        "class".to_string(),
        "org.apache.cassandra.locator.SimpleStrategy".to_string(),
    );
    extended
        .base
        .replication
        .insert("replication_factor".to_string(), "1".to_string());
    extended.graph_engine = Some("Core".to_string());
    KeyspaceMetadata::from(extended)
}

/// Base-variant metadata for `name`, as a generic driver build would report.
pub fn base_keyspace(name: &str) -> KeyspaceMetadata {
    KeyspaceMetadata::from(BaseKeyspaceMetadata::new(KeyspaceIdentifier::from_internal(
        name,
    )))
}

/// Fixture targeting [`TEST_KEYSPACE`] over the given stub session.
pub fn fixture_over(session: Arc<StubSession>) -> MetadataFixture {
    let context = SessionContext::builder(session, test_keyspace_id()).build();
    MetadataFixture::new(context)
}

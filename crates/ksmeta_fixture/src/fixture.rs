//! Keyspace-metadata verification fixture.
//!
//! Three operations on top of a [`SessionContext`]:
//! - assert that a looked-up keyspace is present, extended, and named right,
//! - execute a schema statement under the slow profile,
//! - fetch the configured keyspace validated and narrowed to the extended
//!   shape.
//!
//! The fixture holds no state and performs no retries; the only state it can
//! change is the remote cluster's schema, through [`execute_ddl`].
//!
//! [`execute_ddl`]: MetadataFixture::execute_ddl

use anyhow::Result;
use ksmeta_schema::{ExtendedKeyspaceMetadata, KeyspaceMetadata, MetadataError};
use tracing::debug;

use crate::context::SessionContext;
use crate::statement::SimpleStatement;

pub struct MetadataFixture {
    context: SessionContext,
}

impl MetadataFixture {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Pure validation of a keyspace lookup result.
    ///
    /// Succeeds only when the entry is present, carries the extended
    /// variant, and its internal name equals the configured keyspace
    /// exactly (case-sensitive). Each violation maps to its own
    /// [`MetadataError`] cause.
    pub fn check_keyspace<'a>(
        &self,
        keyspace: Option<&'a KeyspaceMetadata>,
    ) -> Result<&'a ExtendedKeyspaceMetadata, MetadataError> {
        let Some(metadata) = keyspace else {
            return Err(MetadataError::KeyspaceAbsent {
                keyspace: self.context.keyspace().clone(),
            });
        };
        let extended = metadata.as_extended()?;
        let expected = self.context.keyspace();
        if extended.name().as_internal() != expected.as_internal() {
            return Err(MetadataError::NameMismatch {
                expected: expected.clone(),
                actual: extended.name().clone(),
            });
        }
        Ok(extended)
    }

    /// Asserts a keyspace lookup result, panicking with the precise cause
    /// (absence, wrong variant, or name mismatch) on violation. Silent on
    /// success.
    pub fn assert_keyspace_present(&self, keyspace: Option<&KeyspaceMetadata>) {
        if let Err(err) = self.check_keyspace(keyspace) {
            panic!("keyspace metadata assertion failed: {err}");
        }
    }

    /// Executes a schema statement under the configured slow profile,
    /// returning once the cluster acknowledges it.
    ///
    /// Driver errors propagate unchanged; no retry, no interpretation.
    pub async fn execute_ddl(&self, cql: &str) -> Result<()> {
        let statement = SimpleStatement::builder(cql)
            .execution_profile(self.context.slow_profile_name())
            .build();
        debug!(
            cql,
            profile = self.context.slow_profile_name(),
            "executing schema statement"
        );
        self.context.session().execute(statement).await
    }

    /// Fetches the configured keyspace from the session's current metadata
    /// view, validates it, and returns it narrowed to the extended shape.
    ///
    /// Panics exactly when [`assert_keyspace_present`] would on the same
    /// lookup result.
    ///
    /// [`assert_keyspace_present`]: MetadataFixture::assert_keyspace_present
    pub fn validated_keyspace(&self) -> ExtendedKeyspaceMetadata {
        match self.try_validated_keyspace() {
            Ok(keyspace) => keyspace,
            Err(err) => panic!("keyspace metadata assertion failed: {err}"),
        }
    }

    /// Non-panicking form of [`validated_keyspace`](Self::validated_keyspace).
    pub fn try_validated_keyspace(&self) -> Result<ExtendedKeyspaceMetadata, MetadataError> {
        let snapshot = self.context.session().metadata();
        let keyspace = snapshot.keyspace(self.context.keyspace());
        self.check_keyspace(keyspace).cloned()
    }
}

//! Typed validation errors for keyspace-metadata checks.

use thiserror::Error;

use crate::identifier::KeyspaceIdentifier;

/// Why driver-side keyspace metadata failed validation.
///
/// The three causes are kept distinct so a failing test names exactly what
/// went wrong: nothing there, the wrong shape, or the wrong keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The driver metadata has no entry for the requested keyspace.
    #[error("keyspace '{keyspace}' is absent from the driver metadata")]
    KeyspaceAbsent { keyspace: KeyspaceIdentifier },

    /// Metadata is present but carries only the generic base shape.
    #[error("keyspace '{keyspace}' carries base metadata, expected the extended variant")]
    NotExtended { keyspace: KeyspaceIdentifier },

    /// Metadata is present and extended but named differently than expected.
    #[error("keyspace name mismatch: expected '{expected}', metadata reports '{actual}'")]
    NameMismatch {
        expected: KeyspaceIdentifier,
        actual: KeyspaceIdentifier,
    },
}

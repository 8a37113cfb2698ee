//! Keyspace schema-metadata model.
//!
//! This crate owns the shapes a driver-side metadata cache hands back for a
//! keyspace:
//! - case-sensitive keyspace identifiers with CQL quoting rules,
//! - the generic (base) and vendor-specific (extended) metadata records,
//! - typed narrowing from the generic shape to the extended one.

pub mod error;
pub mod identifier;
pub mod keyspace;

pub use error::MetadataError;
pub use identifier::KeyspaceIdentifier;
pub use keyspace::{BaseKeyspaceMetadata, ExtendedKeyspaceMetadata, KeyspaceMetadata};

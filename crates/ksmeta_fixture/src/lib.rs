//! Test-fixture layer for verifying driver-side keyspace metadata.
//!
//! The fixture sits strictly on top of an already-connected session:
//! - it executes schema statements under a relaxed-timeout execution profile,
//! - it validates that the target keyspace is present in the driver's
//!   metadata cache with the extended (vendor-specific) shape,
//! - it returns that metadata narrowed to the extended type.
//!
//! It owns no connection, caches nothing, and introduces no concurrency:
//! every operation is one direct call into the supplied [`SessionContext`].

pub mod context;
pub mod fixture;
pub mod profile;
pub mod session;
pub mod statement;
pub mod stub;

pub use context::{SessionContext, SessionContextBuilder};
pub use fixture::MetadataFixture;
pub use profile::{
    Consistency, ExecutionProfile, ProfileRegistry, DEFAULT_PROFILE_NAME, SLOW_PROFILE_NAME,
};
pub use session::{MetadataSnapshot, Session};
pub use statement::{SimpleStatement, SimpleStatementBuilder};
pub use stub::{ExecutedStatement, StubSession};

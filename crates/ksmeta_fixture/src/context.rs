//! The session/keyspace/profile bundle a test harness hands to the fixture.

use std::sync::Arc;

use ksmeta_schema::KeyspaceIdentifier;

use crate::profile::{ProfileRegistry, SLOW_PROFILE_NAME};
use crate::session::Session;

/// External collaborator owning the live session, the target keyspace, and
/// the execution-profile configuration.
///
/// Built once by the harness and passed explicitly; the fixture never reads
/// ambient or global state. Lifetime and concurrent use are the harness's
/// responsibility.
#[derive(Clone)]
pub struct SessionContext {
    session: Arc<dyn Session>,
    keyspace: KeyspaceIdentifier,
    slow_profile_name: String,
    profiles: ProfileRegistry,
}

impl SessionContext {
    pub fn builder(
        session: Arc<dyn Session>,
        keyspace: KeyspaceIdentifier,
    ) -> SessionContextBuilder {
        SessionContextBuilder {
            session,
            keyspace,
            slow_profile_name: SLOW_PROFILE_NAME.to_string(),
            profiles: ProfileRegistry::default(),
        }
    }

    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Target keyspace, internal form.
    pub fn keyspace(&self) -> &KeyspaceIdentifier {
        &self.keyspace
    }

    /// Name of the pre-configured relaxed-timeout profile used for DDL.
    pub fn slow_profile_name(&self) -> &str {
        &self.slow_profile_name
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }
}

pub struct SessionContextBuilder {
    session: Arc<dyn Session>,
    keyspace: KeyspaceIdentifier,
    slow_profile_name: String,
    profiles: ProfileRegistry,
}

impl SessionContextBuilder {
    pub fn slow_profile_name(mut self, name: impl Into<String>) -> Self {
        self.slow_profile_name = name.into();
        self
    }

    pub fn profiles(mut self, profiles: ProfileRegistry) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn build(self) -> SessionContext {
        SessionContext {
            session: self.session,
            keyspace: self.keyspace,
            slow_profile_name: self.slow_profile_name,
            profiles: self.profiles,
        }
    }
}

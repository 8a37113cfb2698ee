//! Named execution profiles: per-statement client-side settings.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::statement::SimpleStatement;

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const SLOW_PROFILE_NAME: &str = "slow";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
/// Baseline request timeout for schema changes; override with
/// `KSMETA_SLOW_REQUEST_TIMEOUT_MS`.
const SLOW_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Consistency level requested for statement execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consistency {
    One,
    #[default]
    LocalQuorum,
    Quorum,
    All,
}

/// A named bundle of client-side execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionProfile {
    pub request_timeout: Duration,
    pub consistency: Consistency,
}

impl Default for ExecutionProfile {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            consistency: Consistency::default(),
        }
    }
}

impl ExecutionProfile {
    /// Relaxed-timeout profile suitable for DDL.
    pub fn slow() -> Self {
        Self {
            request_timeout: configured_slow_request_timeout(),
            consistency: Consistency::All,
        }
    }
}

fn configured_slow_request_timeout() -> Duration {
    std::env::var("KSMETA_SLOW_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(SLOW_REQUEST_TIMEOUT)
}

/// Name-to-profile map seeded with the `default` and `slow` entries.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, ExecutionProfile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(DEFAULT_PROFILE_NAME.to_string(), ExecutionProfile::default());
        profiles.insert(SLOW_PROFILE_NAME.to_string(), ExecutionProfile::slow());
        Self { profiles }
    }
}

impl ProfileRegistry {
    pub fn register(&mut self, name: impl Into<String>, profile: ExecutionProfile) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&ExecutionProfile> {
        self.profiles.get(name)
    }

    /// Profile a statement runs under: its named profile when set and known,
    /// the default profile otherwise.
    pub fn resolve(&self, statement: &SimpleStatement) -> ExecutionProfile {
        statement
            .execution_profile()
            .and_then(|name| self.profiles.get(name))
            .copied()
            .unwrap_or_default()
    }
}

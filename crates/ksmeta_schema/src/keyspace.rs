//! Keyspace metadata records and the base/extended tagged union.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::identifier::KeyspaceIdentifier;

/// Generic keyspace metadata every driver build reports.
///
/// Tables, user-defined types, and functions live in their own metadata
/// structures and are not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseKeyspaceMetadata {
    pub name: KeyspaceIdentifier,
    pub durable_writes: bool,
    /// Replication settings as reported by the cluster, class included.
    #[serde(default)]
    pub replication: BTreeMap<String, String>,
    /// Whether this is a virtual (system-backed, read-only) keyspace.
    #[serde(default)]
    pub virtual_keyspace: bool,
}

impl BaseKeyspaceMetadata {
    pub fn new(name: KeyspaceIdentifier) -> Self {
        Self {
            name,
            durable_writes: true,
            replication: BTreeMap::new(),
            virtual_keyspace: false,
        }
    }
}

/// Vendor-specific superset of the base shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedKeyspaceMetadata {
    #[serde(flatten)]
    pub base: BaseKeyspaceMetadata,
    /// Graph engine bound to the keyspace, when the cluster runs one.
    #[serde(default)]
    pub graph_engine: Option<String>,
}

impl ExtendedKeyspaceMetadata {
    pub fn new(name: KeyspaceIdentifier) -> Self {
        Self {
            base: BaseKeyspaceMetadata::new(name),
            graph_engine: None,
        }
    }

    pub fn name(&self) -> &KeyspaceIdentifier {
        &self.base.name
    }
}

/// Everything the driver knows about one keyspace, tagged by provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum KeyspaceMetadata {
    Base(BaseKeyspaceMetadata),
    Extended(ExtendedKeyspaceMetadata),
}

impl KeyspaceMetadata {
    pub fn name(&self) -> &KeyspaceIdentifier {
        match self {
            Self::Base(ks) => &ks.name,
            Self::Extended(ks) => ks.name(),
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    /// Narrows to the vendor-specific shape. Fails with a typed error when
    /// this entry only carries the generic base shape.
    pub fn as_extended(&self) -> Result<&ExtendedKeyspaceMetadata, MetadataError> {
        match self {
            Self::Extended(ks) => Ok(ks),
            Self::Base(ks) => Err(MetadataError::NotExtended {
                keyspace: ks.name.clone(),
            }),
        }
    }

    /// Owning form of [`as_extended`](Self::as_extended).
    pub fn into_extended(self) -> Result<ExtendedKeyspaceMetadata, MetadataError> {
        match self {
            Self::Extended(ks) => Ok(ks),
            Self::Base(ks) => Err(MetadataError::NotExtended { keyspace: ks.name }),
        }
    }
}

impl From<ExtendedKeyspaceMetadata> for KeyspaceMetadata {
    fn from(ks: ExtendedKeyspaceMetadata) -> Self {
        Self::Extended(ks)
    }
}

impl From<BaseKeyspaceMetadata> for KeyspaceMetadata {
    fn from(ks: BaseKeyspaceMetadata) -> Self {
        Self::Base(ks)
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseKeyspaceMetadata, ExtendedKeyspaceMetadata, KeyspaceMetadata};
    use crate::error::MetadataError;
    use crate::identifier::KeyspaceIdentifier;

    fn ks(name: &str) -> KeyspaceIdentifier {
        KeyspaceIdentifier::from_internal(name)
    }

    #[test]
    fn narrowing_succeeds_on_extended_entries() {
        let metadata = KeyspaceMetadata::from(ExtendedKeyspaceMetadata::new(ks("test_ks")));
        let extended = metadata.as_extended().expect("extended entry narrows");
        assert_eq!(extended.name(), &ks("test_ks"));
    }

    #[test]
    fn narrowing_fails_typed_on_base_entries() {
        let metadata = KeyspaceMetadata::from(BaseKeyspaceMetadata::new(ks("test_ks")));
        let err = metadata.as_extended().unwrap_err();
        assert_eq!(
            err,
            MetadataError::NotExtended {
                keyspace: ks("test_ks")
            }
        );
        let err = metadata.into_extended().unwrap_err();
        assert!(matches!(err, MetadataError::NotExtended { .. }));
    }

    #[test]
    fn name_is_reported_for_either_variant() {
        let base = KeyspaceMetadata::from(BaseKeyspaceMetadata::new(ks("a")));
        let extended = KeyspaceMetadata::from(ExtendedKeyspaceMetadata::new(ks("b")));
        assert_eq!(base.name(), &ks("a"));
        assert_eq!(extended.name(), &ks("b"));
        assert!(!base.is_extended());
        assert!(extended.is_extended());
    }

    #[test]
    fn records_serialize_with_variant_tag() {
        let mut extended = ExtendedKeyspaceMetadata::new(ks("graph_ks"));
        extended.graph_engine = Some("Core".to_string());
        let value = serde_json::to_value(KeyspaceMetadata::from(extended)).expect("serialize");
        assert_eq!(value["variant"], "extended");
        assert_eq!(value["name"], "graph_ks");
        assert_eq!(value["graph_engine"], "Core");
        assert_eq!(value["durable_writes"], true);
    }

    #[test]
    fn replication_defaults_when_missing_from_serialized_form() {
        let value = serde_json::json!({
            "variant": "base",
            "name": "plain_ks",
            "durable_writes": false,
        });
        let metadata: KeyspaceMetadata = serde_json::from_value(value).expect("deserialize");
        let KeyspaceMetadata::Base(base) = metadata else {
            panic!("expected base variant");
        };
        assert!(base.replication.is_empty());
        assert!(!base.virtual_keyspace);
    }
}

//! Case-sensitive keyspace identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal (unescaped) name of a keyspace.
///
/// Equality, ordering, and hashing are case-sensitive on the internal form.
/// The CQL source form is derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyspaceIdentifier(String);

impl KeyspaceIdentifier {
    /// Builds an identifier from the internal form, taken verbatim.
    pub fn from_internal(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parses the CQL source form: a double-quoted identifier is unquoted
    /// (doubled quotes collapse to one) and keeps its case, an unquoted
    /// identifier is lowercased.
    pub fn from_cql(cql: &str) -> Self {
        if let Some(inner) = cql
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Self(inner.replace("\"\"", "\""))
        } else {
            Self(cql.to_ascii_lowercase())
        }
    }

    /// The internal form. This is the form name comparisons use.
    pub fn as_internal(&self) -> &str {
        &self.0
    }

    /// Renders the CQL form, quoting whenever the internal form is not a
    /// plain lowercase identifier.
    pub fn as_cql(&self) -> String {
        if is_plain_identifier(&self.0) {
            self.0.clone()
        } else {
            format!("\"{}\"", self.0.replace('"', "\"\""))
        }
    }
}

impl fmt::Display for KeyspaceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let starts_lower = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::KeyspaceIdentifier;

    #[test]
    fn unquoted_cql_identifier_is_lowercased() {
        let id = KeyspaceIdentifier::from_cql("Test_KS");
        assert_eq!(id.as_internal(), "test_ks");
        assert_eq!(id.as_cql(), "test_ks");
    }

    #[test]
    fn quoted_cql_identifier_keeps_case() {
        let id = KeyspaceIdentifier::from_cql("\"Test_KS\"");
        assert_eq!(id.as_internal(), "Test_KS");
        assert_eq!(id.as_cql(), "\"Test_KS\"");
    }

    #[test]
    fn doubled_quotes_collapse_when_unquoting() {
        let id = KeyspaceIdentifier::from_cql("\"ks\"\"1\"");
        assert_eq!(id.as_internal(), "ks\"1");
        assert_eq!(id.as_cql(), "\"ks\"\"1\"");
    }

    #[test]
    fn comparison_is_case_sensitive_on_internal_form() {
        let lower = KeyspaceIdentifier::from_internal("test_ks");
        let upper = KeyspaceIdentifier::from_internal("TEST_KS");
        assert_ne!(lower, upper);
        assert_eq!(lower, KeyspaceIdentifier::from_internal("test_ks"));
    }

    #[test]
    fn empty_and_leading_digit_names_are_quoted() {
        assert_eq!(KeyspaceIdentifier::from_internal("").as_cql(), "\"\"");
        assert_eq!(KeyspaceIdentifier::from_internal("1ks").as_cql(), "\"1ks\"");
    }
}

//! Non-prepared statements built from literal CQL text.

/// A simple (never prepared) statement: literal CQL plus the name of the
/// execution profile it should run under, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStatement {
    cql: String,
    execution_profile: Option<String>,
}

impl SimpleStatement {
    /// A statement with no profile attached; it runs under the session's
    /// default profile.
    pub fn new(cql: impl Into<String>) -> Self {
        Self {
            cql: cql.into(),
            execution_profile: None,
        }
    }

    pub fn builder(cql: impl Into<String>) -> SimpleStatementBuilder {
        SimpleStatementBuilder {
            statement: Self::new(cql),
        }
    }

    pub fn cql(&self) -> &str {
        &self.cql
    }

    pub fn execution_profile(&self) -> Option<&str> {
        self.execution_profile.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct SimpleStatementBuilder {
    statement: SimpleStatement,
}

impl SimpleStatementBuilder {
    /// Selects the named execution profile for this statement.
    pub fn execution_profile(mut self, name: impl Into<String>) -> Self {
        self.statement.execution_profile = Some(name.into());
        self
    }

    pub fn build(self) -> SimpleStatement {
        self.statement
    }
}

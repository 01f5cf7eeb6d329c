//! Source declaration types

use serde::{Deserialize, Serialize};

/// Identity of a warehouse table
///
/// The (database, schema, name) triple uniquely identifies a table
/// across the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Database (project) name
    pub database: String,

    /// Schema (dataset) name
    pub schema: String,

    /// Table name
    pub name: String,
}

impl TableRef {
    /// Create a new table reference
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.name)
    }
}

/// Metadata for an externally managed warehouse table
///
/// A descriptor records where an upstream table lives so that lineage and
/// build tooling can reference it. Declaring one performs no I/O and does
/// not verify that the table exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Database (project) name
    pub database: String,

    /// Schema (dataset) name
    pub schema: String,

    /// Table name
    pub name: String,

    /// Human-readable description for documentation tooling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SourceDescriptor {
    /// Create a new descriptor with no description
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Identity triple for this descriptor
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(&self.database, &self.schema, &self.name)
    }

    /// Stable node id for dependency-graph tooling
    ///
    /// Follows the `source.<project>.<schema>.<name>` convention used by
    /// manifest consumers.
    pub fn unique_id(&self, project: &str) -> String {
        format!("source.{}.{}.{}", project, self.schema, self.name)
    }

    /// Check that all required fields are non-empty
    ///
    /// Fails with the name of the first missing field.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        if self.database.is_empty() {
            return Err(DeclarationError::MissingField("database"));
        }
        if self.schema.is_empty() {
            return Err(DeclarationError::MissingField("schema"));
        }
        if self.name.is_empty() {
            return Err(DeclarationError::MissingField("name"));
        }
        Ok(())
    }
}

/// Declaration error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("source declaration is missing required field `{0}`")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ref_display() {
        let table = TableRef::new("bigquery-public-data", "stackoverflow", "users");
        assert_eq!(table.to_string(), "bigquery-public-data.stackoverflow.users");
    }

    #[test]
    fn descriptor_builder() {
        let descriptor = SourceDescriptor::new("db", "raw", "events")
            .with_description("Raw event stream");

        assert_eq!(descriptor.table_ref(), TableRef::new("db", "raw", "events"));
        assert_eq!(descriptor.description.as_deref(), Some("Raw event stream"));
    }

    #[test]
    fn unique_id_convention() {
        let descriptor = SourceDescriptor::new("bigquery-public-data", "stackoverflow", "badges");
        assert_eq!(
            descriptor.unique_id("analytics"),
            "source.analytics.stackoverflow.badges"
        );
    }

    #[test]
    fn validate_names_missing_field() {
        let descriptor = SourceDescriptor::new("", "raw", "events");
        assert_eq!(
            descriptor.validate(),
            Err(DeclarationError::MissingField("database"))
        );

        let descriptor = SourceDescriptor::new("db", "raw", "");
        assert_eq!(
            descriptor.validate(),
            Err(DeclarationError::MissingField("name"))
        );
    }

    #[test]
    fn descriptor_serialization() {
        let descriptor = SourceDescriptor::new("db", "raw", "events");
        let json = serde_json::to_string(&descriptor).unwrap();

        // description is omitted when absent
        assert!(!json.contains("description"));

        let parsed: SourceDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn descriptor_missing_required_field_fails_to_parse() {
        let err = serde_json::from_str::<SourceDescriptor>(r#"{"schema": "raw", "name": "events"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("database"));
    }
}

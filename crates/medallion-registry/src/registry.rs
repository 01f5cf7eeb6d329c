//! Append-only registry of declared sources

use medallion_core::{DeclarationError, SourceDescriptor, TableRef};
use serde::{Deserialize, Serialize};

/// An append-only collection of source declarations
///
/// The registry is an explicit value passed to whatever tooling needs it,
/// not ambient global state. It is populated once during an initialization
/// phase and read thereafter. Duplicate declarations for the same table are
/// retained in declaration order; callers that need de-duplication use
/// [`SourceRegistry::latest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a source
    ///
    /// Fails fast when a required field is empty, naming the field.
    /// Duplicates are accepted silently.
    pub fn declare(&mut self, descriptor: SourceDescriptor) -> Result<(), DeclarationError> {
        descriptor.validate()?;
        self.sources.push(descriptor);
        Ok(())
    }

    /// Number of declarations, duplicates included
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the registry holds no declarations
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate declarations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.iter()
    }

    /// All declarations for a table, oldest first
    pub fn find(&self, table: &TableRef) -> Vec<&SourceDescriptor> {
        self.sources
            .iter()
            .filter(|d| d.table_ref() == *table)
            .collect()
    }

    /// The most recent declaration for a table
    pub fn latest(&self, table: &TableRef) -> Option<&SourceDescriptor> {
        self.sources.iter().rev().find(|d| d.table_ref() == *table)
    }

    /// Whether a table has been declared at least once
    pub fn contains(&self, table: &TableRef) -> bool {
        self.sources.iter().any(|d| d.table_ref() == *table)
    }

    /// Resolve a (schema, name) pair to its most recent declaration
    ///
    /// Used by template code that references sources without naming the
    /// database, the way `source('schema', 'table')` calls do.
    pub fn resolve(&self, schema: &str, name: &str) -> Option<&SourceDescriptor> {
        self.sources
            .iter()
            .rev()
            .find(|d| d.schema == schema && d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declare_then_read_returns_equal_descriptor() {
        let mut registry = SourceRegistry::new();
        let descriptor = SourceDescriptor::new("db", "raw", "events")
            .with_description("Raw event stream");

        registry.declare(descriptor.clone()).unwrap();

        let stored: Vec<_> = registry.iter().collect();
        assert_eq!(stored, vec![&descriptor]);
    }

    #[test]
    fn duplicates_are_retained() {
        let mut registry = SourceRegistry::new();
        let table = TableRef::new("db", "raw", "users");

        registry
            .declare(SourceDescriptor::new("db", "raw", "users"))
            .unwrap();
        registry
            .declare(SourceDescriptor::new("db", "raw", "users").with_description("second"))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(&table).len(), 2);
    }

    #[test]
    fn latest_wins_for_lookup() {
        let mut registry = SourceRegistry::new();
        let table = TableRef::new("db", "raw", "users");

        registry
            .declare(SourceDescriptor::new("db", "raw", "users"))
            .unwrap();
        registry
            .declare(SourceDescriptor::new("db", "raw", "users").with_description("second"))
            .unwrap();

        let latest = registry.latest(&table).unwrap();
        assert_eq!(latest.description.as_deref(), Some("second"));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut registry = SourceRegistry::new();
        for name in ["badges", "posts_answers", "posts_questions", "users"] {
            registry
                .declare(SourceDescriptor::new("db", "raw", name))
                .unwrap();
        }

        let names: Vec<_> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["badges", "posts_answers", "posts_questions", "users"]
        );
    }

    #[test]
    fn empty_field_is_rejected() {
        let mut registry = SourceRegistry::new();
        let err = registry
            .declare(SourceDescriptor::new("db", "", "users"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "source declaration is missing required field `schema`"
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn resolve_by_schema_and_name() {
        let mut registry = SourceRegistry::new();
        registry
            .declare(SourceDescriptor::new("db", "raw", "users"))
            .unwrap();

        let resolved = registry.resolve("raw", "users").unwrap();
        assert_eq!(resolved.database, "db");
        assert!(registry.resolve("raw", "missing").is_none());
    }
}

//! Bronze-layer sources from the public StackOverflow dataset
//!
//! Data is ingested as-is from the externally owned BigQuery dataset,
//! without transformation.

use medallion_core::{DeclarationError, SourceDescriptor};

use crate::SourceRegistry;

/// Database hosting the public dataset
pub const DATABASE: &str = "bigquery-public-data";

/// Dataset (schema) name
pub const SCHEMA: &str = "stackoverflow";

/// Bronze tables, in declaration order
pub const TABLES: [&str; 4] = ["badges", "posts_answers", "posts_questions", "users"];

/// Declare the StackOverflow bronze sources into a registry
pub fn declare_sources(registry: &mut SourceRegistry) -> Result<(), DeclarationError> {
    for table in TABLES {
        registry.declare(SourceDescriptor::new(DATABASE, SCHEMA, table))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medallion_core::TableRef;

    #[test]
    fn declares_all_bronze_tables() {
        let mut registry = SourceRegistry::new();
        declare_sources(&mut registry).unwrap();

        assert_eq!(registry.len(), TABLES.len());
        for table in TABLES {
            assert!(registry.contains(&TableRef::new(DATABASE, SCHEMA, table)));
        }
    }

    #[test]
    fn resolves_posts_tables() {
        let mut registry = SourceRegistry::new();
        declare_sources(&mut registry).unwrap();

        let answers = registry.resolve(SCHEMA, "posts_answers").unwrap();
        assert_eq!(
            answers.table_ref().to_string(),
            "bigquery-public-data.stackoverflow.posts_answers"
        );
    }
}

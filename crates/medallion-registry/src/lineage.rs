//! Lineage export for dependency-graph tooling
//!
//! The build tool that assembles the pipeline DAG consumes one node per
//! declaration. Nodes carry the stable `source.<project>.<schema>.<name>`
//! id plus the fully qualified relation the warehouse resolves at query time.

use serde::{Deserialize, Serialize};

use crate::SourceRegistry;

/// A source node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageNode {
    /// Stable node id (e.g. "source.analytics.stackoverflow.users")
    pub unique_id: String,

    /// Fully qualified relation (database.schema.name)
    pub relation: String,

    /// Description, when the declaration carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SourceRegistry {
    /// Export every declaration as a lineage node, in declaration order
    ///
    /// Duplicate declarations produce duplicate nodes; de-duplication is the
    /// consumer's call.
    pub fn lineage_nodes(&self, project: &str) -> Vec<LineageNode> {
        self.iter()
            .map(|d| LineageNode {
                unique_id: d.unique_id(project),
                relation: d.table_ref().to_string(),
                description: d.description.clone(),
            })
            .collect()
    }
}

//! Source registry for medallion pipelines
//!
//! This crate handles:
//! - Declaring externally managed warehouse tables (bronze-layer sources)
//! - Loading declaration files (TOML)
//! - Exporting lineage nodes for dependency-graph tooling
//! - Bundled declarations for the public StackOverflow dataset

pub mod declaration_file;
pub mod lineage;
pub mod registry;
pub mod stackoverflow;

pub use declaration_file::{DeclarationFile, DeclarationFileError};
pub use lineage::LineageNode;
pub use registry::SourceRegistry;

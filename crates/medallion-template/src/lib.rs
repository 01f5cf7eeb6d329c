//! SQL template rendering
//!
//! This crate handles:
//! - Exposing the fragment generators to SQL templates
//! - Resolving `source(schema, name)` calls against a registry
//! - Rendering templated SQL models to pure SQL

pub mod functions;
pub mod preprocessor;

pub use functions::{count_posts_if_function, last_posted_post_function, make_source_function};
pub use preprocessor::{RenderError, RenderResult, SqlPreprocessor};

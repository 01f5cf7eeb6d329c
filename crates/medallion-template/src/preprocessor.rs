//! Template preprocessing
//!
//! Converts templated SQL models to pure SQL ready for the warehouse.

use medallion_registry::SourceRegistry;
use minijinja::{Environment, Error as JinjaError};

/// Result of rendering a templated SQL model
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Original SQL with template syntax
    pub original_sql: String,

    /// Rendered SQL without template syntax
    pub rendered_sql: String,

    /// Whether any template syntax was detected and processed
    pub had_template: bool,
}

/// Error during template rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("undeclared source `{name}`")]
    UnknownSource { name: String },

    #[error("template render error: {message}")]
    Render { message: String },
}

/// Renders templated SQL models against a source registry
pub struct SqlPreprocessor {
    env: Environment<'static>,
}

impl SqlPreprocessor {
    /// Create a preprocessor over a registry
    ///
    /// The registry is captured at construction time; declarations made
    /// afterwards are not visible to `source()` calls.
    pub fn new(registry: SourceRegistry) -> Self {
        let mut env = Environment::new();

        env.add_function("count_posts_if", crate::functions::count_posts_if_function);
        env.add_function(
            "last_posted_post",
            crate::functions::last_posted_post_function,
        );
        env.add_function("source", crate::functions::make_source_function(registry));

        Self { env }
    }

    /// Check if SQL contains template syntax
    pub fn has_template(sql: &str) -> bool {
        sql.contains("{{") || sql.contains("{%") || sql.contains("{#")
    }

    /// Render templated SQL to pure SQL
    ///
    /// SQL without template syntax passes through unchanged.
    pub fn render(&self, sql: &str) -> Result<RenderResult, RenderError> {
        let had_template = Self::has_template(sql);

        if !had_template {
            return Ok(RenderResult {
                original_sql: sql.to_string(),
                rendered_sql: sql.to_string(),
                had_template: false,
            });
        }

        let rendered = self
            .env
            .render_str(sql, ())
            .map_err(Self::jinja_error_to_render_error)?;

        Ok(RenderResult {
            original_sql: sql.to_string(),
            rendered_sql: rendered,
            had_template: true,
        })
    }

    /// Convert a MiniJinja error to a RenderError
    fn jinja_error_to_render_error(error: JinjaError) -> RenderError {
        let message = error.to_string();

        if message.contains("undeclared source") {
            if let Some(name) = Self::extract_backticked(&message) {
                return RenderError::UnknownSource { name };
            }
        }

        RenderError::Render { message }
    }

    /// Extract the first backtick-quoted fragment from an error message
    fn extract_backticked(message: &str) -> Option<String> {
        let start = message.find('`')?;
        let end = message[start + 1..].find('`')?;
        Some(message[start + 1..start + 1 + end].to_string())
    }
}

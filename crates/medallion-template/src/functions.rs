//! Template functions
//!
//! Exposes the fragment generators and registry lookups to SQL templates.

use medallion_registry::SourceRegistry;
use minijinja::{Error, ErrorKind, Value};

/// count_posts_if() template function
///
/// Usage in a template: {{ count_posts_if("question") }}
/// Splices a COUNT(DISTINCT IF(...)) expression into the query.
pub fn count_posts_if_function(post_type: Value) -> Result<Value, Error> {
    let post_type = post_type.as_str().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            "count_posts_if() post type must be a string",
        )
    })?;

    Ok(Value::from(medallion_sql::count_posts_if(post_type)))
}

/// last_posted_post() template function
///
/// Usage in a template: {{ last_posted_post("answer") }}
/// Splices a MAX(IF(...)) expression into the query.
pub fn last_posted_post_function(post_type: Value) -> Result<Value, Error> {
    let post_type = post_type.as_str().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            "last_posted_post() post type must be a string",
        )
    })?;

    Ok(Value::from(medallion_sql::last_posted_post(post_type)))
}

/// Build the source() template function over a registry
///
/// Usage in a template: {{ source("stackoverflow", "users") }}
/// Resolves to the fully qualified `database.schema.name` relation of the
/// most recent matching declaration. Referencing an undeclared table is a
/// render error.
pub fn make_source_function(
    registry: SourceRegistry,
) -> impl Fn(Value, Value) -> Result<Value, Error> + Send + Sync + 'static {
    move |schema: Value, name: Value| {
        let schema = schema.as_str().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                "source() schema must be a string",
            )
        })?;

        let name = name.as_str().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                "source() table name must be a string",
            )
        })?;

        match registry.resolve(schema, name) {
            Some(descriptor) => Ok(Value::from(descriptor.table_ref().to_string())),
            None => Err(Error::new(
                ErrorKind::InvalidOperation,
                format!("undeclared source `{}.{}`", schema, name),
            )),
        }
    }
}

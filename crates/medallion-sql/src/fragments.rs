//! Conditional-aggregation SQL fragments
//!
//! Each function returns an expression string for embedding in the SELECT
//! list of an aggregation over `posts_all`. The post type is interpolated
//! verbatim inside a double-quoted SQL string literal; NO escaping is
//! performed. Callers must pass trusted, pre-validated labels, or use the
//! `_checked` variants which reject anything outside the [`PostType`]
//! allow-list.

use crate::post_type::{PostType, PostTypeError};

/// Count distinct posts of a given type
///
/// Produces `COUNT(DISTINCT IF(posts_all.type = "<type>", posts_all.post_id, NULL))`.
/// Pure and deterministic; any string is accepted, including empty.
pub fn count_posts_if(post_type: &str) -> String {
    format!(
        r#"COUNT(DISTINCT IF(posts_all.type = "{}", posts_all.post_id, NULL))"#,
        post_type
    )
}

/// Latest creation timestamp among posts of a given type
///
/// Produces `MAX(IF(posts_all.type = "<type>", posts_all.created_at, NULL))`.
/// Pure and deterministic; any string is accepted, including empty.
pub fn last_posted_post(post_type: &str) -> String {
    format!(
        r#"MAX(IF(posts_all.type = "{}", posts_all.created_at, NULL))"#,
        post_type
    )
}

/// Allow-list checked variant of [`count_posts_if`]
pub fn count_posts_if_checked(post_type: &str) -> Result<String, PostTypeError> {
    let post_type: PostType = post_type.parse()?;
    Ok(count_posts_if(post_type.as_str()))
}

/// Allow-list checked variant of [`last_posted_post`]
pub fn last_posted_post_checked(post_type: &str) -> Result<String, PostTypeError> {
    let post_type: PostType = post_type.parse()?;
    Ok(last_posted_post(post_type.as_str()))
}

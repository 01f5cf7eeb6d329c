//! SQL fragment generation
//!
//! This crate handles:
//! - Conditional-aggregation fragments over the `posts_all` relation
//! - The post-type allow-list used by the checked generator paths
//!
//! Fragments are plain strings spliced into larger queries by template
//! code; there is no AST and no escaping.

pub mod fragments;
pub mod post_type;

pub use fragments::{
    count_posts_if, count_posts_if_checked, last_posted_post, last_posted_post_checked,
};
pub use post_type::{PostType, PostTypeError};

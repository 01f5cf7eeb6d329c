//! Post category allow-list

use serde::{Deserialize, Serialize};

/// Known post categories in the `posts_all` relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    /// A question post
    Question,

    /// An answer post
    Answer,
}

impl PostType {
    /// All known post types
    pub const ALL: [PostType; 2] = [PostType::Question, PostType::Answer];

    /// The label as it appears in the warehouse `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PostType {
    type Err = PostTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            other => Err(PostTypeError::Unknown(other.to_string())),
        }
    }
}

/// Post type validation errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PostTypeError {
    #[error("unknown post type `{0}`, expected one of: question, answer")]
    Unknown(String),
}

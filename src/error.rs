use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed edge on line {line}: expected `source target`, got {content:?}")]
    MalformedEdgeLine { line: usize, content: String },

    #[error("color palette must contain at least one color")]
    EmptyPalette,

    #[error("no node matches {0:?}")]
    UnknownNode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

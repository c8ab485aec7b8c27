use evelina_util::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("embed needs a title, description, author or image")]
    EmptyEmbed,
    #[error("message has nothing to send")]
    EmptyMessage,
}

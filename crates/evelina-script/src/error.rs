use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("invalid embed code format")]
    InvalidFormat,
}

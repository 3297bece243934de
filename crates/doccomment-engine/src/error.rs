use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    #[error("duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    #[error("duplicate example: {0}")]
    DuplicateExample(String),
}

pub type Result<T> = std::result::Result<T, DocError>;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{id} not found")]
    MissingElement { id: String },
    #[error("element #{id} has the wrong type, expected {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("{op} failed: {message}")]
    Dom { op: &'static str, message: String },
}

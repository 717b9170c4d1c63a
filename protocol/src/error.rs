use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty frame")]
    Empty,
    #[error("unknown keyword `{0}`")]
    UnknownKeyword(String),
    #[error("{0} frame is missing a field")]
    MissingField(&'static str),
    #[error("{0} frame has too many fields")]
    TrailingField(&'static str),
    #[error("`{0}` is not an integer")]
    BadInteger(String),
    #[error("unknown shape kind `{0}`")]
    UnknownShape(String),
    #[error("malformed score line `{0}`")]
    BadScore(String),
    #[error("frame is not a text message")]
    NotText,
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("cannot draw from an empty range")]
    ZeroBound,

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("gave up after {0} rejected candidates")]
    Exhausted(u32),

    #[error("randomness source unavailable: {0}")]
    Unavailable(String),
}

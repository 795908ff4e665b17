use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherstepError {
    /// The request cannot produce a frame sequence (e.g. no cipher stage enabled).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CipherstepError>;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LdaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cannot fit a model on an empty corpus")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, LdaError>;

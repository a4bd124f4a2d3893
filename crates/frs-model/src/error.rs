use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A flag name outside the seven declared risk-factor keys.
    /// This is a programmer error, not user input.
    #[error("unknown risk factor key: {0}")]
    UnknownFlag(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

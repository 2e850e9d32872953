use thiserror::Error;

/// Errors produced while reading option maps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// The options value was not a JSON object.
    #[error("options must be a JSON object, got {0}")]
    NotAnObject(String),

    /// A recognised option held a value of the wrong type.
    #[error("invalid options: {0}")]
    Invalid(String),
}

/// Result alias for option parsing.
pub type OptionsResult<T> = Result<T, OptionsError>;

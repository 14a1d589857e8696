use thiserror::Error;

/// A single field that failed record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Missing parameter <id>.")]
    MissingParameter,

    #[error("The value of parameter <id> is not a number: {0}")]
    NotANumber(String),

    #[error("The value of parameter id is not valid: {0}")]
    InvalidArgument(i64),

    #[error("No quiz is associated with id={0}.")]
    NotFound(i64),

    #[error("The quiz is invalid")]
    Validation(Vec<FieldError>),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl QuizError {
    /// Storage failures cannot be recovered from inside a session.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuizError::Io(_) | QuizError::Serialization(_) | QuizError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClassifierError {
    /// The model was asked to classify before any training sentence was seen.
    #[error("invalid classifier state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        ClassifierError::InvalidState(msg.into())
    }
}

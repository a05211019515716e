use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] eyre::Report),
}

impl StudyError {
    /// The message without the category prefix, suitable for a dialog body.
    pub fn detail(&self) -> String {
        match self {
            StudyError::InvalidInput(msg)
            | StudyError::Conflict(msg)
            | StudyError::NotFound(msg) => msg.clone(),
            StudyError::StorageUnavailable(report) => report.to_string(),
        }
    }
}

pub type StudyResult<T> = Result<T, StudyError>;

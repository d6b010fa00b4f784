use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Validation failed for {field} [{value}]: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error in the record source: {message}")]
    SourceError { message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;

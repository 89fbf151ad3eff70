use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Common error: {0}")]
    Eyre(#[from] eyre::Error),
    #[error("Invalid date range: {from:?} - {to:?}")]
    InvalidRange {
        from: Option<DateTime<Local>>,
        to: Option<DateTime<Local>>,
    },
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

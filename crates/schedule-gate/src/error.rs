//! Error types for schedule-gate operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),

    #[error("Unset field: {0}")]
    UnsetField(&'static str),
}

pub type Result<T> = std::result::Result<T, GateError>;

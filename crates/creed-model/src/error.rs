use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {field} date '{value}': {reason}")]
    InvalidDate {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("milestone '{task}' finishes ({finish}) before it starts ({start})")]
    InvalidSpan {
        task: String,
        start: String,
        finish: String,
    },

    #[error("milestone '{0}' has an empty budget")]
    EmptyBudget(String),

    #[error("milestone task name cannot be empty")]
    EmptyTask,

    #[error("unknown label style: {0} (expected: bare|with-budget)")]
    UnknownLabelStyle(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

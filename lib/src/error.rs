//! Error types for loading the roster and the job profile catalog
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster line {line}: {reason}")]
    MalformedRoster { line: usize, reason: String },

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("Duplicate process id: {0}")]
    DuplicateProcess(String),

    #[error("Arrival time {arrival_time} of {id} is out of range")]
    ArrivalTimeOutOfRange { id: String, arrival_time: i32 },

    #[error("No job profile for process {0}")]
    UnknownProcess(String),

    #[error("Invalid job profile for {id}: {reason}")]
    InvalidProfile { id: String, reason: String },

    #[error("Failed to parse job profile catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

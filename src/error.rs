use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid workout type: '{0}'")]
    InvalidWorkoutType(String),

    #[error("Malformed {code} packet: expected {expected}, found {found}")]
    MalformedPacket {
        code: String,
        expected: String,
        found: String,
    },

    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatingError {
    #[error("Invalid trajectory: {0}")]
    InvalidTrajectory(String),

    #[error("Atmosphere lookup failed at altitude {altitude} m: {reason}")]
    AtmosphereLookupFailure { altitude: f64, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Column `{0}` not found in trajectory header")]
    MissingColumn(String),

    #[error("Row {row}, column {column}: cannot parse `{value}` as a number")]
    InvalidValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Heating(#[from] HeatingError),
}

/// Convenience result type used across the crate.
pub type PictoplaceResult<T> = Result<T, PictoplaceError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for boundary parsing, data-source IO and validation.
///
/// Placement computation itself is total and never produces one of these for a valid
/// [`crate::PictographKey`].
pub enum PictoplaceError {
    /// Invalid model data (e.g. a turns value outside `0..=3`).
    #[error("validation error: {0}")]
    Validation(String),

    /// A location name outside the eight canonical locations.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// A direction name outside the eight offset directions.
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    /// The override data source could not be read or written.
    #[error("data source error: {0}")]
    DataSource(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PictoplaceError {
    /// Build a [`PictoplaceError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PictoplaceError::DataSource`] error.
    pub fn data_source(msg: impl Into<String>) -> Self {
        Self::DataSource(msg.into())
    }

    /// Build a [`PictoplaceError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PictoplaceError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use crate::search::PointId;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("point {0} is not registered")]
    UnknownPoint(PointId),
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    #[error("search exhausted the frontier without visiting all {num_points} points")]
    SearchExhausted { num_points: usize },
    #[error("search exceeded its time limit after {expanded_nodes} expansions")]
    TimeLimitExceeded { expanded_nodes: u64 },
    #[error("search exceeded its budget of {limit} expansions")]
    ExpansionLimitExceeded { limit: u64 },
    #[error("search exceeded its memory limit of {limit_mb} MB")]
    MemoryLimitExceeded { limit_mb: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.to_string())
    }
}

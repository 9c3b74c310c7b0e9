use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Ingredient not found in catalog: {0}")]
    IngredientNotFound(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Cannot normalize zero-calorie meal: {}", .0.join(" "))]
    ZeroCalorieMeal(Vec<String>),

    #[error("Non-finite value for {metric}: {value}")]
    NonFiniteValue { metric: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Broad failure classes used when reporting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Lookup,
    Domain,
    Io,
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::InvalidConfig(_) => ErrorKind::Config,
            StatsError::IngredientNotFound(_) | StatsError::UnknownMetric(_) => ErrorKind::Lookup,
            StatsError::ZeroCalorieMeal(_) | StatsError::NonFiniteValue { .. } => {
                ErrorKind::Domain
            }
            StatsError::Io(_) | StatsError::Json(_) | StatsError::Csv(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

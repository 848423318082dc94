use thiserror::Error;

pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Plan generation error: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

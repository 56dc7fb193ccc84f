use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Degenerate solve: {0}")]
    DegenerateSolve(String),

    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("Empty portfolio: {0}")]
    EmptyPortfolio(String),
}

pub mod annuity;
pub mod drawdown;
pub mod error;
pub mod income;
pub mod lifecycle;
pub mod portfolio;
pub mod rates;
pub mod request;
pub mod scenarios;
pub mod types;

pub use error::PlannerError;
pub use types::*;

/// Standard result type for all planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

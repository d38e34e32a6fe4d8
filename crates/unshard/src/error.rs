//! error types for unshard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// zero denominator at construction, or division by a zero fraction.
    /// also surfaces when two interpolation points share an x coordinate.
    #[error("division by zero")]
    DivisionByZero,

    #[error("not integral: {0}")]
    NotIntegral(String),

    #[error("not enough shares: have {have}, need {need}")]
    InsufficientShares { have: usize, need: usize },
}

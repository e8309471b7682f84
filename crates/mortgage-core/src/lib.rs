pub mod analysis;
pub mod error;
pub mod loan;
pub mod payment;
pub mod schedule;
pub mod types;
pub mod yearly;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;

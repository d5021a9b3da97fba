// Module declarations
pub(crate) mod funds_errors;
pub(crate) mod funds_model;
pub(crate) mod funds_traits;

// Re-export the public interface
pub use funds_errors::FundError;
pub use funds_model::{FundFilter, FundProfile, FundType};
pub use funds_traits::FundRepositoryTrait;

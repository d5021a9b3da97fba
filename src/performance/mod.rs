// Module declarations
pub mod metrics;
pub(crate) mod performance_model;
pub(crate) mod performance_traits;

// Re-export the public interface
pub use performance_model::PerformanceObservation;
pub use performance_traits::PerformanceRepositoryTrait;

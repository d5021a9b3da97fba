// Module declarations
pub(crate) mod analysis_model;
pub(crate) mod analysis_service;
pub(crate) mod analysis_traits;
pub mod grading;
pub mod market_context;
pub mod optimizer;
pub mod recommendation;


// Re-export the public interface
pub use analysis_model::{AnalysisResult, Grade, MarketOutlook, Recommendation};
pub use analysis_service::FundAnalysisService;
pub use analysis_traits::{FundAnalysisServiceTrait, RandomSourceTrait};
pub use market_context::ThreadRngSource;

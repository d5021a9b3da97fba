use async_trait::async_trait;

use super::analysis_model::AnalysisResult;
use crate::errors::Result;

/// Trait defining the contract for the fund analysis service.
#[async_trait]
pub trait FundAnalysisServiceTrait: Send + Sync {
    /// Runs the full analysis pipeline for a fund.
    ///
    /// `analysis_period` is accepted for interface compatibility and logged,
    /// but the computation always uses the full available history.
    async fn analyze(&self, fund_code: &str, analysis_period: &str) -> Result<AnalysisResult>;
}

/// Injectable randomness seam. The market-correlation placeholder is the
/// only consumer; tests pin it to make the pipeline deterministic.
pub trait RandomSourceTrait: Send + Sync {
    /// A uniform sample from `[lower, upper)`.
    fn uniform(&self, lower: f64, upper: f64) -> f64;
}

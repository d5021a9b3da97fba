use async_trait::async_trait;
use chrono::NaiveDate;

use super::performance_model::PerformanceObservation;
use crate::errors::Result;

/// Trait defining the contract for the read-only performance history
/// collaborator. Implementations must return observations newest first.
#[async_trait]
pub trait PerformanceRepositoryTrait: Send + Sync {
    /// Full observation history for a fund, newest observation first.
    async fn get_history(&self, fund_code: &str) -> Result<Vec<PerformanceObservation>>;

    /// Observations dated within `[start, end]`, newest observation first.
    async fn get_history_by_date_range(
        &self,
        fund_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PerformanceObservation>>;
}

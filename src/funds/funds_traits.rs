use async_trait::async_trait;

use super::funds_model::{FundFilter, FundProfile};
use crate::errors::Result;

/// Trait defining the contract for the read-only fund metadata collaborator.
///
/// Implementations live with the hosting application (database, cache,
/// remote service); the analytics core only consumes query results.
#[async_trait]
pub trait FundRepositoryTrait: Send + Sync {
    /// Returns the fund with the given code, or `None` when unknown.
    async fn get_by_code(&self, fund_code: &str) -> Result<Option<FundProfile>>;

    /// Lists all funds matching the filter, in repository iteration order.
    async fn list(&self, filter: &FundFilter) -> Result<Vec<FundProfile>>;
}

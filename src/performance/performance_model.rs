use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One periodic performance observation for a fund.
///
/// A fund owns an ordered sequence of these, newest first; index 0 is the
/// latest observation. All rates are signed fractions (0.05 = 5%).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceObservation {
    pub fund_code: String,
    pub date: NaiveDate,
    /// Net asset value on the observation date
    pub nav: Decimal,
    pub daily_return: Decimal,
    pub weekly_return: Decimal,
    pub monthly_return: Decimal,
    pub yearly_return: Decimal,
    /// Cumulative return since inception
    pub total_return: Decimal,
    pub benchmark_return: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    /// Worst peak-to-trough decline, signed and <= 0
    pub max_drawdown: Decimal,
}

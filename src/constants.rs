use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for return/risk metrics
pub const METRIC_DECIMAL_PRECISION: u32 = 4;

/// Decimal precision for scores, allocations and thresholds
pub const SCORE_DECIMAL_PRECISION: u32 = 2;

/// Minimum sample size for empirical tail statistics (VaR/CVaR)
pub const MIN_TAIL_SAMPLE_SIZE: usize = 10;

/// Sentinel VaR reported when the sample is too small to estimate the tail
pub const VAR_INSUFFICIENT_SAMPLE: Decimal = dec!(-0.05);

/// Sentinel CVaR reported when the sample is too small to estimate the tail
pub const CVAR_INSUFFICIENT_SAMPLE: Decimal = dec!(-0.08);

/// Calendar days used for annualization over business-day counts
pub const CALENDAR_DAYS_PER_YEAR: Decimal = dec!(365);

/// Confidence level used for the reported VaR95/CVaR95 figures
pub const TAIL_CONFIDENCE_LEVEL: Decimal = dec!(0.95);

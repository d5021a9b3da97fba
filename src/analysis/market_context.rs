use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::analysis_model::MarketOutlook;
use super::analysis_traits::RandomSourceTrait;
use crate::constants::METRIC_DECIMAL_PRECISION;
use crate::funds::FundType;
use crate::performance::metrics::round_half_up;
use crate::performance::PerformanceObservation;

/// Thread-local RNG behind the randomness seam; the production source.
#[derive(Debug, Default, Clone)]
pub struct ThreadRngSource;

impl RandomSourceTrait for ThreadRngSource {
    fn uniform(&self, lower: f64, upper: f64) -> f64 {
        rand::thread_rng().gen_range(lower..upper)
    }
}

/// Outlook from the latest observation's monthly and yearly returns.
/// An empty series is NEUTRAL.
pub fn market_outlook(history: &[PerformanceObservation]) -> MarketOutlook {
    let latest = match history.first() {
        Some(obs) => obs,
        None => return MarketOutlook::Neutral,
    };

    if latest.monthly_return >= dec!(0.05) && latest.yearly_return >= dec!(0.15) {
        MarketOutlook::Bullish
    } else if latest.monthly_return <= dec!(-0.05) && latest.yearly_return <= dec!(-0.10) {
        MarketOutlook::Bearish
    } else {
        MarketOutlook::Neutral
    }
}

/// Placeholder market-correlation figure: a uniform draw from [0.4, 0.8)
/// when at least two observations exist, a fixed 0.5 otherwise.
pub fn market_correlation(
    history: &[PerformanceObservation],
    random_source: &dyn RandomSourceTrait,
) -> Decimal {
    if history.len() < 2 {
        return dec!(0.5);
    }

    let sample = random_source.uniform(0.4, 0.8);
    let correlation = Decimal::from_f64(sample).unwrap_or(dec!(0.5));
    round_half_up(correlation, METRIC_DECIMAL_PRECISION)
}

/// Descriptive sector-exposure label for a fund type.
pub fn sector_exposure(fund_type: FundType) -> &'static str {
    match fund_type {
        FundType::Equity => "Broad equity market",
        FundType::Bond => "Bond market",
        FundType::Mixed => "Equity/bond blend",
        FundType::MoneyMarketFund => "Short-term money market instruments",
        FundType::Other => "Diversified assets",
    }
}

/// Illustrative benchmark-correlation map. Fixed coefficients; the
/// name -> coefficient shape is the interface contract.
pub fn benchmark_correlations() -> HashMap<String, Decimal> {
    HashMap::from([
        ("KOSPI".to_string(), dec!(0.75)),
        ("KOSDAQ".to_string(), dec!(0.65)),
        ("MSCI World".to_string(), dec!(0.45)),
    ])
}

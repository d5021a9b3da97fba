use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analysis_model::Grade;
use crate::constants::SCORE_DECIMAL_PRECISION;
use crate::funds::{FundProfile, FundType};
use crate::performance::metrics::round_half_up;

/// Maximum number of complementary funds suggested per analysis.
pub const MAX_COMPLEMENTARY_FUNDS: usize = 3;

/// Target allocation fraction: 0.10 base, adjusted by performance grade and
/// declared risk level. Deliberately unclamped; extreme inputs can push the
/// figure outside [0, 1] and callers see that as-is.
pub fn optimal_allocation(performance_grade: Grade, risk_level: i32) -> Decimal {
    let mut allocation = dec!(0.10);

    match performance_grade {
        Grade::APlus => allocation += dec!(0.05),
        Grade::A => allocation += dec!(0.03),
        Grade::BPlus => allocation += dec!(0.01),
        Grade::C | Grade::D => allocation -= dec!(0.03),
        Grade::B => {}
    }

    if risk_level >= 4 {
        allocation -= dec!(0.02);
    } else if risk_level <= 2 {
        allocation += dec!(0.02);
    }

    round_half_up(allocation, SCORE_DECIMAL_PRECISION)
}

/// Drift threshold that should trigger a rebalance: 0.05 base, widened for
/// volatile funds and tightened for calm ones.
pub fn rebalancing_threshold(volatility: Decimal) -> Decimal {
    let mut threshold = dec!(0.05);

    if volatility > dec!(0.15) {
        threshold += dec!(0.02);
    } else if volatility < dec!(0.10) {
        threshold -= dec!(0.01);
    }

    round_half_up(threshold, SCORE_DECIMAL_PRECISION)
}

/// Whether a candidate fund type diversifies the subject fund type. The
/// relation is intentionally asymmetric: Mixed pairs with money-market
/// funds but not the other way around.
fn complements(subject: FundType, candidate: FundType) -> bool {
    matches!(
        (subject, candidate),
        (FundType::Equity, FundType::Bond)
            | (FundType::Bond, FundType::Equity)
            | (FundType::Mixed, FundType::MoneyMarketFund)
    )
}

/// Shortlist of complementary fund codes drawn from `candidates` in their
/// given order, excluding the subject fund, capped at
/// [`MAX_COMPLEMENTARY_FUNDS`].
pub fn complementary_funds(subject: &FundProfile, candidates: &[FundProfile]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| candidate.fund_code != subject.fund_code)
        .filter(|candidate| complements(subject.fund_type, candidate.fund_type))
        .take(MAX_COMPLEMENTARY_FUNDS)
        .map(|candidate| candidate.fund_code.clone())
        .collect()
}

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use super::performance_model::PerformanceObservation;
use crate::calendar::BusinessCalendarTrait;
use crate::constants::{
    CALENDAR_DAYS_PER_YEAR, CVAR_INSUFFICIENT_SAMPLE, METRIC_DECIMAL_PRECISION,
    MIN_TAIL_SAMPLE_SIZE, VAR_INSUFFICIENT_SAMPLE,
};
use crate::errors::{CalculatorError, Result};

/// Rounds half-up to the requested number of decimal places.
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn round_metric(value: Decimal) -> Decimal {
    round_half_up(value, METRIC_DECIMAL_PRECISION)
}

/// Annualized return derived from the latest cumulative return and the
/// business-day age of the fund: `(1 + total)^(365/business_days) - 1`.
///
/// Fewer than two observations, or a zero business-day count, yield zero.
pub fn annualized_return(
    history: &[PerformanceObservation],
    inception_date: NaiveDate,
    as_of_date: NaiveDate,
    calendar: &dyn BusinessCalendarTrait,
) -> Result<Decimal> {
    if history.len() < 2 {
        return Ok(Decimal::ZERO);
    }

    let business_days = calendar.business_days_between(inception_date, as_of_date);
    if business_days == 0 {
        return Ok(Decimal::ZERO);
    }

    let total_return = history[0].total_return;
    let base = Decimal::ONE + total_return;
    // A fund cannot lose more than everything; cap instead of feeding a
    // non-positive base into powd.
    if base <= Decimal::ZERO {
        return Ok(dec!(-1.0));
    }

    let exponent = CALENDAR_DAYS_PER_YEAR / Decimal::from(business_days);
    let annualized = base.checked_powd(exponent).ok_or_else(|| {
        CalculatorError::Overflow(format!(
            "annualized return overflow: base {} exponent {}",
            base, exponent
        ))
    })?;

    Ok(round_metric(annualized - Decimal::ONE))
}

/// Sortino ratio: mean daily return over downside deviation.
///
/// Returns zero for an empty series or when the downside deviation is zero.
pub fn sortino_ratio(history: &[PerformanceObservation]) -> Decimal {
    if history.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(history.len());
    let sum: Decimal = history.iter().map(|obs| obs.daily_return).sum();
    let avg_daily_return = round_metric(sum / count);

    let downside = downside_deviation(history, avg_daily_return);
    if downside.is_zero() {
        return Decimal::ZERO;
    }

    round_metric(avg_daily_return / downside)
}

/// Root-mean-square of `(r - mean)` over returns strictly below the mean,
/// with a sample-size `n - 1` denominator.
fn downside_deviation(history: &[PerformanceObservation], avg_daily_return: Decimal) -> Decimal {
    if history.len() <= 1 {
        return Decimal::ZERO;
    }

    let sum_squared_downside: Decimal = history
        .iter()
        .map(|obs| obs.daily_return)
        .filter(|&r| r < avg_daily_return)
        .map(|r| {
            let diff = r - avg_daily_return;
            diff * diff
        })
        .sum();

    let variance = sum_squared_downside / Decimal::from(history.len() - 1);
    round_metric(variance.sqrt().unwrap_or(Decimal::ZERO))
}

/// Empirical Value at Risk at the given confidence level: the daily return
/// at index `floor((1 - confidence) * n)` of the ascending-sorted sample,
/// clamped to the last index. No interpolation.
///
/// Samples smaller than [`MIN_TAIL_SAMPLE_SIZE`] report the fixed sentinel
/// [`VAR_INSUFFICIENT_SAMPLE`] rather than a computed statistic.
pub fn value_at_risk(history: &[PerformanceObservation], confidence: Decimal) -> Decimal {
    if history.len() < MIN_TAIL_SAMPLE_SIZE {
        return VAR_INSUFFICIENT_SAMPLE;
    }

    let mut returns: Vec<Decimal> = history.iter().map(|obs| obs.daily_return).collect();
    returns.sort();

    let count = returns.len();
    let index = ((Decimal::ONE - confidence) * Decimal::from(count))
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(count - 1);

    returns[index]
}

/// Conditional VaR: the mean daily return over the tail at or beyond the
/// VaR threshold. An empty tail falls back to the VaR itself.
///
/// Samples smaller than [`MIN_TAIL_SAMPLE_SIZE`] report the fixed sentinel
/// [`CVAR_INSUFFICIENT_SAMPLE`].
pub fn conditional_value_at_risk(
    history: &[PerformanceObservation],
    confidence: Decimal,
) -> Decimal {
    if history.len() < MIN_TAIL_SAMPLE_SIZE {
        return CVAR_INSUFFICIENT_SAMPLE;
    }

    let var = value_at_risk(history, confidence);

    let tail_returns: Vec<Decimal> = history
        .iter()
        .map(|obs| obs.daily_return)
        .filter(|&r| r <= var)
        .collect();

    if tail_returns.is_empty() {
        return var;
    }

    let sum: Decimal = tail_returns.iter().sum();
    round_metric(sum / Decimal::from(tail_returns.len()))
}

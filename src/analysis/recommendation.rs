use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analysis_model::{AnalysisResult, Grade, Recommendation};
use crate::constants::SCORE_DECIMAL_PRECISION;
use crate::funds::{FundProfile, FundType};
use crate::performance::metrics::round_half_up;

/// Decision tree over the already-computed return/risk fields. BUY is
/// evaluated before SELL, so a result that somehow satisfied both trigger
/// sets would resolve to BUY.
pub fn determine_recommendation(result: &AnalysisResult) -> Recommendation {
    let buy = result.total_return >= dec!(0.10)
        && result.sharpe_ratio >= dec!(1.0)
        && result.max_drawdown >= dec!(-0.10)
        && matches!(result.performance_grade, Grade::APlus | Grade::A);
    if buy {
        return Recommendation::Buy;
    }

    let sell = result.total_return <= dec!(-0.05)
        || result.sharpe_ratio <= dec!(0.5)
        || result.max_drawdown <= dec!(-0.20)
        || result.performance_grade == Grade::D;
    if sell {
        return Recommendation::Sell;
    }

    Recommendation::Hold
}

/// Confidence in the recommendation: additive bonuses for sample depth,
/// grade and Sharpe ratio on top of a 0.5 base, capped at 1.0.
pub fn confidence_score(result: &AnalysisResult, observation_count: usize) -> Decimal {
    let mut score = dec!(0.5);

    if observation_count >= 30 {
        score += dec!(0.2);
    } else if observation_count >= 10 {
        score += dec!(0.1);
    }

    match result.performance_grade {
        Grade::APlus | Grade::A => score += dec!(0.2),
        Grade::BPlus | Grade::B => score += dec!(0.1),
        _ => {}
    }

    if result.sharpe_ratio >= dec!(1.0) {
        score += dec!(0.1);
    }

    round_half_up(score.min(Decimal::ONE), SCORE_DECIMAL_PRECISION)
}

/// Strength findings. Every firing rule contributes one label; an empty
/// checklist falls back to a single default finding.
pub fn analyze_strengths(result: &AnalysisResult, fund: &FundProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if result.total_return >= dec!(0.10) {
        strengths.push("Strong total return".to_string());
    }
    if result.sharpe_ratio >= dec!(1.0) {
        strengths.push("High Sharpe ratio".to_string());
    }
    if result.excess_return >= Decimal::ZERO {
        strengths.push("Outperforms benchmark".to_string());
    }
    if fund.total_assets >= dec!(100000000000) {
        strengths.push("Large assets under management".to_string());
    }
    if fund.expense_ratio <= dec!(0.015) {
        strengths.push("Low expense ratio".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Stable management".to_string());
    }

    strengths
}

/// Weakness findings, with the same fallback behavior as strengths.
pub fn analyze_weaknesses(result: &AnalysisResult, fund: &FundProfile) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if result.total_return < Decimal::ZERO {
        weaknesses.push("Negative total return".to_string());
    }
    if result.sharpe_ratio < dec!(0.5) {
        weaknesses.push("Low Sharpe ratio".to_string());
    }
    if result.max_drawdown < dec!(-0.15) {
        weaknesses.push("Deep maximum drawdown".to_string());
    }
    if fund.expense_ratio > dec!(0.025) {
        weaknesses.push("High expense ratio".to_string());
    }

    if weaknesses.is_empty() {
        weaknesses.push("Average performance".to_string());
    }

    weaknesses
}

/// Risk findings, with the same fallback behavior as strengths.
pub fn analyze_risks(result: &AnalysisResult, fund: &FundProfile) -> Vec<String> {
    let mut risks = Vec::new();

    if result.volatility > dec!(0.20) {
        risks.push("High volatility".to_string());
    }
    if result.max_drawdown < dec!(-0.10) {
        risks.push("Large loss potential".to_string());
    }
    if fund.risk_level == 4 || fund.risk_level == 5 {
        risks.push("High declared risk level".to_string());
    }
    if fund.fund_type == FundType::Equity {
        risks.push("Equity market volatility".to_string());
    }

    if risks.is_empty() {
        risks.push("General investment risk".to_string());
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result_with(
        total_return: Decimal,
        sharpe_ratio: Decimal,
        max_drawdown: Decimal,
        performance_grade: Grade,
    ) -> AnalysisResult {
        let mut result = AnalysisResult::new(
            "F001",
            "Sample Fund",
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        );
        result.total_return = total_return;
        result.sharpe_ratio = sharpe_ratio;
        result.max_drawdown = max_drawdown;
        result.performance_grade = performance_grade;
        result
    }

    fn fund(risk_level: i32, fund_type: FundType) -> FundProfile {
        FundProfile {
            fund_code: "F001".to_string(),
            fund_name: "Sample Fund".to_string(),
            fund_type,
            risk_level,
            total_assets: dec!(50000000000),
            expense_ratio: dec!(0.02),
            inception_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        }
    }

    #[test]
    fn test_buy_when_all_conditions_hold() {
        let result = result_with(dec!(0.12), dec!(1.2), dec!(-0.05), Grade::A);
        assert_eq!(determine_recommendation(&result), Recommendation::Buy);
    }

    #[test]
    fn test_sell_on_any_trigger() {
        let poor_return = result_with(dec!(-0.05), dec!(0.8), dec!(-0.05), Grade::C);
        assert_eq!(determine_recommendation(&poor_return), Recommendation::Sell);

        let poor_sharpe = result_with(dec!(0.05), dec!(0.5), dec!(-0.05), Grade::B);
        assert_eq!(determine_recommendation(&poor_sharpe), Recommendation::Sell);

        let deep_drawdown = result_with(dec!(0.05), dec!(0.8), dec!(-0.20), Grade::B);
        assert_eq!(determine_recommendation(&deep_drawdown), Recommendation::Sell);

        let failing_grade = result_with(dec!(0.05), dec!(0.8), dec!(-0.05), Grade::D);
        assert_eq!(determine_recommendation(&failing_grade), Recommendation::Sell);
    }

    #[test]
    fn test_hold_otherwise() {
        let result = result_with(dec!(0.05), dec!(0.8), dec!(-0.05), Grade::BPlus);
        assert_eq!(determine_recommendation(&result), Recommendation::Hold);
    }

    #[test]
    fn test_confidence_score_components() {
        // 0.5 base only
        let weak = result_with(dec!(0.0), dec!(0.4), dec!(0.0), Grade::C);
        assert_eq!(confidence_score(&weak, 5), dec!(0.50));

        // 0.5 + 0.1 (>=10 obs) + 0.1 (B grade)
        let medium = result_with(dec!(0.0), dec!(0.4), dec!(0.0), Grade::B);
        assert_eq!(confidence_score(&medium, 15), dec!(0.70));

        // 0.5 + 0.2 + 0.2 + 0.1 = 1.0
        let strong = result_with(dec!(0.2), dec!(1.5), dec!(0.0), Grade::APlus);
        assert_eq!(confidence_score(&strong, 40), dec!(1.00));
    }

    #[test]
    fn test_confidence_score_is_capped_and_two_decimals() {
        for count in [0usize, 9, 10, 29, 30, 100] {
            for grade in [Grade::APlus, Grade::B, Grade::D] {
                let result = result_with(dec!(0.2), dec!(1.5), dec!(0.0), grade);
                let score = confidence_score(&result, count);
                assert!(score >= Decimal::ZERO && score <= Decimal::ONE);
                assert!(score.scale() <= 2);
            }
        }
    }

    #[test]
    fn test_narrative_lists_never_empty() {
        // A result and fund triggering none of the strength rules
        let mut result = result_with(dec!(0.01), dec!(0.7), dec!(-0.02), Grade::B);
        result.excess_return = dec!(-0.01);
        let profile = fund(3, FundType::Bond);

        assert_eq!(
            analyze_strengths(&result, &profile),
            vec!["Stable management".to_string()]
        );
        assert_eq!(
            analyze_weaknesses(&result, &profile),
            vec!["Average performance".to_string()]
        );
        assert_eq!(
            analyze_risks(&result, &profile),
            vec!["General investment risk".to_string()]
        );
    }

    #[test]
    fn test_narrative_rules_accumulate() {
        let mut result = result_with(dec!(0.12), dec!(1.1), dec!(-0.18), Grade::A);
        result.excess_return = dec!(0.02);
        result.volatility = dec!(0.25);
        let profile = fund(5, FundType::Equity);

        let strengths = analyze_strengths(&result, &profile);
        assert!(strengths.contains(&"Strong total return".to_string()));
        assert!(strengths.contains(&"High Sharpe ratio".to_string()));
        assert!(strengths.contains(&"Outperforms benchmark".to_string()));

        let weaknesses = analyze_weaknesses(&result, &profile);
        assert_eq!(weaknesses, vec!["Deep maximum drawdown".to_string()]);

        let risks = analyze_risks(&result, &profile);
        assert_eq!(
            risks,
            vec![
                "High volatility".to_string(),
                "Large loss potential".to_string(),
                "High declared risk level".to_string(),
                "Equity market volatility".to_string(),
            ]
        );
    }
}

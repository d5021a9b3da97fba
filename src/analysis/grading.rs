use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analysis_model::Grade;

/// Performance grade from total and excess return. First matching rung of
/// the ladder wins.
pub fn performance_grade(total_return: Decimal, excess_return: Decimal) -> Grade {
    if total_return >= dec!(0.15) && excess_return >= dec!(0.05) {
        Grade::APlus
    } else if total_return >= dec!(0.10) && excess_return >= dec!(0.02) {
        Grade::A
    } else if total_return >= dec!(0.05) && excess_return >= Decimal::ZERO {
        Grade::BPlus
    } else if total_return >= Decimal::ZERO {
        Grade::B
    } else if total_return >= dec!(-0.05) {
        Grade::C
    } else {
        Grade::D
    }
}

/// Overall grade: performance weighted double against the inverted declared
/// risk level, using integer division.
pub fn overall_grade(performance_grade: Grade, risk_level: i32) -> Grade {
    let overall_score = (performance_grade.score() * 2 + (6 - risk_level)) / 3;

    if overall_score >= 9 {
        Grade::APlus
    } else if overall_score >= 8 {
        Grade::A
    } else if overall_score >= 7 {
        Grade::BPlus
    } else if overall_score >= 6 {
        Grade::B
    } else if overall_score >= 5 {
        Grade::C
    } else {
        Grade::D
    }
}

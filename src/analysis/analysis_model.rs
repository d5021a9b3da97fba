use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Letter grade used for both the performance and the overall grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    #[default]
    D,
}

impl Grade {
    /// Numeric score used by the overall-grade formula.
    pub fn score(self) -> i32 {
        match self {
            Grade::APlus => 10,
            Grade::A => 9,
            Grade::BPlus => 8,
            Grade::B => 7,
            Grade::C => 6,
            Grade::D => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete investment recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Buy,
    #[default]
    Hold,
    Sell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Sell => "SELL",
        };
        f.write_str(token)
    }
}

/// Market-outlook classification derived from the latest observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketOutlook {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl fmt::Display for MarketOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            MarketOutlook::Bullish => "BULLISH",
            MarketOutlook::Bearish => "BEARISH",
            MarketOutlook::Neutral => "NEUTRAL",
        };
        f.write_str(token)
    }
}

/// Output aggregate of one analysis request, built incrementally by the
/// pipeline stages. Lives for a single request and is never persisted by
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub fund_code: String,
    pub fund_name: String,
    pub analysis_date: NaiveDate,

    // Return metrics
    pub total_return: Decimal,
    pub annualized_return: Decimal,
    pub benchmark_return: Decimal,
    pub excess_return: Decimal,

    // Risk metrics
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    pub sortino_ratio: Decimal,
    pub max_drawdown: Decimal,
    pub var_95: Decimal,
    pub cvar_95: Decimal,
    pub benchmark_correlations: HashMap<String, Decimal>,

    // Grades
    pub performance_grade: Grade,
    /// Declared fund risk level, copied through unchanged
    pub risk_grade: i32,
    pub overall_grade: Grade,

    // Recommendation
    pub recommendation: Recommendation,
    /// Confidence in the recommendation, clamped to [0, 1]
    pub confidence_score: Decimal,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub risks: Vec<String>,

    // Market context
    pub market_outlook: MarketOutlook,
    pub market_correlation: Decimal,
    pub sector_exposure: String,

    // Portfolio construction
    pub optimal_allocation: Decimal,
    pub rebalancing_threshold: Decimal,
    pub complementary_funds: Vec<String>,
}

impl AnalysisResult {
    /// Fresh result shell carrying only the identity fields; every metric
    /// starts at zero and every closed-set field at its neutral default.
    pub fn new(fund_code: &str, fund_name: &str, analysis_date: NaiveDate) -> Self {
        Self {
            fund_code: fund_code.to_string(),
            fund_name: fund_name.to_string(),
            analysis_date,
            total_return: Decimal::ZERO,
            annualized_return: Decimal::ZERO,
            benchmark_return: Decimal::ZERO,
            excess_return: Decimal::ZERO,
            volatility: Decimal::ZERO,
            sharpe_ratio: Decimal::ZERO,
            sortino_ratio: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            var_95: Decimal::ZERO,
            cvar_95: Decimal::ZERO,
            benchmark_correlations: HashMap::new(),
            performance_grade: Grade::default(),
            risk_grade: 0,
            overall_grade: Grade::default(),
            recommendation: Recommendation::default(),
            confidence_score: Decimal::ZERO,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            risks: Vec::new(),
            market_outlook: MarketOutlook::default(),
            market_correlation: Decimal::ZERO,
            sector_exposure: String::new(),
            optimal_allocation: Decimal::ZERO,
            rebalancing_threshold: Decimal::ZERO,
            complementary_funds: Vec::new(),
        }
    }
}

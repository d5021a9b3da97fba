use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of fund categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FundType {
    Equity,
    Bond,
    Mixed,
    MoneyMarketFund,
    Other,
}

/// Domain model for fund metadata. Read-only to the analytics core; the
/// hosting application owns creation and mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundProfile {
    /// Unique fund code
    pub fund_code: String,
    pub fund_name: String,
    pub fund_type: FundType,
    /// Declared risk level, 1 (lowest) to 5 (highest)
    pub risk_level: i32,
    /// Total assets under management
    pub total_assets: Decimal,
    pub expense_ratio: Decimal,
    pub inception_date: NaiveDate,
}

/// Filter for fund listings. An empty filter matches every fund.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundFilter {
    pub fund_type: Option<FundType>,
    pub risk_level: Option<i32>,
}

impl FundFilter {
    pub fn by_type(fund_type: FundType) -> Self {
        Self {
            fund_type: Some(fund_type),
            risk_level: None,
        }
    }

    pub fn by_risk_level(risk_level: i32) -> Self {
        Self {
            fund_type: None,
            risk_level: Some(risk_level),
        }
    }

    /// Whether a fund matches every populated criterion.
    pub fn matches(&self, fund: &FundProfile) -> bool {
        if let Some(fund_type) = self.fund_type {
            if fund.fund_type != fund_type {
                return false;
            }
        }
        if let Some(risk_level) = self.risk_level {
            if fund.risk_level != risk_level {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_fund(fund_type: FundType, risk_level: i32) -> FundProfile {
        FundProfile {
            fund_code: "F001".to_string(),
            fund_name: "Sample Fund".to_string(),
            fund_type,
            risk_level,
            total_assets: dec!(50000000000),
            expense_ratio: dec!(0.012),
            inception_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FundFilter::default();
        assert!(filter.matches(&sample_fund(FundType::Equity, 3)));
        assert!(filter.matches(&sample_fund(FundType::MoneyMarketFund, 1)));
    }

    #[test]
    fn test_type_filter() {
        let filter = FundFilter::by_type(FundType::Bond);
        assert!(filter.matches(&sample_fund(FundType::Bond, 2)));
        assert!(!filter.matches(&sample_fund(FundType::Equity, 2)));
    }

    #[test]
    fn test_risk_level_filter() {
        let filter = FundFilter::by_risk_level(4);
        assert!(filter.matches(&sample_fund(FundType::Mixed, 4)));
        assert!(!filter.matches(&sample_fund(FundType::Mixed, 3)));
    }
}

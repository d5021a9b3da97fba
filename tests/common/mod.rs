use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

use fundlens_core::errors::Result;
use fundlens_core::{
    BusinessCalendarTrait, FundAnalysisService, FundFilter, FundProfile, FundRepositoryTrait,
    FundType, PerformanceObservation, PerformanceRepositoryTrait, RandomSourceTrait,
    WeekdayCalendar,
};

/// In-memory fund store standing in for the hosting application's
/// repository implementation.
pub struct InMemoryFundRepository {
    pub funds: Vec<FundProfile>,
}

#[async_trait]
impl FundRepositoryTrait for InMemoryFundRepository {
    async fn get_by_code(&self, fund_code: &str) -> Result<Option<FundProfile>> {
        Ok(self
            .funds
            .iter()
            .find(|fund| fund.fund_code == fund_code)
            .cloned())
    }

    async fn list(&self, filter: &FundFilter) -> Result<Vec<FundProfile>> {
        Ok(self
            .funds
            .iter()
            .filter(|fund| filter.matches(fund))
            .cloned()
            .collect())
    }
}

pub struct InMemoryPerformanceRepository {
    pub history: HashMap<String, Vec<PerformanceObservation>>,
}

#[async_trait]
impl PerformanceRepositoryTrait for InMemoryPerformanceRepository {
    async fn get_history(&self, fund_code: &str) -> Result<Vec<PerformanceObservation>> {
        Ok(self.history.get(fund_code).cloned().unwrap_or_default())
    }

    async fn get_history_by_date_range(
        &self,
        fund_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PerformanceObservation>> {
        Ok(self
            .history
            .get(fund_code)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|obs| obs.date >= start && obs.date <= end)
            .collect())
    }
}

/// Pinned randomness so pipeline output is fully deterministic.
pub struct FixedRandomSource(pub f64);

impl RandomSourceTrait for FixedRandomSource {
    fn uniform(&self, _lower: f64, _upper: f64) -> f64 {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fund(code: &str, name: &str, fund_type: FundType, risk_level: i32) -> FundProfile {
    FundProfile {
        fund_code: code.to_string(),
        fund_name: name.to_string(),
        fund_type,
        risk_level,
        total_assets: dec!(200000000000),
        expense_ratio: dec!(0.01),
        inception_date: date(2024, 1, 1),
    }
}

pub fn observation(fund_code: &str, date: NaiveDate, daily_return: Decimal) -> PerformanceObservation {
    PerformanceObservation {
        fund_code: fund_code.to_string(),
        date,
        nav: dec!(1000.00),
        daily_return,
        weekly_return: dec!(0.01),
        monthly_return: dec!(0.06),
        yearly_return: dec!(0.16),
        total_return: dec!(0.16),
        benchmark_return: dec!(0.10),
        volatility: dec!(0.18),
        sharpe_ratio: dec!(1.3),
        max_drawdown: dec!(-0.08),
    }
}

pub fn build_service(
    funds: Vec<FundProfile>,
    history: HashMap<String, Vec<PerformanceObservation>>,
) -> FundAnalysisService {
    let calendar: Arc<dyn BusinessCalendarTrait> = Arc::new(WeekdayCalendar);
    FundAnalysisService::new(
        Arc::new(InMemoryFundRepository { funds }),
        Arc::new(InMemoryPerformanceRepository { history }),
        calendar,
        Arc::new(FixedRandomSource(0.55)),
    )
}

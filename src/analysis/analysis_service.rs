use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::{debug, error, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::analysis_model::{AnalysisResult, Grade, MarketOutlook, Recommendation};
use super::analysis_traits::{FundAnalysisServiceTrait, RandomSourceTrait};
use super::{grading, market_context, optimizer, recommendation};
use crate::calendar::BusinessCalendarTrait;
use crate::constants::TAIL_CONFIDENCE_LEVEL;
use crate::errors::{Error, Result};
use crate::funds::{FundError, FundFilter, FundProfile, FundRepositoryTrait, FundType};
use crate::performance::{metrics, PerformanceObservation, PerformanceRepositoryTrait};

/// Orchestrates the analysis pipeline over the injected read-only
/// collaborators. One analysis request is a synchronous, single-pass
/// computation over a point-in-time snapshot of the repositories; the
/// service holds no mutable state and may be shared across requests.
pub struct FundAnalysisService {
    fund_repository: Arc<dyn FundRepositoryTrait>,
    performance_repository: Arc<dyn PerformanceRepositoryTrait>,
    calendar: Arc<dyn BusinessCalendarTrait>,
    random_source: Arc<dyn RandomSourceTrait>,
}

impl FundAnalysisService {
    pub fn new(
        fund_repository: Arc<dyn FundRepositoryTrait>,
        performance_repository: Arc<dyn PerformanceRepositoryTrait>,
        calendar: Arc<dyn BusinessCalendarTrait>,
        random_source: Arc<dyn RandomSourceTrait>,
    ) -> Self {
        Self {
            fund_repository,
            performance_repository,
            calendar,
            random_source,
        }
    }

    /// Retrieves a fund by code, failing with NotFound when unknown.
    pub async fn get_fund(&self, fund_code: &str) -> Result<FundProfile> {
        self.fund_repository
            .get_by_code(fund_code)
            .await?
            .ok_or_else(|| Error::Fund(FundError::NotFound(fund_code.to_string())))
    }

    /// Lists funds of the given type.
    pub async fn get_funds_by_type(&self, fund_type: FundType) -> Result<Vec<FundProfile>> {
        self.fund_repository
            .list(&FundFilter::by_type(fund_type))
            .await
    }

    /// Lists funds with the given declared risk level.
    pub async fn get_funds_by_risk_level(&self, risk_level: i32) -> Result<Vec<FundProfile>> {
        self.fund_repository
            .list(&FundFilter::by_risk_level(risk_level))
            .await
    }

    /// Full performance history for a fund, newest observation first.
    pub async fn get_performance_history(
        &self,
        fund_code: &str,
    ) -> Result<Vec<PerformanceObservation>> {
        self.performance_repository.get_history(fund_code).await
    }

    /// Performance history within a date range, newest observation first.
    pub async fn get_performance_history_by_date_range(
        &self,
        fund_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PerformanceObservation>> {
        self.performance_repository
            .get_history_by_date_range(fund_code, start, end)
            .await
    }

    /// Well-defined result for a fund without performance history: all
    /// metrics zero, grade D, declared risk level copied through, HOLD with
    /// zero confidence, and one insufficient-history finding per list.
    fn default_result(mut result: AnalysisResult, fund: &FundProfile) -> AnalysisResult {
        result.performance_grade = Grade::D;
        result.risk_grade = fund.risk_level;
        result.overall_grade = Grade::D;
        result.recommendation = Recommendation::Hold;
        result.confidence_score = Decimal::ZERO;
        result.market_outlook = MarketOutlook::Neutral;
        result.optimal_allocation = Decimal::ZERO;
        result.rebalancing_threshold = Decimal::ZERO;

        result.strengths = vec!["New fund with limited track record".to_string()];
        result.weaknesses = vec!["Insufficient history for accurate analysis".to_string()];
        result.risks = vec!["Risk cannot be assessed without history".to_string()];

        result
    }

    /// Degrade policy for a mid-pipeline stage failure: already-populated
    /// fields stay, the decision fields are forced to their safe defaults.
    /// The whole result degrades; there is no stage-level partial recovery.
    fn apply_degrade_policy(result: &mut AnalysisResult) {
        result.recommendation = Recommendation::Hold;
        result.confidence_score = Decimal::ZERO;
        result.overall_grade = Grade::D;
    }

    async fn run_pipeline(
        &self,
        result: &mut AnalysisResult,
        fund: &FundProfile,
        history: &[PerformanceObservation],
    ) -> Result<()> {
        self.analyze_returns(result, fund, history)?;
        Self::assess_risk(result, fund);
        self.generate_recommendation(result, fund, history);
        self.optimize_portfolio(result, fund).await?;
        Ok(())
    }

    /// Stage 1: return and downside-risk metrics from the history snapshot.
    fn analyze_returns(
        &self,
        result: &mut AnalysisResult,
        fund: &FundProfile,
        history: &[PerformanceObservation],
    ) -> Result<()> {
        debug!("Running return analysis for fund {}", result.fund_code);

        // Index 0 is the latest observation by repository contract.
        let latest = &history[0];
        result.total_return = latest.total_return;
        result.benchmark_return = latest.benchmark_return;
        result.excess_return = latest.total_return - latest.benchmark_return;

        result.annualized_return = metrics::annualized_return(
            history,
            fund.inception_date,
            result.analysis_date,
            self.calendar.as_ref(),
        )?;

        result.volatility = latest.volatility;
        result.sharpe_ratio = latest.sharpe_ratio;
        result.max_drawdown = latest.max_drawdown;
        result.sortino_ratio = metrics::sortino_ratio(history);
        result.var_95 = metrics::value_at_risk(history, TAIL_CONFIDENCE_LEVEL);
        result.cvar_95 = metrics::conditional_value_at_risk(history, TAIL_CONFIDENCE_LEVEL);
        result.benchmark_correlations = market_context::benchmark_correlations();

        Ok(())
    }

    /// Stage 2: grades from the stage-1 metrics and the declared risk level.
    fn assess_risk(result: &mut AnalysisResult, fund: &FundProfile) {
        result.performance_grade =
            grading::performance_grade(result.total_return, result.excess_return);
        result.risk_grade = fund.risk_level;
        result.overall_grade = grading::overall_grade(result.performance_grade, fund.risk_level);

        debug!(
            "Risk assessment for fund {} - performance: {}, risk: {}, overall: {}",
            result.fund_code, result.performance_grade, result.risk_grade, result.overall_grade
        );
    }

    /// Stage 3: recommendation, confidence, narrative findings and market
    /// context.
    fn generate_recommendation(
        &self,
        result: &mut AnalysisResult,
        fund: &FundProfile,
        history: &[PerformanceObservation],
    ) {
        result.recommendation = recommendation::determine_recommendation(result);
        result.confidence_score = recommendation::confidence_score(result, history.len());

        result.strengths = recommendation::analyze_strengths(result, fund);
        result.weaknesses = recommendation::analyze_weaknesses(result, fund);
        result.risks = recommendation::analyze_risks(result, fund);

        result.market_outlook = market_context::market_outlook(history);
        result.market_correlation =
            market_context::market_correlation(history, self.random_source.as_ref());
        result.sector_exposure = market_context::sector_exposure(fund.fund_type).to_string();

        debug!(
            "Recommendation for fund {} - {} with confidence {}",
            result.fund_code, result.recommendation, result.confidence_score
        );
    }

    /// Stage 4: portfolio-construction guidance.
    async fn optimize_portfolio(
        &self,
        result: &mut AnalysisResult,
        fund: &FundProfile,
    ) -> Result<()> {
        result.optimal_allocation =
            optimizer::optimal_allocation(result.performance_grade, fund.risk_level);
        result.rebalancing_threshold = optimizer::rebalancing_threshold(result.volatility);

        let candidates = self.fund_repository.list(&FundFilter::default()).await?;
        result.complementary_funds = optimizer::complementary_funds(fund, &candidates);

        debug!(
            "Portfolio optimization for fund {} - allocation: {}, threshold: {}",
            result.fund_code, result.optimal_allocation, result.rebalancing_threshold
        );
        Ok(())
    }
}

#[async_trait]
impl FundAnalysisServiceTrait for FundAnalysisService {
    async fn analyze(&self, fund_code: &str, analysis_period: &str) -> Result<AnalysisResult> {
        info!(
            "Starting fund analysis for {} (period {})",
            fund_code, analysis_period
        );

        let fund = self.get_fund(fund_code).await?;

        let mut result =
            AnalysisResult::new(fund_code, &fund.fund_name, Local::now().date_naive());

        let history = self.performance_repository.get_history(fund_code).await?;
        if history.is_empty() {
            info!(
                "Fund {} has no performance history, returning default result",
                fund_code
            );
            return Ok(Self::default_result(result, &fund));
        }

        match self.run_pipeline(&mut result, &fund, &history).await {
            Ok(()) => info!("Fund analysis completed for {}", fund_code),
            Err(err) => {
                error!(
                    "Analysis stage failed for fund {}: {}. Degrading result.",
                    fund_code, err
                );
                Self::apply_degrade_policy(&mut result);
            }
        }

        Ok(result)
    }
}

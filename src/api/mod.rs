// Metrics source module
pub mod mock;

pub use mock::MockMetricsSource;

use crate::models::{
    ActivityMetrics, ConversationDetails, EngagementMetrics, PlatformMetrics, TokenAnalysis,
};
use anyhow::Result;
use serde::Serialize;
use std::future::Future;

/// Source of pre-aggregated dashboard metrics.
///
/// Implementations decide transport, retries, and timeouts; the dashboard
/// only requires that each fetch is independent of the others.
pub trait MetricsSource {
    fn platform_metrics(&self) -> impl Future<Output = Result<PlatformMetrics>> + Send;
    fn engagement_metrics(&self) -> impl Future<Output = Result<EngagementMetrics>> + Send;
    fn activity_metrics(&self) -> impl Future<Output = Result<ActivityMetrics>> + Send;
    fn token_analysis(&self) -> impl Future<Output = Result<TokenAnalysis>> + Send;
    fn conversation_details(&self) -> impl Future<Output = Result<ConversationDetails>> + Send;
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub platform: PlatformMetrics,
    pub engagement: EngagementMetrics,
    pub activity: ActivityMetrics,
    pub tokens: TokenAnalysis,
}

/// Fan out the four independent metric fetches and join them.
///
/// The join is all-or-nothing: if any fetch fails the whole dashboard load
/// fails, there is no partial-success render.
pub async fn fetch_dashboard<S: MetricsSource + Sync>(source: &S) -> Result<DashboardData> {
    let (platform, engagement, activity, tokens) = tokio::try_join!(
        source.platform_metrics(),
        source.engagement_metrics(),
        source.activity_metrics(),
        source.token_analysis(),
    )?;

    Ok(DashboardData {
        platform,
        engagement,
        activity,
        tokens,
    })
}

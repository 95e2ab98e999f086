// Models module
pub mod conversation;
pub mod metrics;

pub use conversation::{ConversationDetail, ConversationDetails};
pub use metrics::{
    ActivityMetrics, ConversationRef, DailyMessageCount, DailyTokens, Distribution,
    DurationStats, EngagementMetrics, PlatformMetrics, RankedEntry, TimeSeriesPoint,
    TokenAnalysis, UserMessageCount,
};

// Analysis module: pure view-model assembly over raw metrics payloads
pub mod conversations;
pub mod dashboard;
pub mod derive;

// Re-export key types for easier access
pub use conversations::{ConversationFilter, ConversationInsight, analyze_conversations};
pub use dashboard::{
    ActivityView, DistributionBreakdown, DistributionSlice, GuardrailView, OverviewSummary,
    TokenUsageView, assemble_activity, assemble_breakdown, assemble_guardrails,
    assemble_overview, assemble_token_usage,
};
pub use derive::{average, percentage_of, rank, ratio};

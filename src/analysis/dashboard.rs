use crate::analysis::derive::{percentage_of, rank};
use crate::chart::{ColorAssigner, from_distribution};
use crate::models::{
    ActivityMetrics, ConversationRef, Distribution, EngagementMetrics, PlatformMetrics,
    RankedEntry, TimeSeriesPoint, TokenAnalysis,
};
use crate::utils::date_format::parse_day;
use anyhow::{Context, Result};
use serde::Serialize;

/// Headline numbers for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewSummary {
    pub total_users: u64,
    pub total_conversations: u64,
    pub total_messages: u64,
    pub total_active_chats: u64,
    pub active_conversations: u64,
    pub inactive_conversations: u64,
    /// Fraction of conversations currently active (0.0 when there are none).
    pub active_share: f64,
    pub average_messages_per_conversation: f64,
    pub average_messages_per_user: f64,
    pub like_ratio: f64,
    pub system_prompt_usage: u64,
    pub total_file_attachments: u64,
}

pub fn assemble_overview(
    platform: &PlatformMetrics,
    engagement: &EngagementMetrics,
) -> OverviewSummary {
    OverviewSummary {
        total_users: platform.total_users,
        total_conversations: platform.total_conversations,
        total_messages: platform.total_messages,
        total_active_chats: platform.total_active_chats,
        active_conversations: engagement.total_active_conversations,
        inactive_conversations: engagement.total_inactive_conversations,
        active_share: percentage_of(
            engagement.total_active_conversations,
            engagement.total_conversations,
        ),
        average_messages_per_conversation: engagement.average_messages_per_conversation,
        average_messages_per_user: engagement.average_messages_per_user,
        like_ratio: engagement.like_ratio,
        system_prompt_usage: engagement.system_prompt_usage,
        total_file_attachments: platform.total_file_attachments,
    }
}

/// One category of a distribution with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub label: String,
    pub full_label: String,
    pub count: u64,
    pub share: f64,
    pub color: String,
}

/// A distribution resolved into display slices.
///
/// A zero-total or empty distribution produces no slices: the explicit
/// "no data" result, rather than NaN shares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBreakdown {
    pub total: u64,
    pub slices: Vec<DistributionSlice>,
}

impl DistributionBreakdown {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

pub fn assemble_breakdown(
    dist: &Distribution,
    max_label_len: usize,
    colors: &ColorAssigner,
) -> DistributionBreakdown {
    let total = dist.total();
    if total == 0 {
        return DistributionBreakdown {
            total: 0,
            slices: Vec::new(),
        };
    }

    let slices = from_distribution(dist, max_label_len, colors)
        .into_iter()
        .map(|datum| {
            let count = datum.value as u64;
            DistributionSlice {
                label: datum.label,
                full_label: datum.full_label,
                count,
                share: percentage_of(count, total),
                color: datum.color,
            }
        })
        .collect();

    DistributionBreakdown { total, slices }
}

/// Token accounting view: totals, prompt/completion split, daily trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenUsageView {
    pub total_tokens: u64,
    pub total_prompt_tokens: u64,
    pub total_completion_tokens: u64,
    pub prompt_share: f64,
    pub completion_share: f64,
    pub prompt_vs_completion_ratio: f64,
    pub average_tokens_per_request: f64,
    pub average_execution_time: f64,
    pub total_successful_requests: u64,
    pub daily_trend: Vec<TimeSeriesPoint>,
}

pub fn assemble_token_usage(tokens: &TokenAnalysis) -> Result<TokenUsageView> {
    let daily_trend = tokens
        .daily_tokens_trend
        .iter()
        .map(|entry| {
            Ok(TimeSeriesPoint {
                date: parse_day(&entry.day)
                    .with_context(|| format!("Bad day in token trend: '{}'", entry.day))?,
                value: entry.daily_tokens,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TokenUsageView {
        total_tokens: tokens.total_tokens,
        total_prompt_tokens: tokens.total_prompt_tokens,
        total_completion_tokens: tokens.total_completion_tokens,
        prompt_share: percentage_of(tokens.total_prompt_tokens, tokens.total_tokens),
        completion_share: percentage_of(tokens.total_completion_tokens, tokens.total_tokens),
        prompt_vs_completion_ratio: tokens.prompt_vs_completion_ratio,
        average_tokens_per_request: tokens.average_tokens_per_request,
        average_execution_time: tokens.average_execution_time,
        total_successful_requests: tokens.total_successful_requests,
        daily_trend,
    })
}

/// Guardrail events: totals, trigger breakdown, top triggers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailView {
    pub total_events: u64,
    /// Events per successful request (0.0 when no requests).
    pub event_rate: f64,
    pub breakdown: DistributionBreakdown,
    pub top_triggers: Vec<RankedEntry>,
}

pub fn assemble_guardrails(
    tokens: &TokenAnalysis,
    max_label_len: usize,
    colors: &ColorAssigner,
    top_n: usize,
) -> GuardrailView {
    GuardrailView {
        total_events: tokens.total_guardrail_events,
        event_rate: percentage_of(
            tokens.total_guardrail_events,
            tokens.total_successful_requests,
        ),
        breakdown: assemble_breakdown(&tokens.guardrail_trigger_distribution, max_label_len, colors),
        top_triggers: rank(&tokens.guardrail_trigger_distribution, top_n),
    }
}

/// Daily activity and most active users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    /// Sparse day-granularity series; days without messages are absent.
    pub daily_messages: Vec<TimeSeriesPoint>,
    pub average_message_length: f64,
    pub max_message_length: u64,
    pub multi_model_conversations: u64,
    pub longest_conversation: ConversationRef,
    pub top_users: Vec<RankedEntry>,
}

pub fn assemble_activity(activity: &ActivityMetrics, top_n: usize) -> Result<ActivityView> {
    let daily_messages = activity
        .daily_message_counts
        .iter()
        .map(|entry| {
            Ok(TimeSeriesPoint {
                date: parse_day(&entry.day)
                    .with_context(|| format!("Bad day in activity series: '{}'", entry.day))?,
                value: entry.message_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Re-rank locally instead of trusting upstream ordering.
    let user_counts: Distribution = activity
        .top_5_most_active_users
        .iter()
        .map(|u| (u.user_id.clone(), u.message_count))
        .collect();

    Ok(ActivityView {
        daily_messages,
        average_message_length: activity.average_message_length,
        max_message_length: activity.max_message_length,
        multi_model_conversations: activity.multi_model_conversations,
        longest_conversation: activity.longest_conversation.clone(),
        top_users: rank(&user_counts, top_n),
    })
}

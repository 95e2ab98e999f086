use crate::models::{ConversationDetail, ConversationDetails, Distribution};
use serde::Serialize;

/// Analysis row for a single conversation message record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationInsight {
    pub conv_id: String,
    pub chat_title: String,
    pub model_name: String,
    pub model_provider: String,
    pub user_id: String,
    pub app_id: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub execution_time: f64,
    pub successful_requests: u64,
    pub guardrails_status: String,
    pub guardrails_reason: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Filter options for conversation details
#[derive(Debug, Clone, Default)]
pub struct ConversationFilter {
    pub user_id: Option<String>,
    pub app_id: Option<String>,
    pub model_name: Option<String>,
}

impl ConversationFilter {
    fn matches(&self, detail: &ConversationDetail) -> bool {
        if let Some(user_id) = &self.user_id {
            if detail.user_id != *user_id {
                return false;
            }
        }
        if let Some(app_id) = &self.app_id {
            if detail.app_id != *app_id {
                return false;
            }
        }
        if let Some(model_name) = &self.model_name {
            if detail.model_name != *model_name {
                return false;
            }
        }
        true
    }
}

/// Flatten the conversation-details map into filtered insight rows.
///
/// Rows come out ordered by conversation id, then by record order within a
/// conversation, so repeated runs over the same payload print identically.
pub fn analyze_conversations(
    details: &ConversationDetails,
    filter: &ConversationFilter,
) -> Vec<ConversationInsight> {
    details
        .values()
        .flatten()
        .filter(|detail| filter.matches(detail))
        .map(|detail| ConversationInsight {
            conv_id: detail.conv_id.clone(),
            chat_title: detail.chat_title.clone(),
            model_name: detail.model_name.clone(),
            model_provider: detail.model_provider.clone(),
            user_id: detail.user_id.clone(),
            app_id: detail.app_id.clone(),
            prompt_tokens: detail.prompt_tokens,
            completion_tokens: detail.completion_tokens,
            total_tokens: detail.total_tokens,
            execution_time: detail.execution_time,
            successful_requests: detail.successful_requests,
            guardrails_status: detail.guardrails_status.clone(),
            guardrails_reason: detail.guardrails_reason.clone(),
            is_active: detail.is_active,
            created_at: detail.created_at.clone(),
        })
        .collect()
}

/// Count guardrail-flagged records ("yes" status) per trigger reason.
pub fn guardrail_reasons(insights: &[ConversationInsight]) -> Distribution {
    insights
        .iter()
        .filter(|i| i.guardrails_status == "yes")
        .map(|i| (i.guardrails_reason.clone(), 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn detail(conv_id: &str, model: &str, user: &str, flagged: bool) -> ConversationDetail {
        ConversationDetail {
            conv_id: conv_id.to_string(),
            chat_title: "User Support Chat".to_string(),
            model_name: model.to_string(),
            model_provider: "watsonx".to_string(),
            user_id: user.to_string(),
            app_id: "app-1".to_string(),
            prompt_tokens: 100,
            completion_tokens: 50,
            total_tokens: 150,
            execution_time: 0.5,
            successful_requests: 2,
            guardrails_status: if flagged { "yes" } else { "no" }.to_string(),
            guardrails_reason: "Policy violation".to_string(),
            is_active: true,
            created_at: "Thu, 27 Feb 2025 16:12:03 GMT".to_string(),
            ..Default::default()
        }
    }

    fn sample_details() -> ConversationDetails {
        let mut details = BTreeMap::new();
        details.insert(
            "conv-a".to_string(),
            vec![detail("conv-a", "gpt-3.5", "user-1", false)],
        );
        details.insert(
            "conv-b".to_string(),
            vec![detail("conv-b", "gpt-4", "user-2", true)],
        );
        details
    }

    #[test]
    fn test_analyze_without_filter() {
        let insights = analyze_conversations(&sample_details(), &ConversationFilter::default());
        assert_eq!(insights.len(), 2);
        // BTreeMap order: conv-a first
        assert_eq!(insights[0].conv_id, "conv-a");
        assert_eq!(insights[1].model_name, "gpt-4");
    }

    #[test]
    fn test_filter_by_model_and_user() {
        let filter = ConversationFilter {
            model_name: Some("gpt-4".to_string()),
            ..Default::default()
        };
        let insights = analyze_conversations(&sample_details(), &filter);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].conv_id, "conv-b");

        let filter = ConversationFilter {
            user_id: Some("nobody".to_string()),
            ..Default::default()
        };
        assert!(analyze_conversations(&sample_details(), &filter).is_empty());
    }

    #[test]
    fn test_guardrail_reasons_counts_flagged_only() {
        let insights = analyze_conversations(&sample_details(), &ConversationFilter::default());
        let reasons = guardrail_reasons(&insights);
        assert_eq!(reasons.get("Policy violation"), Some(1));
        assert_eq!(reasons.total(), 1);
    }
}

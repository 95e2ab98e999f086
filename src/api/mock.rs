use crate::api::MetricsSource;
use crate::models::conversation::{ConversationDetail, ConversationDetails};
use crate::models::metrics::{
    ActivityMetrics, ConversationRef, DailyMessageCount, DailyTokens, Distribution,
    DurationStats, EngagementMetrics, PlatformMetrics, TokenAnalysis, UserMessageCount,
};
use anyhow::Result;
use std::collections::BTreeMap;

/// In-process metrics source serving a fixed demo snapshot of the platform.
/// Stands in for the aggregation backend in demos and tests.
#[derive(Debug, Clone, Default)]
pub struct MockMetricsSource;

impl MockMetricsSource {
    pub fn new() -> Self {
        Self
    }
}

fn app_usage_distribution() -> Distribution {
    [
        ("1b2d3e4c-5a6f-7d8a-9e0f-3b2c1d4a5e6f", 22),
        ("1e4d9f35-6b1f-4238-91f0-8a7c2d5e4a11", 18),
        ("2f3e4d5a-1b6c-7d8e-9a0f-4c5b1a2d3e6f", 32),
        ("3f1a0e24-b5b4-4f3e-9e8c-2f1dcb1d8b44", 19),
        ("4d5a6c7d-9e3b-2f1a-0f8c-7d3e1b4c5a6f", 29),
        ("5a6c7d9e-3b2f-4a1d-8c9e-0f7b1a2d3c4e", 19),
        ("7c2b8a5d-1f2e-4839-8d9a-3c5e0f7a6c92", 29),
        ("8c9e0f7b-5a1d-2d3e-4c6b-7d8a1f3e5c2b", 31),
        ("9b5c6d84-2e1f-4a3b-9d8c-7e2f1a0d5b6c", 23),
        ("9e0f7b1a-2d3e-4c5a-6f8d-1b2c3d4a5e7f", 28),
    ]
    .into_iter()
    .collect()
}

impl MetricsSource for MockMetricsSource {
    async fn platform_metrics(&self) -> Result<PlatformMetrics> {
        Ok(PlatformMetrics {
            app_usage_distribution: app_usage_distribution(),
            total_active_chats: 127,
            total_conversations: 250,
            total_file_attachments: 0,
            total_liked_messages: 0,
            total_messages: 250,
            total_users: 10,
        })
    }

    async fn engagement_metrics(&self) -> Result<EngagementMetrics> {
        Ok(EngagementMetrics {
            app_usage_distribution: app_usage_distribution(),
            average_messages_per_conversation: 1.0,
            average_messages_per_user: 25.0,
            file_type_distribution: Distribution::new(),
            like_ratio: 0.0,
            model_usage_distribution: [
                ("gpt-3.5", 49),
                ("gpt-4", 74),
                ("lamma", 61),
                ("mixtral", 66),
            ]
            .into_iter()
            .collect(),
            system_prompt_usage: 0,
            total_active_conversations: 127,
            total_conversations: 250,
            total_file_attachments: 0,
            total_inactive_conversations: 123,
            total_liked_messages: 0,
            total_messages: 250,
            total_users: 10,
        })
    }

    async fn activity_metrics(&self) -> Result<ActivityMetrics> {
        Ok(ActivityMetrics {
            average_message_length: 34.0,
            conversation_duration_stats: DurationStats {
                avg_duration: "0:00:00.000007".to_string(),
                max_duration: "0:00:00.001000".to_string(),
                min_duration: "0:00:00".to_string(),
            },
            daily_message_counts: vec![DailyMessageCount {
                day: "Thu, 27 Feb 2025 00:00:00 GMT".to_string(),
                message_count: 250,
            }],
            longest_conversation: ConversationRef {
                conv_id: "db8c2c46-7d36-403b-af1d-48ab93686618".to_string(),
                message_count: 1,
            },
            max_message_length: 34,
            multi_model_conversations: 0,
            top_5_most_active_users: vec![
                UserMessageCount {
                    message_count: 34,
                    user_id: "5c4b3a2d-1e0f-98b7-6a5c-4d3e2f1e0d9c".to_string(),
                },
                UserMessageCount {
                    message_count: 28,
                    user_id: "9e8d7c6b-5a4f-32e1-bc0a-8d7e6f5c4b3a".to_string(),
                },
                UserMessageCount {
                    message_count: 25,
                    user_id: "3f1a3b92-8c2b-4a44-bc93-6e6f0f786b98".to_string(),
                },
                UserMessageCount {
                    message_count: 25,
                    user_id: "b7e1a2d3-6c4e-45f2-9b88-1c2d3a4e5f67".to_string(),
                },
                UserMessageCount {
                    message_count: 24,
                    user_id: "f3c5b8a4-17a2-4f8e-91b6-2d0a9cfeb6f9".to_string(),
                },
            ],
        })
    }

    async fn token_analysis(&self) -> Result<TokenAnalysis> {
        Ok(TokenAnalysis {
            average_execution_time: 1.292,
            average_tokens_per_request: 486.36,
            daily_tokens_trend: vec![DailyTokens {
                daily_tokens: 695009,
                day: "Thu, 27 Feb 2025 00:00:00 GMT".to_string(),
            }],
            guardrail_trigger_distribution: [
                ("Policy violation", 19),
                ("Potentially harmful language", 32),
                ("Sensitive content detected", 29),
                ("Spam detected", 20),
                ("User flagged inappropriate", 22),
            ]
            .into_iter()
            .collect(),
            prompt_vs_completion_ratio: 0.671,
            total_completion_tokens: 385214,
            total_guardrail_events: 122,
            total_prompt_tokens: 258606,
            total_successful_requests: 1429,
            total_tokens: 695009,
        })
    }

    async fn conversation_details(&self) -> Result<ConversationDetails> {
        let mut details: ConversationDetails = BTreeMap::new();

        details.insert(
            "0414b579-3bc3-4c7b-986d-9250fae68bdc".to_string(),
            vec![ConversationDetail {
                app_id: "5a6c7d9e-3b2f-4a1d-8c9e-0f7b1a2d3c4e".to_string(),
                chat_id: "0a447e88-3d48-45ff-88a4-80e574b77c2f".to_string(),
                chat_title: "User Support Chat".to_string(),
                completion_tokens: 702,
                conv_id: "0414b579-3bc3-4c7b-986d-9250fae68bdc".to_string(),
                created_at: "Thu, 27 Feb 2025 16:12:03 GMT".to_string(),
                created_time: "Thu, 27 Feb 2025 16:12:02 GMT".to_string(),
                execution_time: 0.58,
                guardrails_reason: "Potentially harmful language".to_string(),
                guardrails_status: "no".to_string(),
                id: 441,
                is_active: true,
                model_name: "gpt-3.5".to_string(),
                model_provider: "watsonx".to_string(),
                msg: "Hello! How can I assist you today?".to_string(),
                msg_from: "AI".to_string(),
                msg_to: "user".to_string(),
                prompt_tokens: 1216,
                successful_requests: 5,
                total_tokens: 4213,
                updated_date: "Thu, 27 Feb 2025 16:12:02 GMT".to_string(),
                user_id: "9e8d7c6b-5a4f-32e1-bc0a-8d7e6f5c4b3a".to_string(),
                verbose: "This is a detailed explanation of the response given to the user."
                    .to_string(),
                ..Default::default()
            }],
        );

        details.insert(
            "0ba2ccd8-b32e-4078-a640-250dc73bfbf3".to_string(),
            vec![ConversationDetail {
                app_id: "7c2b8a5d-1f2e-4839-8d9a-3c5e0f7a6c92".to_string(),
                chat_id: "cd02b5cf-9e16-4ed5-aac8-c5a7de1dab19".to_string(),
                chat_title: "User Support Chat".to_string(),
                completion_tokens: 864,
                conv_id: "0ba2ccd8-b32e-4078-a640-250dc73bfbf3".to_string(),
                created_at: "Thu, 27 Feb 2025 16:11:48 GMT".to_string(),
                created_time: "Thu, 27 Feb 2025 16:11:48 GMT".to_string(),
                execution_time: 0.95,
                guardrails_reason: "Policy violation".to_string(),
                guardrails_status: "yes".to_string(),
                id: 342,
                is_active: false,
                model_name: "gpt-4".to_string(),
                model_provider: "watsonx".to_string(),
                msg: "Hello! How can I assist you today?".to_string(),
                msg_from: "AI".to_string(),
                msg_to: "user".to_string(),
                prompt_tokens: 128,
                successful_requests: 6,
                total_tokens: 2778,
                updated_date: "Thu, 27 Feb 2025 16:11:48 GMT".to_string(),
                user_id: "9e8d7c6b-5a4f-32e1-bc0a-8d7e6f5c4b3a".to_string(),
                verbose: "This is a detailed explanation of the response given to the user."
                    .to_string(),
                ..Default::default()
            }],
        );

        Ok(details)
    }
}

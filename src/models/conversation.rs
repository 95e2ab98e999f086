use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One message record of a conversation, as delivered by the metrics source.
///
/// Nullable columns from the upstream store are explicit `Option`s rather
/// than empty-string sentinels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationDetail {
    pub app_description: Option<String>,
    pub app_details: Option<String>,
    pub app_id: String,
    pub appname: Option<String>,
    pub chat_id: String,
    pub chat_title: String,
    pub completion_tokens: u64,
    pub conv_id: String,
    pub created_at: String,
    pub created_time: String,
    pub execution_time: f64,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub guardrails_reason: String,
    pub guardrails_status: String,
    pub id: u64,
    pub input_keys: Option<String>,
    pub is_active: bool,
    pub liked: Option<String>,
    pub model_name: String,
    pub model_provider: String,
    pub msg: String,
    pub msg_from: String,
    pub msg_to: String,
    pub prompt_template: Option<String>,
    pub prompt_tokens: u64,
    pub successful_requests: u64,
    pub system_prompt: Option<String>,
    pub total_tokens: u64,
    pub updated_date: String,
    pub user_id: String,
    pub verbose: String,
}

/// Conversation id -> message records. BTreeMap keeps output deterministic
/// across runs (sorted by conversation id).
pub type ConversationDetails = BTreeMap<String, Vec<ConversationDetail>>;

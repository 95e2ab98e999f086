use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mapping from category name to a non-negative count.
///
/// Insertion order is preserved: ranking ties are broken by the order in
/// which categories first appeared, so iteration must not depend on hash
/// ordering. Deserialization walks JSON map entries in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    entries: Vec<(String, u64)>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `category`, creating it at the end if absent.
    pub fn insert(&mut self, category: impl Into<String>, count: u64) {
        let category = category.into();
        match self.entries.iter_mut().find(|(k, _)| *k == category) {
            Some((_, existing)) => *existing += count,
            None => self.entries.push((category, count)),
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. Callers dividing by this must guard zero first.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, v)| *v).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut dist = Distribution::new();
        for (category, count) in iter {
            dist.insert(category, count);
        }
        dist
    }
}

impl<'a> FromIterator<(&'a str, u64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = Distribution;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category names to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut dist = Distribution::new();
                while let Some((category, count)) = access.next_entry::<String, u64>()? {
                    dist.insert(category, count);
                }
                Ok(dist)
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// One entry of a top-N list, e.g. most active users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

/// One day-granularity point of a sparse series. No gap filling is done;
/// consumers must tolerate missing days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// Platform-wide headline counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub app_usage_distribution: Distribution,
    pub total_active_chats: u64,
    pub total_conversations: u64,
    pub total_file_attachments: u64,
    pub total_liked_messages: u64,
    pub total_messages: u64,
    pub total_users: u64,
}

/// Engagement breakdown: per-category distributions and averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub app_usage_distribution: Distribution,
    pub average_messages_per_conversation: f64,
    pub average_messages_per_user: f64,
    pub file_type_distribution: Distribution,
    pub like_ratio: f64,
    pub model_usage_distribution: Distribution,
    pub system_prompt_usage: u64,
    pub total_active_conversations: u64,
    pub total_conversations: u64,
    pub total_file_attachments: u64,
    pub total_inactive_conversations: u64,
    pub total_liked_messages: u64,
    pub total_messages: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    pub avg_duration: String,
    pub max_duration: String,
    pub min_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMessageCount {
    pub day: String,
    pub message_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRef {
    pub conv_id: String,
    pub message_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessageCount {
    pub message_count: u64,
    pub user_id: String,
}

/// Activity metrics: message-length stats, daily counts, most active users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    pub average_message_length: f64,
    pub conversation_duration_stats: DurationStats,
    pub daily_message_counts: Vec<DailyMessageCount>,
    pub longest_conversation: ConversationRef,
    pub max_message_length: u64,
    pub multi_model_conversations: u64,
    pub top_5_most_active_users: Vec<UserMessageCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTokens {
    pub daily_tokens: u64,
    pub day: String,
}

/// Token accounting and guardrail counters for the chat pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub average_execution_time: f64,
    pub average_tokens_per_request: f64,
    pub daily_tokens_trend: Vec<DailyTokens>,
    pub guardrail_trigger_distribution: Distribution,
    pub prompt_vs_completion_ratio: f64,
    pub total_completion_tokens: u64,
    pub total_guardrail_events: u64,
    pub total_prompt_tokens: u64,
    pub total_successful_requests: u64,
    pub total_tokens: u64,
}

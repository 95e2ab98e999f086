use crate::analysis::conversations::ConversationInsight;
use crate::analysis::dashboard::{
    ActivityView, DistributionBreakdown, GuardrailView, OverviewSummary, TokenUsageView,
};
use crate::utils::date_format::DateFormatter;
use crate::utils::format::{
    abbreviate_id, format_compact, format_duration, format_integer, format_percentage,
};
use serde::Serialize;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

/// Rendering options shared by all tables.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub colored: bool,
    pub date_formatter: DateFormatter,
}

/// Trait for view-models that can be displayed as tables or JSON
pub trait OutputFormat {
    fn to_table(&self) -> String {
        self.to_table_with_options(&TableOptions::default())
    }
    fn to_json(&self) -> Result<String, serde_json::Error>;
    fn to_table_with_options(&self, opts: &TableOptions) -> String;
}

/// Row for metric summary cards
#[derive(Tabled, Serialize, Debug)]
pub struct MetricCardRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Row for distribution breakdown tables
#[derive(Tabled, Serialize, Debug)]
pub struct DistributionRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Count")]
    pub count: String,
    #[tabled(rename = "Share")]
    pub share: String,
    #[tabled(rename = "Color")]
    pub color: String,
}

/// Row for the daily token trend table
#[derive(Tabled, Serialize, Debug)]
pub struct TokenTrendRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Tokens")]
    pub tokens: String,
}

/// Row for the daily message activity table
#[derive(Tabled, Serialize, Debug)]
pub struct DailyActivityRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Messages")]
    pub messages: String,
}

/// Row for the most-active-users table
#[derive(Tabled, Serialize, Debug)]
pub struct UserRow {
    #[tabled(rename = "#")]
    pub position: String,
    #[tabled(rename = "User")]
    pub user: String,
    #[tabled(rename = "Messages")]
    pub messages: String,
}

/// Row for conversation insight tables
#[derive(Tabled, Serialize, Debug)]
pub struct ConversationRow {
    #[tabled(rename = "Conversation")]
    pub conversation: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Model")]
    pub model: String,
    #[tabled(rename = "Tokens")]
    pub tokens: String,
    #[tabled(rename = "Exec Time")]
    pub exec_time: String,
    #[tabled(rename = "Guardrail")]
    pub guardrail: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

pub fn apply_table_style(mut table: Table, colored: bool) -> String {
    table.with(Style::sharp());
    if colored {
        table.with(Modify::new(Rows::first()).with(Color::FG_GREEN));
    }
    table.to_string()
}

impl OutputFormat for OverviewSummary {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        let rows = vec![
            MetricCardRow {
                metric: "Total Users".to_string(),
                value: format_integer(self.total_users),
            },
            MetricCardRow {
                metric: "Total Conversations".to_string(),
                value: format_integer(self.total_conversations),
            },
            MetricCardRow {
                metric: "Total Messages".to_string(),
                value: format_integer(self.total_messages),
            },
            MetricCardRow {
                metric: "Active Chats".to_string(),
                value: format_integer(self.total_active_chats),
            },
            MetricCardRow {
                metric: "Active Conversations".to_string(),
                value: format!(
                    "{} ({})",
                    format_integer(self.active_conversations),
                    format_percentage(self.active_share)
                ),
            },
            MetricCardRow {
                metric: "Inactive Conversations".to_string(),
                value: format_integer(self.inactive_conversations),
            },
            MetricCardRow {
                metric: "Avg Messages / Conversation".to_string(),
                value: format!("{:.1}", self.average_messages_per_conversation),
            },
            MetricCardRow {
                metric: "Avg Messages / User".to_string(),
                value: format!("{:.1}", self.average_messages_per_user),
            },
            MetricCardRow {
                metric: "Like Ratio".to_string(),
                value: format_percentage(self.like_ratio),
            },
            MetricCardRow {
                metric: "File Attachments".to_string(),
                value: format_integer(self.total_file_attachments),
            },
        ];

        apply_table_style(Table::new(rows), opts.colored)
    }
}

impl OutputFormat for DistributionBreakdown {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        if self.is_empty() {
            return "No category data found.".to_string();
        }

        let rows: Vec<DistributionRow> = self
            .slices
            .iter()
            .map(|slice| DistributionRow {
                category: slice.label.clone(),
                count: format_integer(slice.count),
                share: format_percentage(slice.share),
                color: slice.color.clone(),
            })
            .collect();

        apply_table_style(Table::new(rows), opts.colored)
    }
}

impl OutputFormat for TokenUsageView {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        let summary = vec![
            MetricCardRow {
                metric: "Total Tokens".to_string(),
                value: format_compact(self.total_tokens as f64),
            },
            MetricCardRow {
                metric: "Prompt Tokens".to_string(),
                value: format!(
                    "{} ({})",
                    format_integer(self.total_prompt_tokens),
                    format_percentage(self.prompt_share)
                ),
            },
            MetricCardRow {
                metric: "Completion Tokens".to_string(),
                value: format!(
                    "{} ({})",
                    format_integer(self.total_completion_tokens),
                    format_percentage(self.completion_share)
                ),
            },
            MetricCardRow {
                metric: "Prompt / Completion Ratio".to_string(),
                value: format!("{:.3}", self.prompt_vs_completion_ratio),
            },
            MetricCardRow {
                metric: "Avg Tokens / Request".to_string(),
                value: format_compact(self.average_tokens_per_request),
            },
            MetricCardRow {
                metric: "Avg Execution Time".to_string(),
                value: format_duration(self.average_execution_time),
            },
            MetricCardRow {
                metric: "Successful Requests".to_string(),
                value: format_integer(self.total_successful_requests),
            },
        ];

        let mut output = apply_table_style(Table::new(summary), opts.colored);

        if !self.daily_trend.is_empty() {
            let trend: Vec<TokenTrendRow> = self
                .daily_trend
                .iter()
                .map(|point| TokenTrendRow {
                    date: opts.date_formatter.format_naive_date_for_table(&point.date),
                    tokens: format_integer(point.value),
                })
                .collect();
            output.push_str("\n\n");
            output.push_str(&apply_table_style(Table::new(trend), opts.colored));
        }

        output
    }
}

impl OutputFormat for GuardrailView {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        let summary = vec![
            MetricCardRow {
                metric: "Guardrail Events".to_string(),
                value: format_integer(self.total_events),
            },
            MetricCardRow {
                metric: "Event Rate".to_string(),
                value: format_percentage(self.event_rate),
            },
        ];

        let mut output = apply_table_style(Table::new(summary), opts.colored);
        output.push_str("\n\n");

        if self.breakdown.is_empty() {
            output.push_str("No guardrail events recorded.");
        } else {
            output.push_str(&self.breakdown.to_table_with_options(opts));
        }

        output
    }
}

impl OutputFormat for ActivityView {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        let mut sections = Vec::new();

        if self.daily_messages.is_empty() {
            sections.push("No daily activity recorded.".to_string());
        } else {
            let rows: Vec<DailyActivityRow> = self
                .daily_messages
                .iter()
                .map(|point| DailyActivityRow {
                    date: opts.date_formatter.format_naive_date_for_table(&point.date),
                    messages: format_integer(point.value),
                })
                .collect();
            sections.push(apply_table_style(Table::new(rows), opts.colored));
        }

        if !self.top_users.is_empty() {
            let rows: Vec<UserRow> = self
                .top_users
                .iter()
                .enumerate()
                .map(|(i, entry)| UserRow {
                    position: (i + 1).to_string(),
                    user: abbreviate_id(&entry.key),
                    messages: format_integer(entry.count),
                })
                .collect();
            sections.push(apply_table_style(Table::new(rows), opts.colored));
        }

        sections.join("\n\n")
    }
}

/// Wrapper for a ranked user list to implement OutputFormat
#[derive(Debug, Clone, Serialize)]
pub struct TopUsersList(pub Vec<crate::models::RankedEntry>);

impl OutputFormat for TopUsersList {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        if self.0.is_empty() {
            return "No active users found.".to_string();
        }

        let rows: Vec<UserRow> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, entry)| UserRow {
                position: (i + 1).to_string(),
                user: abbreviate_id(&entry.key),
                messages: format_integer(entry.count),
            })
            .collect();

        apply_table_style(Table::new(rows), opts.colored)
    }
}

impl OutputFormat for Vec<ConversationInsight> {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_options(&self, opts: &TableOptions) -> String {
        if self.is_empty() {
            return "No conversations found matching your filters.".to_string();
        }

        let rows: Vec<ConversationRow> = self
            .iter()
            .map(|insight| ConversationRow {
                conversation: abbreviate_id(&insight.conv_id),
                title: insight.chat_title.clone(),
                model: insight.model_name.clone(),
                tokens: format_integer(insight.total_tokens),
                exec_time: format_duration(insight.execution_time),
                guardrail: if insight.guardrails_status == "yes" {
                    insight.guardrails_reason.clone()
                } else {
                    "-".to_string()
                },
                created: crate::utils::format::format_date(&insight.created_at)
                    .unwrap_or_else(|_| insight.created_at.clone()),
            })
            .collect();

        apply_table_style(Table::new(rows), opts.colored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dashboard::assemble_breakdown;
    use crate::chart::ColorAssigner;
    use crate::models::Distribution;

    fn breakdown() -> DistributionBreakdown {
        let dist: Distribution = [("gpt-4", 74), ("gpt-3.5", 49), ("lamma", 61), ("mixtral", 66)]
            .into_iter()
            .collect();
        assemble_breakdown(&dist, 15, &ColorAssigner::default())
    }

    #[test]
    fn test_breakdown_table_contains_shares() {
        let table = breakdown().to_table();
        assert!(table.contains("gpt-4"));
        assert!(table.contains("29.6%"));
        assert!(table.contains("Category"));
    }

    #[test]
    fn test_empty_breakdown_table() {
        let empty = DistributionBreakdown {
            total: 0,
            slices: vec![],
        };
        assert_eq!(empty.to_table(), "No category data found.");
    }

    #[test]
    fn test_breakdown_json_round_trips() {
        let json = breakdown().to_json().unwrap();
        assert!(json.contains("gpt-4"));
        assert!(json.contains("0.296"));
    }

    #[test]
    fn test_empty_conversation_table() {
        let empty: Vec<ConversationInsight> = vec![];
        assert_eq!(
            empty.to_table(),
            "No conversations found matching your filters."
        );
    }
}

// Conversation details command
use crate::analysis::{ConversationFilter, analyze_conversations};
use crate::api::MetricsSource;
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_conversations_command(
    source: &(impl MetricsSource + Sync),
    user_filter: Option<String>,
    app_filter: Option<String>,
    model_filter: Option<String>,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let details = source.conversation_details().await?;
    let filter = ConversationFilter {
        user_id: user_filter,
        app_id: app_filter,
        model_name: model_filter,
    };
    let insights = analyze_conversations(&details, &filter);
    print_view(&insights, json_output, opts)
}

// Most active users command
use crate::analysis::assemble_activity;
use crate::api::MetricsSource;
use crate::commands::print_view;
use crate::output::{TableOptions, TopUsersList};
use anyhow::Result;

pub async fn handle_users_command(
    source: &(impl MetricsSource + Sync),
    top_n: usize,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let activity = source.activity_metrics().await?;
    let view = assemble_activity(&activity, top_n)?;
    print_view(&TopUsersList(view.top_users), json_output, opts)
}

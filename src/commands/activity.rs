// Daily activity command
use crate::analysis::assemble_activity;
use crate::api::MetricsSource;
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_activity_command(
    source: &(impl MetricsSource + Sync),
    top_n: usize,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let activity = source.activity_metrics().await?;
    let view = assemble_activity(&activity, top_n)?;
    print_view(&view, json_output, opts)
}

// Platform overview command
use crate::analysis::assemble_overview;
use crate::api::{MetricsSource, fetch_dashboard};
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_overview_command(
    source: &(impl MetricsSource + Sync),
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    // The overview joins every payload, so fetch the full dashboard.
    let data = fetch_dashboard(source).await?;
    let summary = assemble_overview(&data.platform, &data.engagement);
    print_view(&summary, json_output, opts)
}

// Token usage command
use crate::analysis::assemble_token_usage;
use crate::api::MetricsSource;
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_tokens_command(
    source: &(impl MetricsSource + Sync),
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let analysis = source.token_analysis().await?;
    let view = assemble_token_usage(&analysis)?;
    print_view(&view, json_output, opts)
}

// Guardrail events command
use crate::analysis::assemble_guardrails;
use crate::api::MetricsSource;
use crate::chart::ColorAssigner;
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_guardrails_command(
    source: &(impl MetricsSource + Sync),
    colors: &ColorAssigner,
    max_label_len: usize,
    top_n: usize,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let analysis = source.token_analysis().await?;
    let view = assemble_guardrails(&analysis, max_label_len, colors, top_n);
    print_view(&view, json_output, opts)
}

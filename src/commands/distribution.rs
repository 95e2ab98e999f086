// Model and app usage distribution commands
use crate::analysis::assemble_breakdown;
use crate::api::MetricsSource;
use crate::chart::ColorAssigner;
use crate::commands::print_view;
use crate::output::TableOptions;
use anyhow::Result;

pub async fn handle_models_command(
    source: &(impl MetricsSource + Sync),
    colors: &ColorAssigner,
    max_label_len: usize,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let engagement = source.engagement_metrics().await?;
    let breakdown = assemble_breakdown(&engagement.model_usage_distribution, max_label_len, colors);
    print_view(&breakdown, json_output, opts)
}

pub async fn handle_apps_command(
    source: &(impl MetricsSource + Sync),
    colors: &ColorAssigner,
    max_label_len: usize,
    json_output: bool,
    opts: &TableOptions,
) -> Result<()> {
    let platform = source.platform_metrics().await?;
    let breakdown = assemble_breakdown(&platform.app_usage_distribution, max_label_len, colors);
    print_view(&breakdown, json_output, opts)
}

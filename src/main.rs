// chatlens: Chat Platform Analytics Dashboard
use clap::Parser;
use config::Config;

// Module declarations
mod analysis;
mod api;
mod chart;
mod cli;
mod commands;
mod config;
mod models;
mod output;
mod utils;

use api::MockMetricsSource;
use chart::ColorAssigner;
use cli::{Cli, Commands};
use commands::activity::handle_activity_command;
use commands::config::handle_config_action;
use commands::conversations::handle_conversations_command;
use commands::distribution::{handle_apps_command, handle_models_command};
use commands::guardrails::handle_guardrails_command;
use commands::overview::handle_overview_command;
use commands::tokens::handle_tokens_command;
use commands::users::handle_users_command;
use output::TableOptions;
use utils::DateFormatter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // CLI overrides take precedence over config
    let json_output = cli.json || config.output.format == "json";
    let colored = cli.colored || config.output.colored;
    let top_n = cli.top.unwrap_or(config.ranking.top_n);

    let opts = TableOptions {
        colored,
        date_formatter: DateFormatter::new(&config.output.date_format)?,
    };
    let colors = ColorAssigner::with_palette(config.chart.palette.clone())?;
    let max_label_len = config.chart.max_label_len;

    let source = MockMetricsSource::new();

    match cli.command {
        Some(Commands::Models) => {
            handle_models_command(&source, &colors, max_label_len, json_output, &opts).await?;
        }
        Some(Commands::Apps) => {
            handle_apps_command(&source, &colors, max_label_len, json_output, &opts).await?;
        }
        Some(Commands::Tokens) => {
            handle_tokens_command(&source, json_output, &opts).await?;
        }
        Some(Commands::Guardrails) => {
            handle_guardrails_command(&source, &colors, max_label_len, top_n, json_output, &opts)
                .await?;
        }
        Some(Commands::Users) => {
            handle_users_command(&source, top_n, json_output, &opts).await?;
        }
        Some(Commands::Activity) => {
            handle_activity_command(&source, top_n, json_output, &opts).await?;
        }
        Some(Commands::Conversations { user, app, model }) => {
            handle_conversations_command(&source, user, app, model, json_output, &opts).await?;
        }
        Some(Commands::Config { action }) => {
            handle_config_action(action)?;
        }
        Some(Commands::Overview) | None => {
            handle_overview_command(&source, json_output, &opts).await?;
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatlens")]
#[command(about = "Chat Platform Analytics Dashboard")]
#[command(version)]
pub struct Cli {
    /// JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable colorized table output
    #[arg(long, global = true)]
    pub colored: bool,

    /// Size of ranked top-N lists
    #[arg(long, global = true)]
    pub top: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Initialize fresh configuration
    Init,
    /// Set configuration value
    Set {
        /// Configuration key (e.g., ranking.top_n)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show platform overview cards
    Overview,

    /// Show model usage distribution
    Models,

    /// Show app usage distribution
    Apps,

    /// Show token usage and the daily token trend
    Tokens,

    /// Show guardrail events and trigger breakdown
    Guardrails,

    /// Show the most active users
    Users,

    /// Show daily message activity
    Activity,

    /// Show conversation details
    Conversations {
        /// Filter by user id
        #[arg(long)]
        user: Option<String>,

        /// Filter by app id
        #[arg(long)]
        app: Option<String>,

        /// Filter by model name
        #[arg(long)]
        model: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Output format for single-shot debates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header, every response, footer
    Full,
    /// Responses only
    Plain,
    /// JSON output
    Json,
}

/// CLI arguments for janus-forge
#[derive(Parser, Debug)]
#[command(name = "janus-forge")]
#[command(author, version, about = "Put one topic before several AI platforms at once")]
#[command(long_about = r#"
Janus Forge sends a topic to several AI chat platforms through a dialectic
backend and shows their answers side by side.

Modes:
  janus-forge "<topic>"      Ask once and print the responses
  janus-forge --chat         Interactive debate with follow-ups
  janus-forge --serve        Run the HTTP proxy (POST /api/debate)

When the backend cannot be reached, responses are simulated locally and
marked as such.

Configuration files are loaded from (in priority order):
1. JANUS_* environment variables (e.g. JANUS_BACKEND_URL), NEXT_PUBLIC_API_URL
2. --config <path>     Explicit config file
3. ./janus.toml        Project-level config
4. ~/.config/janus-forge/config.toml   Global config

Example:
  janus-forge "Should AI be regulated?"
  janus-forge -p claude -p gemini "What is the future of education with AI?"
  janus-forge --serve --bind 0.0.0.0:3000 --log-json
"#)]
pub struct Cli {
    /// The topic to debate (not required in chat or serve mode)
    pub topic: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Run the HTTP proxy server
    #[arg(long)]
    pub serve: bool,

    /// Listen address for --serve (overrides proxy.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Platforms to ask (can be specified multiple times; default: free platforms)
    #[arg(short, long = "platform", value_name = "ID")]
    pub platforms: Vec<String>,

    /// Tier label used to gate the platform picker in chat mode
    #[arg(long, value_name = "TIER", env = "JANUS_TIER")]
    pub tier: Option<String>,

    /// Bearer token sent with every submission
    #[arg(long, value_name = "TOKEN", env = "JANUS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "memopass")]
#[command(about = "Memorable adjective + noun password generator served over HTTP")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "MEMOPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "MEMOPASS_JSON_LOGS")]
    pub json_logs: bool,
}

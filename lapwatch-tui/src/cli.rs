use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lapwatch")]
#[command(about = "Terminal stopwatch with categorized laps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Commands {
    /// Open the stopwatch (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}

use clap::Parser;
use std::path::PathBuf;

use crate::config::RuntimeMode;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "yearprog")]
#[command(about = "How much of the year is gone - a live terminal year-progress widget")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Runtime mode (overrides YEARPROG_ENV and the config file)
    #[arg(long, value_enum)]
    pub mode: Option<RuntimeMode>,
}

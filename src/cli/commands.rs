use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::FilterMode;

#[derive(Parser, Debug)]
#[command(name = "tick", about = concat!("tick v", env!("CARGO_PKG_VERSION"), " - a small to-do list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty list instead of the sample tasks
    #[arg(long, global = true)]
    pub no_samples: bool,

    /// Filter selected on startup (all, active, completed)
    #[arg(long, value_name = "MODE", global = true)]
    pub filter: Option<FilterMode>,

    /// Write rotating log files to this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration and where it was loaded from
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tick", "config", "--filter", "done", "--no-samples"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config));
        assert_eq!(cli.filter, Some(FilterMode::Completed));
        assert!(cli.no_samples);
    }

    #[test]
    fn test_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["tick", "--filter", "someday"]).is_err());
    }
}

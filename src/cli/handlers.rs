use crate::cli::commands::{Cli, Commands};
use crate::io::config_io::{self, ConfigSource};
use crate::io::logging;
use crate::model::Config;
use crate::ops::task_list::TaskList;

/// Fold command-line overrides into the loaded configuration
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_samples {
        config.app.samples = false;
    }
    if let Some(filter) = cli.filter {
        config.app.default_filter = filter;
    }
}

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Reject a bad level up front, even when file logging is off
    if let Some(level) = &cli.log_level {
        logging::normalize_level(level)?;
    }

    let (mut config, source) = config_io::load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        Some(Commands::Config) => cmd_config(&config, &source),
        None => cmd_tui(config, &source, &cli),
    }
}

/// Print where the config came from, then the effective config as TOML
fn cmd_config(config: &Config, source: &ConfigSource) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", source_line(source));
    print!("{}", config_io::config_to_string(config)?);
    Ok(())
}

fn source_line(source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => format!("# source: {}", path.display()),
        ConfigSource::Defaults(path) => {
            format!("# source: built-in defaults (no file at {})", path.display())
        }
    }
}

fn cmd_tui(
    config: Config,
    source: &ConfigSource,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    // Held until the UI exits so buffered lines get flushed
    let _logger = match &cli.log_dir {
        Some(dir) => {
            let level = cli
                .log_level
                .as_deref()
                .unwrap_or_else(|| logging::default_log_level());
            Some(logging::init_logging(level, dir)?)
        }
        None => None,
    };

    log::info!(
        "event=config_loaded from_file={} path={} samples={} filter={}",
        matches!(source, ConfigSource::File(_)),
        source.path().display(),
        config.app.samples,
        config.app.default_filter
    );

    let tasks = if config.app.samples {
        TaskList::with_samples()
    } else {
        TaskList::new()
    };
    crate::tui::run(config, tasks)
}

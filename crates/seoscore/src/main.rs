//! seoscore CLI
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use seoscore::{Cli, Commands, commands};
use seoscore_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // clap prints help when neither a subcommand nor --version-only is given
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot enter {}", dir.display()))?;
    }

    let (config, sources) = load_config(cli.config.as_deref())?;

    let log_locations = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let filters = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&log_locations, filters)
        .context("failed to initialize logging")?;
    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        config_file = ?sources.primary_file(),
        "seoscore starting"
    );

    let result = run(command, cli.json, config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

/// Discover project config from the working directory, then layer `--config`
/// on top.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "current directory")?);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.to_path_buf(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let max_input = config.input_limit();
    match command {
        Commands::Score(args) => commands::score::cmd_score(
            args,
            json,
            config.min_score,
            config.content_format,
            max_input,
        ),
        Commands::Readability(args) => commands::readability::cmd_readability(
            args,
            json,
            config.min_readability,
            config.content_format,
            max_input,
        ),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start the async runtime")?
            .block_on(commands::serve::cmd_serve(args, max_input, config)),
    }
}

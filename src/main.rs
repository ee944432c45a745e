//! EDL - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use edl::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding an `EnvFilter` directive, e.g. `EDL_LOG=debug`.
const LOG_ENV: &str = "EDL_LOG";

/// Log to stderr so stdout stays clean for tables and JSON.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .try_init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List {
            input,
            transforms,
            json,
        } => commands::list::handle(&input, &transforms, json),
        Commands::Capture { input, json } => commands::capture::handle(&input, json),
        Commands::Cut {
            input,
            source,
            dry_run,
        } => commands::cut::handle(&input, &source, dry_run),
        Commands::Grab {
            input,
            source,
            offset,
            dry_run,
        } => commands::grab::handle(&input, &source, offset, dry_run),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

//! Config subcommands handler

use anyhow::{Context, Result};

use edl::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the configuration file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

//! Config command handlers

use anyhow::Result;

use itl::Config;

/// Show the active configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file if none exists.
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config: {}", path.display());
    Ok(())
}

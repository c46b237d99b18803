//! Config subcommands handler

use anyhow::{bail, Context, Result};

use mcrkit::Config;

/// TOML for `config`, headed by a comment naming its source.
pub fn render(config: &Config, source: &str) -> Result<String> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    Ok(format!("# {}\n\n{}", source, toml_str))
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config_path = Config::config_path()?;
    let config = Config::load()?;
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, showing defaults)", config_path.display())
    };
    print!("{}", render(&config, &source)?);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}\nHint: use --force to overwrite it",
            config_path.display()
        );
    }
    Config::default().save()?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        bail!("Editor exited with {}", status);
    }

    // Surface mistakes right away instead of on the next run
    Config::load().context("Edited config is invalid")?;
    Ok(())
}

// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - list: show available themes (bundled + external)
// - show [NAME]: print a theme's roles as CSS color strings
// - export NAME: render a theme as CSS custom properties or JSON
// - extract: write bundled themes to the themes directory
// - config --show/--path/--reset: configuration management

use crate::config::{Config, VERSION};
use crate::theme::{self, Theme};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// Theme toolkit for the wallet UI
#[derive(Parser)]
#[command(name = "wallet-theme")]
#[command(version = VERSION)]
#[command(about = "Theme toolkit for the wallet UI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available themes
    List,

    /// Show a theme's color roles (defaults to the configured theme)
    Show {
        /// Theme name, e.g. "Wallet Dark"
        name: Option<String>,
    },

    /// Export a theme for the web UI
    Export {
        /// Theme name, e.g. "Wallet Dark"
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value = "css")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Extract bundled themes to the themes directory
    Extract,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSS custom-properties block
    Css,
    /// JSON document
    Json,
}

/// Parse arguments and dispatch
pub fn run(config: &Config) -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => handle_list(config),
        Commands::Show { name } => {
            let name = name.as_deref().unwrap_or(&config.theme);
            handle_show(name);
            Ok(())
        }
        Commands::Export { name, format, out } => handle_export(&name, format, out),
        Commands::Extract => {
            theme::ensure_themes_extracted();
            println!("Bundled themes extracted.");
            Ok(())
        }
        Commands::Config { show, reset, path } => handle_config(config, show, reset, path),
    }
}

fn handle_list(config: &Config) -> Result<()> {
    for name in Theme::list_available() {
        if name.eq_ignore_ascii_case(&config.theme) {
            println!("* {}", name);
        } else {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn handle_show(name: &str) {
    let theme = Theme::by_name(name);
    println!("{}", theme.name);
    println!("font: {} / {}", theme.font_family, theme.font_heading);
    println!();
    for (role, color) in theme.roles() {
        println!("{:<28}{}", role, color.to_css());
    }
}

fn handle_export(name: &str, format: ExportFormat, out: Option<PathBuf>) -> Result<()> {
    let theme = Theme::by_name(name);
    let rendered = match format {
        ExportFormat::Css => theme.to_css(),
        ExportFormat::Json => theme.to_json().context("serializing theme to JSON")?,
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} to {}", theme.name, path.display());
        }
        None => {
            print!("{}", rendered);
            std::io::stdout().flush()?;
        }
    }
    Ok(())
}

fn handle_config(config: &Config, show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        let path = Config::config_path().context("could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        println!("# Effective configuration (env > file > defaults)");
        println!();
        print!("{}", config.to_toml());
        println!();
        if let Some(path) = Config::config_path() {
            if path.exists() {
                println!("# Source: {}", path.display());
            } else {
                println!("# Source: defaults (no config file)");
            }
        }
    } else if reset {
        let path = Config::config_path().context("could not determine config path")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, Config::default().to_toml())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Config reset to defaults: {}", path.display());
    } else {
        println!("Usage: wallet-theme config [--show|--reset|--path]");
    }
    Ok(())
}

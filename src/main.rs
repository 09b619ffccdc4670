// wallet-theme - Theme toolkit for the wallet UI
//
// Maintains the wallet's themes: a default light theme composed from the
// shared palette, plus variants (Wallet Dark, Wallet High Contrast) derived
// from it by shallow color-role overrides.
//
// Architecture:
// - theme: palette constants, resolved Theme values, variant derivation,
//   TOML theme files (bundled + user-editable external)
// - config: selected theme and tool settings (env > file > defaults)
// - cli: list/show/export/extract subcommands

mod cli;
mod config;
mod logging;
mod theme;

use anyhow::Result;
use config::Config;

fn main() -> Result<()> {
    logging::init();

    Config::ensure_config_exists();
    let config = Config::from_env();

    if let Some(dir) = &config.themes_dir {
        theme::set_themes_dir(dir.clone());
    }
    if config.auto_extract {
        theme::ensure_themes_extracted();
    }

    cli::run(&config)
}

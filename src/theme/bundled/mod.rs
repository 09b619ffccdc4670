//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/wallet-theme/themes/ on first run.
//! Users can then modify them freely; the built-in constructors remain the
//! fallback when a file goes missing or fails to parse.
//!
//! Each theme lives in its own module file for easy editing.

mod wallet;
mod wallet_dark;
mod wallet_high_contrast;

pub use wallet::THEME as WALLET;
pub use wallet_dark::THEME as WALLET_DARK;
pub use wallet_high_contrast::THEME as WALLET_HIGH_CONTRAST;

/// Bundled theme: filename and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Wallet.toml",
        content: WALLET,
    },
    BundledTheme {
        filename: "Wallet_Dark.toml",
        content: WALLET_DARK,
    },
    BundledTheme {
        filename: "Wallet_High_Contrast.toml",
        content: WALLET_HIGH_CONTRAST,
    },
];

/// List bundled theme names (for display)
pub fn list_bundled_themes() -> Vec<&'static str> {
    vec!["Wallet", "Wallet Dark", "Wallet High Contrast"]
}

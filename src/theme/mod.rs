// Theme system for the wallet UI
//
// Architecture:
// - palette: shared named color constants (leaf data)
// - Theme/ThemeColors: resolved theme, one struct field per semantic role
// - ColorOverrides: shallow-merge derivation of variants from a base theme
// - TomlTheme: on-disk format for user-editable theme files
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/wallet-theme/themes/*.toml
// 2. Bundled themes (extracted on first run)
// 3. Built-in constructors
// 4. Fallback to the default theme

mod bundled;
mod color;
mod overrides;
pub mod palette;
mod toml_format;

pub use color::Color;
pub use overrides::ColorOverrides;
pub use toml_format::{ColorRoles, Fonts, ThemeMeta, TomlTheme};

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Display name of the base theme
pub const DEFAULT_THEME: &str = "Wallet";

static THEMES_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Redirect the themes directory away from the default location (set from
/// config or WALLET_THEME_DIR at startup). First caller wins.
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR_OVERRIDE.set(path);
}

/// Semantic color roles every theme must populate. A struct rather than a
/// map: a derived theme cannot drop or rename a role the UI references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    // ─── Text tiers ──────────────────────────────────────────
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // ─── Surfaces ────────────────────────────────────────────
    pub panel_background: Color,
    pub panel_background_secondary: Color,
    pub page_background: Color,
    pub page_background_secondary: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub outline_color: Color,
    pub divider: Color,

    // ─── Interactive ─────────────────────────────────────────
    pub interactive: Color,
    pub interactive_hover: Color,
    pub primary_button_background: Color,
    pub primary_button_text: Color,
    pub link: Color,

    // ─── Status ──────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

/// A complete resolved theme: display name, color roles, and the
/// structural fields variants inherit unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub font_family: String,
    pub font_heading: String,
}

impl Theme {
    /// The base light theme, composed entirely from palette constants.
    pub fn wallet_default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                text: palette::GREY_800,
                text_secondary: palette::GREY_700,
                text_tertiary: palette::GREY_600,

                panel_background: palette::WHITE,
                panel_background_secondary: palette::GREY_000,
                page_background: palette::GREY_000,
                page_background_secondary: palette::WHITE,

                outline_color: Color::rgba(0, 0, 0, 128),
                divider: palette::GREY_200,

                interactive: palette::BLURPLE_500,
                interactive_hover: palette::BLURPLE_400,
                primary_button_background: palette::BLURPLE_500,
                primary_button_text: palette::WHITE,
                link: palette::BLUE_500,

                success: palette::GREEN_500,
                warning: palette::YELLOW_500,
                error: palette::RED_500,
            },
            font_family: "Poppins".to_string(),
            font_heading: "Poppins".to_string(),
        }
    }

    /// The dark variant: the default theme with white text, the darkest
    /// neutral as panel surface, and a half-transparent white outline.
    pub fn wallet_dark() -> Self {
        Self::wallet_default().derive(
            "Wallet Dark",
            ColorOverrides {
                text: Some(palette::WHITE),
                panel_background: Some(palette::GREY_900),
                outline_color: Some(Color::rgba(255, 255, 255, 128)),
                ..Default::default()
            },
        )
    }

    /// Accessibility variant: black surfaces, yellow interactive elements.
    pub fn wallet_high_contrast() -> Self {
        Self::wallet_default().derive(
            "Wallet High Contrast",
            ColorOverrides {
                text: Some(palette::WHITE),
                text_secondary: Some(palette::GREY_300),
                text_tertiary: Some(palette::GREY_400),
                panel_background: Some(palette::BLACK),
                panel_background_secondary: Some(palette::GREY_900),
                page_background: Some(palette::BLACK),
                page_background_secondary: Some(palette::GREY_900),
                outline_color: Some(Color::rgba(255, 255, 255, 204)),
                divider: Some(palette::GREY_600),
                interactive: Some(palette::YELLOW_500),
                interactive_hover: Some(palette::ORANGE_400),
                primary_button_background: Some(palette::YELLOW_500),
                primary_button_text: Some(palette::BLACK),
                link: Some(palette::YELLOW_500),
                ..Default::default()
            },
        )
    }

    /// Derive a variant: copy every field from this theme, then apply the
    /// overrides and replace the name. Pure - neither theme is mutated.
    pub fn derive(&self, name: &str, overrides: ColorOverrides) -> Self {
        Self {
            name: name.to_string(),
            colors: overrides.apply(&self.colors),
            font_family: self.font_family.clone(),
            font_heading: self.font_heading.clone(),
        }
    }

    /// Load theme by name.
    pub fn by_name(name: &str) -> Self {
        if let Some(theme) = Self::load_toml(name) {
            return theme;
        }

        if let Some(theme) = Self::builtin(name) {
            debug!(theme = name, "using built-in theme");
            return theme;
        }

        debug!(theme = name, "unknown theme, falling back to default");
        Self::wallet_default()
    }

    /// Load from an external TOML theme file or a bundled theme
    fn load_toml(name: &str) -> Option<Self> {
        // Try external TOML file first
        if let Some(themes_dir) = Self::themes_dir() {
            let normalized = name.replace(' ', "_");
            for candidate in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", candidate));
                if path.exists() {
                    if let Ok(contents) = std::fs::read_to_string(&path) {
                        if let Ok(toml_theme) = TomlTheme::from_str(&contents) {
                            debug!(path = %path.display(), "loaded external theme");
                            return Some(Self::from_toml(toml_theme));
                        }
                    }
                }
            }
        }

        // Try bundled themes (compiled into binary)
        let filename = format!("{}.toml", name.replace(' ', "_"));
        for theme in bundled::BUNDLED_THEMES {
            if theme.filename.eq_ignore_ascii_case(&filename) {
                if let Ok(toml_theme) = TomlTheme::from_str(theme.content) {
                    debug!(theme = name, "loaded bundled theme");
                    return Some(Self::from_toml(toml_theme));
                }
            }
        }

        None
    }

    /// Built-in constructor lookup (last resort before the default fallback)
    fn builtin(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("wallet") {
            Some(Self::wallet_default())
        } else if name.eq_ignore_ascii_case("wallet dark") {
            Some(Self::wallet_dark())
        } else if name.eq_ignore_ascii_case("wallet high contrast") {
            Some(Self::wallet_high_contrast())
        } else {
            None
        }
    }

    /// Resolve a parsed TOML theme into a ready-to-use theme
    pub fn from_toml(toml: TomlTheme) -> Self {
        let parse = Color::parse;
        let c = &toml.colors;

        Self {
            name: toml.meta.name.clone(),
            colors: ThemeColors {
                text: parse(&c.text),
                text_secondary: parse(&c.text_secondary),
                text_tertiary: parse(&c.text_tertiary),

                panel_background: parse(&c.panel_background),
                panel_background_secondary: parse(&c.panel_background_secondary),
                page_background: parse(&c.page_background),
                page_background_secondary: parse(&c.page_background_secondary),

                outline_color: parse(&c.outline_color),
                divider: parse(&c.divider),

                interactive: parse(&c.interactive),
                interactive_hover: parse(&c.interactive_hover),
                primary_button_background: parse(&c.primary_button_background),
                primary_button_text: parse(&c.primary_button_text),
                link: parse(&c.link),

                success: parse(&c.success),
                warning: parse(&c.warning),
                error: parse(&c.error),
            },
            font_family: toml
                .fonts
                .as_ref()
                .map(|f| f.family.clone())
                .unwrap_or_else(|| "Poppins".to_string()),
            font_heading: toml
                .fonts
                .map(|f| f.heading)
                .unwrap_or_else(|| "Poppins".to_string()),
        }
    }

    /// Convert to the on-disk TOML representation
    pub fn to_toml_theme(&self) -> TomlTheme {
        let c = &self.colors;
        TomlTheme {
            meta: ThemeMeta {
                name: self.name.clone(),
                version: 1,
                author: None,
            },
            colors: ColorRoles {
                text: c.text.to_css(),
                text_secondary: c.text_secondary.to_css(),
                text_tertiary: c.text_tertiary.to_css(),
                panel_background: c.panel_background.to_css(),
                panel_background_secondary: c.panel_background_secondary.to_css(),
                outline_color: c.outline_color.to_css(),
                page_background: c.page_background.to_css(),
                page_background_secondary: c.page_background_secondary.to_css(),
                divider: c.divider.to_css(),
                interactive: c.interactive.to_css(),
                interactive_hover: c.interactive_hover.to_css(),
                primary_button_background: c.primary_button_background.to_css(),
                primary_button_text: c.primary_button_text.to_css(),
                link: c.link.to_css(),
                success: c.success.to_css(),
                warning: c.warning.to_css(),
                error: c.error.to_css(),
            },
            fonts: Some(Fonts {
                family: self.font_family.clone(),
                heading: self.font_heading.clone(),
            }),
        }
    }

    /// Role name / color pairs in declaration order
    pub fn roles(&self) -> [(&'static str, Color); 17] {
        let c = &self.colors;
        [
            ("text", c.text),
            ("text_secondary", c.text_secondary),
            ("text_tertiary", c.text_tertiary),
            ("panel_background", c.panel_background),
            ("panel_background_secondary", c.panel_background_secondary),
            ("page_background", c.page_background),
            ("page_background_secondary", c.page_background_secondary),
            ("outline_color", c.outline_color),
            ("divider", c.divider),
            ("interactive", c.interactive),
            ("interactive_hover", c.interactive_hover),
            ("primary_button_background", c.primary_button_background),
            ("primary_button_text", c.primary_button_text),
            ("link", c.link),
            ("success", c.success),
            ("warning", c.warning),
            ("error", c.error),
        ]
    }

    /// Render as a CSS custom-properties block for the web UI side
    pub fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (role, color) in self.roles() {
            let var = role.replace('_', "-");
            out.push_str(&format!("  --{}: {};\n", var, color.to_css()));
        }
        out.push_str(&format!("  --font-family: \"{}\";\n", self.font_family));
        out.push_str(&format!("  --font-heading: \"{}\";\n", self.font_heading));
        out.push_str("}\n");
        out
    }

    /// Render as JSON (for the web UI build pipeline)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.to_toml_theme().to_json()
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        if let Some(dir) = THEMES_DIR_OVERRIDE.get() {
            return Some(dir.clone());
        }
        dirs::home_dir().map(|h| h.join(".config").join("wallet-theme").join("themes"))
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = Vec::new();

        // Bundled themes are always available
        for name in bundled::list_bundled_themes() {
            themes.push(name.to_string());
        }

        // Add external themes from config dir
        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Convert filename format (underscore) to display format (space)
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Marker file: extraction happens once
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_overrides_exactly_three_roles() {
        let base = Theme::wallet_default();
        let dark = Theme::wallet_dark();

        // The fixed override set
        assert_eq!(dark.colors.text, palette::WHITE);
        assert_eq!(dark.colors.panel_background, palette::GREY_900);
        assert_eq!(dark.colors.outline_color, Color::rgba(255, 255, 255, 128));

        // Every other role is inherited unchanged
        let overridden = ["text", "panel_background", "outline_color"];
        for ((role, dark_color), (_, base_color)) in dark.roles().iter().zip(base.roles().iter()) {
            if !overridden.contains(role) {
                assert_eq!(dark_color, base_color, "role {role} should be inherited");
            }
        }
    }

    #[test]
    fn test_dark_theme_name() {
        assert_eq!(Theme::wallet_dark().name, "Wallet Dark");
    }

    #[test]
    fn test_dark_theme_inherits_structural_fields() {
        let base = Theme::wallet_default();
        let dark = Theme::wallet_dark();
        assert_eq!(dark.font_family, base.font_family);
        assert_eq!(dark.font_heading, base.font_heading);
    }

    #[test]
    fn test_construction_is_deterministic() {
        assert_eq!(Theme::wallet_default(), Theme::wallet_default());
        assert_eq!(Theme::wallet_dark(), Theme::wallet_dark());
        assert_eq!(Theme::wallet_high_contrast(), Theme::wallet_high_contrast());
    }

    #[test]
    fn test_bundled_toml_matches_builtin_constructors() {
        // The extracted files users edit must start out value-equal to the
        // in-code constructors
        for (content, builtin) in [
            (bundled::WALLET, Theme::wallet_default()),
            (bundled::WALLET_DARK, Theme::wallet_dark()),
            (bundled::WALLET_HIGH_CONTRAST, Theme::wallet_high_contrast()),
        ] {
            let parsed = Theme::from_toml(TomlTheme::from_str(content).unwrap());
            assert_eq!(parsed, builtin);
        }
    }

    #[test]
    fn test_toml_representation_round_trips() {
        let dark = Theme::wallet_dark();
        let rendered = dark.to_toml_theme().to_toml_string().unwrap();
        let reparsed = Theme::from_toml(TomlTheme::from_str(&rendered).unwrap());
        assert_eq!(reparsed, dark);
    }

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        assert_eq!(Theme::builtin("wallet dark").unwrap().name, "Wallet Dark");
        assert_eq!(Theme::builtin("WALLET").unwrap().name, "Wallet");
        assert!(Theme::builtin("nonexistent").is_none());
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = Theme::by_name("No Such Theme");
        assert_eq!(theme.name, DEFAULT_THEME);
    }

    #[test]
    fn test_list_available_includes_bundled() {
        let themes = Theme::list_available();
        for name in ["Wallet", "Wallet Dark", "Wallet High Contrast"] {
            assert!(themes.iter().any(|t| t == name), "missing {name}");
        }
    }

    #[test]
    fn test_themes_dir_override_serves_external_themes() {
        let dir = std::env::temp_dir().join(format!(
            "wallet-theme-themes-test-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let custom =
            bundled::WALLET_DARK.replace("name = \"Wallet Dark\"", "name = \"Custom Night\"");
        std::fs::write(dir.join("Custom_Night.toml"), &custom).unwrap();

        set_themes_dir(dir.clone());
        assert_eq!(Theme::themes_dir(), Some(dir.clone()));

        // External theme in the overridden directory is found by name
        let theme = Theme::by_name("Custom Night");
        assert_eq!(theme.name, "Custom Night");
        assert_eq!(theme.colors.panel_background, palette::GREY_900);
        assert!(Theme::list_available().iter().any(|t| t == "Custom Night"));

        // Extraction lands in the overridden directory too
        ensure_themes_extracted();
        assert!(dir.join("Wallet_Dark.toml").exists());
    }

    #[test]
    fn test_css_export_contains_every_role() {
        let css = Theme::wallet_dark().to_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--text: #ffffff;"));
        assert!(css.contains("--panel-background: #1e2029;"));
        assert!(css.contains("--outline-color: #ffffff80;"));
        assert!(css.contains("--font-family: \"Poppins\";"));
    }
}

// TOML theme format parser
//
// This is the on-disk theme format. Each theme file explicitly defines
// every semantic color role as a color string (hex or rgba notation).
//
// Format version: 1

use serde::{Deserialize, Serialize};

/// Root structure for TOML theme files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub colors: ColorRoles,
    /// Optional font overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Fonts>,
}

/// Theme metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Every semantic color role, as a color string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRoles {
    pub text: String,
    pub text_secondary: String,
    pub text_tertiary: String,
    pub panel_background: String,
    pub panel_background_secondary: String,
    pub outline_color: String,
    pub page_background: String,
    pub page_background_secondary: String,
    pub divider: String,
    pub interactive: String,
    pub interactive_hover: String,
    pub primary_button_background: String,
    pub primary_button_text: String,
    pub link: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

/// Font settings (inherited from the default theme when absent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fonts {
    pub family: String,
    pub heading: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize back to TOML (for writing user-editable theme files)
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Serialize to JSON (for the web UI build pipeline)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
[meta]
name = "Test Theme"
version = 1

[colors]
text = "#3b3e4f"
text_secondary = "#5e6175"
text_tertiary = "#84889c"
panel_background = "#ffffff"
panel_background_secondary = "#f8f9fa"
outline_color = "rgba(0,0,0,0.5)"
page_background = "#f8f9fa"
page_background_secondary = "#ffffff"
divider = "#e9ebf2"
interactive = "#4c54d2"
interactive_hover = "#737ade"
primary_button_background = "#4c54d2"
primary_button_text = "#ffffff"
link = "#339af0"
success = "#2ac194"
warning = "#ffd43b"
error = "#e32444"
"##;

    #[test]
    fn test_parse_theme() {
        let theme = TomlTheme::from_str(SAMPLE).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert_eq!(theme.colors.text, "#3b3e4f");
        assert_eq!(theme.colors.outline_color, "rgba(0,0,0,0.5)");
        assert!(theme.fonts.is_none());
    }

    #[test]
    fn test_missing_role_is_an_error() {
        // A theme file must define every role; dropping one must not parse
        let truncated = SAMPLE.replace("error = \"#e32444\"", "");
        assert!(TomlTheme::from_str(&truncated).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let theme = TomlTheme::from_str(SAMPLE).unwrap();
        let rendered = theme.to_toml_string().unwrap();
        let reparsed = TomlTheme::from_str(&rendered).unwrap();
        assert_eq!(reparsed.meta.name, theme.meta.name);
        assert_eq!(reparsed.colors.text, theme.colors.text);
        assert_eq!(reparsed.colors.outline_color, theme.colors.outline_color);
    }
}

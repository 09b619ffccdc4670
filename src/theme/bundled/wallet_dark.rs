//! Wallet Dark - the flagship dark variant
//!
//! Derived from the default theme with exactly three roles replaced:
//! white text, the darkest neutral as panel surface, and a translucent
//! white outline.

pub const THEME: &str = r##"# Wallet Dark theme
# Default theme with dark panel surfaces

[meta]
name = "Wallet Dark"
version = 1
author = "wallet-theme"

[colors]
text = "#ffffff"
text_secondary = "#5e6175"
text_tertiary = "#84889c"
panel_background = "#1e2029"
panel_background_secondary = "#f8f9fa"
outline_color = "rgba(255,255,255,0.5)"
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

[fonts]
family = "Poppins"
heading = "Poppins"
"##;

//! Wallet High Contrast - accessibility variant
//!
//! Black surfaces, white text, yellow interactive elements.

pub const THEME: &str = r##"# Wallet High Contrast theme
# Maximum-contrast variant for accessibility

[meta]
name = "Wallet High Contrast"
version = 1
author = "wallet-theme"

[colors]
text = "#ffffff"
text_secondary = "#dadce8"
text_tertiary = "#c2c4cf"
panel_background = "#000000"
panel_background_secondary = "#1e2029"
outline_color = "rgba(255,255,255,0.8)"
page_background = "#000000"
page_background_secondary = "#1e2029"
divider = "#84889c"
interactive = "#ffd43b"
interactive_hover = "#fc8453"
primary_button_background = "#ffd43b"
primary_button_text = "#000000"
link = "#ffd43b"
success = "#2ac194"
warning = "#ffd43b"
error = "#e32444"

[fonts]
family = "Poppins"
heading = "Poppins"
"##;

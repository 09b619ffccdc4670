//! Wallet - the default light theme

pub const THEME: &str = r##"# Wallet default theme
# The light base every variant derives from

[meta]
name = "Wallet"
version = 1
author = "wallet-theme"

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

[fonts]
family = "Poppins"
heading = "Poppins"
"##;

// Theme derivation by shallow override
//
// A variant theme is a base theme with a small set of color roles swapped
// out: copy every field, apply the overrides, rename. Because the role set
// is a struct rather than a string map, a variant can never drop or rename
// a role the UI depends on - the compiler holds the shape.

use super::color::Color;
use super::ThemeColors;

/// Per-role replacement colors for [`Theme::derive`](super::Theme::derive).
/// Unset roles inherit from the base theme unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorOverrides {
    pub text: Option<Color>,
    pub text_secondary: Option<Color>,
    pub text_tertiary: Option<Color>,
    pub panel_background: Option<Color>,
    pub panel_background_secondary: Option<Color>,
    pub outline_color: Option<Color>,
    pub page_background: Option<Color>,
    pub page_background_secondary: Option<Color>,
    pub divider: Option<Color>,
    pub interactive: Option<Color>,
    pub interactive_hover: Option<Color>,
    pub primary_button_background: Option<Color>,
    pub primary_button_text: Option<Color>,
    pub link: Option<Color>,
    pub success: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
}

impl ColorOverrides {
    /// Merge these overrides over a base role set, producing the full
    /// role set for the derived theme.
    pub fn apply(&self, base: &ThemeColors) -> ThemeColors {
        ThemeColors {
            text: self.text.unwrap_or(base.text),
            text_secondary: self.text_secondary.unwrap_or(base.text_secondary),
            text_tertiary: self.text_tertiary.unwrap_or(base.text_tertiary),
            panel_background: self.panel_background.unwrap_or(base.panel_background),
            panel_background_secondary: self
                .panel_background_secondary
                .unwrap_or(base.panel_background_secondary),
            outline_color: self.outline_color.unwrap_or(base.outline_color),
            page_background: self.page_background.unwrap_or(base.page_background),
            page_background_secondary: self
                .page_background_secondary
                .unwrap_or(base.page_background_secondary),
            divider: self.divider.unwrap_or(base.divider),
            interactive: self.interactive.unwrap_or(base.interactive),
            interactive_hover: self.interactive_hover.unwrap_or(base.interactive_hover),
            primary_button_background: self
                .primary_button_background
                .unwrap_or(base.primary_button_background),
            primary_button_text: self.primary_button_text.unwrap_or(base.primary_button_text),
            link: self.link.unwrap_or(base.link),
            success: self.success.unwrap_or(base.success),
            warning: self.warning.unwrap_or(base.warning),
            error: self.error.unwrap_or(base.error),
        }
    }
}

// RGBA color value type
//
// Wallet themes describe colors the way the web UI consumes them: hex
// strings with an optional alpha channel, or rgb()/rgba() functional
// notation. The alpha channel matters - the dark theme's outline color
// is a half-transparent white, not a solid grey.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// An sRGB color with 8-bit channels. Alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn fn_notation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
            .unwrap()
    })
}

impl Color {
    /// Opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit 8-bit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color string, or None if it is not a recognized format.
    /// Supports:
    /// - Hex format: #RGB, #RRGGBB, #RRGGBBAA
    /// - Functional format: rgb(r,g,b), rgba(r,g,b,a) with fractional alpha
    pub fn try_parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(captures) = fn_notation_re().captures(value) {
            let r: u16 = captures[1].parse().ok()?;
            let g: u16 = captures[2].parse().ok()?;
            let b: u16 = captures[3].parse().ok()?;
            if r > 255 || g > 255 || b > 255 {
                return None;
            }
            let a = match captures.get(4) {
                Some(alpha) => {
                    let alpha: f32 = alpha.as_str().parse().ok()?;
                    if !(0.0..=1.0).contains(&alpha) {
                        return None;
                    }
                    (alpha * 255.0).round() as u8
                }
                None => 255,
            };
            return Some(Self::rgba(r as u8, g as u8, b as u8, a));
        }

        let hex = value.strip_prefix('#')?;
        match hex.len() {
            // #RGB shorthand: each digit doubled
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 | 8 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
                let a = if hex.len() == 8 { channel(6)? } else { 255 };
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a color string, falling back to white for unrecognized input.
    /// Theme files are user-editable; a typo'd color should not take the
    /// whole theme down.
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or(Self::rgb(255, 255, 255))
    }

    /// Render as a CSS color string: `#rrggbb` when opaque,
    /// `#rrggbbaa` otherwise. Hex alpha is exact, so any color survives
    /// a render/parse round trip; a decimal alpha would quantize.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::try_parse("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::try_parse("#1e2029"), Some(Color::rgb(30, 32, 41)));
        assert_eq!(Color::try_parse("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(
            Color::try_parse("#ffffff80"),
            Some(Color::rgba(255, 255, 255, 128))
        );
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(
            Color::try_parse("rgb(30, 32, 41)"),
            Some(Color::rgb(30, 32, 41))
        );
        assert_eq!(
            Color::try_parse("rgba(255,255,255,0.5)"),
            Some(Color::rgba(255, 255, 255, 128))
        );
        assert_eq!(
            Color::try_parse("rgba(0, 0, 0, 1)"),
            Some(Color::rgb(0, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::try_parse("white"), None);
        assert_eq!(Color::try_parse("#12345"), None);
        assert_eq!(Color::try_parse("rgb(300,0,0)"), None);
        assert_eq!(Color::try_parse("rgba(0,0,0,1.5)"), None);
    }

    #[test]
    fn test_parse_fallback_is_white() {
        assert_eq!(Color::parse("not a color"), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_css_round_trip() {
        let opaque = Color::rgb(30, 32, 41);
        assert_eq!(opaque.to_css(), "#1e2029");
        assert_eq!(Color::try_parse(&opaque.to_css()), Some(opaque));

        let translucent = Color::rgba(255, 255, 255, 128);
        assert_eq!(translucent.to_css(), "#ffffff80");
        assert_eq!(Color::try_parse(&translucent.to_css()), Some(translucent));

        let mostly_opaque = Color::rgba(0, 0, 0, 204);
        assert_eq!(mostly_opaque.to_css(), "#000000cc");
        assert_eq!(
            Color::try_parse(&mostly_opaque.to_css()),
            Some(mostly_opaque)
        );
    }

    #[test]
    fn test_css_round_trip_every_alpha() {
        // Near-transparent and near-opaque alphas must not collapse into
        // fully transparent or fully opaque
        for a in 0..=255u8 {
            let color = Color::rgba(10, 20, 30, a);
            assert_eq!(
                Color::try_parse(&color.to_css()),
                Some(color),
                "alpha {a} did not round-trip through {}",
                color.to_css()
            );
        }
    }
}

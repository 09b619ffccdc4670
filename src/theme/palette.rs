// Shared color palette
//
// This is the base layer of the theme system - the named constants every
// theme composes from. Themes never invent raw channel values; they pick
// from this palette (translucent outlines being the one exception, since
// those are palette colors with an alpha applied).

// Full palette kept even where no bundled theme picks a slot yet; external
// themes and future variants compose from the same set.
#![allow(dead_code)]

use super::color::Color;

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);

// Neutral ramp, lightest to darkest
pub const GREY_000: Color = Color::rgb(248, 249, 250);
pub const GREY_100: Color = Color::rgb(241, 243, 245);
pub const GREY_200: Color = Color::rgb(233, 235, 242);
pub const GREY_300: Color = Color::rgb(218, 220, 232);
pub const GREY_400: Color = Color::rgb(194, 196, 207);
pub const GREY_500: Color = Color::rgb(174, 177, 194);
pub const GREY_600: Color = Color::rgb(132, 136, 156);
pub const GREY_700: Color = Color::rgb(94, 97, 117);
pub const GREY_800: Color = Color::rgb(59, 62, 79);
pub const GREY_900: Color = Color::rgb(30, 32, 41);

// Brand interactive (blurple) ramp
pub const BLURPLE_300: Color = Color::rgb(160, 165, 235);
pub const BLURPLE_400: Color = Color::rgb(115, 122, 222);
pub const BLURPLE_500: Color = Color::rgb(76, 84, 210);

// Accents
pub const BLUE_500: Color = Color::rgb(51, 154, 240);
pub const PURPLE_500: Color = Color::rgb(132, 94, 247);
pub const MAGENTA_500: Color = Color::rgb(163, 39, 143);
pub const RED_500: Color = Color::rgb(227, 36, 68);
pub const GREEN_500: Color = Color::rgb(42, 193, 148);
pub const YELLOW_500: Color = Color::rgb(255, 212, 59);
pub const ORANGE_400: Color = Color::rgb(252, 132, 83);

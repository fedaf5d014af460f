//! 8-bit RGBA colors.

use crate::error::{Error, Result};
use crate::vector::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Component value used for a reset color and for the alpha of RGB-only
/// constructors.
pub const COLOR_DEFAULT: u8 = 0;

/// Scale between a normalized float component and its byte value.
pub const COLOR_FLOAT_MULTIPLIER: f32 = 255.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Alpha is [`COLOR_DEFAULT`].
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, COLOR_DEFAULT)
    }

    /// Builds a color from normalized components.
    ///
    /// Every component must lie in `0.0..=1.0`; the first one that does not is
    /// reported as [`Error::ColorUnnorm`]. Scaled values are truncated.
    pub fn from_f32(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Self> {
        Ok(Self::new(
            to_byte("red", red)?,
            to_byte("green", green)?,
            to_byte("blue", blue)?,
            to_byte("alpha", alpha)?,
        ))
    }

    pub fn rgb_f32(red: f32, green: f32, blue: f32) -> Result<Self> {
        Ok(Self::rgb(
            to_byte("red", red)?,
            to_byte("green", green)?,
            to_byte("blue", blue)?,
        ))
    }

    /// `x`, `y`, `z` map to red, green, blue; alpha is [`COLOR_DEFAULT`].
    pub fn from_vec3(vec: Vec3) -> Result<Self> {
        Self::rgb_f32(vec.x, vec.y, vec.z)
    }

    pub fn from_vec4(vec: Vec4) -> Result<Self> {
        Self::from_f32(vec.x, vec.y, vec.z, vec.w)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            to_unit(self.red),
            to_unit(self.green),
            to_unit(self.blue),
        )
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            to_unit(self.red),
            to_unit(self.green),
            to_unit(self.blue),
            to_unit(self.alpha),
        )
    }

    /// Averages two colors component-wise, rounding down.
    pub const fn mix(self, other: Color) -> Color {
        Color::new(
            average(self.red, other.red),
            average(self.green, other.green),
            average(self.blue, other.blue),
            average(self.alpha, other.alpha),
        )
    }

    /// Sets every component to [`COLOR_DEFAULT`].
    pub fn reset(&mut self) {
        *self = Color::new(COLOR_DEFAULT, COLOR_DEFAULT, COLOR_DEFAULT, COLOR_DEFAULT);
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Looks up a palette color by name, ignoring ASCII case.
    pub fn named(name: &str) -> Option<Color> {
        PALETTE
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

/// Named palette colors.
impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const LIGHT_GREY: Color = Color::new(191, 191, 191, 255);
    pub const GREY: Color = Color::new(127, 127, 127, 255);
    pub const DARK_GREY: Color = Color::new(63, 63, 63, 255);
    pub const MARBLE: Color = Color::new(239, 231, 231, 255);
    pub const INTRITE: Color = Color::new(111, 103, 103, 255);
    pub const CHARCOAL: Color = Color::new(39, 31, 31, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const BRIGHT_RED: Color = Color::new(191, 0, 0, 255);
    pub const LIGHT_RED: Color = Color::new(127, 0, 0, 255);
    pub const DARK_RED: Color = Color::new(63, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BRIGHT_GREEN: Color = Color::new(0, 191, 0, 255);
    pub const LIGHT_GREEN: Color = Color::new(0, 127, 0, 255);
    pub const DARK_GREEN: Color = Color::new(0, 63, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);
    pub const BRIGHT_BLUE: Color = Color::new(0, 0, 191, 255);
    pub const LIGHT_BLUE: Color = Color::new(0, 0, 127, 255);
    pub const DARK_BLUE: Color = Color::new(0, 0, 63, 255);
    pub const CYAN: Color = Color::new(0, 255, 255, 255);
    pub const BRIGHT_CYAN: Color = Color::new(0, 255, 255, 255);
    pub const LIGHT_CYAN: Color = Color::new(0, 127, 127, 255);
    pub const DARK_CYAN: Color = Color::new(0, 63, 63, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const BRIGHT_MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const LIGHT_MAGENTA: Color = Color::new(127, 0, 127, 255);
    pub const DARK_MAGENTA: Color = Color::new(63, 0, 63, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0, 255);
    pub const BRIGHT_YELLOW: Color = Color::new(191, 191, 0, 255);
    pub const LIGHT_YELLOW: Color = Color::new(127, 127, 0, 255);
    pub const DARK_YELLOW: Color = Color::new(63, 63, 0, 255);
    pub const ORANGE: Color = Color::new(255, 127, 0, 255);
    pub const BRIGHT_ORANGE: Color = Color::new(191, 96, 0, 255);
    pub const LIGHT_ORANGE: Color = Color::new(127, 63, 0, 255);
    pub const DARK_ORANGE: Color = Color::new(63, 32, 0, 255);
    pub const BLOOD: Color = Color::new(157, 33, 53, 255);
    pub const EBONY: Color = Color::new(39, 43, 51, 255);
    pub const IVORY: Color = Color::new(255, 255, 239, 255);
    pub const OAK: Color = Color::new(119, 81, 45, 255);
    pub const WILLOW: Color = Color::new(169, 171, 155, 255);
    pub const BIRCH: Color = Color::new(233, 225, 215, 255);
    pub const IRON: Color = Color::new(67, 69, 75, 255);
    pub const STEEL: Color = Color::new(161, 157, 149, 255);
    pub const GOLD: Color = Color::new(255, 215, 0, 255);
    pub const SILVER: Color = Color::new(191, 191, 191, 255);
    pub const COPPER: Color = Color::new(185, 115, 51, 255);
    pub const TIN: Color = Color::new(145, 145, 145, 255);
    pub const BRONZE: Color = Color::new(205, 127, 49, 255);
    pub const ZINC: Color = Color::new(187, 197, 199, 255);
    pub const BRASS: Color = Color::new(181, 167, 67, 255);
}

/// Name and value of every palette color. Names are lowercase snake case.
pub const PALETTE: &[(&str, Color)] = &[
    ("transparent", Color::TRANSPARENT),
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("light_grey", Color::LIGHT_GREY),
    ("grey", Color::GREY),
    ("dark_grey", Color::DARK_GREY),
    ("marble", Color::MARBLE),
    ("intrite", Color::INTRITE),
    ("charcoal", Color::CHARCOAL),
    ("red", Color::RED),
    ("bright_red", Color::BRIGHT_RED),
    ("light_red", Color::LIGHT_RED),
    ("dark_red", Color::DARK_RED),
    ("green", Color::GREEN),
    ("bright_green", Color::BRIGHT_GREEN),
    ("light_green", Color::LIGHT_GREEN),
    ("dark_green", Color::DARK_GREEN),
    ("blue", Color::BLUE),
    ("bright_blue", Color::BRIGHT_BLUE),
    ("light_blue", Color::LIGHT_BLUE),
    ("dark_blue", Color::DARK_BLUE),
    ("cyan", Color::CYAN),
    ("bright_cyan", Color::BRIGHT_CYAN),
    ("light_cyan", Color::LIGHT_CYAN),
    ("dark_cyan", Color::DARK_CYAN),
    ("magenta", Color::MAGENTA),
    ("bright_magenta", Color::BRIGHT_MAGENTA),
    ("light_magenta", Color::LIGHT_MAGENTA),
    ("dark_magenta", Color::DARK_MAGENTA),
    ("yellow", Color::YELLOW),
    ("bright_yellow", Color::BRIGHT_YELLOW),
    ("light_yellow", Color::LIGHT_YELLOW),
    ("dark_yellow", Color::DARK_YELLOW),
    ("orange", Color::ORANGE),
    ("bright_orange", Color::BRIGHT_ORANGE),
    ("light_orange", Color::LIGHT_ORANGE),
    ("dark_orange", Color::DARK_ORANGE),
    ("blood", Color::BLOOD),
    ("ebony", Color::EBONY),
    ("ivory", Color::IVORY),
    ("oak", Color::OAK),
    ("willow", Color::WILLOW),
    ("birch", Color::BIRCH),
    ("iron", Color::IRON),
    ("steel", Color::STEEL),
    ("gold", Color::GOLD),
    ("silver", Color::SILVER),
    ("copper", Color::COPPER),
    ("tin", Color::TIN),
    ("bronze", Color::BRONZE),
    ("zinc", Color::ZINC),
    ("brass", Color::BRASS),
];

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

fn to_byte(component: &'static str, value: f32) -> Result<u8> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::color_unnorm(component, value));
    }
    Ok((value * COLOR_FLOAT_MULTIPLIER) as u8)
}

fn to_unit(value: u8) -> f32 {
    f32::from(value) / COLOR_FLOAT_MULTIPLIER
}

const fn average(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) >> 1) as u8
}

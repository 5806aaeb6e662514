//! Light and dark palettes
//!
//! The core only carries the theme flag; surfaces look colors up here.

use serde::{Deserialize, Serialize};

use crate::keypad::ButtonStyle;

/// Theme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text
    #[default]
    Dark,
    /// Light background, dark text
    Light,
}

impl Theme {
    /// Returns the other theme
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::DARK,
            Self::Light => Palette::LIGHT,
        }
    }

    /// Returns the lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Builds a color from `0xRRGGBB`
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors for one button style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonColors {
    /// Face color
    pub fill: Rgb,
    /// Drop shadow
    pub shadow: Rgb,
    /// Label color
    pub text: Rgb,
}

/// Fixed color set for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Screen background
    pub background: Rgb,
    /// Display panel background
    pub display_bg: Rgb,
    /// Main text
    pub text: Rgb,
    /// Last-calculation subtitle
    pub subtitle_text: Rgb,
    /// Digit buttons
    pub digit: ButtonColors,
    /// Operator buttons
    pub operation: ButtonColors,
    /// `C`, `+/-` and `%`
    pub special: ButtonColors,
}

impl Palette {
    /// Dark palette
    pub const DARK: Self = Self {
        background: Rgb::hex(0x10_10_14),
        display_bg: Rgb::hex(0x1a_1a_23),
        text: Rgb::hex(0xff_ff_ff),
        subtitle_text: Rgb::hex(0x9e_9e_a7),
        digit: ButtonColors {
            fill: Rgb::hex(0x2d_2d_39),
            shadow: Rgb::hex(0x22_22_30),
            text: Rgb::hex(0xff_ff_ff),
        },
        operation: ButtonColors {
            fill: Rgb::hex(0x00_88_ff),
            shadow: Rgb::hex(0x00_66_cc),
            text: Rgb::hex(0xff_ff_ff),
        },
        special: ButtonColors {
            fill: Rgb::hex(0x9e_9e_a7),
            shadow: Rgb::hex(0x89_89_8f),
            text: Rgb::hex(0x1a_1a_23),
        },
    };

    /// Light palette
    pub const LIGHT: Self = Self {
        background: Rgb::hex(0xf8_f9_fa),
        display_bg: Rgb::hex(0xe9_ec_ef),
        text: Rgb::hex(0x21_25_29),
        subtitle_text: Rgb::hex(0x6c_75_7d),
        digit: ButtonColors {
            fill: Rgb::hex(0xe9_ec_ef),
            shadow: Rgb::hex(0xd8_db_e0),
            text: Rgb::hex(0x21_25_29),
        },
        operation: ButtonColors {
            fill: Rgb::hex(0x00_88_ff),
            shadow: Rgb::hex(0x00_77_dd),
            text: Rgb::hex(0xff_ff_ff),
        },
        special: ButtonColors {
            fill: Rgb::hex(0xce_d4_da),
            shadow: Rgb::hex(0xb1_b6_bc),
            text: Rgb::hex(0x49_50_57),
        },
    };

    /// Returns the colors for a button style
    #[must_use]
    pub const fn button(&self, style: ButtonStyle) -> ButtonColors {
        match style {
            ButtonStyle::Digit => self.digit,
            ButtonStyle::Operation => self.operation,
            ButtonStyle::Special => self.special,
        }
    }
}

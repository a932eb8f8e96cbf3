//! Built-in holiday palettes
//!
//! Gray (`0x808080`) stands in for white to keep brightness uniform
//! across entries.

use super::Palette;

const RED: u32 = 0xFF_00_00;
const GREEN: u32 = 0x00_80_00;
const BLUE: u32 = 0x00_00_FF;
const GRAY: u32 = 0x80_80_80;

const FAIRY: u32 = 0xFF_E4_2D;
const HALF_FAIRY: u32 = (FAIRY & 0xFE_FE_FE) / 2;
const QUARTER_FAIRY: u32 = (FAIRY & 0xFC_FC_FC) / 4;

const SNOW_SOFT: u32 = 0x40_40_40;
const SNOW_BRIGHT: u32 = 0xFF_FF_FF;

// Large old-school C9 tree bulbs
const C9_RED: u32 = 0xB8_04_00;
const C9_ORANGE: u32 = 0x90_2C_02;
const C9_GREEN: u32 = 0x04_60_02;
const C9_BLUE: u32 = 0x07_07_58;
const C9_WHITE: u32 = 0x60_68_30;

/// Mostly red with green accents and white trim
pub const RED_GREEN_WHITE: Palette = Palette::from_u32([
    RED, RED, RED, RED, RED, RED, RED, RED, //
    RED, RED, GRAY, GRAY, GREEN, GREEN, GREEN, GREEN,
]);

/// Red and white stripes
pub const RED_WHITE: Palette = Palette::from_u32([
    RED, RED, RED, RED, GRAY, GRAY, GRAY, GRAY, //
    RED, RED, RED, RED, GRAY, GRAY, GRAY, GRAY,
]);

/// Mostly blue with white accents
pub const BLUE_WHITE: Palette = Palette::from_u32([
    BLUE, BLUE, BLUE, BLUE, BLUE, BLUE, BLUE, BLUE, //
    BLUE, BLUE, BLUE, BLUE, BLUE, GRAY, GRAY, GRAY,
]);

/// Warm fairy lights with some dimmer bulbs
pub const FAIRY_LIGHT: Palette = Palette::from_u32([
    FAIRY, FAIRY, FAIRY, FAIRY, HALF_FAIRY, HALF_FAIRY, FAIRY, FAIRY, //
    QUARTER_FAIRY, QUARTER_FAIRY, FAIRY, FAIRY, FAIRY, FAIRY, FAIRY, FAIRY,
]);

/// Soft snowflakes with the occasional bright one
pub const SNOW: Palette = Palette::from_u32([
    SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, //
    SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_SOFT, SNOW_BRIGHT,
]);

/// Classic C9 bulbs: red, orange, green, blue and white
pub const CLASSIC_C9: Palette = Palette::from_u32([
    C9_RED, C9_RED, C9_RED, C9_ORANGE, C9_ORANGE, C9_ORANGE, C9_GREEN, C9_GREEN, //
    C9_GREEN, C9_GREEN, C9_BLUE, C9_BLUE, C9_BLUE, C9_WHITE, C9_WHITE, C9_WHITE,
]);

/// Full hue wheel
pub const RAINBOW_COLORS: Palette = Palette::from_u32([
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A, //
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
]);

/// Rainbow without the greens
pub const PARTY_COLORS: Palette = Palette::from_u32([
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00, //
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
]);

const PALETTE_NAME_RED_GREEN_WHITE: &str = "red_green_white";
const PALETTE_NAME_BLUE_WHITE: &str = "blue_white";
const PALETTE_NAME_RAINBOW: &str = "rainbow";
const PALETTE_NAME_FAIRY_LIGHT: &str = "fairy_light";
const PALETTE_NAME_RED_WHITE: &str = "red_white";
const PALETTE_NAME_PARTY: &str = "party";
const PALETTE_NAME_SNOW: &str = "snow";
const PALETTE_NAME_CLASSIC_C9: &str = "classic_c9";

const PALETTE_ID_RED_GREEN_WHITE: u8 = 0;
const PALETTE_ID_BLUE_WHITE: u8 = 1;
const PALETTE_ID_RAINBOW: u8 = 2;
const PALETTE_ID_FAIRY_LIGHT: u8 = 3;
const PALETTE_ID_RED_WHITE: u8 = 4;
const PALETTE_ID_PARTY: u8 = 5;
const PALETTE_ID_SNOW: u8 = 6;
const PALETTE_ID_CLASSIC_C9: u8 = 7;

/// Known palette ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaletteId {
    RedGreenWhite = PALETTE_ID_RED_GREEN_WHITE,
    BlueWhite = PALETTE_ID_BLUE_WHITE,
    Rainbow = PALETTE_ID_RAINBOW,
    FairyLight = PALETTE_ID_FAIRY_LIGHT,
    RedWhite = PALETTE_ID_RED_WHITE,
    Party = PALETTE_ID_PARTY,
    Snow = PALETTE_ID_SNOW,
    ClassicC9 = PALETTE_ID_CLASSIC_C9,
}

/// Rotation used when no catalog is configured
pub const DEFAULT_ROTATION: [PaletteId; 8] = [
    PaletteId::RedGreenWhite,
    PaletteId::BlueWhite,
    PaletteId::Rainbow,
    PaletteId::FairyLight,
    PaletteId::RedWhite,
    PaletteId::Party,
    PaletteId::Snow,
    PaletteId::ClassicC9,
];

impl PaletteId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PALETTE_ID_RED_GREEN_WHITE => Self::RedGreenWhite,
            PALETTE_ID_BLUE_WHITE => Self::BlueWhite,
            PALETTE_ID_RAINBOW => Self::Rainbow,
            PALETTE_ID_FAIRY_LIGHT => Self::FairyLight,
            PALETTE_ID_RED_WHITE => Self::RedWhite,
            PALETTE_ID_PARTY => Self::Party,
            PALETTE_ID_SNOW => Self::Snow,
            PALETTE_ID_CLASSIC_C9 => Self::ClassicC9,
            _ => return None,
        })
    }

    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::RedGreenWhite => &RED_GREEN_WHITE,
            Self::BlueWhite => &BLUE_WHITE,
            Self::Rainbow => &RAINBOW_COLORS,
            Self::FairyLight => &FAIRY_LIGHT,
            Self::RedWhite => &RED_WHITE,
            Self::Party => &PARTY_COLORS,
            Self::Snow => &SNOW,
            Self::ClassicC9 => &CLASSIC_C9,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RedGreenWhite => PALETTE_NAME_RED_GREEN_WHITE,
            Self::BlueWhite => PALETTE_NAME_BLUE_WHITE,
            Self::Rainbow => PALETTE_NAME_RAINBOW,
            Self::FairyLight => PALETTE_NAME_FAIRY_LIGHT,
            Self::RedWhite => PALETTE_NAME_RED_WHITE,
            Self::Party => PALETTE_NAME_PARTY,
            Self::Snow => PALETTE_NAME_SNOW,
            Self::ClassicC9 => PALETTE_NAME_CLASSIC_C9,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PALETTE_NAME_RED_GREEN_WHITE => Some(Self::RedGreenWhite),
            PALETTE_NAME_BLUE_WHITE => Some(Self::BlueWhite),
            PALETTE_NAME_RAINBOW => Some(Self::Rainbow),
            PALETTE_NAME_FAIRY_LIGHT => Some(Self::FairyLight),
            PALETTE_NAME_RED_WHITE => Some(Self::RedWhite),
            PALETTE_NAME_PARTY => Some(Self::Party),
            PALETTE_NAME_SNOW => Some(Self::Snow),
            PALETTE_NAME_CLASSIC_C9 => Some(Self::ClassicC9),
            _ => None,
        }
    }
}

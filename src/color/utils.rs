use crate::{
    color::Rgb,
    math8::{qsub8, scale8},
};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Perceived brightness of a color, roughly the mean of its channels
#[inline]
pub const fn average_light(color: Rgb) -> u8 {
    scale8(color.r, 85) + scale8(color.g, 85) + scale8(color.b, 85)
}

/// Shift a fading color toward red, the way incandescent bulbs cool
///
/// `phase` is the position in the brightness cycle; only the fading half
/// (`phase >= 128`) is affected.
#[inline]
pub const fn cool_like_incandescent(color: Rgb, phase: u8) -> Rgb {
    if phase < 128 {
        return color;
    }

    let cooling = (phase - 128) >> 4;
    Rgb {
        r: color.r,
        g: qsub8(color.g, cooling),
        b: qsub8(color.b, cooling * 2),
    }
}

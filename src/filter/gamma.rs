use super::Filter;
use crate::color::Rgb;

/// Gamma exponent that suits WS2812 LEDs
pub const WS2812_GAMMA: f32 = 2.6;

/// 8-bit gamma lookup table
#[derive(Debug, Clone)]
pub struct GammaFilter {
    lut: [u8; 256],
}

impl GammaFilter {
    /// Build the lookup table for `gamma`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(gamma: f32) -> Self {
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let normalized = i as f32 / 255.0;
            let corrected = libm::powf(normalized, gamma) * 255.0;
            *entry = libm::roundf(corrected).clamp(0.0, 255.0) as u8;
        }
        Self { lut }
    }

    #[inline]
    pub fn correct(&self, value: u8) -> u8 {
        self.lut[usize::from(value)]
    }
}

impl Filter for GammaFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        for pixel in frame.iter_mut() {
            pixel.r = self.correct(pixel.r);
            pixel.g = self.correct(pixel.g);
            pixel.b = self.correct(pixel.b);
        }
    }
}

//! Twinkle evaluation
//!
//! Every pixel follows the same brightness waveform over its own adjusted
//! clock. The low byte of the pixel's tick count drives the waveform; the
//! high byte picks the color and decides whether the pixel lights at all
//! in the current cycle, so the color stays fixed through one fade-in and
//! fade-out. A pixel lights in a slow cycle when bits 1..=3 of the cycle,
//! taken as `slow & 0x0E`, are below the density.

use crate::{
    clock::{DEFAULT_SEED, PixelClockGenerator},
    color::{Rgb, average_light, cool_like_incandescent},
    error::ConfigError,
    math8::{attack_decay_wave8, triwave8},
    palette::{Palette, PaletteBlend},
};

/// Highest accepted speed and density setting
pub const MAX_SETTING: u8 = 8;

/// Brightness curve followed by each twinkle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Symmetric rise and fall
    #[default]
    Triangle,
    /// Fast rise, slower fade
    AttackDecay,
}

impl Waveform {
    #[inline]
    pub const fn sample(self, phase: u8) -> u8 {
        match self {
            Self::Triangle => triwave8(phase),
            Self::AttackDecay => attack_decay_wave8(phase),
        }
    }
}

/// Twinkle tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinkleConfig {
    /// 0 (very slow) to 8 (very fast)
    pub speed: u8,
    /// 0 (none lit) to 8 (all lit)
    pub density: u8,
    /// Color of unlit pixels
    pub background: Rgb,
    pub waveform: Waveform,
    /// Redden fading twinkles like incandescent bulbs
    pub cool_like_incandescent: bool,
    pub blend: PaletteBlend,
    /// Generator seed; changing it reshuffles every pixel
    pub seed: u16,
}

impl Default for TwinkleConfig {
    fn default() -> Self {
        Self {
            speed: 4,
            density: 4,
            background: Rgb { r: 3, g: 0, b: 6 },
            waveform: Waveform::Triangle,
            cool_like_incandescent: false,
            blend: PaletteBlend::NoBlend,
            seed: DEFAULT_SEED,
        }
    }
}

impl TwinkleConfig {
    pub(crate) const fn validate(&self) -> Result<(), ConfigError> {
        if self.speed > MAX_SETTING {
            return Err(ConfigError::SpeedOutOfRange(self.speed));
        }
        if self.density > MAX_SETTING {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        Ok(())
    }
}

/// Renders twinkles for a whole strip without per-pixel state
#[derive(Debug, Clone)]
pub struct TwinkleRenderer {
    config: TwinkleConfig,
}

impl TwinkleRenderer {
    pub fn new(config: TwinkleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &TwinkleConfig {
        &self.config
    }

    /// Set the speed, clamped to `0..=8`
    pub fn set_speed(&mut self, speed: u8) {
        self.config.speed = speed.min(MAX_SETTING);
    }

    /// Set the density, clamped to `0..=8`
    pub fn set_density(&mut self, density: u8) {
        self.config.density = density.min(MAX_SETTING);
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.config.background = background;
    }

    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.config.waveform = waveform;
    }

    pub fn set_cooling(&mut self, enabled: bool) {
        self.config.cool_like_incandescent = enabled;
    }

    /// Color of one twinkle at pixel-local time `clock` with `salt`
    #[allow(clippy::cast_possible_truncation)]
    pub fn compute_one_twinkle(&self, clock: u32, salt: u8, palette: &Palette) -> Rgb {
        let ticks = (clock >> (MAX_SETTING - self.config.speed)) as u16;
        let fast_cycle = ticks as u8;
        let slow_cycle = ((ticks >> 8) as u8) ^ salt;

        let brightness = if (slow_cycle & 0x0E) < self.config.density {
            self.config.waveform.sample(fast_cycle)
        } else {
            0
        };

        let hue = slow_cycle.wrapping_mul(16).wrapping_add(salt);
        let color = palette.color_at(hue, brightness, self.config.blend);

        if self.config.cool_like_incandescent {
            cool_like_incandescent(color, fast_cycle)
        } else {
            color
        }
    }

    /// Render every pixel of `leds` for the global millisecond clock
    ///
    /// Each pixel shows its twinkle or the background, whichever is
    /// brighter.
    pub fn draw(&self, clock_ms: u32, palette: &Palette, leds: &mut [Rgb]) {
        let background = self.config.background;
        let background_light = average_light(background);
        let clocks = PixelClockGenerator::with_seed(self.config.seed);

        for (led, pixel) in leds.iter_mut().zip(clocks) {
            let color = self.compute_one_twinkle(pixel.adjusted(clock_ms), pixel.salt, palette);
            *led = if average_light(color) > background_light {
                color
            } else {
                background
            };
        }
    }
}

//! Per-pixel clock parameters stored in a pseudo-random generator
//!
//! Instead of keeping an offset and a speed for every pixel, the
//! generator is reset to the same seed at the start of every frame and
//! drawn from in pixel order. Pixel `i` therefore always receives the same
//! parameters, whatever the strip length, using two bytes of state.

/// Seed the generator is reset to on every pass
pub const DEFAULT_SEED: u16 = 11337;

const MULTIPLIER: u16 = 2053;
const INCREMENT: u16 = 1384;

/// Clock adjustment for a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelClock {
    /// Phase offset added to the scaled clock
    pub offset: u16,
    /// Clock speed in eighths (Q5.3), 8 (1x) to 23 (2.875x)
    pub speed: u8,
    /// Per-pixel value decorrelating color phase and density gating
    pub salt: u8,
}

impl PixelClock {
    /// Pixel-local time for the global millisecond clock
    ///
    /// Wraps on overflow.
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn adjusted(self, clock_ms: u32) -> u32 {
        (clock_ms.wrapping_mul(self.speed as u32) >> 3).wrapping_add(self.offset as u32)
    }
}

/// Reseeded linear congruential generator yielding one [`PixelClock`]
/// per pixel
///
/// A fresh generator must be created for every frame and consumed in
/// pixel order, exactly once per pixel.
#[derive(Debug, Clone)]
pub struct PixelClockGenerator {
    state: u16,
}

impl Default for PixelClockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelClockGenerator {
    pub const fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub const fn with_seed(seed: u16) -> Self {
        Self { state: seed }
    }

    #[inline]
    const fn step(&mut self) -> u16 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Draw the parameters for the next pixel
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_clock(&mut self) -> PixelClock {
        let offset = self.step();
        let draw = self.step();
        let speed = (((((draw & 0xFF) >> 4) + (draw & 0x0F)) & 0x0F) as u8) + 8;

        PixelClock {
            offset,
            speed,
            salt: (draw >> 8) as u8,
        }
    }
}

impl Iterator for PixelClockGenerator {
    type Item = PixelClock;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_clock())
    }
}

//! Output filters applied after compositing
//!
//! Filters run in a fixed order: gamma lookup first, then master
//! brightness.

mod brightness;
mod gamma;

use crate::color::Rgb;

pub use brightness::BrightnessFilter;
pub use gamma::{GammaFilter, WS2812_GAMMA};

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Master brightness (255 = unchanged)
    pub brightness: u8,
    /// Gamma exponent for the output lookup table, `None` to disable
    pub gamma: Option<f32>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            gamma: None,
        }
    }
}

/// Filter processor - applies post-processing to frames
#[derive(Debug, Clone)]
pub(crate) struct FilterProcessor {
    pub(crate) brightness: BrightnessFilter,
    gamma: Option<GammaFilter>,
}

impl FilterProcessor {
    pub(crate) fn new(config: &FilterConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness),
            gamma: config.gamma.map(GammaFilter::new),
        }
    }

    pub(crate) fn apply(&self, frame: &mut [Rgb]) {
        if let Some(gamma) = &self.gamma {
            gamma.apply(frame);
        }
        self.brightness.apply(frame);
    }
}

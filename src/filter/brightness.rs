use super::Filter;
use crate::{
    color::{BLACK, Rgb},
    math8::scale8,
};

/// Master brightness scaling
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilter {
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        match self.brightness {
            255 => {}
            0 => frame.fill(BLACK),
            brightness => {
                for pixel in frame.iter_mut() {
                    pixel.r = scale8(pixel.r, brightness);
                    pixel.g = scale8(pixel.g, brightness);
                    pixel.b = scale8(pixel.b, brightness);
                }
            }
        }
    }
}

#![no_std]

pub mod clock;
pub mod color;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod intent;
pub mod math8;
pub mod palette;
pub mod palette_scheduler;
pub mod renderer;
pub mod twinkle;

pub use clock::{PixelClock, PixelClockGenerator};
pub use error::ConfigError;
pub use filter::FilterConfig;
pub use frame_scheduler::FrameScheduler;
pub use intent::{IntentChannel, IntentReceiver, IntentSender, TwinkleIntent};
pub use palette::{Palette, PaletteBlend, PaletteBlendStep, PaletteCatalog, PaletteId};
pub use palette_scheduler::{PaletteScheduleConfig, PaletteScheduler};
pub use renderer::{Renderer, RendererConfig};
pub use twinkle::{TwinkleConfig, TwinkleRenderer, Waveform};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

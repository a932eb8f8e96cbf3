use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};
use crate::error::ConfigError;
use crate::filter::{FilterConfig, FilterProcessor};
use crate::intent::{IntentReceiver, TwinkleIntent};
use crate::palette::PaletteCatalog;
use crate::palette_scheduler::{PaletteScheduleConfig, PaletteScheduler};
use crate::twinkle::{TwinkleConfig, TwinkleRenderer};

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Number of pixels on the strip
    pub led_count: usize,
    pub twinkle: TwinkleConfig,
    pub schedule: PaletteScheduleConfig,
    pub palettes: PaletteCatalog,
    pub filters: FilterConfig,
}

impl RendererConfig {
    /// Default settings for a strip of `led_count` pixels
    pub fn new(led_count: usize) -> Self {
        Self {
            led_count,
            twinkle: TwinkleConfig::default(),
            schedule: PaletteScheduleConfig::default(),
            palettes: PaletteCatalog::default(),
            filters: FilterConfig::default(),
        }
    }
}

/// Twinkle renderer - the main orchestrator
///
/// Owns the frame buffer and all animation state. Pixel state is not
/// stored between frames: the buffer is fully overwritten on every call
/// to [`Renderer::render`].
pub struct Renderer<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize> {
    // External dependencies
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,

    // Internal state
    led_count: usize,
    frame_buffer: [Rgb; MAX_LEDS],

    // Internal dependencies
    twinkle: TwinkleRenderer,
    palettes: PaletteScheduler,
    filters: FilterProcessor,
}

impl<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new renderer
    ///
    /// Fails if the LED count does not fit the frame buffer or a twinkle
    /// setting is out of range.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &RendererConfig,
    ) -> Result<Self, ConfigError> {
        if config.led_count == 0 || config.led_count > MAX_LEDS {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Renderer.new] rejecting LED count {} (max {})",
                config.led_count, MAX_LEDS
            );
            return Err(ConfigError::InvalidLedCount(config.led_count));
        }

        Ok(Self {
            intents,
            led_count: config.led_count,
            frame_buffer: [BLACK; MAX_LEDS],
            twinkle: TwinkleRenderer::new(config.twinkle)?,
            palettes: PaletteScheduler::new(config.palettes.clone(), config.schedule),
            filters: FilterProcessor::new(&config.filters),
        })
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this on a fixed cadence.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents(now);
        self.palettes.tick(now);

        // The strip clock is a wrapping 32-bit millisecond counter
        let clock_ms = now.as_millis() as u32;

        let frame = &mut self.frame_buffer[..self.led_count];
        self.twinkle.draw(clock_ms, self.palettes.current(), frame);
        self.filters.apply(frame);

        frame
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn twinkle(&self) -> &TwinkleRenderer {
        &self.twinkle
    }

    pub const fn palettes(&self) -> &PaletteScheduler {
        &self.palettes
    }

    /// Drain pending intents from the channel (non-blocking)
    fn process_intents(&mut self, now: Instant) {
        while let Ok(intent) = self.intents.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.process_intents] applying {:?}", intent);
            self.apply_intent(intent, now);
        }
    }

    fn apply_intent(&mut self, intent: TwinkleIntent, now: Instant) {
        match intent {
            TwinkleIntent::Speed(speed) => self.twinkle.set_speed(speed),
            TwinkleIntent::Density(density) => self.twinkle.set_density(density),
            TwinkleIntent::Background(color) => self.twinkle.set_background(color),
            TwinkleIntent::Waveform(waveform) => self.twinkle.set_waveform(waveform),
            TwinkleIntent::Cooling(enabled) => self.twinkle.set_cooling(enabled),
            TwinkleIntent::SelectPalette(id) => self.palettes.select(id.palette(), now),
            TwinkleIntent::NextPalette => self.palettes.advance(now),
            TwinkleIntent::Brightness(brightness) => self.filters.brightness.set(brightness),
        }
    }
}

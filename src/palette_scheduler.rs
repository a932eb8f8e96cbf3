//! Palette rotation and cross-fading
//!
//! Two independent cadences run off the same clock: a slow one that picks
//! the next target palette from the catalog, and a fast one that moves the
//! current palette a small step toward the target.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::palette::{Palette, PaletteBlendStep, PaletteCatalog};

/// Default time each palette stays selected
pub const DEFAULT_PALETTE_PERIOD: Duration = Duration::from_secs(20);

/// Default interval between blend steps
pub const DEFAULT_BLEND_INTERVAL: Duration = Duration::from_millis(10);

/// Palette schedule timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteScheduleConfig {
    /// How long each catalog palette stays the target
    pub palette_period: Duration,
    /// Interval between blend steps
    pub blend_interval: Duration,
    /// Size of one blend step
    pub blend_step: PaletteBlendStep,
    /// Fade in from black instead of starting on the first palette
    pub start_from_black: bool,
}

impl Default for PaletteScheduleConfig {
    fn default() -> Self {
        Self {
            palette_period: DEFAULT_PALETTE_PERIOD,
            blend_interval: DEFAULT_BLEND_INTERVAL,
            blend_step: PaletteBlendStep::default(),
            start_from_black: false,
        }
    }
}

/// Owner of the current and target palettes
///
/// The scheduler is the only writer of palette state; renderers read
/// [`PaletteScheduler::current`].
#[derive(Debug, Clone)]
pub struct PaletteScheduler {
    config: PaletteScheduleConfig,
    catalog: PaletteCatalog,
    current: Palette,
    target: Palette,
    last_advance: Option<Instant>,
    last_blend: Option<Instant>,
}

impl PaletteScheduler {
    pub fn new(mut catalog: PaletteCatalog, config: PaletteScheduleConfig) -> Self {
        let target = *catalog.advance();
        let current = if config.start_from_black {
            Palette::default()
        } else {
            target
        };

        Self {
            config,
            catalog,
            current,
            target,
            last_advance: None,
            last_blend: None,
        }
    }

    /// Palette twinkles are colored from
    pub const fn current(&self) -> &Palette {
        &self.current
    }

    /// Palette the current one is fading toward
    pub const fn target(&self) -> &Palette {
        &self.target
    }

    pub const fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Whether the current palette has not yet reached the target
    pub fn is_transitioning(&self) -> bool {
        self.current != self.target
    }

    /// Run the advance and blend cadences for this frame
    ///
    /// The first call only arms both timers.
    pub fn tick(&mut self, now: Instant) {
        let (Some(last_advance), Some(last_blend)) = (self.last_advance, self.last_blend) else {
            self.last_advance = Some(now);
            self.last_blend = Some(now);
            return;
        };

        if now.saturating_duration_since(last_advance) >= self.config.palette_period {
            self.advance(now);
        }

        if now.saturating_duration_since(last_blend) >= self.config.blend_interval {
            self.current.blend_toward(&self.target, self.config.blend_step);
            self.last_blend = Some(now);
        }
    }

    /// Select the next catalog palette as target and restart its period
    pub fn advance(&mut self, now: Instant) {
        self.target = *self.catalog.advance();
        self.last_advance = Some(now);
        #[cfg(feature = "esp32-log")]
        println!(
            "[PaletteScheduler.advance] target palette {:?} of {}",
            self.catalog.cursor(),
            self.catalog.len()
        );
    }

    /// Fade toward `palette` and hold it for a full period
    ///
    /// The catalog cursor follows when `palette` is part of the rotation,
    /// so the next advance continues after it.
    pub fn select(&mut self, palette: &Palette, now: Instant) {
        if let Some(index) = self.catalog.position(palette) {
            let _ = self.catalog.jump_to(index);
        }
        self.target = *palette;
        self.last_advance = Some(now);
        #[cfg(feature = "esp32-log")]
        println!(
            "[PaletteScheduler.select] target palette {:?}",
            self.catalog.cursor()
        );
    }

    /// Replace the current palette with the target immediately
    pub fn finish_transition(&mut self) {
        self.current = self.target;
    }
}

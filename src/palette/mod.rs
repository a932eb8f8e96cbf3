//! 16-entry color palettes
//!
//! A palette is a cyclic gradient addressed by an 8-bit index: the high
//! nibble selects one of the 16 entries, the low nibble is the position
//! between that entry and the next one.

mod catalog;
mod presets;

pub use catalog::{MAX_PALETTES, PaletteCatalog};
pub use presets::{
    BLUE_WHITE, CLASSIC_C9, DEFAULT_ROTATION, FAIRY_LIGHT, PARTY_COLORS, PaletteId,
    RAINBOW_COLORS, RED_GREEN_WHITE, RED_WHITE, SNOW,
};

use crate::{
    color::{BLACK, Rgb, rgb_from_u32},
    math8::scale8,
};

/// Number of entries in a palette
pub const PALETTE_SIZE: usize = 16;

/// How a lookup treats the low nibble of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteBlend {
    /// Always use the entry selected by the high nibble
    #[default]
    NoBlend,
    /// Crossfade toward the next entry by the low nibble
    LinearBlend,
}

/// How far one blend tick moves the current palette toward the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteBlendStep {
    /// Move every channel by `amount`/256 of its remaining distance,
    /// at least one step per tick
    Fraction(u8),
    /// Walk channels in order, nudging each differing one, and stop after
    /// this many channels have changed
    MaxChanges(u8),
}

impl Default for PaletteBlendStep {
    fn default() -> Self {
        Self::Fraction(12)
    }
}

/// 16-entry gradient palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::solid(BLACK)
    }
}

impl Palette {
    pub const fn new(entries: [Rgb; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Build a palette from `0xRRGGBB` codes
    pub const fn from_u32(codes: [u32; PALETTE_SIZE]) -> Self {
        let mut entries = [BLACK; PALETTE_SIZE];
        let mut i = 0;
        while i < PALETTE_SIZE {
            entries[i] = rgb_from_u32(codes[i]);
            i += 1;
        }
        Self { entries }
    }

    /// Palette with every entry set to `color`
    pub const fn solid(color: Rgb) -> Self {
        Self {
            entries: [color; PALETTE_SIZE],
        }
    }

    pub const fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Look up `index` and scale the result by `brightness`
    #[allow(clippy::cast_lossless)]
    pub fn color_at(&self, index: u8, brightness: u8, blend: PaletteBlend) -> Rgb {
        let hi4 = index >> 4;
        let lo4 = index & 0x0F;
        let entry = self.entries[hi4 as usize];

        let color = if lo4 != 0 && blend == PaletteBlend::LinearBlend {
            let next = self.entries[((hi4 + 1) & 0x0F) as usize];
            let f2 = lo4 << 4;
            let f1 = 255 - f2;
            Rgb {
                r: scale8(entry.r, f1) + scale8(next.r, f2),
                g: scale8(entry.g, f1) + scale8(next.g, f2),
                b: scale8(entry.b, f1) + scale8(next.b, f2),
            }
        } else {
            entry
        };

        match brightness {
            255 => color,
            0 => BLACK,
            brightness => {
                // Bias by one so that 254 maps channels back onto themselves
                let scale = brightness + 1;
                Rgb {
                    r: scale8(color.r, scale),
                    g: scale8(color.g, scale),
                    b: scale8(color.b, scale),
                }
            }
        }
    }

    /// Move this palette one step toward `target`
    ///
    /// Returns `true` if any channel changed. Once the palettes are equal
    /// every further call is a no-op.
    pub fn blend_toward(&mut self, target: &Palette, step: PaletteBlendStep) -> bool {
        match step {
            PaletteBlendStep::Fraction(amount) => self.blend_fraction(target, amount),
            PaletteBlendStep::MaxChanges(max_changes) => {
                self.blend_max_changes(target, max_changes)
            }
        }
    }

    fn blend_fraction(&mut self, target: &Palette, amount: u8) -> bool {
        if amount == 0 {
            return false;
        }

        let mut changed = false;
        for (current, target) in self.entries.iter_mut().zip(target.entries.iter()) {
            for (channel, goal) in [
                (&mut current.r, target.r),
                (&mut current.g, target.g),
                (&mut current.b, target.b),
            ] {
                if *channel == goal {
                    continue;
                }
                let step = scale8(channel.abs_diff(goal), amount).max(1);
                if *channel < goal {
                    *channel += step;
                } else {
                    *channel -= step;
                }
                changed = true;
            }
        }
        changed
    }

    fn blend_max_changes(&mut self, target: &Palette, max_changes: u8) -> bool {
        if max_changes == 0 {
            return false;
        }

        let mut changes: u8 = 0;
        'entries: for (current, target) in self.entries.iter_mut().zip(target.entries.iter()) {
            for (channel, goal) in [
                (&mut current.r, target.r),
                (&mut current.g, target.g),
                (&mut current.b, target.b),
            ] {
                if *channel == goal {
                    continue;
                }
                if *channel < goal {
                    *channel += 1;
                } else {
                    // Falling channels move twice as fast when they can
                    *channel -= 1;
                    if *channel > goal {
                        *channel -= 1;
                    }
                }
                changes += 1;
                if changes >= max_changes {
                    break 'entries;
                }
            }
        }
        changes > 0
    }
}

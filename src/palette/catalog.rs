use heapless::Vec;

use super::{DEFAULT_ROTATION, Palette, PaletteId};
use crate::{error::ConfigError, math8::addmod8};

/// Maximum number of palettes a catalog can hold
pub const MAX_PALETTES: usize = 16;

/// Cursor value before the first advance; wraps to 0 on the next step
const BEFORE_FIRST: u8 = u8::MAX;

const _: () = assert!(DEFAULT_ROTATION.len() <= MAX_PALETTES);

/// Ordered rotation of palettes with a cursor
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    palettes: Vec<&'static Palette, MAX_PALETTES>,
    cursor: u8,
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        let mut palettes = Vec::new();
        for id in DEFAULT_ROTATION {
            let _ = palettes.push(id.palette());
        }
        Self {
            palettes,
            cursor: BEFORE_FIRST,
        }
    }
}

impl PaletteCatalog {
    /// Create a catalog from palette references
    pub fn new(palettes: &[&'static Palette]) -> Result<Self, ConfigError> {
        if palettes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let palettes = Vec::from_slice(palettes)
            .map_err(|()| ConfigError::CatalogTooLarge(palettes.len()))?;

        Ok(Self {
            palettes,
            cursor: BEFORE_FIRST,
        })
    }

    /// Create a catalog from built-in palette ids
    pub fn from_ids(ids: &[PaletteId]) -> Result<Self, ConfigError> {
        if ids.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut palettes = Vec::new();
        for id in ids {
            palettes
                .push(id.palette())
                .map_err(|_| ConfigError::CatalogTooLarge(ids.len()))?;
        }

        Ok(Self {
            palettes,
            cursor: BEFORE_FIRST,
        })
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always `false`: construction rejects empty catalogs
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Index of the last selected palette, `None` before the first advance
    pub fn cursor(&self) -> Option<usize> {
        if self.cursor == BEFORE_FIRST {
            None
        } else {
            Some(usize::from(self.cursor))
        }
    }

    /// Step the cursor and return the palette it lands on
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self) -> &'static Palette {
        self.cursor = addmod8(self.cursor, 1, self.palettes.len() as u8);
        self.palettes[usize::from(self.cursor)]
    }

    /// Move the cursor to `index` and return that palette
    ///
    /// Returns `None` and leaves the cursor untouched if `index` is out of
    /// range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn jump_to(&mut self, index: usize) -> Option<&'static Palette> {
        let palette = *self.palettes.get(index)?;
        self.cursor = index as u8;
        Some(palette)
    }

    /// Position of `palette` in the rotation, compared by contents
    pub fn position(&self, palette: &Palette) -> Option<usize> {
        self.palettes.iter().position(|entry| *entry == palette)
    }
}

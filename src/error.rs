use core::fmt;

/// Rejected renderer configuration
///
/// Raised at construction time; rendering itself has no failure paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The palette catalog has no entries
    EmptyCatalog,
    /// The palette catalog holds more than `MAX_PALETTES` entries
    CatalogTooLarge(usize),
    /// The LED count is zero or exceeds the frame buffer
    InvalidLedCount(usize),
    /// Twinkle speed is above 8
    SpeedOutOfRange(u8),
    /// Twinkle density is above 8
    DensityOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "palette catalog is empty"),
            Self::CatalogTooLarge(len) => write!(f, "palette catalog has {} entries", len),
            Self::InvalidLedCount(count) => write!(f, "invalid LED count {}", count),
            Self::SpeedOutOfRange(speed) => write!(f, "twinkle speed {} is above 8", speed),
            Self::DensityOutOfRange(density) => {
                write!(f, "twinkle density {} is above 8", density)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

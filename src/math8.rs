//! 8-bit fixed-point helpers and brightness waveforms.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Subtract `b` from `a`, clamping at zero
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Add `b` to `a` modulo `m`
///
/// The sum wraps at 256 before reduction, so `addmod8(u8::MAX, 1, m)` is
/// 0 for any `m`. `m` must be non-zero.
#[inline]
pub const fn addmod8(a: u8, b: u8, m: u8) -> u8 {
    a.wrapping_add(b) % m
}

/// Symmetric triangle wave
///
/// Rises 0 → 254 over `0..128`, peaks at 255 for `x = 128`, then falls
/// back to 1 at `x = 255`.
#[inline]
pub const fn triwave8(x: u8) -> u8 {
    if x < 128 {
        x << 1
    } else {
        255 - ((x - 128) << 1)
    }
}

/// Triangle wave with a fast attack and a slower decay
///
/// ```text
///    / \
///   /    \
///  /       \
/// /          \
/// ```
#[inline]
pub const fn attack_decay_wave8(x: u8) -> u8 {
    if x < 86 {
        x * 3
    } else {
        let i = x - 86;
        255 - (i + i / 2)
    }
}


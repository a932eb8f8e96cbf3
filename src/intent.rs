//! Runtime tuning requests
//!
//! Intents are queued from any context (tasks, interrupts) on a bounded
//! channel guarded by `critical-section`, and drained by the renderer at
//! the start of each frame. Rendering state is only ever touched from the
//! render call.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{color::Rgb, palette::PaletteId, twinkle::Waveform};

/// A requested change to the running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinkleIntent {
    /// Twinkle speed, clamped to 0..=8
    Speed(u8),
    /// Twinkle density, clamped to 0..=8
    Density(u8),
    /// Background color for unlit pixels
    Background(Rgb),
    /// Brightness curve
    Waveform(Waveform),
    /// Toggle incandescent cooling
    Cooling(bool),
    /// Fade to a built-in palette and hold it for a full period
    SelectPalette(PaletteId),
    /// Fade to the next catalog palette now
    NextPalette,
    /// Master output brightness
    Brightness(u8),
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded intent queue, safe to share between tasks and interrupts.
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<TwinkleIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    ///
    /// Only the renderer should drain the queue.
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    fn push(&self, intent: TwinkleIntent) -> Result<(), TrySendError<TwinkleIntent>> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    fn pop(&self) -> Result<TwinkleIntent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Queue an intent
    ///
    /// Returns `Err(TrySendError(intent))` if the channel is full.
    pub fn try_send(&self, intent: TwinkleIntent) -> Result<(), TrySendError<TwinkleIntent>> {
        self.channel.push(intent)
    }
}

/// Receiving half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    /// Take the oldest queued intent
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<TwinkleIntent, TryReceiveError> {
        self.channel.pop()
    }
}

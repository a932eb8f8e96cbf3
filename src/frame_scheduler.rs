//! Fixed-rate frame pacing
//!
//! The scheduler only computes deadlines; sleeping is left to the caller.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Renderer};

pub const DEFAULT_FPS: u32 = 50;

pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    pub next_deadline: Instant,
    /// Zero when the frame ran late
    pub sleep_duration: Duration,
}

/// Drives a [`Renderer`] into an [`OutputDriver`] at a steady frame rate
///
/// ```ignore
/// let mut frames = FrameScheduler::new(renderer, strip);
/// loop {
///     let result = frames.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Scheduler running at [`DEFAULT_FPS`]
    pub fn new(renderer: Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render and write one frame
    ///
    /// More than two frames behind, the schedule restarts from `now`
    /// rather than bursting to catch up.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &self.renderer
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

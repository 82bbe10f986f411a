//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.
//!
//! The scheduler also advances the animation frame counter at the tempo
//! implied by the settings: one beat scrolls the base index across the whole
//! strip, so the step rate is `bpm * led_count * resolution / 60` per second.
//! Changing resolution therefore adds interpolation phases without changing
//! the traversal speed.

use embassy_time::{Duration, Instant};

use crate::renderer::Renderer;
use crate::settings::clamp_bpm;
use crate::{MAX_VIRTUAL_PIXELS, OutputDriver};

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Step-rate denominator: milliseconds per minute times the milli-BPM scale.
const STEP_DENOM: u64 = 60_000_000;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Advances the animation frame counter at the BPM-derived rate
/// - Calls the renderer and output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const CONTROL_CHANNEL_SIZE: usize,
    const PATTERN_CAP: usize = MAX_VIRTUAL_PIXELS,
> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP>,
    next_frame: Instant,
    frame_duration: Duration,
    last_tick: Option<Instant>,
    frame_counter: u64,
    /// Fractional animation steps carried between ticks, scaled by `STEP_DENOM`
    step_carry: u64,
}

impl<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const CONTROL_CHANNEL_SIZE: usize,
    const PATTERN_CAP: usize,
> FrameScheduler<'a, O, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (90 FPS) for frame timing.
    pub fn new(
        renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP>,
        driver: O,
    ) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
            last_tick: None,
            frame_counter: 0,
            step_carry: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Advances the animation frame counter from the elapsed wall time
    /// 2. Applies drift correction if we've fallen too far behind
    /// 3. Renders the current frame and writes it to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let elapsed_ms = match self.last_tick {
            Some(prev) if now.as_millis() > prev.as_millis() => {
                now.as_millis() - prev.as_millis()
            }
            _ => 0,
        };
        self.last_tick = Some(now);
        self.advance_frames(elapsed_ms);

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        // Render and output
        let frame = self.renderer.render(self.frame_counter);
        self.output.write(frame);

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Advance the frame counter by the steps owed for `elapsed_ms`.
    ///
    /// Integer fixed-point: the remainder below one step is carried to the
    /// next tick, so slow tempos never lose steps to truncation.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn advance_frames(&mut self, elapsed_ms: u64) {
        if elapsed_ms == 0 {
            return;
        }

        let settings = self.renderer.settings();
        let led_count = self.renderer.layout().led_count as u64;
        let resolution = u64::from(settings.resolution.max(1));
        let bpm_milli = (clamp_bpm(settings.bpm) * 1000.0) as u64;

        let rate = bpm_milli * led_count * resolution;
        let total = elapsed_ms * rate + self.step_carry;
        self.frame_counter = self.frame_counter.wrapping_add(total / STEP_DENOM);
        self.step_carry = total % STEP_DENOM;
    }

    /// Current animation frame counter.
    pub const fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(
        &mut self,
    ) -> &mut Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP> {
        &mut self.renderer
    }
}

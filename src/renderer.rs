//! Render orchestration
//!
//! The renderer owns the settings, the strip layout, the wave pattern and a
//! fixed-capacity frame buffer. Each call to [`Renderer::render`] drains
//! pending control intents, rebuilds the pattern when needed, maps the frame
//! and applies brightness. The pattern buffer is written and read only from
//! this call path, so no locking is needed around its replacement.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::control::{ControlProcessor, ControlReceiver};
use crate::filter::apply_brightness;
use crate::layout::StripLayout;
use crate::mapper::map_frame;
use crate::palette;
use crate::pattern::{MAX_VIRTUAL_PIXELS, WavePattern};
use crate::settings::RenderSettings;

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct ComposerConfig {
    pub layout: StripLayout,
    pub settings: RenderSettings,
}

/// Wave renderer - the main orchestrator
pub struct Renderer<
    'a,
    const MAX_LEDS: usize,
    const CONTROL_CHANNEL_SIZE: usize,
    const PATTERN_CAP: usize = MAX_VIRTUAL_PIXELS,
> {
    // External dependencies and configuration
    control: ControlProcessor<'a, CONTROL_CHANNEL_SIZE>,
    settings: RenderSettings,
    layout: StripLayout,

    // Internal state
    pattern: WavePattern<PATTERN_CAP>,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize, const PATTERN_CAP: usize>
    Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE, PATTERN_CAP>
{
    /// Create a new renderer with a control channel receiver.
    ///
    /// The pattern starts absent and is built lazily on the first frame.
    pub fn new(intents: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>, config: &ComposerConfig) -> Self {
        Self {
            control: ControlProcessor::new(intents),
            settings: config.settings,
            layout: config.layout,
            pattern: WavePattern::new(),
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this with a monotonically
    /// increasing frame counter; wrapping is fine since only modular
    /// arithmetic against the pattern length is used.
    pub fn render(&mut self, frame: u64) -> &[Rgb] {
        self.process_intents();

        if self.pattern.is_absent() {
            self.rebuild_pattern();
        }

        let led_count = self.layout.led_count.min(MAX_LEDS);
        let out = &mut self.frame_buffer[..led_count];

        if self.pattern.is_absent() {
            // Still nothing usable after the lazy rebuild; show black
            out.fill(Rgb::default());
        } else {
            map_frame(
                self.pattern.colors(),
                &self.layout,
                frame,
                self.settings.resolution,
                out,
            );
            apply_brightness(out, self.settings.brightness);
        }

        &self.frame_buffer[..led_count]
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        let effects = self
            .control
            .process_pending(&mut self.settings, &mut self.layout);

        if effects.rebuild_needed {
            self.rebuild_pattern();
        }
    }

    /// Regenerate the wave pattern from the current parameters
    fn rebuild_pattern(&mut self) {
        let palette = palette::predefined(self.settings.palette_index);
        self.pattern.rebuild(
            &self.layout,
            palette,
            self.settings.wave_length_scale,
            self.settings.resolution,
            self.settings.palette_blend,
        );

        #[cfg(feature = "esp32-log")]
        if self.pattern.is_absent() {
            println!("wave pattern rebuild failed, rendering black");
        } else {
            println!("wave pattern rebuilt: {} virtual pixels", self.pattern.len());
        }
    }

    /// Current animation settings
    pub const fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Current strip geometry
    pub const fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// The synthesized pattern, for inspection
    pub const fn pattern(&self) -> &WavePattern<PATTERN_CAP> {
        &self.pattern
    }
}

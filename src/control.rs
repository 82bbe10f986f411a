//! Control intent processing
//!
//! Converts external control updates (an HTTP handler, a knob poller) into
//! settings and layout changes for the renderer. Out-of-range values are
//! clamped, never rejected. Changes that affect the virtual pattern's length
//! or content flag a rebuild, which the renderer performs synchronously on
//! the render context.

use crate::channel::{Channel, Receiver, Sender};
use crate::layout::{PartitionMode, StripLayout};
use crate::palette::PaletteBlend;
use crate::settings::{RenderSettings, clamp_bpm, clamp_wave_length_scale};

/// A partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsIntent {
    pub brightness: Option<u8>,
    pub bpm: Option<f32>,
    pub wave_length_scale: Option<f32>,
    pub resolution: Option<u32>,
    pub reversed: Option<bool>,
    pub partitions: Option<usize>,
    pub partition_mode: Option<PartitionMode>,
    pub palette_index: Option<u8>,
    pub palette_blend: Option<PaletteBlend>,
}

/// Intent to change the animation
#[derive(Debug, Clone, Copy)]
pub enum ControlIntent {
    /// Apply a partial settings update
    Settings(SettingsIntent),
    /// Regenerate the pattern content, e.g. after an external palette table
    /// was swapped in place
    RebuildPattern,
}

/// Side effects the renderer must apply after draining intents
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlEffects {
    /// The virtual pattern must be resized or refilled
    pub rebuild_needed: bool,
}

/// Type alias for the control sender
pub type ControlSender<'a, const SIZE: usize> = Sender<'a, ControlIntent, SIZE>;

/// Type alias for the control receiver
pub type ControlReceiver<'a, const SIZE: usize> = Receiver<'a, ControlIntent, SIZE>;

/// Type alias for the control channel
pub type ControlChannel<const SIZE: usize> = Channel<ControlIntent, SIZE>;

/// Drains control intents and applies them to settings and layout
pub struct ControlProcessor<'a, const SIZE: usize> {
    intents: ControlReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> ControlProcessor<'a, SIZE> {
    pub const fn new(intents: ControlReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking).
    pub fn process_pending(
        &mut self,
        settings: &mut RenderSettings,
        layout: &mut StripLayout,
    ) -> ControlEffects {
        let mut effects = ControlEffects::default();

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::Settings(update) => {
                    Self::apply_update(settings, layout, &update, &mut effects);
                }
                ControlIntent::RebuildPattern => {
                    effects.rebuild_needed = true;
                }
            }
        }

        effects
    }

    /// Apply one partial update.
    ///
    /// A present sizing or palette field always flags a rebuild, even when the
    /// value is unchanged; the rebuild is idempotent so the redundant case is
    /// harmless.
    fn apply_update(
        settings: &mut RenderSettings,
        layout: &mut StripLayout,
        update: &SettingsIntent,
        effects: &mut ControlEffects,
    ) {
        if let Some(brightness) = update.brightness {
            settings.brightness = brightness;
        }

        if let Some(bpm) = update.bpm {
            settings.bpm = clamp_bpm(bpm);
        }

        if let Some(scale) = update.wave_length_scale {
            settings.wave_length_scale = clamp_wave_length_scale(scale);
            effects.rebuild_needed = true;
        }

        if let Some(resolution) = update.resolution {
            settings.resolution = resolution.max(1);
        }

        if let Some(reversed) = update.reversed {
            layout.reversed = reversed;
        }

        if let Some(partitions) = update.partitions {
            layout.partitions = partitions.max(1);
            effects.rebuild_needed = true;
        }

        if let Some(mode) = update.partition_mode {
            layout.mode = mode;
        }

        if let Some(palette_index) = update.palette_index {
            settings.palette_index = palette_index;
            effects.rebuild_needed = true;
        }

        if let Some(blend) = update.palette_blend {
            settings.palette_blend = blend;
            effects.rebuild_needed = true;
        }
    }
}

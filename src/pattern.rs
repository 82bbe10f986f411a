//! Virtual wave pattern synthesis
//!
//! The wave pattern is a palette-derived color sequence whose length is the
//! canonical section length scaled by the wavelength ratio. A scale below 1
//! tiles the pattern along the strip; a scale above 1 turns the strip into a
//! sliding window over a longer wave. The mapper consumes the buffer
//! read-only; this type is its only writer.

use heapless::Vec;
use libm::roundf;

use crate::color::Rgb;
use crate::layout::StripLayout;
use crate::palette::{Palette16, PaletteBlend};

/// Upper bound on the virtual pattern length (~9 KB of color data).
pub const MAX_VIRTUAL_PIXELS: usize = 3000;

/// Owned virtual pattern buffer.
///
/// A populated length of 0 is the "absent" sentinel: the initial state, and
/// the state after a rebuild whose target length exceeded `CAP`. Consumers
/// must render black while the pattern is absent.
#[derive(Debug, Clone)]
pub struct WavePattern<const CAP: usize = MAX_VIRTUAL_PIXELS> {
    colors: Vec<Rgb, CAP>,
}

impl<const CAP: usize> WavePattern<CAP> {
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// No usable pattern is available
    pub fn is_absent(&self) -> bool {
        self.colors.is_empty()
    }

    /// Read-only view of the synthesized colors
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Target virtual length for the given layout and scale.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn target_len(layout: &StripLayout, wave_length_scale: f32) -> usize {
        // Non-positive (or NaN) scales fall back to 1.0
        let scale = if wave_length_scale > 0.0 {
            wave_length_scale
        } else {
            1.0
        };

        let independent = layout.independent_len();
        let raw = roundf(independent as f32 * scale);
        let target = if raw < 1.0 { 1 } else { raw as usize };
        target.min(MAX_VIRTUAL_PIXELS)
    }

    /// Resize and repopulate the pattern from the palette.
    ///
    /// When only the palette changed the buffer is refilled in place; when
    /// the target length changed it is resized first. If `CAP` cannot hold
    /// the target length the buffer is cleared and the pattern left absent.
    ///
    /// `resolution` only affects the mapper; it is accepted here so rebuild
    /// triggers share one signature.
    pub fn rebuild(
        &mut self,
        layout: &StripLayout,
        palette: &Palette16,
        wave_length_scale: f32,
        _resolution: u32,
        blend: PaletteBlend,
    ) {
        let target = Self::target_len(layout, wave_length_scale);

        if target != self.colors.len() {
            self.colors.clear();
            if self.colors.resize(target, Rgb::default()).is_err() {
                return;
            }
        }

        // Map each virtual index linearly into the 256-position gradient.
        let len = self.colors.len();
        for (i, slot) in self.colors.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let position = ((i * 256) / len) as u8;
            *slot = palette.sample(position, 255, blend);
        }
    }
}

impl<const CAP: usize> Default for WavePattern<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

//! Runtime animation settings
//!
//! Everything here is mutable at runtime through the control channel; the
//! strip geometry lives separately in [`crate::layout::StripLayout`].

use crate::palette::PaletteBlend;

/// Wavelength scale bounds accepted from external control input.
pub const WAVE_LENGTH_SCALE_MIN: f32 = 0.075;
pub const WAVE_LENGTH_SCALE_MAX: f32 = 5.0;

/// Tempo bounds accepted from external control input.
pub const BPM_MIN: f32 = 0.01;
pub const BPM_MAX: f32 = 240.0;

/// Animation parameters read each frame
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Output brightness (255 = unchanged)
    pub brightness: u8,
    /// Animation tempo; one beat scrolls the pattern across the whole strip
    pub bpm: f32,
    /// Virtual pattern length relative to one canonical section
    pub wave_length_scale: f32,
    /// Interpolation sub-steps per base index advance (>= 1)
    pub resolution: u32,
    /// Index into the predefined palette table
    pub palette_index: u8,
    /// Blend mode used when sampling the palette
    pub palette_blend: PaletteBlend,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            brightness: 255,
            bpm: 18.0,
            wave_length_scale: 1.8,
            resolution: 3,
            palette_index: 6,
            palette_blend: PaletteBlend::LinearBlend,
        }
    }
}

/// Clamp an external wavelength scale into the accepted range.
pub fn clamp_wave_length_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(WAVE_LENGTH_SCALE_MIN, WAVE_LENGTH_SCALE_MAX)
    } else {
        1.0
    }
}

/// Clamp an external tempo into the accepted range.
pub fn clamp_bpm(bpm: f32) -> f32 {
    if bpm.is_finite() {
        bpm.clamp(BPM_MIN, BPM_MAX)
    } else {
        BPM_MIN
    }
}

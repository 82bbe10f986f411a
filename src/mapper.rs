//! Frame mapping
//!
//! Converts the frame counter into a position within the virtual pattern and
//! writes one interpolated color per physical pixel. The base index advances
//! by one every `resolution` frames, so one full traversal of the strip takes
//! `led_count * resolution` frames regardless of resolution; higher
//! resolutions only add interpolation phases between neighbouring virtual
//! pixels.

use crate::color::{Rgb, blend_colors};
use crate::layout::StripLayout;

/// Frame counter decomposed against a pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePhase {
    /// Base index into the virtual pattern, wrapped to `[0, pattern_len)`
    pub base_shift: usize,
    /// Interpolation weight towards the next virtual pixel (0-255)
    pub blend: u8,
}

/// Split a frame counter into base shift and sub-step blend weight.
pub fn frame_phase(frame: u64, resolution: u32, pattern_len: usize) -> FramePhase {
    let resolution = u64::from(resolution.max(1));
    let step = frame / resolution;
    let phase = frame % resolution;

    #[allow(clippy::cast_possible_truncation)]
    let blend = ((255 * phase) / resolution) as u8;
    #[allow(clippy::cast_possible_truncation)]
    let base_shift = (step % pattern_len.max(1) as u64) as usize;

    FramePhase { base_shift, blend }
}

/// Write one frame of the scrolling pattern into `out`.
///
/// Every pixel samples the virtual pattern at its canonical section position
/// plus the frame's base shift, wrapping at the pattern length. With
/// `resolution == 1` the sample is exact; otherwise it is a linear blend
/// towards the next virtual pixel. An empty pattern renders black.
pub fn map_frame(
    pattern: &[Rgb],
    layout: &StripLayout,
    frame: u64,
    resolution: u32,
    out: &mut [Rgb],
) {
    if pattern.is_empty() {
        out.fill(Rgb::default());
        return;
    }

    let resolution = resolution.max(1);
    let FramePhase { base_shift, blend } = frame_phase(frame, resolution, pattern.len());
    let geometry = layout.geometry();

    for (pixel, led) in out.iter_mut().enumerate() {
        let canonical = geometry.canonical_index(pixel);
        let index = (base_shift + canonical) % pattern.len();

        *led = if resolution == 1 {
            pattern[index]
        } else {
            let next = (index + 1) % pattern.len();
            blend_colors(pattern[index], pattern[next], blend)
        };
    }
}

//! Frame post-processing

use crate::color::Rgb;
use crate::math8::scale8;

/// Scale every channel of the frame by `level` (255 = unchanged).
///
/// Applied after mapping so the virtual pattern keeps full-brightness colors
/// and brightness changes never trigger a rebuild.
pub fn apply_brightness(frame: &mut [Rgb], level: u8) {
    if level == 255 {
        return;
    }
    for led in frame {
        led.r = scale8(led.r, level);
        led.g = scale8(led.g, level);
        led.b = scale8(led.b, level);
    }
}

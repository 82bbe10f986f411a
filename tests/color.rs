mod tests {
    use palette_wave_composer::color::{Rgb, blend_colors, rgb_from_u32};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(rgb_from_u32(0x0000FF), BLUE);
        assert_eq!(
            rgb_from_u32(0x123456),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }
}

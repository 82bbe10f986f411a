mod tests {
    use palette_wave_composer::layout::{PartitionMode, StripLayout};
    use palette_wave_composer::palette::{LAVA, PaletteBlend, RAINBOW};
    use palette_wave_composer::pattern::{MAX_VIRTUAL_PIXELS, WavePattern};

    const BLEND: PaletteBlend = PaletteBlend::LinearBlend;

    #[test]
    fn test_length_is_scaled_strip_length() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(100), &RAINBOW, 1.8, 3, BLEND);
        assert_eq!(pattern.len(), 180);

        pattern.rebuild(&StripLayout::new(100), &RAINBOW, 0.5, 3, BLEND);
        assert_eq!(pattern.len(), 50);
    }

    #[test]
    fn test_length_uses_one_section_when_partitioned() {
        let layout = StripLayout {
            led_count: 10,
            partitions: 3,
            mode: PartitionMode::Folded,
            reversed: false,
        };
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&layout, &RAINBOW, 1.0, 1, BLEND);
        assert_eq!(pattern.len(), 4);
    }

    #[test]
    fn test_length_has_floor_of_one() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(10), &RAINBOW, 0.01, 1, BLEND);
        assert_eq!(pattern.len(), 1);
    }

    #[test]
    fn test_non_positive_scale_falls_back_to_one() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(10), &RAINBOW, 0.0, 1, BLEND);
        assert_eq!(pattern.len(), 10);

        pattern.rebuild(&StripLayout::new(10), &RAINBOW, -2.5, 1, BLEND);
        assert_eq!(pattern.len(), 10);
    }

    #[test]
    fn test_length_is_capped() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(2000), &RAINBOW, 2.0, 1, BLEND);
        assert_eq!(pattern.len(), MAX_VIRTUAL_PIXELS);
    }

    #[test]
    fn test_resolution_does_not_affect_length() {
        let mut a: WavePattern = WavePattern::new();
        let mut b: WavePattern = WavePattern::new();
        a.rebuild(&StripLayout::new(100), &RAINBOW, 1.8, 1, BLEND);
        b.rebuild(&StripLayout::new(100), &RAINBOW, 1.8, 7, BLEND);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_entries_sample_gradient_positions() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(100), &RAINBOW, 1.8, 3, BLEND);

        let colors = pattern.colors();
        assert_eq!(colors[0], RAINBOW.sample(0, 255, BLEND));
        // Entry i samples floor(i * 256 / len)
        assert_eq!(colors[90], RAINBOW.sample(128, 255, BLEND));
        assert_eq!(colors[179], RAINBOW.sample(254, 255, BLEND));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut a: WavePattern = WavePattern::new();
        let mut b: WavePattern = WavePattern::new();
        a.rebuild(&StripLayout::new(60), &RAINBOW, 1.8, 3, BLEND);
        b.rebuild(&StripLayout::new(60), &RAINBOW, 1.8, 3, BLEND);
        b.rebuild(&StripLayout::new(60), &RAINBOW, 1.8, 3, BLEND);
        assert_eq!(a.len(), b.len());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn test_palette_change_refills_in_place() {
        let mut pattern: WavePattern = WavePattern::new();
        pattern.rebuild(&StripLayout::new(60), &RAINBOW, 1.0, 1, BLEND);
        let before = pattern.colors()[0];

        pattern.rebuild(&StripLayout::new(60), &LAVA, 1.0, 1, BLEND);
        assert_eq!(pattern.len(), 60);
        assert_ne!(pattern.colors()[0], before);
        assert_eq!(pattern.colors()[0], LAVA.sample(0, 255, BLEND));
    }

    #[test]
    fn test_capacity_exhaustion_leaves_pattern_absent() {
        let mut pattern: WavePattern<64> = WavePattern::new();
        assert!(pattern.is_absent());

        pattern.rebuild(&StripLayout::new(100), &RAINBOW, 1.0, 1, BLEND);
        assert!(pattern.is_absent());
        assert_eq!(pattern.len(), 0);
    }

    #[test]
    fn test_failed_rebuild_clears_previous_content() {
        let mut pattern: WavePattern<64> = WavePattern::new();
        pattern.rebuild(&StripLayout::new(50), &RAINBOW, 1.0, 1, BLEND);
        assert_eq!(pattern.len(), 50);

        pattern.rebuild(&StripLayout::new(100), &RAINBOW, 1.0, 1, BLEND);
        assert!(pattern.is_absent());

        // The next fitting rebuild recovers
        pattern.rebuild(&StripLayout::new(50), &RAINBOW, 1.0, 1, BLEND);
        assert_eq!(pattern.len(), 50);
    }
}

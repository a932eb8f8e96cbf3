mod tests {
    use embassy_time::{Duration, Instant};
    use twinkle_fox::palette::{
        BLUE_WHITE, CLASSIC_C9, Palette, PaletteBlendStep, PaletteCatalog, PaletteId,
        RAINBOW_COLORS, RED_GREEN_WHITE, RED_WHITE, SNOW,
    };
    use twinkle_fox::palette_scheduler::{PaletteScheduleConfig, PaletteScheduler};

    fn scheduler(config: PaletteScheduleConfig) -> PaletteScheduler {
        PaletteScheduler::new(PaletteCatalog::default(), config)
    }

    #[test]
    fn test_starts_on_first_palette() {
        let palettes = scheduler(PaletteScheduleConfig::default());
        assert_eq!(*palettes.current(), RED_GREEN_WHITE);
        assert_eq!(*palettes.target(), RED_GREEN_WHITE);
        assert_eq!(palettes.catalog().cursor(), Some(0));
        assert!(!palettes.is_transitioning());
    }

    #[test]
    fn test_start_from_black() {
        let palettes = scheduler(PaletteScheduleConfig {
            start_from_black: true,
            ..PaletteScheduleConfig::default()
        });
        assert_eq!(*palettes.current(), Palette::default());
        assert_eq!(*palettes.target(), RED_GREEN_WHITE);
        assert!(palettes.is_transitioning());
    }

    #[test]
    fn test_advances_after_palette_period() {
        let mut palettes = scheduler(PaletteScheduleConfig::default());
        palettes.tick(Instant::from_millis(0));
        palettes.tick(Instant::from_millis(19_990));
        assert_eq!(*palettes.target(), RED_GREEN_WHITE);

        palettes.tick(Instant::from_millis(20_000));
        assert_eq!(*palettes.target(), BLUE_WHITE);
        assert_eq!(palettes.catalog().cursor(), Some(1));
        // The blend step in the same tick already moved the current palette
        assert_ne!(*palettes.current(), RED_GREEN_WHITE);
        assert_ne!(*palettes.current(), BLUE_WHITE);

        palettes.tick(Instant::from_millis(39_990));
        assert_eq!(*palettes.target(), BLUE_WHITE);
        palettes.tick(Instant::from_millis(40_000));
        assert_eq!(*palettes.target(), *PaletteId::Rainbow.palette());
    }

    #[test]
    fn test_blend_waits_for_interval() {
        let mut palettes = scheduler(PaletteScheduleConfig {
            start_from_black: true,
            ..PaletteScheduleConfig::default()
        });
        palettes.tick(Instant::from_millis(0));
        assert_eq!(*palettes.current(), Palette::default());

        palettes.tick(Instant::from_millis(5));
        assert_eq!(*palettes.current(), Palette::default());

        palettes.tick(Instant::from_millis(10));
        assert_ne!(*palettes.current(), Palette::default());
    }

    #[test]
    fn test_cross_fade_completes_within_period() {
        let mut palettes = scheduler(PaletteScheduleConfig {
            start_from_black: true,
            ..PaletteScheduleConfig::default()
        });
        for ms in (0..5_000).step_by(10) {
            palettes.tick(Instant::from_millis(ms));
        }
        assert!(!palettes.is_transitioning());
        assert_eq!(*palettes.current(), RED_GREEN_WHITE);
    }

    #[test]
    fn test_three_palette_rotation() {
        let mut palettes = PaletteScheduler::new(
            PaletteCatalog::new(&[&BLUE_WHITE, &RED_WHITE, &SNOW]).unwrap(),
            PaletteScheduleConfig::default(),
        );
        assert_eq!(*palettes.current(), BLUE_WHITE);
        assert_eq!(*palettes.target(), BLUE_WHITE);
        assert_eq!(palettes.catalog().cursor(), Some(0));

        palettes.tick(Instant::from_millis(0));
        palettes.tick(Instant::from_millis(20_000));
        assert_eq!(*palettes.target(), RED_WHITE);
        palettes.tick(Instant::from_millis(40_000));
        assert_eq!(*palettes.target(), SNOW);
        palettes.tick(Instant::from_millis(60_000));
        assert_eq!(*palettes.target(), BLUE_WHITE);
        assert_eq!(palettes.catalog().cursor(), Some(0));
    }

    #[test]
    fn test_custom_cadence() {
        let mut palettes = PaletteScheduler::new(
            PaletteCatalog::from_ids(&[PaletteId::Snow, PaletteId::ClassicC9]).unwrap(),
            PaletteScheduleConfig {
                palette_period: Duration::from_millis(100),
                blend_interval: Duration::from_millis(1),
                blend_step: PaletteBlendStep::MaxChanges(48),
                start_from_black: false,
            },
        );
        assert_eq!(*palettes.current(), SNOW);
        palettes.tick(Instant::from_millis(0));
        palettes.tick(Instant::from_millis(100));
        assert_eq!(*palettes.target(), CLASSIC_C9);
        palettes.tick(Instant::from_millis(200));
        assert_eq!(*palettes.target(), SNOW);
    }

    #[test]
    fn test_select_moves_catalog_cursor() {
        let mut palettes = scheduler(PaletteScheduleConfig::default());
        palettes.tick(Instant::from_millis(0));
        palettes.select(&SNOW, Instant::from_millis(15_000));
        assert_eq!(*palettes.target(), SNOW);
        assert_eq!(palettes.catalog().cursor(), Some(6));

        // The selection holds for a full period from when it was made
        palettes.tick(Instant::from_millis(20_000));
        assert_eq!(*palettes.target(), SNOW);
        palettes.tick(Instant::from_millis(35_000));
        assert_eq!(*palettes.target(), CLASSIC_C9);
    }

    #[test]
    fn test_select_outside_catalog() {
        let mut palettes = PaletteScheduler::new(
            PaletteCatalog::from_ids(&[PaletteId::BlueWhite, PaletteId::Snow]).unwrap(),
            PaletteScheduleConfig::default(),
        );
        palettes.select(&RAINBOW_COLORS, Instant::from_millis(0));
        assert_eq!(*palettes.target(), RAINBOW_COLORS);
        assert_eq!(palettes.catalog().cursor(), Some(0));

        palettes.advance(Instant::from_millis(1));
        assert_eq!(*palettes.target(), SNOW);
    }

    #[test]
    fn test_finish_transition() {
        let mut palettes = scheduler(PaletteScheduleConfig::default());
        palettes.advance(Instant::from_millis(0));
        assert!(palettes.is_transitioning());
        palettes.finish_transition();
        assert_eq!(*palettes.current(), BLUE_WHITE);
        assert!(!palettes.is_transitioning());
    }
}

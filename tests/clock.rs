mod tests {
    use twinkle_fox::clock::{DEFAULT_SEED, PixelClock, PixelClockGenerator};

    #[test]
    fn test_first_pixels_from_default_seed() {
        let clocks: Vec<PixelClock> = PixelClockGenerator::new().take(3).collect();
        assert_eq!(
            clocks,
            [
                PixelClock {
                    offset: 10965,
                    speed: 18,
                    salt: 131
                },
                PixelClock {
                    offset: 7997,
                    speed: 10,
                    salt: 137
                },
                PixelClock {
                    offset: 32101,
                    speed: 15,
                    salt: 160
                },
            ]
        );
    }

    #[test]
    fn test_reseeded_generator_repeats() {
        let first: Vec<PixelClock> = PixelClockGenerator::new().take(500).collect();
        let second: Vec<PixelClock> =
            PixelClockGenerator::with_seed(DEFAULT_SEED).take(500).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_other_seed_gives_other_sequence() {
        let first: Vec<PixelClock> = PixelClockGenerator::new().take(8).collect();
        let second: Vec<PixelClock> = PixelClockGenerator::with_seed(42).take(8).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_speed_stays_in_q5_3_range() {
        for clock in PixelClockGenerator::new().take(10_000) {
            assert!((8..=23).contains(&clock.speed), "speed {}", clock.speed);
        }
    }

    #[test]
    fn test_adjusted_clock() {
        let clock = PixelClock {
            offset: 10965,
            speed: 18,
            salt: 131,
        };
        assert_eq!(clock.adjusted(0), 10965);
        assert_eq!(clock.adjusted(1000), 13215);
    }

    #[test]
    fn test_adjusted_clock_wraps() {
        let clock = PixelClock {
            offset: 1,
            speed: 8,
            salt: 0,
        };
        assert_eq!(clock.adjusted(u32::MAX), 0x2000_0000);

        let fast = PixelClock {
            offset: u16::MAX,
            speed: 23,
            salt: 0,
        };
        let expected = (u32::MAX.wrapping_mul(23) >> 3).wrapping_add(65535);
        assert_eq!(fast.adjusted(u32::MAX), expected);
    }
}

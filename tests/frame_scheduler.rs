mod tests {
    use embassy_time::{Duration, Instant};
    use twinkle_fox::filter::GammaFilter;
    use twinkle_fox::{FrameScheduler, IntentChannel, OutputDriver, Renderer, RendererConfig, Rgb};

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_tick_writes_frames_and_paces() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let renderer = Renderer::<32, 4>::new(channel.receiver(), &RendererConfig::new(12)).unwrap();
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        assert_eq!(scheduler.output_mut().frames, 2);
        assert_eq!(scheduler.output_mut().last.len(), 12);
    }

    #[test]
    fn test_tick_skips_backlog_after_stall() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let renderer = Renderer::<32, 4>::new(channel.receiver(), &RendererConfig::new(4)).unwrap();
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(scheduler.renderer().led_count(), 4);
    }

    #[test]
    fn test_gamma_lut_shape() {
        let gamma = GammaFilter::new(2.6);
        assert_eq!(gamma.correct(0), 0);
        assert_eq!(gamma.correct(255), 255);
        for value in 1..=255u8 {
            assert!(gamma.correct(value) >= gamma.correct(value - 1));
            assert!(gamma.correct(value) <= value);
        }
    }
}

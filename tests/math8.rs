mod tests {
    use twinkle_fox::math8::{addmod8, attack_decay_wave8, qsub8, scale8, triwave8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_qsub8() {
        assert_eq!(qsub8(20, 5), 15);
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qsub8(0, 255), 0);
    }

    #[test]
    fn test_addmod8() {
        assert_eq!(addmod8(3, 1, 8), 4);
        assert_eq!(addmod8(7, 1, 8), 0);
        assert_eq!(addmod8(u8::MAX, 1, 8), 0);
        // The "before first" sentinel wraps to 0 for every modulus
        for m in 1..=16 {
            assert_eq!(addmod8(u8::MAX, 1, m), 0);
        }
        assert_eq!(addmod8(250, 10, 7), 4);
    }

    #[test]
    fn test_triwave8_endpoints() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(64), 128);
        assert_eq!(triwave8(127), 254);
        assert_eq!(triwave8(128), 255);
        assert_eq!(triwave8(192), 127);
        assert_eq!(triwave8(255), 1);
    }

    #[test]
    fn test_triwave8_monotonic_halves() {
        for x in 1..128u8 {
            assert!(triwave8(x) > triwave8(x - 1), "rising at {}", x);
        }
        for x in 129..=255u8 {
            assert!(triwave8(x) < triwave8(x - 1), "falling at {}", x);
        }
    }

    #[test]
    fn test_attack_decay_wave8() {
        assert_eq!(attack_decay_wave8(0), 0);
        assert_eq!(attack_decay_wave8(10), 30);
        assert_eq!(attack_decay_wave8(85), 255);
        assert_eq!(attack_decay_wave8(86), 255);
        assert_eq!(attack_decay_wave8(100), 234);
        assert_eq!(attack_decay_wave8(255), 2);
    }
}

mod tests {
    use twinkle_fox::palette::{CLASSIC_C9, DEFAULT_ROTATION, PaletteId, RAINBOW_COLORS};

    #[test]
    fn test_palette_id_names_round_trip() {
        for id in DEFAULT_ROTATION {
            assert_eq!(PaletteId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_palette_id_raw_round_trip() {
        for id in DEFAULT_ROTATION {
            assert_eq!(PaletteId::from_raw(id as u8), Some(id));
        }
        assert_eq!(PaletteId::from_raw(8), None);
    }

    #[test]
    fn test_palette_id_parse() {
        assert_eq!(PaletteId::parse_from_str("classic_c9"), Some(PaletteId::ClassicC9));
        assert_eq!(PaletteId::parse_from_str("fairy_light"), Some(PaletteId::FairyLight));
        assert_eq!(PaletteId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_palette_id_lookup() {
        assert_eq!(*PaletteId::ClassicC9.palette(), CLASSIC_C9);
        assert_eq!(*PaletteId::Rainbow.palette(), RAINBOW_COLORS);
    }

    #[test]
    fn test_fairy_light_dim_entries() {
        let entries = PaletteId::FairyLight.palette().entries();
        assert_eq!(entries[0], twinkle_fox::Rgb::new(0xFF, 0xE4, 0x2D));
        assert_eq!(entries[4], twinkle_fox::Rgb::new(0x7F, 0x72, 0x16));
        assert_eq!(entries[8], twinkle_fox::Rgb::new(0x3F, 0x39, 0x0B));
    }
}

mod tests {
    use perimeter_lights::color::{
        FORWARD_MARKER, RETURN_MARKER, Rgb, glow, gray, rgb_from_u32, rgb_to_u32,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_to_u32(Rgb::new(0x12, 0x34, 0x56)), 0x12_34_56);
    }

    #[test]
    fn test_markers() {
        assert_eq!(FORWARD_MARKER, Rgb::new(255, 0, 0));
        assert_eq!(RETURN_MARKER, Rgb::new(2, 0, 0));
    }

    #[test]
    fn test_glow_occupies_one_channel() {
        assert_eq!(glow(200), Rgb::new(0, 200, 0));
        assert_eq!(rgb_to_u32(glow(8)), 8 << 8);
    }

    #[test]
    fn test_gray() {
        assert_eq!(gray(37), Rgb::new(37, 37, 37));
        assert_eq!(rgb_to_u32(gray(1)), 0x01_01_01);
    }
}

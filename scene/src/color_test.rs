use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn parse_hex_long_form() {
    assert_eq!(Rgb::parse_hex("#1a2B3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
}

#[test]
fn parse_hex_short_form_expands() {
    assert_eq!(Rgb::parse_hex("#f0a"), Some(Rgb::new(0xff, 0x00, 0xaa)));
}

#[test]
fn parse_hex_trims_whitespace() {
    assert_eq!(Rgb::parse_hex("  #000000 "), Some(Rgb::new(0, 0, 0)));
}

#[test]
fn parse_hex_rejects_missing_hash() {
    assert_eq!(Rgb::parse_hex("ff0000"), None);
}

#[test]
fn parse_hex_rejects_bad_digits_and_lengths() {
    assert_eq!(Rgb::parse_hex("#gg0000"), None);
    assert_eq!(Rgb::parse_hex("#ff00"), None);
    assert_eq!(Rgb::parse_hex("#"), None);
}

#[test]
fn to_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb::new(1, 0xab, 0).to_hex(), "#01ab00");
}

#[test]
fn from_u32_unpacks_channels() {
    assert_eq!(Rgb::from_u32(0x00ff_8001), Rgb::new(0xff, 0x80, 0x01));
}

#[test]
fn css_rgba_clamps_alpha() {
    assert_eq!(Rgb::new(10, 20, 30).to_css_rgba(0.5), "rgba(10, 20, 30, 0.500)");
    assert_eq!(Rgb::new(10, 20, 30).to_css_rgba(3.0), "rgba(10, 20, 30, 1.000)");
}

#[test]
fn random_stays_below_limit() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..256 {
        let c = Rgb::random(&mut rng);
        let packed = (u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b);
        assert!(packed < RANDOM_COLOR_LIMIT);
    }
}

#[test]
fn shaded_scales_channels() {
    assert_eq!(Rgb::new(200, 100, 0).shaded(0.5), Rgb::new(100, 50, 0));
    assert_eq!(Rgb::new(200, 100, 0).shaded(2.0), Rgb::new(200, 100, 0));
}

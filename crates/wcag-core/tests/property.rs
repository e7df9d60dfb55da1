use proptest::prelude::*;
use wcag_core::{ColorError, contrast_ratio, hex_to_rgb, relative_luminance};

proptest! {
    #[test]
    fn short_form_matches_expanded_form(digits in "[0-9a-fA-F]{3}") {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(hex_to_rgb(&digits).unwrap(), hex_to_rgb(&expanded).unwrap());
    }

    #[test]
    fn parsed_channels_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("{r:02X}{g:02X}{b:02X}");
        let rgb = hex_to_rgb(&hex).unwrap();
        prop_assert_eq!(rgb.channels(), [r, g, b]);

        let prefixed = format!("#{hex}");
        prop_assert_eq!(hex_to_rgb(&prefixed).unwrap(), rgb);
    }

    #[test]
    fn luminance_stays_in_unit_range(rgb in any::<[u8; 3]>()) {
        let lum = relative_luminance(rgb.map(i64::from)).unwrap();
        prop_assert!((0.0..=1.0).contains(&lum), "luminance {lum} out of range");
    }

    #[test]
    fn ratio_is_symmetric(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
        let ab = contrast_ratio(a.map(i64::from), b.map(i64::from)).unwrap();
        let ba = contrast_ratio(b.map(i64::from), a.map(i64::from)).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn ratio_stays_in_wcag_range(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
        let ratio = contrast_ratio(a.map(i64::from), b.map(i64::from)).unwrap();
        prop_assert!(ratio >= 1.0, "ratio {ratio} below 1");
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio {ratio} above 21");
    }

    #[test]
    fn self_contrast_is_unity(rgb in any::<[u8; 3]>()) {
        let channels = rgb.map(i64::from);
        let ratio = contrast_ratio(channels, channels).unwrap();
        prop_assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_component_is_rejected(
        good in any::<[u8; 3]>(),
        bad in prop_oneof![256_i64..=10_000, -10_000_i64..=-1],
        slot in 0_usize..3,
    ) {
        let mut channels = good.map(i64::from);
        channels[slot] = bad;
        let err = relative_luminance(channels).unwrap_err();
        prop_assert_eq!(err, ColorError::InvalidValue(bad));
    }
}

//! Property-based invariant tests for packed colors.
//!
//! These tests verify:
//!
//! 1. Channel packing round-trips exactly.
//! 2. Six-digit hex formatting/parsing round-trips.
//! 3. `lerp` stays channel-wise between its endpoints.
//! 4. `scale_alpha` never exceeds the original alpha.

use proptest::prelude::*;
use proton_style::Rgba;

proptest! {
    #[test]
    fn channels_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let c = Rgba::rgba(r, g, b, a);
        prop_assert_eq!((c.r(), c.g(), c.b(), c.a()), (r, g, b, a));
    }

    #[test]
    fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        prop_assert_eq!(Rgba::from_hex(&hex), Some(Rgba::rgb(r, g, b)));
    }

    #[test]
    fn lerp_stays_between_endpoints(
        a in any::<u32>().prop_map(Rgba),
        b in any::<u32>().prop_map(Rgba),
        t in 0.0f32..=1.0,
    ) {
        let mid = a.lerp(b, t);
        let between = |m: u8, x: u8, y: u8| m >= x.min(y) && m <= x.max(y);
        prop_assert!(between(mid.r(), a.r(), b.r()));
        prop_assert!(between(mid.g(), a.g(), b.g()));
        prop_assert!(between(mid.b(), a.b(), b.b()));
        prop_assert!(between(mid.a(), a.a(), b.a()));
    }

    #[test]
    fn scale_alpha_never_exceeds_original(c in any::<u32>().prop_map(Rgba), f in -1.0f32..=3.0) {
        let scaled = c.scale_alpha(f);
        prop_assert!(scaled.a() <= c.a());
        prop_assert_eq!((scaled.r(), scaled.g(), scaled.b()), (c.r(), c.g(), c.b()));
    }
}

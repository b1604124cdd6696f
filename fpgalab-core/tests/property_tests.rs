//! Property tests for MIF and figure invariants.
//!
//! Uses proptest to verify:
//! 1. Clamping identity — output equals `max(0, min(v, 2^width - 1))`
//! 2. Row shape — exactly `depth` rows, addresses in order
//! 3. Round-trip — parsing a written MIF recovers clamp+zero-pad
//! 4. Slider containment — values never escape their range
//! 5. Layout — no rectangle overlap across the configuration grid

use proptest::prelude::*;
use fpgalab_core::mif::{clamp_to_width, read_mif, width_max, write_mif};
use fpgalab_core::plot::{FigureLayout, FracRect, Slider, SliderSpec};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_width() -> impl Strategy<Value = u32> {
    1u32..=64
}

fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}

// ── 1. Clamping identity ─────────────────────────────────────────────

proptest! {
    /// For all integers, the clamped word is max(0, min(v, 2^width - 1)).
    #[test]
    fn clamp_is_saturating_min_max(v in any::<i64>(), width in arb_width()) {
        let max = width_max(width);
        let expected = if v < 0 {
            0
        } else {
            (v as u64).min(max)
        };
        prop_assert_eq!(clamp_to_width(v, width), expected);
        prop_assert!(clamp_to_width(v, width) <= max);
    }
}

// ── 2. Row shape ─────────────────────────────────────────────────────

proptest! {
    /// Exactly `depth` content rows, addresses 0..depth in order.
    #[test]
    fn mif_has_depth_rows_in_address_order(
        values in arb_values(),
        depth in 1usize..128,
        width in arb_width(),
    ) {
        let mut buf = Vec::new();
        write_mif(&mut buf, &values, depth, width).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let rows: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "CONTENT BEGIN")
            .skip(1)
            .take_while(|l| *l != "END;")
            .collect();
        prop_assert_eq!(rows.len(), depth);
        for (i, row) in rows.iter().enumerate() {
            let addr: usize = row
                .trim()
                .split('\t')
                .next()
                .unwrap()
                .trim()
                .parse()
                .unwrap();
            prop_assert_eq!(addr, i);
        }
    }
}

// ── 3. Round-trip ────────────────────────────────────────────────────

proptest! {
    /// Parsing a written MIF recovers the clamped, zero-padded vector.
    #[test]
    fn round_trip_is_clamp_and_pad(
        values in arb_values(),
        depth in 1usize..128,
        width in arb_width(),
    ) {
        let mut buf = Vec::new();
        write_mif(&mut buf, &values, depth, width).unwrap();
        let parsed = read_mif(buf.as_slice()).unwrap();

        let expected: Vec<u64> = (0..depth)
            .map(|i| values.get(i).map_or(0, |&v| clamp_to_width(v, width)))
            .collect();
        prop_assert_eq!(parsed.width, width);
        prop_assert_eq!(parsed.depth, depth);
        prop_assert_eq!(parsed.words, expected);
    }
}

// ── 4. Slider containment ────────────────────────────────────────────

proptest! {
    /// A slider's value stays inside [valmin, valmax] whatever is set.
    #[test]
    fn slider_value_stays_in_range(
        lo in -1000.0f64..1000.0,
        span in 0.001f64..1000.0,
        init in -1e9f64..1e9,
        sets in prop::collection::vec(-1e9f64..1e9, 0..16),
    ) {
        let hi = lo + span;
        let mut slider = Slider::new(SliderSpec::new("s", lo, hi, init.clamp(lo, hi)));
        prop_assert!(slider.value() >= lo && slider.value() <= hi);
        for v in sets {
            slider.set_value(v);
            prop_assert!(slider.value() >= lo && slider.value() <= hi);
        }
        slider.reset();
        prop_assert!(slider.value() >= lo && slider.value() <= hi);
    }
}

// ── 5. Layout non-overlap ────────────────────────────────────────────

proptest! {
    /// No two layout rectangles overlap for any valid configuration.
    #[test]
    fn layout_rects_never_overlap(
        num_plots in 1usize..=4,
        n_bottom in 0usize..=6,
        n_right in 0usize..=6,
    ) {
        let layout = FigureLayout::compute(num_plots, n_bottom, n_right).unwrap();
        let rects: Vec<&FracRect> = layout.all_rects().collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} vs {:?}", a, b);
            }
        }
    }
}

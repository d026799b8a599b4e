//! property-based coverage for the laws in the testable-properties list:
//! round-trip, ZigZag/varint bijection (crate-level, end to end), and
//! predictor/mode monotonicity.

use libbpr5::core::{l1_sum, select_predictor};
use libbpr5::lossless::{encode_mode0, encode_mode1, l1, select_row_encoding};
use libbpr5::{zigzag_decode, zigzag_encode, Decoder, Encoder, Grid, Predictor};
use proptest::prelude::*;

fn arb_row(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..max_len)
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(arb_row(12), 0..8).prop_map(Grid::new)
}

proptest! {
    #[test]
    fn zigzag_is_bijective(n in i32::MIN..=i32::MAX) {
        prop_assert_eq!(zigzag_decode(zigzag_encode(n)), n);
    }

    #[test]
    fn grid_roundtrips_through_encode_decode(grid in arb_grid()) {
        let bytes = Encoder::new().encode(&grid).unwrap();
        let decoded = Decoder::new().decode(&bytes).unwrap();
        prop_assert_eq!(decoded.rows(), grid.rows());
    }

    #[test]
    fn selected_predictor_is_never_worse_than_any_alternative(
        row in arb_row(12), prev in arb_row(12)
    ) {
        let chosen = select_predictor(&row, Some(&prev));
        let chosen_sum = l1_sum(chosen, &row, Some(&prev));
        for p in Predictor::ALL {
            prop_assert!(chosen_sum <= l1_sum(p, &row, Some(&prev)));
        }
    }

    #[test]
    fn selected_mode_is_never_worse_than_the_alternative(
        row in arb_row(12), prev in arb_row(12)
    ) {
        let encoding = select_row_encoding(&row, &prev);
        let mode0 = l1(&encode_mode0(&row, &prev, encoding.predictor));
        let mode1 = l1(&encode_mode1(&row, &prev, encoding.predictor));
        prop_assert_eq!(l1(&encoding.residuals), mode0.min(mode1));
    }
}

//! combines predictor evaluation, mode evaluation, and residual generation
//! into the single per-row decision the encoder needs.

use crate::core::{select_predictor, DeltaMode, Predictor};

use super::residual::{encode_mode0, encode_mode1, l1};

/// what the encoder decided for one non-initial row, plus the residuals
/// that decision produced.
pub struct RowEncoding {
    pub predictor: Predictor,
    pub mode: DeltaMode,
    pub residuals: Vec<i32>,
}

/// choose a predictor (§4.2) and then a delta mode (§4.3) for `row` given
/// its true predecessor `prev`. Both choices are ties-broken toward the
/// first option in their respective enumeration order.
pub fn select_row_encoding(row: &[i32], prev: &[i32]) -> RowEncoding {
    let predictor = select_predictor(row, Some(prev));

    let mode0_residuals = encode_mode0(row, prev, predictor);
    let mode1_residuals = encode_mode1(row, prev, predictor);

    if l1(&mode0_residuals) <= l1(&mode1_residuals) {
        RowEncoding {
            predictor,
            mode: DeltaMode::FirstOrder,
            residuals: mode0_residuals,
        }
    } else {
        RowEncoding {
            predictor,
            mode: DeltaMode::SecondOrder,
            residuals: mode1_residuals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_mode0_on_tie() {
        // all zero row/prev: both modes give all-zero residuals, tie -> mode 0.
        let row = vec![0, 0, 0];
        let prev = vec![0, 0, 0];
        let encoding = select_row_encoding(&row, &prev);
        assert_eq!(encoding.mode, DeltaMode::FirstOrder);
    }

    #[test]
    fn picks_second_order_for_linear_ramp() {
        // row is a ramp relative to a flat predecessor: second differences
        // collapse to zero beyond the first two columns while first-order
        // residuals stay constant and nonzero, so mode 1 wins on sum.
        let prev = vec![0, 0, 0, 0, 0];
        let row = vec![1, 2, 3, 4, 5];
        let encoding = select_row_encoding(&row, &prev);
        assert_eq!(encoding.mode, DeltaMode::SecondOrder);
    }

    #[test]
    fn selected_mode_has_minimal_l1_sum() {
        let prev = vec![7, 2, -3, 10, 0];
        let row = vec![8, -1, 4, 6, 12];
        let encoding = select_row_encoding(&row, &prev);
        let mode0 = l1(&encode_mode0(&row, &prev, encoding.predictor));
        let mode1 = l1(&encode_mode1(&row, &prev, encoding.predictor));
        assert_eq!(l1(&encoding.residuals), mode0.min(mode1));
    }
}

//! the four row predictors and the argmin selection used to pick one per row.

/// one of the four predictors a row can be coded under. `#[repr(u8)]` matches
/// the container's one-byte-per-row encoding directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Predictor {
    Left = 0,
    Up = 1,
    Paeth = 2,
    Med = 3,
}

impl Predictor {
    /// all four predictors, in the tie-break order the spec fixes:
    /// LEFT < UP < PAETH < MED.
    pub const ALL: [Predictor; 4] = [
        Predictor::Left,
        Predictor::Up,
        Predictor::Paeth,
        Predictor::Med,
    ];

    /// predict the current sample from its left (`a`), up (`b`), and
    /// up-left (`c`) neighbors. tagged dispatch rather than virtual dispatch:
    /// the set is closed and this is the hot loop of the whole pipeline.
    #[inline]
    pub fn predict(self, a: i32, b: i32, c: i32) -> i32 {
        match self {
            Predictor::Left => a,
            Predictor::Up => b,
            Predictor::Paeth => paeth(a, b, c),
            Predictor::Med => med(a, b, c),
        }
    }
}

impl TryFrom<u8> for Predictor {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Predictor::Left),
            1 => Ok(Predictor::Up),
            2 => Ok(Predictor::Paeth),
            3 => Ok(Predictor::Med),
            other => Err(other),
        }
    }
}

/// PNG filter-type-4 style predictor. Tie-break order is part of the
/// contract: prefer `a`, then `b`, then `c`.
#[inline]
fn paeth(a: i32, b: i32, c: i32) -> i32 {
    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// median edge detector (LOCO-I / JPEG-LS).
#[inline]
fn med(a: i32, b: i32, c: i32) -> i32 {
    if c >= a.max(b) {
        a.min(b)
    } else if c <= a.min(b) {
        a.max(b)
    } else {
        a + b - c
    }
}

/// sum of absolute residuals `row[j] - predictor(a, b, c)` under `predictor`,
/// using `row` itself (not a reconstructed buffer) as the left/up-left
/// context source, per the spec's predictor-evaluation contract. `prev` is
/// the previous reconstructed row, or `None` for row 0. Column 0 of row 0 is
/// excluded (it is the seed, not predicted); column 0 of every other row uses
/// the fixed boundary rule `a = 0, c = 0, b = prev[0]` (or 0 if `prev` is
/// empty).
pub fn l1_sum(predictor: Predictor, row: &[i32], prev: Option<&[i32]>) -> i64 {
    let mut sum: i64 = 0;

    let start = if prev.is_none() { 1 } else { 0 };
    for j in start..row.len() {
        let (a, b, c) = if j == 0 {
            let b = prev.and_then(|p| p.first().copied()).unwrap_or(0);
            (0, b, 0)
        } else {
            let a = row[j - 1];
            let b = prev.and_then(|p| p.get(j).copied()).unwrap_or(0);
            let c = prev.and_then(|p| p.get(j - 1).copied()).unwrap_or(0);
            (a, b, c)
        };
        let pred = predictor.predict(a, b, c);
        sum += (row[j] as i64 - pred as i64).abs();
    }

    sum
}

/// choose the predictor with the smallest L1 residual sum for `row` given
/// its predecessor `prev`. Ties broken by [`Predictor::ALL`] order.
pub fn select_predictor(row: &[i32], prev: Option<&[i32]>) -> Predictor {
    Predictor::ALL
        .into_iter()
        .min_by_key(|&p| l1_sum(p, row, prev))
        .expect("ALL is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paeth_prefers_a_on_tie() {
        // a = b = c => p = a, pa = pb = pc = 0 => a wins
        assert_eq!(paeth(5, 5, 5), 5);
    }

    #[test]
    fn med_matches_loco_i_cases() {
        assert_eq!(med(1, 2, 10), 1.min(2));
        assert_eq!(med(1, 2, 0), 1.max(2));
        assert_eq!(med(3, 7, 5), 3 + 7 - 5);
    }

    #[test]
    fn select_predictor_tie_break_order() {
        // all-zero row and predecessor: every predictor's L1 sum is 0,
        // including at the fixed column-0 boundary, so the tie-break order
        // (LEFT first) decides.
        let row = vec![0, 0, 0, 0];
        let prev = vec![0, 0, 0, 0];
        assert_eq!(select_predictor(&row, Some(&prev)), Predictor::Left);
    }

    #[test]
    fn select_predictor_picks_up_for_identical_rows() {
        let row = vec![5, 6, 7];
        let prev = vec![5, 6, 7];
        // UP gives all-zero residuals; LEFT does not (6-5=1, 7-6=1).
        assert_eq!(select_predictor(&row, Some(&prev)), Predictor::Up);
    }
}

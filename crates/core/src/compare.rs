//! Container comparators shared by every record's equality operator.
//!
//! Lengths are always checked before any element is touched, so two
//! containers of different shape compare unequal instead of reading past the
//! end of the shorter one.

/// Element-wise equality of two ordered sequences.
///
/// Returns `true` iff both sequences have the same length and every pair of
/// corresponding elements is equal under `T`'s own `==`. Two empty sequences
/// are equal.
pub fn all_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Element-wise equality of two row-major matrices.
///
/// Rows may be fixed arrays (`[[f64; 6]; 6]`) or vectors (`Vec<Vec<f64>>`).
/// The row counts must match; then, row by row, the column counts must match
/// and every element pair must be equal. The first row whose length differs
/// ends the comparison.
pub fn all_matrix_equal<T, R>(a: &[R], b: &[R]) -> bool
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b)
        .all(|(ra, rb)| all_equal(ra.as_ref(), rb.as_ref()))
}

/// `true` iff every flag is set. An empty sequence is vacuously `true`.
///
/// This folds a list of already-computed match results; it does not compare
/// two operands (see [`all_equal`] for that).
pub fn all_true(flags: &[bool]) -> bool {
    flags.iter().all(|&f| f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_sequences_are_equal() {
        let a: [f64; 0] = [];
        assert!(all_equal(&a, &a));
        assert!(all_equal::<i32>(&[], &[]));
    }

    #[test]
    fn different_lengths_are_unequal() {
        assert!(!all_equal(&[1.0, 2.0], &[1.0, 2.0, 0.0]));
        assert!(!all_equal(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn single_element_difference_is_detected() {
        assert!(all_equal(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]));
        assert!(!all_equal(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.1]));
    }

    #[test]
    fn nan_elements_never_compare_equal() {
        let a = [f64::NAN];
        assert!(!all_equal(&a, &a));
    }

    #[test]
    fn fixed_matrices_compare_elementwise() {
        let mut a = [[0.0_f64; 6]; 6];
        for (i, row) in a.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        let mut b = a;
        assert!(all_matrix_equal(&a, &b));

        b[5][4] = 1e-12;
        assert!(!all_matrix_equal(&a, &b));
    }

    #[test]
    fn ragged_matrices_stop_at_first_row_length_mismatch() {
        let a = vec![vec![1.0, 2.0], vec![3.0]];
        let b = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(!all_matrix_equal(&a, &b));
        assert!(all_matrix_equal(&a, &a.clone()));
    }

    #[test]
    fn matrix_row_count_mismatch_is_unequal() {
        let a: Vec<Vec<f64>> = vec![vec![]];
        let b: Vec<Vec<f64>> = vec![];
        assert!(!all_matrix_equal(&a, &b));
        assert!(all_matrix_equal(&b, &b));
    }

    #[test]
    fn all_true_folds_flags() {
        assert!(all_true(&[]));
        assert!(all_true(&[true, true]));
        assert!(!all_true(&[true, false, true]));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any sequence equals a copy of itself.
        #[test]
        fn all_equal_is_reflexive(v in prop::collection::vec(-1.0e6f64..1.0e6f64, 0..32)) {
            prop_assert!(all_equal(&v, &v.clone()));
        }

        /// Property: swapping operands never changes the answer.
        #[test]
        fn all_equal_is_symmetric(
            a in prop::collection::vec(0i32..4, 0..8),
            b in prop::collection::vec(0i32..4, 0..8),
        ) {
            prop_assert_eq!(all_equal(&a, &b), all_equal(&b, &a));
        }

        /// Property: a length difference alone makes sequences unequal.
        #[test]
        fn appending_breaks_equality(
            v in prop::collection::vec(any::<i32>(), 0..16),
            extra in any::<i32>(),
        ) {
            let mut longer = v.clone();
            longer.push(extra);
            prop_assert!(!all_equal(&v, &longer));
            prop_assert!(!all_equal(&longer, &v));
        }

        /// Property: matrices built from equal rows are equal, and a ragged
        /// extension of any single row breaks equality.
        #[test]
        fn matrix_row_extension_breaks_equality(
            rows in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..6), 1..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut other = rows.clone();
            prop_assert!(all_matrix_equal(&rows, &other));
            let ix = pick.index(other.len());
            other[ix].push(0);
            prop_assert!(!all_matrix_equal(&rows, &other));
        }

        /// Property: all_true agrees with a manual fold.
        #[test]
        fn all_true_matches_fold(flags in prop::collection::vec(any::<bool>(), 0..16)) {
            prop_assert_eq!(all_true(&flags), flags.iter().fold(true, |acc, f| acc && *f));
        }
    }
}

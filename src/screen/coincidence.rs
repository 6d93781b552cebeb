//! Coincidence (shunt) screening for duplicate recordings.
//!
//! Two nominally distinct channels wired to the same physical signal produce
//! spike trains that carry the same count in the same bin far more often
//! than chance. The statistic here measures, over all timebins, how often a
//! pair of units fired simultaneously with exactly equal counts; pairs whose
//! percentage exceeds a quantile of the empirical null distribution are
//! treated as duplicates and both members are flagged.

use crate::data::SpikeCounts;
use crate::error::{Result, ScreenError};
use crate::screen::null_dist::cutoff_value;
use nalgebra::DMatrix;
use rayon::prelude::*;

/// Compute the pairwise coincidence-percentage matrix for one array.
///
/// Entry `(i, j)` is `100 * |{t : S[t,i] > 0 ∧ S[t,j] > 0 ∧ S[t,i] ==
/// S[t,j]}| / n_bins`. Exact integer equality is deliberate: the statistic
/// targets shunted channels that copy the same count per bin, not general
/// correlation. The diagonal is 0 and the matrix is symmetric.
pub fn coincidence_matrix(array: &str, counts: &SpikeCounts) -> Result<DMatrix<f64>> {
    let n_bins = counts.n_bins();
    let n_units = counts.n_units();
    if n_bins == 0 {
        return Err(ScreenError::EmptyInput {
            array: array.to_string(),
        });
    }

    // Upper triangle in parallel, mirrored afterwards.
    let rows: Vec<Vec<f64>> = (0..n_units)
        .into_par_iter()
        .map(|i| {
            let col_i = counts.data().column(i);
            let mut row = vec![0.0; n_units];
            for j in (i + 1)..n_units {
                let col_j = counts.data().column(j);
                let mut hits = 0usize;
                for t in 0..n_bins {
                    let a = col_i[t];
                    let b = col_j[t];
                    if a > 0 && b > 0 && a == b {
                        hits += 1;
                    }
                }
                row[j] = 100.0 * hits as f64 / n_bins as f64;
            }
            row
        })
        .collect();

    let mut coinc = DMatrix::zeros(n_units, n_units);
    for (i, row) in rows.iter().enumerate() {
        for j in (i + 1)..n_units {
            coinc[(i, j)] = row[j];
            coinc[(j, i)] = row[j];
        }
    }
    Ok(coinc)
}

/// Flag units with at least one coincident partner above a raw cutoff value.
///
/// A unit is flagged when some other unit's coincidence with it exceeds the
/// cutoff in both directions. The statistic is symmetric so the conjunction
/// is redundant today, but the rule is kept literal so an asymmetric variant
/// of the statistic would not silently change the flagging behavior.
pub fn coincidence_mask_with_cutoff(
    array: &str,
    counts: &SpikeCounts,
    cutoff: f64,
) -> Result<Vec<bool>> {
    let coinc = coincidence_matrix(array, counts)?;
    let n_units = counts.n_units();
    let mask = (0..n_units)
        .map(|i| {
            (0..n_units).any(|j| j != i && coinc[(i, j)] > cutoff && coinc[(j, i)] > cutoff)
        })
        .collect();
    Ok(mask)
}

/// Flag units whose coincidence exceeds the null-distribution quantile at
/// the given percentile (in `(0, 100]`).
pub fn coincidence_mask(array: &str, counts: &SpikeCounts, percentile: f64) -> Result<Vec<bool>> {
    let cutoff = cutoff_value(percentile)?;
    coincidence_mask_with_cutoff(array, counts, cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shunted_counts() -> SpikeCounts {
        // Units 0 and 1 carry equal counts whenever both fire; unit 2 is
        // independent.
        SpikeCounts::from_rows(&[&[1, 1, 0], &[2, 2, 0], &[0, 0, 5], &[3, 3, 1]]).unwrap()
    }

    #[test]
    fn test_coincidence_matrix_values() {
        let counts = shunted_counts();
        let coinc = coincidence_matrix("M1", &counts).unwrap();

        // Units 0/1: bins 0, 1, 3 are positive and equal -> 3/4 bins.
        assert_eq!(coinc[(0, 1)], 75.0);
        // Units 0/2 and 1/2 never match while both positive.
        assert_eq!(coinc[(0, 2)], 0.0);
        assert_eq!(coinc[(1, 2)], 0.0);
        // Diagonal is defined as zero.
        for i in 0..3 {
            assert_eq!(coinc[(i, i)], 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let counts =
            SpikeCounts::from_rows(&[&[1, 2, 1, 0], &[3, 3, 0, 3], &[2, 0, 2, 2], &[1, 1, 1, 1]])
                .unwrap();
        let coinc = coincidence_matrix("M1", &counts).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(coinc[(i, j)], coinc[(j, i)]);
            }
        }
    }

    #[test]
    fn test_mask_with_cutoff() {
        let counts = shunted_counts();
        let mask = coincidence_mask_with_cutoff("M1", &counts, 50.0).unwrap();
        assert_eq!(mask, vec![true, true, false]);

        // Strict inequality: a cutoff equal to the statistic does not flag.
        let mask = coincidence_mask_with_cutoff("M1", &counts, 75.0).unwrap();
        assert_eq!(mask, vec![false, false, false]);
    }

    #[test]
    fn test_flag_count_monotone_in_percentile() {
        // Three pairs at 70%, 30%, and 10% coincidence; count values are
        // disjoint across pairs so cross-pair coincidence is exactly zero.
        let counts = SpikeCounts::from_rows(&[
            &[1, 1, 3, 3, 6, 6],
            &[2, 2, 0, 0, 0, 0],
            &[1, 1, 4, 4, 7, 0],
            &[0, 0, 3, 3, 0, 7],
            &[2, 2, 0, 0, 6, 0],
            &[1, 1, 3, 4, 0, 6],
            &[2, 2, 0, 0, 7, 0],
            &[0, 0, 4, 3, 0, 7],
            &[1, 1, 0, 0, 6, 0],
            &[0, 0, 3, 5, 0, 6],
        ])
        .unwrap();

        let flagged_at = |percentile: f64| {
            coincidence_mask("M1", &counts, percentile)
                .unwrap()
                .iter()
                .filter(|&&b| b)
                .count()
        };

        // Raising the percentile raises the cutoff and never flags more.
        assert_eq!(flagged_at(50.0), 6);
        assert_eq!(flagged_at(99.5), 4);
        assert_eq!(flagged_at(100.0), 2);
    }

    #[test]
    fn test_single_unit_never_flagged() {
        let counts = SpikeCounts::from_rows(&[&[4], &[4], &[4]]).unwrap();
        let mask = coincidence_mask_with_cutoff("M1", &counts, 0.0).unwrap();
        assert_eq!(mask, vec![false]);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let counts = SpikeCounts::from_rows(&[]).unwrap();
        assert!(matches!(
            coincidence_matrix("M1", &counts),
            Err(ScreenError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_invalid_percentile_rejected() {
        let counts = shunted_counts();
        assert!(matches!(
            coincidence_mask("M1", &counts, 0.0),
            Err(ScreenError::InvalidPercentile(_))
        ));
        assert!(coincidence_mask("M1", &counts, 100.5).is_err());
    }
}

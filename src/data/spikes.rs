//! Dense spike-count matrices for one recording array.

use crate::error::{Result, ScreenError};
use nalgebra::DMatrix;
use rayon::prelude::*;
use std::ops::Range;

/// A dense spike-count matrix for one array.
///
/// Rows represent time bins, columns represent units. Counts are
/// non-negative integers; equality comparisons between units are exact.
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeCounts {
    data: DMatrix<u32>,
}

impl SpikeCounts {
    /// Wrap an existing bins × units matrix.
    pub fn new(data: DMatrix<u32>) -> Self {
        Self { data }
    }

    /// Build from row slices (one slice per time bin).
    ///
    /// All rows must have the same number of units.
    pub fn from_rows(rows: &[&[u32]]) -> Result<Self> {
        let n_bins = rows.len();
        let n_units = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_units {
                return Err(ScreenError::InvalidParameter(format!(
                    "Row {} has {} units, expected {}",
                    i,
                    row.len(),
                    n_units
                )));
            }
        }
        let data = DMatrix::from_fn(n_bins, n_units, |r, c| rows[r][c]);
        Ok(Self { data })
    }

    /// Number of time bins (rows).
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.data.nrows()
    }

    /// Number of units (columns).
    #[inline]
    pub fn n_units(&self) -> usize {
        self.data.ncols()
    }

    /// Spike count at (bin, unit).
    #[inline]
    pub fn get(&self, bin: usize, unit: usize) -> u32 {
        self.data[(bin, unit)]
    }

    /// The underlying matrix.
    #[inline]
    pub fn data(&self) -> &DMatrix<u32> {
        &self.data
    }

    /// Dense counts for one unit across all bins.
    pub fn unit_dense(&self, unit: usize) -> Vec<u32> {
        self.data.column(unit).iter().copied().collect()
    }

    /// Restrict to a contiguous range of bins, producing an owned copy.
    pub fn window(&self, bins: Range<usize>) -> Result<Self> {
        if bins.start > bins.end || bins.end > self.n_bins() {
            return Err(ScreenError::InvalidParameter(format!(
                "Bin range {}..{} out of bounds for {} bins",
                bins.start,
                bins.end,
                self.n_bins()
            )));
        }
        let len = bins.end - bins.start;
        Ok(Self {
            data: self.data.rows(bins.start, len).into_owned(),
        })
    }

    /// Keep only the specified units (by column index), preserving order.
    pub fn select_units(&self, indices: &[usize]) -> Result<Self> {
        for &idx in indices {
            if idx >= self.n_units() {
                return Err(ScreenError::InvalidParameter(format!(
                    "Unit index {} out of bounds",
                    idx
                )));
            }
        }
        Ok(Self {
            data: self.data.select_columns(indices.iter()),
        })
    }

    /// Stack several matrices vertically (bins concatenated in order).
    ///
    /// All parts must have the same unit count.
    pub fn vstack(parts: &[Self]) -> Result<Self> {
        let n_units = parts.first().map_or(0, |p| p.n_units());
        for (i, part) in parts.iter().enumerate() {
            if part.n_units() != n_units {
                return Err(ScreenError::InvalidParameter(format!(
                    "Part {} has {} units, expected {}",
                    i,
                    part.n_units(),
                    n_units
                )));
            }
        }
        let total_bins: usize = parts.iter().map(|p| p.n_bins()).sum();
        let mut data = DMatrix::zeros(total_bins, n_units);
        let mut offset = 0;
        for part in parts {
            data.rows_mut(offset, part.n_bins()).copy_from(&part.data);
            offset += part.n_bins();
        }
        Ok(Self { data })
    }

    /// Column-wise means as f64 (counts per bin per unit).
    ///
    /// Requires at least one bin.
    pub fn unit_means(&self) -> Result<Vec<f64>> {
        let n_bins = self.n_bins();
        if n_bins == 0 {
            return Err(ScreenError::InvalidParameter(
                "Cannot take unit means of an empty matrix".to_string(),
            ));
        }
        Ok((0..self.n_units())
            .into_par_iter()
            .map(|unit| {
                let sum: u64 = self.data.column(unit).iter().map(|&v| v as u64).sum();
                sum as f64 / n_bins as f64
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_counts() -> SpikeCounts {
        // 4 bins × 3 units
        SpikeCounts::from_rows(&[&[1, 1, 0], &[2, 2, 0], &[0, 0, 5], &[3, 3, 1]]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let counts = create_test_counts();
        assert_eq!(counts.n_bins(), 4);
        assert_eq!(counts.n_units(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(SpikeCounts::from_rows(&[&[1, 2], &[3]]).is_err());
    }

    #[test]
    fn test_window() {
        let counts = create_test_counts();
        let w = counts.window(1..3).unwrap();
        assert_eq!(w.n_bins(), 2);
        assert_eq!(w.get(0, 0), 2);
        assert_eq!(w.get(1, 2), 5);

        assert!(counts.window(2..5).is_err());
    }

    #[test]
    fn test_select_units() {
        let counts = create_test_counts();
        let kept = counts.select_units(&[0, 2]).unwrap();
        assert_eq!(kept.n_units(), 2);
        assert_eq!(kept.unit_dense(0), vec![1, 2, 0, 3]);
        assert_eq!(kept.unit_dense(1), vec![0, 0, 5, 1]);

        assert!(counts.select_units(&[3]).is_err());
    }

    #[test]
    fn test_vstack() {
        let a = SpikeCounts::from_rows(&[&[1, 0], &[0, 2]]).unwrap();
        let b = SpikeCounts::from_rows(&[&[3, 4]]).unwrap();
        let stacked = SpikeCounts::vstack(&[a, b]).unwrap();
        assert_eq!(stacked.n_bins(), 3);
        assert_eq!(stacked.unit_dense(1), vec![0, 2, 4]);

        let c = SpikeCounts::from_rows(&[&[1, 2, 3]]).unwrap();
        let d = SpikeCounts::from_rows(&[&[1, 2]]).unwrap();
        assert!(SpikeCounts::vstack(&[c, d]).is_err());
    }

    #[test]
    fn test_unit_means() {
        let counts = create_test_counts();
        let means = counts.unit_means().unwrap();
        assert_eq!(means, vec![1.5, 1.5, 1.5]);

        let empty = SpikeCounts::from_rows(&[]).unwrap();
        assert!(empty.unit_means().is_err());
    }
}

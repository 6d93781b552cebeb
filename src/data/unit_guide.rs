//! Per-unit metadata tables, row-aligned with spike-count columns.

use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};

/// Identifying metadata for one recorded unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Electrode (channel) the unit was sorted from.
    pub electrode: u32,
    /// Sort index of the unit on its electrode.
    pub unit: u32,
}

/// A per-unit metadata table for one array.
///
/// Row `i` describes the unit stored in column `i` of the array's
/// [`SpikeCounts`](crate::data::SpikeCounts); the two must stay aligned
/// through every pruning operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitGuide {
    units: Vec<UnitInfo>,
}

impl UnitGuide {
    /// Create a guide from per-unit rows.
    pub fn new(units: Vec<UnitInfo>) -> Self {
        Self { units }
    }

    /// Convenience constructor from (electrode, unit) pairs.
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        Self {
            units: pairs
                .iter()
                .map(|&(electrode, unit)| UnitInfo { electrode, unit })
                .collect(),
        }
    }

    /// Number of units (rows).
    #[inline]
    pub fn n_units(&self) -> usize {
        self.units.len()
    }

    /// All unit rows, in column order.
    #[inline]
    pub fn units(&self) -> &[UnitInfo] {
        &self.units
    }

    /// Metadata for one unit.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&UnitInfo> {
        self.units.get(idx)
    }

    /// Keep only the specified rows (by index), preserving order.
    pub fn select_units(&self, indices: &[usize]) -> Result<Self> {
        let mut kept = Vec::with_capacity(indices.len());
        for &idx in indices {
            let info = self.units.get(idx).ok_or_else(|| {
                ScreenError::InvalidParameter(format!("Unit index {} out of bounds", idx))
            })?;
            kept.push(*info);
        }
        Ok(Self { units: kept })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_units() {
        let guide = UnitGuide::from_pairs(&[(1, 1), (1, 2), (2, 1), (3, 1)]);
        let kept = guide.select_units(&[0, 3]).unwrap();
        assert_eq!(kept.n_units(), 2);
        assert_eq!(kept.get(0), Some(&UnitInfo { electrode: 1, unit: 1 }));
        assert_eq!(kept.get(1), Some(&UnitInfo { electrode: 3, unit: 1 }));

        assert!(guide.select_units(&[4]).is_err());
    }
}

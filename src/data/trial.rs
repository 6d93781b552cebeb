//! Trials, per-array records, and dataset-level bookkeeping.

use crate::data::{SpikeCounts, UnitGuide};
use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Range;

/// One array's data within a trial: spike counts plus the aligned unit guide.
///
/// Each array is an explicit record selected by name once per call; the
/// spike-count columns and guide rows must describe the same units in the
/// same order.
#[derive(Debug, Clone)]
pub struct ArrayRecord {
    pub spikes: SpikeCounts,
    pub unit_guide: UnitGuide,
}

impl ArrayRecord {
    pub fn new(spikes: SpikeCounts, unit_guide: UnitGuide) -> Self {
        Self { spikes, unit_guide }
    }
}

/// One experimental trial.
///
/// Holds a per-array record map, the bin duration in seconds, string-valued
/// trial metadata used by selection predicates, and named landmark bin
/// indices (e.g. movement onset) used by evaluation windows.
#[derive(Debug, Clone)]
pub struct Trial {
    arrays: BTreeMap<String, ArrayRecord>,
    bin_size: f64,
    metadata: HashMap<String, String>,
    landmarks: HashMap<String, usize>,
}

impl Trial {
    /// Create an empty trial with the given bin duration (seconds per bin).
    pub fn new(bin_size: f64) -> Self {
        Self {
            arrays: BTreeMap::new(),
            bin_size,
            metadata: HashMap::new(),
            landmarks: HashMap::new(),
        }
    }

    /// Attach an array record.
    pub fn with_array(mut self, name: &str, record: ArrayRecord) -> Self {
        self.arrays.insert(name.to_string(), record);
        self
    }

    /// Attach a metadata key/value pair.
    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// Attach a named landmark at the given bin index.
    pub fn with_landmark(mut self, name: &str, bin: usize) -> Self {
        self.landmarks.insert(name.to_string(), bin);
        self
    }

    /// Bin duration in seconds.
    #[inline]
    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// Array record by name.
    #[inline]
    pub fn array(&self, name: &str) -> Option<&ArrayRecord> {
        self.arrays.get(name)
    }

    /// Mutable array record by name.
    #[inline]
    pub fn array_mut(&mut self, name: &str) -> Option<&mut ArrayRecord> {
        self.arrays.get_mut(name)
    }

    /// Names of arrays present in this trial, in sorted order.
    pub fn array_names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(|s| s.as_str())
    }

    /// Metadata value by key.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }

    /// Landmark bin index by name.
    pub fn landmark(&self, name: &str) -> Option<usize> {
        self.landmarks.get(name).copied()
    }
}

/// Selection of trials used for statistic computation.
///
/// Pruning always applies to the full trial set; this only restricts which
/// trials feed the screeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrialSelection {
    /// Use every trial.
    #[default]
    All,
    /// Use explicit trial indices.
    Indices(Vec<usize>),
    /// Use trials whose metadata column equals the given value.
    Match { column: String, value: String },
}

/// One edge of an evaluation window, in bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEdge {
    /// A fixed number of bins after the start of the trial.
    TrialStart { offset: usize },
    /// An offset (possibly negative) relative to a named per-trial landmark.
    Landmark { name: String, offset: i64 },
}

impl WindowEdge {
    fn resolve(&self, trial: &Trial, trial_idx: usize) -> Result<i64> {
        match self {
            WindowEdge::TrialStart { offset } => Ok(*offset as i64),
            WindowEdge::Landmark { name, offset } => {
                let bin = trial.landmark(name).ok_or_else(|| {
                    ScreenError::InvalidParameter(format!(
                        "Trial {} has no landmark '{}'",
                        trial_idx, name
                    ))
                })?;
                Ok(bin as i64 + offset)
            }
        }
    }
}

/// A per-trial evaluation window (half-open bin range).
///
/// Applied to statistic computation only, never to pruning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateWindow {
    pub start: WindowEdge,
    pub end: WindowEdge,
}

impl RateWindow {
    /// Resolve the window to a concrete bin range for one trial.
    ///
    /// Edges resolving before the trial start are clamped to bin 0 and the
    /// end is clamped to the trial length; a window with no bins left is an
    /// error rather than a silent skip.
    pub fn resolve(&self, trial: &Trial, trial_idx: usize, n_bins: usize) -> Result<Range<usize>> {
        let start = self.start.resolve(trial, trial_idx)?.max(0) as usize;
        let end = (self.end.resolve(trial, trial_idx)?.max(0) as usize).min(n_bins);
        if start >= end {
            return Err(ScreenError::EmptyWindow {
                trial: trial_idx,
                reason: format!("resolved to {}..{} of {} bins", start, end, n_bins),
            });
        }
        Ok(start..end)
    }
}

/// An owned collection of trials forming one dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    trials: Vec<Trial>,
}

impl Dataset {
    pub fn new(trials: Vec<Trial>) -> Self {
        Self { trials }
    }

    /// Number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.trials.len()
    }

    /// All trials, in order.
    #[inline]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Mutable access to all trials.
    #[inline]
    pub fn trials_mut(&mut self) -> &mut [Trial] {
        &mut self.trials
    }

    /// Names of arrays with spike data present in every trial, sorted.
    pub fn arrays(&self) -> Vec<String> {
        let Some(first) = self.trials.first() else {
            return Vec::new();
        };
        let mut names: BTreeSet<&str> = first.array_names().collect();
        for trial in &self.trials[1..] {
            let present: BTreeSet<&str> = trial.array_names().collect();
            names.retain(|n| present.contains(n));
        }
        names.into_iter().map(|s| s.to_string()).collect()
    }

    /// Resolve a trial selection to concrete trial indices.
    pub fn select_trials(&self, selection: &TrialSelection) -> Result<Vec<usize>> {
        let indices = match selection {
            TrialSelection::All => (0..self.n_trials()).collect(),
            TrialSelection::Indices(indices) => {
                for &idx in indices {
                    if idx >= self.n_trials() {
                        return Err(ScreenError::InvalidParameter(format!(
                            "Trial index {} out of bounds for {} trials",
                            idx,
                            self.n_trials()
                        )));
                    }
                }
                indices.clone()
            }
            TrialSelection::Match { column, value } => (0..self.n_trials())
                .filter(|&idx| self.trials[idx].metadata(column) == Some(value.as_str()))
                .collect(),
        };
        if indices.is_empty() {
            return Err(ScreenError::EmptyTrialSelection);
        }
        Ok(indices)
    }

    /// Verify that all selected trials share one bin size and return it.
    pub fn uniform_bin_size(&self, indices: &[usize]) -> Result<f64> {
        let first = *indices.first().ok_or(ScreenError::EmptyTrialSelection)?;
        let expected = self.trials[first].bin_size();
        for &idx in indices {
            let actual = self.trials[idx].bin_size();
            if actual != expected {
                return Err(ScreenError::BinSizeMismatch {
                    trial: idx,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_array_trial(bin_size: f64) -> Trial {
        let spikes = SpikeCounts::from_rows(&[&[1, 0], &[0, 2]]).unwrap();
        let guide = UnitGuide::from_pairs(&[(1, 1), (2, 1)]);
        Trial::new(bin_size)
            .with_array("M1", ArrayRecord::new(spikes.clone(), guide.clone()))
            .with_array("PMd", ArrayRecord::new(spikes, guide))
    }

    #[test]
    fn test_array_discovery_intersection() {
        let full = two_array_trial(0.01);
        let spikes = SpikeCounts::from_rows(&[&[1]]).unwrap();
        let m1_only = Trial::new(0.01).with_array(
            "M1",
            ArrayRecord::new(spikes, UnitGuide::from_pairs(&[(1, 1)])),
        );
        let dataset = Dataset::new(vec![full, m1_only]);
        assert_eq!(dataset.arrays(), vec!["M1".to_string()]);
    }

    #[test]
    fn test_select_trials_indices() {
        let dataset = Dataset::new(vec![two_array_trial(0.01), two_array_trial(0.01)]);
        let idx = dataset
            .select_trials(&TrialSelection::Indices(vec![1]))
            .unwrap();
        assert_eq!(idx, vec![1]);

        assert!(dataset
            .select_trials(&TrialSelection::Indices(vec![2]))
            .is_err());
        assert!(matches!(
            dataset.select_trials(&TrialSelection::Indices(vec![])),
            Err(ScreenError::EmptyTrialSelection)
        ));
    }

    #[test]
    fn test_select_trials_match() {
        let a = two_array_trial(0.01).with_metadata("epoch", "baseline");
        let b = two_array_trial(0.01).with_metadata("epoch", "adaptation");
        let dataset = Dataset::new(vec![a, b]);

        let idx = dataset
            .select_trials(&TrialSelection::Match {
                column: "epoch".to_string(),
                value: "adaptation".to_string(),
            })
            .unwrap();
        assert_eq!(idx, vec![1]);

        assert!(matches!(
            dataset.select_trials(&TrialSelection::Match {
                column: "epoch".to_string(),
                value: "washout".to_string(),
            }),
            Err(ScreenError::EmptyTrialSelection)
        ));
    }

    #[test]
    fn test_uniform_bin_size() {
        let dataset = Dataset::new(vec![two_array_trial(0.01), two_array_trial(0.02)]);
        assert_eq!(dataset.uniform_bin_size(&[0]).unwrap(), 0.01);
        assert!(matches!(
            dataset.uniform_bin_size(&[0, 1]),
            Err(ScreenError::BinSizeMismatch { trial: 1, .. })
        ));
    }

    #[test]
    fn test_window_resolution() {
        let trial = two_array_trial(0.01).with_landmark("go_cue", 1);
        let window = RateWindow {
            start: WindowEdge::TrialStart { offset: 0 },
            end: WindowEdge::Landmark {
                name: "go_cue".to_string(),
                offset: 1,
            },
        };
        assert_eq!(window.resolve(&trial, 0, 2).unwrap(), 0..2);

        // End past the trial is clamped.
        let long = RateWindow {
            start: WindowEdge::TrialStart { offset: 0 },
            end: WindowEdge::TrialStart { offset: 10 },
        };
        assert_eq!(long.resolve(&trial, 0, 2).unwrap(), 0..2);

        // A window with nothing left is an error.
        let empty = RateWindow {
            start: WindowEdge::TrialStart { offset: 2 },
            end: WindowEdge::TrialStart { offset: 2 },
        };
        assert!(matches!(
            empty.resolve(&trial, 0, 2),
            Err(ScreenError::EmptyWindow { trial: 0, .. })
        ));

        let missing = RateWindow {
            start: WindowEdge::Landmark {
                name: "move_onset".to_string(),
                offset: 0,
            },
            end: WindowEdge::TrialStart { offset: 2 },
        };
        assert!(missing.resolve(&trial, 0, 2).is_err());
    }
}

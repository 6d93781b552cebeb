//! Orchestration: option handling, per-array screening, and pruning.

use crate::data::{Dataset, RateWindow, SpikeCounts, TrialSelection};
use crate::error::{Result, ScreenError};
use crate::screen::coincidence::coincidence_mask;
use crate::screen::firing_rate::firing_rate_mask;
use crate::screen::null_dist::cutoff_value;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Options for [`screen_and_prune`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenOptions {
    /// Arrays to screen; `None` auto-discovers every array with spike data.
    pub arrays: Option<Vec<String>>,
    /// Enable the coincidence (shunt) screener.
    pub coincidence_check: bool,
    /// Percentile of the null distribution used as the significance cutoff.
    pub percentile_cutoff: f64,
    /// Enable the firing-rate screener.
    pub firing_rate_check: bool,
    /// Units with a mean rate strictly below this are flagged.
    pub min_firing_rate: f64,
    /// Evaluation window for the firing-rate statistic; `None` uses whole
    /// trials. Pruning always applies to whole trials regardless.
    pub rate_window: Option<RateWindow>,
    /// Trials used for statistic computation (pruning covers all trials).
    pub trial_selection: TrialSelection,
    /// Divide spike counts by the bin duration before thresholding rates.
    pub counts_need_rate_conversion: bool,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            arrays: None,
            coincidence_check: false,
            percentile_cutoff: 99.5,
            firing_rate_check: true,
            min_firing_rate: 0.0,
            rate_window: None,
            trial_selection: TrialSelection::All,
            counts_need_rate_conversion: false,
        }
    }
}

impl ScreenOptions {
    /// Load from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ScreenError::from)
    }

    /// Save to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ScreenError::from)
    }
}

/// Pruning outcome for one array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneSummary {
    /// Array name.
    pub array: String,
    /// Unit count before pruning.
    pub n_units_before: usize,
    /// Removed unit indices relative to the pre-pruning layout, sorted.
    pub removed: Vec<usize>,
}

impl PruneSummary {
    /// Number of units removed.
    pub fn n_removed(&self) -> usize {
        self.removed.len()
    }

    /// Number of units remaining.
    pub fn n_units_after(&self) -> usize {
        self.n_units_before - self.removed.len()
    }
}

impl std::fmt::Display for PruneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Array '{}'", self.array)?;
        writeln!(f, "  Before:   {} units", self.n_units_before)?;
        writeln!(f, "  Removed:  {} units {:?}", self.n_removed(), self.removed)?;
        writeln!(f, "  After:    {} units", self.n_units_after())?;
        Ok(())
    }
}

/// Result of [`screen_and_prune`]: one outcome per screened array.
///
/// A per-array validation failure is recorded here rather than aborting the
/// call, so sibling arrays still screen independently.
#[derive(Debug)]
pub struct ScreenReport {
    outcomes: Vec<ArrayOutcome>,
}

/// Screening outcome for one array: a summary, or that array's error.
#[derive(Debug)]
pub struct ArrayOutcome {
    pub array: String,
    pub result: Result<PruneSummary>,
}

impl ScreenReport {
    /// All per-array outcomes, in screening order.
    pub fn outcomes(&self) -> &[ArrayOutcome] {
        &self.outcomes
    }

    /// Summary for one array, if it succeeded.
    pub fn summary(&self, array: &str) -> Option<&PruneSummary> {
        self.outcomes
            .iter()
            .find(|o| o.array == array)
            .and_then(|o| o.result.as_ref().ok())
    }

    /// Removed unit indices for one array, if it succeeded.
    pub fn removed(&self, array: &str) -> Option<&[usize]> {
        self.summary(array).map(|s| s.removed.as_slice())
    }

    /// True when every array screened without error.
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

impl std::fmt::Display for ScreenReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(summary) => write!(f, "{}", summary)?,
                Err(e) => writeln!(f, "Array '{}': FAILED: {}", outcome.array, e)?,
            }
        }
        Ok(())
    }
}

/// Screen every requested array and prune flagged units in place.
///
/// Statistics are computed over the selected trials (and, for the rate
/// screener, the evaluation window); pruning applies to every trial of the
/// dataset. Configuration errors abort the whole call before any mutation;
/// a shape violation in one array skips that array only.
pub fn screen_and_prune(dataset: &mut Dataset, opts: &ScreenOptions) -> Result<ScreenReport> {
    if opts.coincidence_check {
        cutoff_value(opts.percentile_cutoff)?;
    }
    if opts.firing_rate_check && opts.min_firing_rate < 0.0 {
        return Err(ScreenError::InvalidParameter(format!(
            "Minimum firing rate must be non-negative, got {}",
            opts.min_firing_rate
        )));
    }

    let selected = dataset.select_trials(&opts.trial_selection)?;
    let bin_size = dataset.uniform_bin_size(&selected)?;

    let known = dataset.arrays();
    let arrays = match &opts.arrays {
        Some(requested) => {
            for name in requested {
                if !known.contains(name) {
                    return Err(ScreenError::UnknownArray(name.clone()));
                }
            }
            requested.clone()
        }
        None => known,
    };

    // Mask computation is read-only and independent across arrays; mutation
    // happens in a second, sequential pass.
    let masks: Vec<(String, Result<Vec<bool>>)> = arrays
        .par_iter()
        .map(|name| (name.clone(), array_mask(dataset, name, &selected, bin_size, opts)))
        .collect();

    let mut outcomes = Vec::with_capacity(masks.len());
    for (array, mask) in masks {
        let result = mask.and_then(|mask| prune_array(dataset, &array, &mask));
        match &result {
            Ok(summary) => {
                log::info!(
                    "Array '{}': removed {} of {} units",
                    array,
                    summary.n_removed(),
                    summary.n_units_before
                );
            }
            Err(e) => log::warn!("Array '{}' skipped: {}", array, e),
        }
        outcomes.push(ArrayOutcome { array, result });
    }

    Ok(ScreenReport { outcomes })
}

/// Validate one array's shape invariants and compute its OR-combined mask.
fn array_mask(
    dataset: &Dataset,
    array: &str,
    selected: &[usize],
    bin_size: f64,
    opts: &ScreenOptions,
) -> Result<Vec<bool>> {
    // Shape validation covers the full trial set, since pruning will too.
    let mut n_units: Option<usize> = None;
    for (trial_idx, trial) in dataset.trials().iter().enumerate() {
        let record = trial
            .array(array)
            .ok_or_else(|| ScreenError::UnknownArray(array.to_string()))?;
        let spike_cols = record.spikes.n_units();
        let guide_rows = record.unit_guide.n_units();
        if spike_cols != guide_rows {
            return Err(ScreenError::GuideMismatch {
                array: array.to_string(),
                trial: trial_idx,
                spike_cols,
                guide_rows,
            });
        }
        match n_units {
            None => n_units = Some(spike_cols),
            Some(expected) if expected != spike_cols => {
                return Err(ScreenError::RaggedUnits {
                    array: array.to_string(),
                    trial: trial_idx,
                    expected,
                    actual: spike_cols,
                });
            }
            Some(_) => {}
        }
    }
    let n_units = n_units.unwrap_or(0);
    let mut mask = vec![false; n_units];

    if opts.coincidence_check {
        let parts: Vec<SpikeCounts> = selected
            .iter()
            .map(|&t| dataset.trials()[t].array(array).map(|r| r.spikes.clone()))
            .collect::<Option<_>>()
            .ok_or_else(|| ScreenError::UnknownArray(array.to_string()))?;
        let stacked = SpikeCounts::vstack(&parts)?;
        let flagged = coincidence_mask(array, &stacked, opts.percentile_cutoff)?;
        for (m, f) in mask.iter_mut().zip(flagged) {
            *m |= f;
        }
    }

    if opts.firing_rate_check {
        let mut parts = Vec::with_capacity(selected.len());
        for &trial_idx in selected {
            let trial = &dataset.trials()[trial_idx];
            let record = trial
                .array(array)
                .ok_or_else(|| ScreenError::UnknownArray(array.to_string()))?;
            let n_bins = record.spikes.n_bins();
            let range = match &opts.rate_window {
                Some(window) => window.resolve(trial, trial_idx, n_bins)?,
                None => 0..n_bins,
            };
            parts.push(record.spikes.window(range)?);
        }
        let stacked = SpikeCounts::vstack(&parts)?;
        let flagged = firing_rate_mask(
            array,
            &stacked,
            bin_size,
            opts.counts_need_rate_conversion,
            opts.min_firing_rate,
        )?;
        for (m, f) in mask.iter_mut().zip(flagged) {
            *m |= f;
        }
    }

    Ok(mask)
}

/// Remove flagged units from every trial of one array.
///
/// Builds the retained-index list once and produces new matrices/guides by
/// index-selection; an all-false mask leaves the array's storage untouched.
fn prune_array(dataset: &mut Dataset, array: &str, mask: &[bool]) -> Result<PruneSummary> {
    let n_units_before = mask.len();
    let removed: Vec<usize> = (0..n_units_before).filter(|&i| mask[i]).collect();

    if !removed.is_empty() {
        let kept: Vec<usize> = (0..n_units_before).filter(|&i| !mask[i]).collect();
        for trial in dataset.trials_mut() {
            if let Some(record) = trial.array_mut(array) {
                record.spikes = record.spikes.select_units(&kept)?;
                record.unit_guide = record.unit_guide.select_units(&kept)?;
            }
        }
    }

    Ok(PruneSummary {
        array: array.to_string(),
        n_units_before,
        removed,
    })
}

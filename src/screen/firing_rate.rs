//! Firing-rate screening for silent or near-silent units.

use crate::data::SpikeCounts;
use crate::error::{Result, ScreenError};

/// Mean per-unit rates over all bins of `counts`.
///
/// When `counts_need_rate_conversion` is set, entries are treated as raw
/// spike counts and divided by the bin duration (seconds) to obtain rates in
/// Hz; otherwise entries are assumed to be rates already and the bin size is
/// ignored.
pub fn unit_rates(
    array: &str,
    counts: &SpikeCounts,
    bin_size: f64,
    counts_need_rate_conversion: bool,
) -> Result<Vec<f64>> {
    if counts_need_rate_conversion && bin_size <= 0.0 {
        return Err(ScreenError::InvalidParameter(format!(
            "Bin size must be positive to convert counts to rates, got {}",
            bin_size
        )));
    }
    if counts.n_bins() == 0 {
        return Err(ScreenError::EmptyInput {
            array: array.to_string(),
        });
    }
    let means = counts.unit_means()?;
    if counts_need_rate_conversion {
        Ok(means.into_iter().map(|m| m / bin_size).collect())
    } else {
        Ok(means)
    }
}

/// Flag units whose mean rate falls below `min_rate` (strict).
pub fn firing_rate_mask(
    array: &str,
    counts: &SpikeCounts,
    bin_size: f64,
    counts_need_rate_conversion: bool,
    min_rate: f64,
) -> Result<Vec<bool>> {
    if min_rate < 0.0 {
        return Err(ScreenError::InvalidParameter(format!(
            "Minimum firing rate must be non-negative, got {}",
            min_rate
        )));
    }
    let rates = unit_rates(array, counts, bin_size, counts_need_rate_conversion)?;
    Ok(rates.into_iter().map(|r| r < min_rate).collect())
}

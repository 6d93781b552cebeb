//! Spike-train unit screening.
//!
//! This library screens the recorded units of a trial-structured
//! electrophysiology dataset and prunes the ones judged bad by two
//! independent criteria:
//!
//! - **coincidence (shunt) screening**: pairs of channels whose spike counts
//!   are simultaneously positive and exactly equal far more often than an
//!   empirical null distribution allows are treated as duplicate recordings
//!   of one signal, and both members are flagged;
//! - **firing-rate screening**: units whose mean rate over a configurable
//!   evaluation window falls below a minimum are flagged.
//!
//! Flagged units are removed in place from every trial of an array — spike
//! columns and the aligned unit-guide rows shrink together — and the removed
//! indices are reported per array.
//!
//! # Overview
//!
//! - **data**: spike-count matrices, unit guides, trials, datasets, trial
//!   selection, and evaluation windows
//! - **screen**: the two screeners, the shipped null-distribution table, and
//!   the [`screen_and_prune`](screen::screen_and_prune) orchestrator
//! - **error**: the error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use spike_screen::prelude::*;
//!
//! # fn demo(mut dataset: Dataset) -> Result<()> {
//! let opts = ScreenOptions {
//!     coincidence_check: true,
//!     min_firing_rate: 0.5,
//!     counts_need_rate_conversion: true,
//!     ..Default::default()
//! };
//! let report = screen_and_prune(&mut dataset, &opts)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod screen;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{
        ArrayRecord, Dataset, RateWindow, SpikeCounts, Trial, TrialSelection, UnitGuide,
        UnitInfo, WindowEdge,
    };
    pub use crate::error::{Result, ScreenError};
    pub use crate::screen::{
        coincidence_mask, coincidence_mask_with_cutoff, coincidence_matrix, cutoff_value,
        firing_rate_mask, screen_and_prune, unit_rates, ArrayOutcome, PruneSummary,
        ScreenOptions, ScreenReport, NULL_COINCIDENCE,
    };
}

//! Screening primitives and orchestration.

pub mod coincidence;
pub mod firing_rate;
pub mod null_dist;
pub mod prune;

pub use coincidence::{coincidence_mask, coincidence_mask_with_cutoff, coincidence_matrix};
pub use firing_rate::{firing_rate_mask, unit_rates};
pub use null_dist::{cutoff_value, NULL_COINCIDENCE};
pub use prune::{screen_and_prune, ArrayOutcome, PruneSummary, ScreenOptions, ScreenReport};

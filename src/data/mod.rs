//! Core data structures: spike counts, unit guides, trials, datasets.

pub mod spikes;
pub mod trial;
pub mod unit_guide;

pub use spikes::SpikeCounts;
pub use trial::{ArrayRecord, Dataset, RateWindow, Trial, TrialSelection, WindowEdge};
pub use unit_guide::{UnitGuide, UnitInfo};

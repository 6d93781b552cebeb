//! Error types for the spike-screen library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Percentile cutoff {0} is outside (0, 100]")]
    InvalidPercentile(f64),

    #[error("Unknown array '{0}' requested")]
    UnknownArray(String),

    #[error("Bin size mismatch: trial {trial} has {actual}, expected {expected}")]
    BinSizeMismatch {
        trial: usize,
        expected: f64,
        actual: f64,
    },

    #[error("Trial selection resolved to zero trials")]
    EmptyTrialSelection,

    #[error(
        "Array '{array}' trial {trial}: spike matrix has {spike_cols} units but unit guide has {guide_rows} rows"
    )]
    GuideMismatch {
        array: String,
        trial: usize,
        spike_cols: usize,
        guide_rows: usize,
    },

    #[error("Array '{array}' trial {trial}: {actual} units, but other trials have {expected}")]
    RaggedUnits {
        array: String,
        trial: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Array '{array}': no timebins available for statistic computation")]
    EmptyInput { array: String },

    #[error("Window resolved to zero bins in trial {trial}: {reason}")]
    EmptyWindow { trial: usize, reason: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

//! Association, impact and power metrics for 2x2 exposure/outcome tables.

pub mod batch;
pub mod engine;
pub mod normal;
pub mod power;
pub mod ratio;
pub mod result;
pub mod risk;
pub mod sample_size;
pub mod significance;
pub mod table;

/// Two-tailed significance level used for intervals, tests and power.
pub const ALPHA: f64 = 0.05;
/// Critical value of the standard normal for [`ALPHA`].
pub const Z_CRITICAL: f64 = 1.96;

pub use engine::compute_metrics;
pub use normal::cdf;
pub use result::{
    ImpactLabel, ImpactMeasure, ImpactMeasures, IntervalEstimate, MetricsResult, NntKind,
    NumberNeeded, RatioEstimate,
};
pub use sample_size::required_sample_size;
pub use significance::{two_tailed_p_value, PValue};
pub use table::{ContingencyTable, CorrectedTable, StudyDesign, StudyGoal, TableError};

//! Chart series
//!
//! Builds the experience-by-project, experience-over-time and
//! level-over-time series plus the profile summary.

pub mod builder;
pub mod profile;
pub mod types;

pub use builder::{build_all, build_experience_by_project, build_experience_by_time, build_level_over_time, ChartSet};
pub use profile::{summarize, total_experience, ProfileSummary};
pub use types::{Domain, Point, ProjectSeries, Series, TimeSeries};

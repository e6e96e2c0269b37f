//! Xpchart - experience and level progression charts
//!
//! Turns per-project experience records into three plotted series
//! (experience by project, cumulative experience over time, level over
//! time) and lays them out in a fixed logical viewport.

pub mod chart;
pub mod config;
pub mod data;
pub mod progression;
pub mod series;
pub mod ui;

// Re-export commonly used types
pub use chart::{ChartKind, ChartScene, Viewport};
pub use data::{ExperienceRecord, IngestError};
pub use series::{ChartSet, ProfileSummary, Series};

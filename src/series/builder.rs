//! Series construction
//!
//! Turns per-project experience records into the three charted series.
//! Every builder works on borrowed input and returns a fresh series.

use serde::{Deserialize, Serialize};

use super::types::{Point, ProjectSeries, Series, TimeSeries};
use crate::data::ExperienceRecord;
use crate::progression::level_from_experience;

/// The three series shown by the charts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSet {
    pub by_project: ProjectSeries,
    pub by_time: TimeSeries,
    pub level_over_time: TimeSeries,
}

/// Experience per project, ordered by project name
pub fn build_experience_by_project(records: &[ExperienceRecord]) -> ProjectSeries {
    let mut sorted: Vec<&ExperienceRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.project.cmp(&b.project));

    sorted
        .into_iter()
        .map(|r| Point::new(r.project.clone(), r.amount))
        .collect()
}

/// Running experience total, ordered by time.
///
/// Equal timestamps keep their input order. The first point carries its own
/// amount, each later point adds its amount to the previous total.
pub fn build_experience_by_time(records: &[ExperienceRecord]) -> TimeSeries {
    let mut sorted: Vec<&ExperienceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.occurred_at);

    let mut running = 0u64;
    sorted
        .into_iter()
        .map(|r| {
            running = running.saturating_add(r.amount);
            Point::new(r.occurred_at, running)
        })
        .collect()
}

/// Level reached over time, one point per level change.
///
/// Each cumulative total becomes a level; runs of the same level collapse
/// to the point where the plateau starts.
pub fn build_level_over_time(xp_by_time: &TimeSeries) -> TimeSeries {
    let mut levels: Vec<Point<_>> = xp_by_time
        .iter()
        .map(|p| Point::new(p.x, u64::from(level_from_experience(p.y))))
        .collect();

    levels.dedup_by_key(|p| p.y);
    Series::new(levels)
}

/// Build all three series from the same records
pub fn build_all(records: &[ExperienceRecord]) -> ChartSet {
    let by_project = build_experience_by_project(records);
    let by_time = build_experience_by_time(records);
    let level_over_time = build_level_over_time(&by_time);

    log::debug!(
        "Built series: {} projects, {} time points, {} level changes",
        by_project.len(),
        by_time.len(),
        level_over_time.len()
    );

    ChartSet {
        by_project,
        by_time,
        level_over_time,
    }
}

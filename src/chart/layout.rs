//! Chart layout
//!
//! Resolves a series into viewport-space ticks, points and bars. The result
//! is plain data; drawing it is up to the front-end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::axis::{choose_nice_step, enumerate_ticks, month_ticks};
use super::coords::{PixelRect, Viewport};
use crate::series::{ChartSet, Domain, ProjectSeries, TimeSeries};

const DATE_LABEL: &str = "%Y-%m-%d";

/// The three available charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    LevelByTime,
    XpByTime,
    XpByProject,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::LevelByTime, ChartKind::XpByTime, ChartKind::XpByProject];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::LevelByTime => "Level by time",
            ChartKind::XpByTime => "XP by time",
            ChartKind::XpByProject => "XP by project",
        }
    }

    /// Next chart in display order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            ChartKind::LevelByTime => ChartKind::XpByTime,
            ChartKind::XpByTime => ChartKind::XpByProject,
            ChartKind::XpByProject => ChartKind::LevelByTime,
        }
    }
}

/// Labelled position along one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub rect: PixelRect,
    pub label: String,
}

/// Data marks of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Marks {
    /// Points joined in order by a polyline
    Line(Vec<PlotPoint>),
    Bars(Vec<Bar>),
}

/// A fully positioned chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub kind: ChartKind,
    pub viewport: Viewport,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub marks: Marks,
}

impl ChartScene {
    /// Bounding box of the viewport and everything placed in the scene.
    ///
    /// Y ticks past the domain top and the last bar can fall outside the
    /// viewport itself.
    pub fn extent(&self) -> PixelRect {
        let (mut min_x, mut max_x) = (0.0f64, self.viewport.width);
        let (mut min_y, mut max_y) = (0.0f64, self.viewport.height);

        let mut include = |x: f64, y: f64| {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        };

        for tick in &self.y_ticks {
            include(0.0, tick.position);
        }
        for tick in &self.x_ticks {
            include(tick.position, self.viewport.height);
        }
        match &self.marks {
            Marks::Line(points) => {
                for p in points {
                    include(p.x, p.y);
                }
            }
            Marks::Bars(bars) => {
                for bar in bars {
                    include(bar.rect.x, bar.rect.y);
                    include(bar.rect.x + bar.rect.width, bar.rect.y + bar.rect.height);
                }
            }
        }

        PixelRect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

fn value_tick(value: f64, domain: &Domain<f64>, viewport: &Viewport) -> Tick {
    Tick {
        position: viewport.map_numeric_to_y(value, domain.min, domain.max),
        label: format!("{:.0}", value),
    }
}

/// Value axis ticks; a single-valued domain gets one tick on the bottom edge
fn value_ticks(domain: &Domain<f64>, count: usize, viewport: &Viewport) -> Vec<Tick> {
    if domain.is_degenerate() {
        return vec![value_tick(domain.min, domain, viewport)];
    }

    let step = choose_nice_step(domain.min, domain.max, count);
    enumerate_ticks(domain.min, domain.max, step)
        .into_iter()
        .map(|value| value_tick(value, domain, viewport))
        .collect()
}

/// Month ticks placed on the same grid the points are mapped onto
fn date_ticks(min: DateTime<Utc>, max: DateTime<Utc>, viewport: &Viewport) -> Vec<Tick> {
    month_ticks(min, max)
        .into_iter()
        .map(|date| Tick {
            position: viewport.map_date_to_x(date, min, max),
            label: date.format(DATE_LABEL).to_string(),
        })
        .collect()
}

/// Lay out a time-keyed series as a point/line chart
pub fn layout_time_chart(kind: ChartKind, series: &TimeSeries, viewport: &Viewport) -> Option<ChartScene> {
    let x_domain = series.x_domain()?;
    let y_domain = series.y_domain()?;
    let y_domain = Domain::new(y_domain.min as f64, y_domain.max as f64);

    let points = series
        .iter()
        .map(|p| PlotPoint {
            x: viewport.map_date_to_x(p.x, x_domain.min, x_domain.max),
            y: viewport.map_numeric_to_y(p.y as f64, y_domain.min, y_domain.max),
            label: p.x.format(DATE_LABEL).to_string(),
        })
        .collect();

    Some(ChartScene {
        kind,
        viewport: *viewport,
        x_ticks: date_ticks(x_domain.min, x_domain.max, viewport),
        y_ticks: value_ticks(&y_domain, series.len(), viewport),
        marks: Marks::Line(points),
    })
}

/// Lay out experience per project as a bar chart over `[0, max]`
pub fn layout_project_chart(series: &ProjectSeries, viewport: &Viewport) -> Option<ChartScene> {
    if series.is_empty() {
        return None;
    }

    let count = series.len();
    let y_domain = Domain::new(0.0, series.iter().map(|p| p.y).max().unwrap_or(0) as f64);

    let x_ticks = series
        .iter()
        .enumerate()
        .map(|(i, p)| Tick {
            position: viewport.map_categorical_to_x(i, count),
            label: p.x.clone(),
        })
        .collect();

    let bars = series
        .iter()
        .enumerate()
        .map(|(i, p)| Bar {
            rect: viewport.bar_rect(i, count, p.y as f64, y_domain.min, y_domain.max),
            label: format!("xp: {}\nproject: {}", p.y, p.x),
        })
        .collect();

    Some(ChartScene {
        kind: ChartKind::XpByProject,
        viewport: *viewport,
        x_ticks,
        y_ticks: value_ticks(&y_domain, count, viewport),
        marks: Marks::Bars(bars),
    })
}

/// Lay out one chart of the set, `None` when its series is empty
pub fn layout_chart(kind: ChartKind, charts: &ChartSet, viewport: &Viewport) -> Option<ChartScene> {
    match kind {
        ChartKind::LevelByTime => layout_time_chart(kind, &charts.level_over_time, viewport),
        ChartKind::XpByTime => layout_time_chart(kind, &charts.by_time, viewport),
        ChartKind::XpByProject => layout_project_chart(&charts.by_project, viewport),
    }
}

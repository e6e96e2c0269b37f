//! Chart geometry
//!
//! Axis scaling, coordinate mapping into the logical viewport, and the
//! layout of complete chart scenes.

pub mod axis;
pub mod coords;
pub mod layout;

pub use axis::{choose_nice_step, enumerate_ticks, first_of_month, month_grid, month_segments, month_ticks, MIN_STEP};
pub use coords::{PixelRect, Viewport, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use layout::{layout_chart, layout_project_chart, layout_time_chart, Bar, ChartKind, ChartScene, Marks, PlotPoint, Tick};

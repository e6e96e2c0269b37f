//! User Interface module
//!
//! Terminal front-end drawing the charts with ratatui.

pub mod app;
pub mod canvas;

pub use app::App;

//! Coordinate mapping
//!
//! Linear mapping from domain values into a fixed logical viewport. The
//! viewport uses screen orientation: x grows to the right, y grows downward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::axis::month_grid;

/// Default logical width
pub const VIEWPORT_WIDTH: f64 = 1000.0;
/// Default logical height
pub const VIEWPORT_HEIGHT: f64 = 500.0;

/// Fixed-size logical drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents are finite and positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Vertical position of `value`, with `min` on the bottom edge and `max`
    /// on the top edge. A single-valued domain uses the full height as its
    /// unit length.
    pub fn map_numeric_to_y(&self, value: f64, min: f64, max: f64) -> f64 {
        let span = max - min;
        let unit = if span == 0.0 || !span.is_finite() {
            self.height
        } else {
            self.height / span
        };
        self.height - unit * (value - min)
    }

    /// Horizontal position of a date on a month grid.
    ///
    /// The grid runs from the first of `min`'s month to the first of the
    /// month after `max`'s, one segment per calendar month, and spans the
    /// full width. Positions are proportional to elapsed time, so the
    /// normalized maximum lands on its own month tick and every date in
    /// `[min, max]` stays inside the viewport.
    pub fn map_date_to_x(&self, value: DateTime<Utc>, min: DateTime<Utc>, max: DateTime<Utc>) -> f64 {
        let (start, Some(end)) = month_grid(min, max) else {
            return 0.0;
        };
        let span = (end - start).num_milliseconds() as f64;
        if span <= 0.0 {
            return 0.0;
        }

        let elapsed = (value - start).num_milliseconds() as f64;
        elapsed / span * self.width
    }

    /// Evenly spaced categorical position, first at 0 and last at the width
    pub fn map_categorical_to_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        self.width / (count - 1) as f64 * index as f64
    }

    /// Bar height for `value` on a categorical axis of `count` bars.
    ///
    /// The normalized value is divided by `count` and stretched by
    /// `count - 1`, so bar heights top out at `(count - 1) / count` of the
    /// viewport height.
    pub fn map_value_to_bar_height(&self, value: f64, min: f64, max: f64, count: usize) -> f64 {
        let span = max - min;
        if count == 0 || span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - min) / span / count as f64 * self.height * (count - 1) as f64
    }

    /// Width of one categorical slot
    pub fn category_width(&self, count: usize) -> f64 {
        if count <= 1 {
            self.width
        } else {
            self.width / (count - 1) as f64
        }
    }

    /// Rectangle of bar `index`, starting at its category tick and rising
    /// from the bottom edge
    pub fn bar_rect(&self, index: usize, count: usize, value: f64, min: f64, max: f64) -> PixelRect {
        let width = self.category_width(count);
        let height = self.map_value_to_bar_height(value, min, max, count);
        PixelRect {
            x: width * index as f64,
            y: self.height - height,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::axis::first_of_month;
    use chrono::TimeZone;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_numeric_to_y() {
        let vp = Viewport::default();
        assert_eq!(vp.map_numeric_to_y(0.0, 0.0, 100.0), 500.0);
        assert_eq!(vp.map_numeric_to_y(100.0, 0.0, 100.0), 0.0);
        assert_eq!(vp.map_numeric_to_y(50.0, 0.0, 100.0), 250.0);
        // Ticks past the top land above the viewport
        assert!(vp.map_numeric_to_y(120.0, 0.0, 100.0) < 0.0);
    }

    #[test]
    fn test_numeric_to_y_degenerate() {
        let vp = Viewport::default();
        let y = vp.map_numeric_to_y(5.0, 5.0, 5.0);
        assert!(y.is_finite());
        assert_eq!(y, 500.0);
    }

    #[test]
    fn test_categorical_spacing() {
        let vp = Viewport::default();
        assert_eq!(vp.map_categorical_to_x(0, 4), 0.0);
        assert!(approx(vp.map_categorical_to_x(3, 4), vp.width));
        assert_eq!(vp.map_categorical_to_x(0, 1), 0.0);
        assert_eq!(vp.map_categorical_to_x(0, 0), 0.0);
    }

    #[test]
    fn test_date_to_x() {
        let vp = Viewport::default();
        let min = Utc.with_ymd_and_hms(2023, 1, 15, 10, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2023, 3, 20, 10, 0, 0).unwrap();

        assert_eq!(vp.map_date_to_x(first_of_month(min), min, max), 0.0);
        // Grid is Jan 1 .. Apr 1 (90 days); March 1st is 59 days in
        assert!(approx(vp.map_date_to_x(first_of_month(max), min, max), 1000.0 * 59.0 / 90.0));

        let x_min = vp.map_date_to_x(min, min, max);
        let x_max = vp.map_date_to_x(max, min, max);
        assert!(x_min > 0.0 && x_min < x_max && x_max < vp.width);
    }

    #[test]
    fn test_date_to_x_across_short_month_boundary() {
        let vp = Viewport::default();
        let min = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2023, 2, 13, 0, 0, 0).unwrap();

        let xs: Vec<f64> = [min, mid, max].iter().map(|d| vp.map_date_to_x(*d, min, max)).collect();
        assert!(xs[0] > 0.0);
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
        assert!(xs[2] < vp.width);

        // Feb 1st sits 31 days into the 59-day Jan..Mar grid
        assert!(approx(vp.map_date_to_x(first_of_month(max), min, max), 1000.0 * 31.0 / 59.0));
    }

    #[test]
    fn test_date_to_x_single_month() {
        let vp = Viewport::default();
        let at = Utc.with_ymd_and_hms(2023, 5, 9, 6, 0, 1).unwrap();
        let x = vp.map_date_to_x(at, at, at);
        // 8 days into May
        assert!(approx(x, 1000.0 * 8.0 / 31.0));
        assert_eq!(vp.map_date_to_x(first_of_month(at), at, at), 0.0);
    }

    #[test]
    fn test_viewport_validity() {
        assert!(Viewport::default().is_valid());
        assert!(!Viewport::new(0.0, 500.0).is_valid());
        assert!(!Viewport::new(1000.0, -1.0).is_valid());
        assert!(!Viewport::new(f64::NAN, 500.0).is_valid());
        assert!(!Viewport::new(f64::INFINITY, 500.0).is_valid());
    }

    #[test]
    fn test_bar_height_scaling() {
        let vp = Viewport::default();
        assert!(approx(vp.map_value_to_bar_height(100.0, 0.0, 100.0, 4), 375.0));
        assert!(approx(vp.map_value_to_bar_height(50.0, 0.0, 100.0, 4), 187.5));
        assert_eq!(vp.map_value_to_bar_height(100.0, 0.0, 100.0, 1), 0.0);
        assert_eq!(vp.map_value_to_bar_height(7.0, 7.0, 7.0, 3), 0.0);
        assert_eq!(vp.map_value_to_bar_height(7.0, 0.0, 7.0, 0), 0.0);
    }

    #[test]
    fn test_bar_rect() {
        let vp = Viewport::default();
        let rect = vp.bar_rect(1, 3, 100.0, 0.0, 100.0);

        assert!(approx(rect.width, 500.0));
        assert!(approx(rect.x, 500.0));
        assert!(approx(rect.height, 500.0 * 2.0 / 3.0));
        assert!(approx(rect.y + rect.height, vp.height));
    }

    #[test]
    fn test_bar_rect_single_category() {
        let vp = Viewport::default();
        let rect = vp.bar_rect(0, 1, 40.0, 0.0, 40.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, vp.width);
        assert_eq!(rect.height, 0.0);
    }
}

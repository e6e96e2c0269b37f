//! Plottable series
//!
//! Ordered `(x, y)` pairs and the domains they span.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single plotted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<X> {
    pub x: X,
    pub y: u64,
}

impl<X> Point<X> {
    pub fn new(x: X, y: u64) -> Self {
        Self { x, y }
    }
}

/// Inclusive `[min, max]` range over one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Domain<T> {
    /// Build a domain, swapping the bounds if they arrive reversed
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// A domain collapsed to a single value
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Ordered sequence of points ready for coordinate mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series<X> {
    points: Vec<Point<X>>,
}

/// Experience per project, keyed by project name
pub type ProjectSeries = Series<String>;

/// Values over time, keyed by timestamp
pub type TimeSeries = Series<DateTime<Utc>>;

impl<X> Series<X> {
    pub fn new(points: Vec<Point<X>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<X>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<X>> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point<X>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point<X>> {
        self.points.last()
    }

    /// Smallest and largest y value, `None` when empty
    pub fn y_domain(&self) -> Option<Domain<u64>> {
        let min = self.points.iter().map(|p| p.y).min()?;
        let max = self.points.iter().map(|p| p.y).max()?;
        Some(Domain { min, max })
    }

    pub fn into_points(self) -> Vec<Point<X>> {
        self.points
    }
}

impl<X: Clone + Ord> Series<X> {
    /// Smallest and largest x key, `None` when empty
    pub fn x_domain(&self) -> Option<Domain<X>> {
        let min = self.points.iter().map(|p| &p.x).min()?.clone();
        let max = self.points.iter().map(|p| &p.x).max()?.clone();
        Some(Domain { min, max })
    }
}

impl<X> Default for Series<X> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<X> FromIterator<Point<X>> for Series<X> {
    fn from_iter<I: IntoIterator<Item = Point<X>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, X> IntoIterator for &'a Series<X> {
    type Item = &'a Point<X>;
    type IntoIter = std::slice::Iter<'a, Point<X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains() {
        let series: Series<u32> = vec![Point::new(3, 40), Point::new(1, 10), Point::new(2, 25)]
            .into_iter()
            .collect();

        assert_eq!(series.y_domain(), Some(Domain { min: 10, max: 40 }));
        assert_eq!(series.x_domain(), Some(Domain { min: 1, max: 3 }));
    }

    #[test]
    fn test_empty_series_has_no_domain() {
        let series: ProjectSeries = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.y_domain(), None);
        assert_eq!(series.x_domain(), None);
    }

    #[test]
    fn test_domain_new_orders_bounds() {
        let domain = Domain::new(9, 2);
        assert_eq!(domain.min, 2);
        assert_eq!(domain.max, 9);
        assert!(!domain.is_degenerate());
        assert!(Domain::new(5, 5).is_degenerate());
    }
}

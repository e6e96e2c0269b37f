//! Axis scaling
//!
//! Tick step selection for value axes and month ticks for date axes.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};

/// Step used whenever the domain gives nothing to divide
pub const MIN_STEP: f64 = 1.0;

/// Time of day month ticks are pinned to
const TICK_HOUR: u32 = 6;
const TICK_MINUTE: u32 = 0;
const TICK_SECOND: u32 = 1;

/// Pick a readable step for roughly `approx_count` ticks over `[min, max]`.
///
/// The raw step is brought down to a single digit by the largest power of
/// ten below it, rounded, and scaled back up, so 95.3 becomes 100 and 31
/// becomes 30. Degenerate input gets [`MIN_STEP`].
pub fn choose_nice_step(min: f64, max: f64, approx_count: usize) -> f64 {
    if approx_count == 0 || !min.is_finite() || !max.is_finite() || max <= min {
        return MIN_STEP;
    }

    let raw = (max - min) / approx_count as f64;
    let whole = raw.trunc();

    let mut scale = 10.0;
    while whole / scale > 1.0 {
        scale *= 10.0;
    }
    scale /= 10.0;

    let step = (raw / scale).round() * scale;
    if step > 0.0 && step.is_finite() {
        step
    } else {
        MIN_STEP
    }
}

/// Tick values from `min` in `step` increments, ending at or past `max`.
///
/// Ticks continue while `value <= max + step - 1`, so the last tick covers
/// the top of the domain. An unusable step yields just `min`.
pub fn enumerate_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if !(step > 0.0 && step.is_finite()) {
        return vec![min];
    }

    let limit = max + step - 1.0;
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let value = min + step * f64::from(i);
        if value > limit {
            break;
        }
        ticks.push(value);
        i += 1;
    }

    ticks
}

/// First day of the month of `at`, pinned to 06:00:01 UTC
pub fn first_of_month(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(at.year(), at.month(), 1, TICK_HOUR, TICK_MINUTE, TICK_SECOND)
        .single()
        .unwrap_or(at)
}

/// Calendar months from `min`'s month to `max`'s month, plus one.
///
/// This is the number of month-wide segments the date axis needs so that
/// `max` falls inside the last one.
pub fn month_segments(min: DateTime<Utc>, max: DateTime<Utc>) -> u32 {
    let months = (i64::from(max.year()) - i64::from(min.year())) * 12 + i64::from(max.month())
        - i64::from(min.month());
    u32::try_from(months.max(0) + 1).unwrap_or(u32::MAX)
}

/// Start and end of the month grid covering `[min, max]`: the first of
/// `min`'s month and the first of the month after `max`'s.
pub fn month_grid(min: DateTime<Utc>, max: DateTime<Utc>) -> (DateTime<Utc>, Option<DateTime<Utc>>) {
    let start = first_of_month(min);
    (start, start.checked_add_months(Months::new(month_segments(min, max))))
}

/// Month ticks covering `[min, max]`.
///
/// Starts at the first of `min`'s month and advances one calendar month per
/// tick, producing `month_segments(min, max) + 1` ticks.
pub fn month_ticks(min: DateTime<Utc>, max: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let count = month_segments(min, max) as usize + 1;

    std::iter::successors(Some(first_of_month(min)), |tick| {
        tick.checked_add_months(Months::new(1))
    })
    .take(count)
    .collect()
}

//! Experience and leveling
//!
//! Level thresholds and the inversion from a cumulative experience total
//! back to a level.

/// Experience needed to advance from `level` to `level + 1`.
///
/// This is `round((0.66 * level + 1) * ((level + 2) * 150 + 50))`, which is
/// always a whole number and reduces to `(33 * level + 50) * (3 * level + 7)`.
pub fn experience_required_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    (33 * level + 50).saturating_mul(3 * level + 7)
}

/// Total experience needed to reach `level` from level 0
pub fn cumulative_experience_for_level(level: u32) -> u64 {
    (1..=level)
        .map(experience_required_for_level)
        .fold(0u64, u64::saturating_add)
}

/// Smallest level whose cumulative threshold is at or above `total_xp`.
///
/// Walks the thresholds upward from level 0 keeping a running total, so
/// `level_from_experience(0) == 0` and
/// `level_from_experience(cumulative_experience_for_level(n)) == n`.
pub fn level_from_experience(total_xp: u64) -> u32 {
    let mut level = 0u32;
    let mut cumulative = 0u64;

    // Saturation guarantees the walk ends even for u64::MAX.
    while cumulative < total_xp {
        level += 1;
        cumulative = cumulative.saturating_add(experience_required_for_level(level));
    }

    level
}

//! Profile summary
//!
//! Totals reported next to the charts.

use serde::{Deserialize, Serialize};

use crate::data::ExperienceRecord;
use crate::progression::level_from_experience;

/// Login, total experience and the level it reaches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub login: String,
    pub total_xp: u64,
    pub level: u32,
}

/// Sum of every record amount
pub fn total_experience(records: &[ExperienceRecord]) -> u64 {
    records
        .iter()
        .map(|r| r.amount)
        .fold(0u64, u64::saturating_add)
}

pub fn summarize(login: impl Into<String>, records: &[ExperienceRecord]) -> ProfileSummary {
    let total_xp = total_experience(records);
    ProfileSummary {
        login: login.into(),
        total_xp,
        level: level_from_experience(total_xp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summarize() {
        let at = Utc.with_ymd_and_hms(2023, 4, 2, 10, 0, 0).unwrap();
        let records = vec![
            ExperienceRecord::new(1000, "A", at),
            ExperienceRecord::new(2000, "B", at),
        ];
        let summary = summarize("KRaken", &records);

        assert_eq!(summary.login, "KRaken");
        assert_eq!(summary.total_xp, 3000);
        assert_eq!(summary.level, 3);
    }

    #[test]
    fn test_summarize_no_records() {
        let summary = summarize("nobody", &[]);
        assert_eq!(summary.total_xp, 0);
        assert_eq!(summary.level, 0);
    }
}

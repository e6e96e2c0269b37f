//! Record loader
//!
//! Reads exported xp transactions from a JSON file. Anything that goes wrong
//! while fetching is logged and treated as "no data".

use std::fs;
use std::path::Path;

use super::records::{ingest, keep_highest_per_project, ExperienceRecord, IngestError, RawTransaction};

/// Read raw transactions from a JSON export, or an empty list on failure
pub fn fetch_records(path: &Path) -> Vec<RawTransaction> {
    if !path.exists() {
        log::warn!("Records file {:?} not found, no data to chart", path);
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Vec<RawTransaction>>(&content) {
            Ok(raw) => {
                log::info!("Fetched {} transactions from {:?}", raw.len(), path);
                raw
            }
            Err(e) => {
                log::warn!("Failed to parse {:?}: {}", path, e);
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("Failed to read {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Fetch, keep one transaction per project and validate
pub fn load_records(path: &Path) -> Result<Vec<ExperienceRecord>, IngestError> {
    let raw = keep_highest_per_project(fetch_records(path));
    ingest(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records() {
        let file = write_temp(
            r#"[
                {"projectId": 1, "projectName": "go-reloaded", "amount": 9000, "createdAt": "2022-11-02T09:00:00Z"},
                {"projectId": 1, "projectName": "go-reloaded", "amount": 4500, "createdAt": "2022-11-01T09:00:00Z"},
                {"projectId": 2, "projectName": "ascii-art", "amount": 12000, "createdAt": "2022-12-10T09:00:00Z"}
            ]"#,
        );

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].project, "go-reloaded");
        assert_eq!(records[0].amount, 9000);
        assert_eq!(records[1].amount, 12000);
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_records(&dir.path().join("absent.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_file_is_no_data() {
        let file = write_temp("{ not json");
        assert!(fetch_records(file.path()).is_empty());
    }

    #[test]
    fn test_fractional_amount_is_no_data() {
        let file = write_temp(
            r#"[{"projectName": "forum", "amount": 12.5, "createdAt": "2023-02-11T08:30:00Z"}]"#,
        );
        assert!(fetch_records(file.path()).is_empty());
    }

    #[test]
    fn test_negative_amount_is_reported() {
        let file = write_temp(
            r#"[{"projectName": "forum", "amount": -300, "createdAt": "2023-02-11T08:30:00Z"}]"#,
        );
        assert!(matches!(
            load_records(file.path()),
            Err(IngestError::NegativeAmount { amount: -300, .. })
        ));
    }
}

//! Experience records
//!
//! Raw transactions as exported by the fetch layer, and the validated
//! per-project records the series are built from.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One xp transaction as delivered by the fetch layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Project identifier, when the export carries one
    #[serde(default)]
    pub project_id: Option<i64>,
    pub project_name: String,
    /// Signed as delivered; negative amounts are rejected on ingestion
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Experience earned for a single completed project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub amount: u64,
    pub project: String,
    pub occurred_at: DateTime<Utc>,
}

impl ExperienceRecord {
    pub fn new(amount: u64, project: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            project: project.into(),
            occurred_at,
        }
    }
}

/// Reasons a raw transaction cannot become an [`ExperienceRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("negative experience amount {amount} for project '{project}'")]
    NegativeAmount { project: String, amount: i64 },
    #[error("transaction at {created_at} has no project name")]
    EmptyProjectName { created_at: DateTime<Utc> },
}

impl TryFrom<&RawTransaction> for ExperienceRecord {
    type Error = IngestError;

    fn try_from(raw: &RawTransaction) -> Result<Self, Self::Error> {
        if raw.project_name.trim().is_empty() {
            return Err(IngestError::EmptyProjectName {
                created_at: raw.created_at,
            });
        }

        let amount = u64::try_from(raw.amount).map_err(|_| IngestError::NegativeAmount {
            project: raw.project_name.clone(),
            amount: raw.amount,
        })?;

        Ok(ExperienceRecord::new(amount, raw.project_name.clone(), raw.created_at))
    }
}

/// Validate raw transactions, stopping at the first invalid one
pub fn ingest(raw: &[RawTransaction]) -> Result<Vec<ExperienceRecord>, IngestError> {
    let records = raw
        .iter()
        .map(ExperienceRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Ingested {} experience records", records.len());
    Ok(records)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ProjectKey {
    Id(i64),
    Name(String),
}

impl ProjectKey {
    fn of(raw: &RawTransaction) -> Self {
        match raw.project_id {
            Some(id) => ProjectKey::Id(id),
            None => ProjectKey::Name(raw.project_name.clone()),
        }
    }
}

/// Keep only the largest transaction of each project.
///
/// Projects are keyed by id when present, otherwise by name. Ties keep the
/// earlier transaction, and projects stay in first-seen order.
pub fn keep_highest_per_project(raw: Vec<RawTransaction>) -> Vec<RawTransaction> {
    let mut kept: Vec<RawTransaction> = Vec::new();
    let mut index_of: HashMap<ProjectKey, usize> = HashMap::new();

    for tx in raw {
        let key = ProjectKey::of(&tx);
        match index_of.get(&key) {
            Some(&idx) => {
                if tx.amount > kept[idx].amount {
                    kept[idx] = tx;
                }
            }
            None => {
                index_of.insert(key, kept.len());
                kept.push(tx);
            }
        }
    }

    kept
}

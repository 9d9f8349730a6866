use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::error::RecordError;
use crate::model::record::DailyRecord;
use crate::model::tab::Tab;
use crate::repository::RecordRepository;
use crate::service::dto::{Insights, Projection, Summary};
use crate::service::projection::project;

/// The session's records, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<DailyRecord>,
    source: String,
    load_error: Option<String>,
}

impl RecordStore {
    /// Loads and validates records from `repo`.
    ///
    /// A failing source or an invalid dataset leaves the store empty; the
    /// failure is logged and kept in [`RecordStore::load_error`].
    pub fn load<R: RecordRepository>(repo: &R) -> Self {
        let source = repo.describe();
        let loaded = repo.list().and_then(|records| {
            validate_records(&records)?;
            Ok(records)
        });

        match loaded {
            Ok(records) => {
                info!(source = %source, count = records.len(), "loaded utility records");
                Self { records, source, load_error: None }
            }
            Err(e) => {
                let message = format!("{:#}", e);
                error!(source = %source, error = %message, "failed to load utility records");
                Self {
                    records: Vec::new(),
                    source,
                    load_error: Some(message),
                }
            }
        }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn projection(&self, tab: Tab) -> Projection {
        project(tab, &self.records)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    pub fn insights(&self) -> Insights {
        Insights::from_records(&self.records)
    }
}

/// kWh slack allowed between the three tiers and the daily total.
const TIER_SUM_TOLERANCE: f64 = 0.01;

/// Checks occupancy range, unique dates and ascending order.
///
/// Ordering uses the parsed calendar date when both neighbours have one,
/// otherwise the raw `date` strings. An average temperature outside the
/// min/max range, or tiers that do not add up to the total, are only
/// warned about.
pub fn validate_records(records: &[DailyRecord]) -> Result<(), RecordError> {
    let mut seen = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        if !(0.0..=100.0).contains(&record.occupancy) {
            return Err(RecordError::OccupancyOutOfRange {
                date: record.date.clone(),
                value: record.occupancy,
            });
        }

        if !seen.insert(record.date.as_str()) {
            return Err(RecordError::DuplicateDate(record.date.clone()));
        }

        if record.avg_temp < record.min_temp || record.avg_temp > record.max_temp {
            warn!(date = %record.date, avg = record.avg_temp, min = record.min_temp, max = record.max_temp,
                "average temperature outside daily range");
        }

        let tier_sum = record.electricity_tier_sum();
        if (tier_sum - record.total_elec_usage).abs() > TIER_SUM_TOLERANCE {
            warn!(date = %record.date, tiers = tier_sum, total = record.total_elec_usage,
                "electricity tiers do not add up to the total");
        }

        if i > 0 {
            let previous = &records[i - 1];
            let ascending = match (previous.calendar_date(), record.calendar_date()) {
                (Some(a), Some(b)) => a < b,
                _ => previous.date < record.date,
            };
            if !ascending {
                return Err(RecordError::OutOfOrder {
                    previous: previous.date.clone(),
                    date: record.date.clone(),
                });
            }
        }
    }

    Ok(())
}

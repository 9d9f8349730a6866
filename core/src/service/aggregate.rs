use crate::model::record::DailyRecord;
use crate::service::dto::Summary;

pub fn total_electricity(records: &[DailyRecord]) -> f64 {
    records.iter().map(|r| r.total_elec_usage).sum()
}

/// Mean occupancy, `None` when there are no records.
pub fn average_occupancy(records: &[DailyRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.occupancy).sum();
    Some(sum / records.len() as f64)
}

/// Largest daily total, `None` when there are no records.
pub fn max_electricity(records: &[DailyRecord]) -> Option<f64> {
    records.iter().map(|r| r.total_elec_usage).reduce(f64::max)
}

impl Summary {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        Self {
            total_electricity: total_electricity(records),
            average_occupancy: average_occupancy(records),
            max_electricity: max_electricity(records),
        }
    }
}

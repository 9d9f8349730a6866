use crate::model::record::DailyRecord;
use anyhow::Result;

pub trait RecordRepository {
    /// Human readable name of the source, used in logs.
    fn describe(&self) -> String;
    fn list(&self) -> Result<Vec<DailyRecord>>;
}

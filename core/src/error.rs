use thiserror::Error;

/// A loaded record sequence breaks one of the dataset invariants.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record {date}: occupancy {value} is outside 0-100")]
    OccupancyOutOfRange { date: String, value: f64 },

    #[error("date {0} appears more than once")]
    DuplicateDate(String),

    #[error("record {date} is out of order (follows {previous})")]
    OutOfOrder { previous: String, date: String },
}

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use config::DashboardConfig;
pub use error::RecordError;
pub use model::format::{format_grouped, CorrelationField, SeriesId, ValueFormat};
pub use model::record::DailyRecord;
pub use model::tab::{Tab, TabSelector};
pub use repository::{FileRecordRepository, RecordRepository, SampleRecordRepository};
pub use service::aggregate::{average_occupancy, max_electricity, total_electricity};
pub use service::dto::{CorrelationPoint, ElectricityPoint, GasPoint, Insights, Projection, Summary, UtilizationPoint, WeekSplit};
pub use service::projection::{correlation_pairs, electricity_series, gas_series, project, utilization_series};
pub use service::record_store::{validate_records, RecordStore};

pub mod file;
pub mod sample;
pub mod traits;

// Re-export
pub use file::FileRecordRepository;
pub use sample::{sample_records, SampleRecordRepository};
pub use traits::RecordRepository;

pub mod aggregate;
pub mod dto;
pub mod insights;
pub mod projection;
pub mod record_store;

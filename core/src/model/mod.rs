pub mod format;
pub mod record;
pub mod tab;

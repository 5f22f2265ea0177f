//! Dedupe service implementations

pub mod record_store;

#[cfg(test)]
pub mod tests;

pub use record_store::RealRecordStore;

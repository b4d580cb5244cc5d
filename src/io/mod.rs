//! File export helpers for engine records.

/// CSV export for the action log and hourly history.
pub mod export;

/// Injected time source for hour-of-day and timestamps.
pub mod clock;
pub mod controller;
pub mod history;
/// Append-only ledger of state-change actions.
pub mod journal;
pub mod power;
pub mod types;

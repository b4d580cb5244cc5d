//! Shared builders for integration tests.

use home_sim::config::HomeConfig;
use home_sim::home::clock::FixedClock;
use home_sim::home::controller::HomeController;

/// Baseline household configuration (the original fixed ratings).
pub fn baseline_config() -> HomeConfig {
    HomeConfig::baseline()
}

/// Controller driven by a deterministic clock pinned to `hour`.
pub fn controller_at(hour: usize) -> HomeController<FixedClock> {
    HomeController::new(&baseline_config(), FixedClock::new(hour))
}

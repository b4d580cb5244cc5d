//! Append-only action ledger.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::devices::DeviceId;

/// How many entries a snapshot renders.
pub const SNAPSHOT_LOG_LEN: usize = 10;

/// How many entries a per-device detail view renders.
pub const DETAIL_LOG_LEN: usize = 5;

/// One recorded state-change action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Time of day the action happened, `HH:MM:SS`.
    pub time: String,
    /// Device the action applied to.
    pub device: DeviceId,
    /// Human-readable description, e.g. `"Turn ON"`.
    pub action: String,
    /// Actor label. Always `"User"` in this single-session system.
    pub user: String,
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<10}  {:<24}  {}",
            self.time, self.device, self.action, self.user
        )
    }
}

/// Ordered ledger of state-change actions, newest first.
///
/// Storage is unbounded for the life of the session; rendering windows are
/// bounded by [`SNAPSHOT_LOG_LEN`] and [`DETAIL_LOG_LEN`].
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<ActionEntry>,
}

impl ActionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry; O(1) amortized.
    pub fn record(&mut self, entry: ActionEntry) {
        self.entries.push_front(entry);
    }

    /// Iterates over the `n` most recent entries, newest first. Fewer than
    /// `n` entries yields all of them.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter().take(n)
    }

    /// Lazily iterates over the entries for one device, newest first.
    pub fn for_device(&self, device: DeviceId) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter().filter(move |e| e.device == device)
    }

    /// Total number of entries recorded this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hour: usize, device: DeviceId, action: &str) -> ActionEntry {
        ActionEntry {
            time: format!("{hour:02}:00:00"),
            device,
            action: action.to_string(),
            user: "User".to_string(),
        }
    }

    #[test]
    fn recent_returns_newest_first() {
        let mut log = ActionLog::new();
        log.record(entry(8, DeviceId::Light, "Turn ON"));
        log.record(entry(9, DeviceId::Light, "Turn OFF"));
        log.record(entry(10, DeviceId::Fan, "Speed set to 2"));

        let actions: Vec<&str> = log.recent(3).map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["Speed set to 2", "Turn OFF", "Turn ON"]);
    }

    #[test]
    fn recent_caps_at_requested_count() {
        let mut log = ActionLog::new();
        for i in 0..20 {
            log.record(entry(i % 24, DeviceId::Light, &format!("action {i}")));
        }
        assert_eq!(log.recent(10).count(), 10);
        assert_eq!(log.recent(3).next().map(|e| e.action.as_str()), Some("action 19"));
    }

    #[test]
    fn recent_with_fewer_entries_returns_all() {
        let mut log = ActionLog::new();
        log.record(entry(1, DeviceId::Door, "Lock"));
        assert_eq!(log.recent(10).count(), 1);
    }

    #[test]
    fn for_device_filters_and_preserves_order() {
        let mut log = ActionLog::new();
        log.record(entry(8, DeviceId::Light, "Turn ON"));
        log.record(entry(9, DeviceId::Door, "Lock"));
        log.record(entry(10, DeviceId::Light, "Turn OFF"));

        let light: Vec<&str> = log
            .for_device(DeviceId::Light)
            .map(|e| e.action.as_str())
            .collect();
        assert_eq!(light, ["Turn OFF", "Turn ON"]);

        // filtering does not consume the log
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn for_device_with_no_entries_is_empty() {
        let log = ActionLog::new();
        assert_eq!(log.for_device(DeviceId::Fan).count(), 0);
    }

    #[test]
    fn display_does_not_panic() {
        let e = entry(14, DeviceId::Thermostat, "Set to 24.5°C");
        let s = format!("{e}");
        assert!(s.contains("thermostat"));
        assert!(s.contains("24.5"));
    }
}

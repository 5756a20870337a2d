//! ConnectionState - Connection Status for the Backend and TeddyCloud

use std::collections::HashMap;

/// Connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionTarget {
    /// The management backend this client talks to
    Backend,
    /// The TeddyCloud server behind the backend
    TeddyCloud,
}

impl ConnectionTarget {
    pub fn label_key(&self) -> &'static str {
        match self {
            ConnectionTarget::Backend => "status-backend",
            ConnectionTarget::TeddyCloud => "status-teddycloud",
        }
    }
}

/// Status of a single connection
#[derive(Debug, Clone, Default)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub detail: Option<String>,
}

/// State for all service connections
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    statuses: HashMap<ConnectionTarget, ConnectionStatus>,
    /// Whether a status probe is in flight
    pub checking: bool,
}

impl ConnectionState {
    /// Set status for a connection target
    pub fn set_status(&mut self, target: ConnectionTarget, connected: bool, detail: Option<String>) {
        self.statuses.insert(target, ConnectionStatus { connected, detail });
    }

    /// Get status for a connection target
    pub fn get_status(&self, target: ConnectionTarget) -> Option<&ConnectionStatus> {
        self.statuses.get(&target)
    }

    /// Check if a target is connected
    pub fn is_connected(&self, target: ConnectionTarget) -> bool {
        self.statuses
            .get(&target)
            .map(|s| s.connected)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_defaults_to_disconnected() {
        let state = ConnectionState::default();
        assert!(!state.is_connected(ConnectionTarget::Backend));
        assert!(state.get_status(ConnectionTarget::Backend).is_none());
    }

    #[test]
    fn test_set_status_replaces_previous_detail() {
        let mut state = ConnectionState::default();
        state.set_status(ConnectionTarget::Backend, false, Some("timeout".into()));
        state.set_status(ConnectionTarget::Backend, true, None);
        assert!(state.is_connected(ConnectionTarget::Backend));
        let status = state.get_status(ConnectionTarget::Backend);
        assert!(status.is_some_and(|s| s.detail.is_none()));
    }
}

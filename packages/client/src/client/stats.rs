//! Transfer counters kept by [`HttpClient`](super::HttpClient)
//!
//! Clones of a client share one `ClientStats`. Counters only grow; read them
//! together through [`ClientStats::snapshot`].

use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for one client and its clones.
#[derive(Debug, Default)]
pub struct ClientStats {
    requests: AtomicU64,
    responses: AtomicU64,
    failures: AtomicU64,
    sent: AtomicU64,
    received: AtomicU64,
    connections: AtomicU64,
    connect_failures: AtomicU64,
}

impl ClientStats {
    /// Counters starting at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A request was handed to the client
    pub fn record_request(&self) {
        bump(&self.requests, 1);
    }

    /// A response head and body came back, whatever the status
    pub fn record_success(&self) {
        bump(&self.responses, 1);
    }

    /// The request ended in an error instead of a response
    pub fn record_failure(&self) {
        bump(&self.failures, 1);
    }

    /// Request body bytes written
    pub fn record_bytes_sent(&self, bytes: u64) {
        bump(&self.sent, bytes);
    }

    /// Response body bytes read
    pub fn record_bytes_received(&self, bytes: u64) {
        bump(&self.received, bytes);
    }

    /// A TCP connection was established
    pub fn record_connection(&self) {
        bump(&self.connections, 1);
    }

    /// A TCP or TLS connection attempt failed
    pub fn record_connection_failure(&self) {
        bump(&self.connect_failures, 1);
    }

    /// Copy the current totals
    #[must_use]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        let read = |counter: &AtomicU64| counter.load(Ordering::Relaxed);
        ClientStatsSnapshot {
            requests_total: read(&self.requests),
            requests_successful: read(&self.responses),
            requests_failed: read(&self.failures),
            bytes_sent: read(&self.sent),
            bytes_received: read(&self.received),
            connections_total: read(&self.connections),
            connections_failed: read(&self.connect_failures),
        }
    }
}

fn bump(counter: &AtomicU64, by: u64) {
    counter.fetch_add(by, Ordering::Relaxed);
}

/// Point-in-time copy of [`ClientStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStatsSnapshot {
    /// Requests handed to the client
    pub requests_total: u64,
    /// Requests that produced a response
    pub requests_successful: u64,
    /// Requests that ended in an error
    pub requests_failed: u64,
    /// Request body bytes written
    pub bytes_sent: u64,
    /// Response body bytes read
    pub bytes_received: u64,
    /// Connections established
    pub connections_total: u64,
    /// Connection attempts that failed
    pub connections_failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_events() {
        let stats = ClientStats::new();
        assert_eq!(stats.snapshot(), ClientStatsSnapshot::default());

        stats.record_request();
        stats.record_connection();
        stats.record_bytes_sent(12);
        stats.record_bytes_received(30);
        stats.record_success();
        stats.record_request();
        stats.record_connection_failure();
        stats.record_failure();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.requests_successful, 1);
        assert_eq!(snapshot.requests_failed, 1);
        assert_eq!(snapshot.bytes_sent, 12);
        assert_eq!(snapshot.bytes_received, 30);
        assert_eq!(snapshot.connections_total, 1);
        assert_eq!(snapshot.connections_failed, 1);
    }
}

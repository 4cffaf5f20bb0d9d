//! Network reachability gate consulted before every attempt.
//!
//! Each call re-queries the current state; nothing is cached. Only an
//! explicit `Disconnected` signal stops a request. An unknown or failed
//! reachability query lets the request proceed.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::watch;

/// Reachability as reported by the platform or a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Connected,
    Disconnected,
    Unknown,
}

impl Reachability {
    pub fn is_online(self) -> bool {
        !matches!(self, Reachability::Disconnected)
    }
}

#[async_trait]
pub trait ConnectivityGate: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// Gate that never blocks a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

#[async_trait]
impl ConnectivityGate for AlwaysOnline {
    async fn is_online(&self) -> bool {
        true
    }
}

/// Gate fed by reachability events published on a watch channel.
///
/// The host application owns the sender and publishes platform changes; the
/// gate reads whatever value is current at each call.
#[derive(Debug, Clone)]
pub struct WatchGate {
    rx: watch::Receiver<Reachability>,
}

impl WatchGate {
    pub fn new(rx: watch::Receiver<Reachability>) -> Self {
        Self { rx }
    }

    /// New channel plus a gate reading from it.
    pub fn channel(initial: Reachability) -> (watch::Sender<Reachability>, Self) {
        let (tx, rx) = watch::channel(initial);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl ConnectivityGate for WatchGate {
    async fn is_online(&self) -> bool {
        let current = *self.rx.borrow();
        current.is_online()
    }
}

/// Gate that attempts a TCP connect to `host:port` on every call.
#[derive(Debug, Clone)]
pub struct ProbeGate {
    addr: String,
    timeout: Duration,
}

impl ProbeGate {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            timeout: Duration::from_secs(3),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// A refused connection still proves a network path exists. Only an
    /// error saying the network or host is unreachable counts as offline;
    /// a probe that cannot be run (bad address, lookup failure) or does not
    /// finish in time says nothing either way.
    pub async fn probe(&self) -> Reachability {
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_)) => Reachability::Connected,
            Ok(Err(e)) => {
                let reachability = reachability_of(e.kind());
                tracing::debug!(
                    addr = %self.addr,
                    ?reachability,
                    "reachability probe failed: {}",
                    e
                );
                reachability
            }
            Err(_) => Reachability::Unknown,
        }
    }
}

fn reachability_of(kind: ErrorKind) -> Reachability {
    match kind {
        ErrorKind::ConnectionRefused => Reachability::Connected,
        ErrorKind::NetworkUnreachable
        | ErrorKind::HostUnreachable
        | ErrorKind::NetworkDown
        | ErrorKind::AddrNotAvailable => Reachability::Disconnected,
        _ => Reachability::Unknown,
    }
}

#[async_trait]
impl ConnectivityGate for ProbeGate {
    async fn is_online(&self) -> bool {
        self.probe().await.is_online()
    }
}

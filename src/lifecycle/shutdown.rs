//! Shutdown coordination for the relay.
//!
//! `HttpServer::run` takes one receiver and stops accepting once it fires;
//! in-flight relays still finish, each capped by the fetch budget. The
//! integration tests hold the coordinator and trigger it when a test ends so
//! every relay they start is torn down.

use tokio::sync::broadcast;

/// Fan-out stop signal shared by `main`'s signal task and the serve loop.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver to hand to `HttpServer::run` or `wait`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every serve loop subscribed so far.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once the stop signal arrives or the coordinator is dropped.
///
/// Used as the graceful-shutdown future of the serve loop, so a relay whose
/// `Shutdown` goes out of scope also stops.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}

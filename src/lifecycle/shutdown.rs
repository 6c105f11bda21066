//! Stop signal for the HTTP server.

use tokio::sync::broadcast;

/// One-shot stop signal, fanned out over a broadcast channel.
///
/// `main` never fires it (Ctrl+C stops the server there); tests do, to
/// stop a server they spawned.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`. Take it before triggering.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. A no-op when no server is listening.
    pub fn trigger(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Shutdown triggered with no subscribers");
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_every_server() {
        let shutdown = Shutdown::new();
        let mut pages = shutdown.subscribe();
        let mut api = shutdown.subscribe();

        shutdown.trigger();

        assert!(pages.recv().await.is_ok());
        assert!(api.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_before_any_server_started() {
        Shutdown::new().trigger();
    }
}

//! Optional per-token observation hooks.
//!
//! Detection itself is pure; anything that wants to watch the token stream
//! (debug logging, instrumentation) plugs in here instead of the engine
//! writing to a console from its hot path.

/// Observer invoked with every token the scanner yields, in scan order.
///
/// Implementations must be cheap: they run inside the detection loop.
pub trait TokenObserver: Send + Sync {
    /// Called once per scanned token.
    fn token(&self, token: &str);
}

/// Emits each scanned token as a `tracing` trace event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TokenObserver for TracingObserver {
    fn token(&self, token: &str) {
        tracing::trace!(token, "scanned token");
    }
}

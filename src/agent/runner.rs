//! The scheduled decision loop.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::MarketAnalyzer;

/// Default wall-clock interval between analysis cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// A fixed-interval analysis loop.
///
/// Each cycle runs [`MarketAnalyzer::analyze_market`], logs the decisions,
/// and sleeps for the configured interval. A failing cycle is logged and
/// never fatal; the next cycle runs after the same delay.
///
/// The loop is cancellable: it checks its shutdown channel before each
/// cycle and honors it during the inter-cycle sleep, so callers (and tests)
/// stop it deterministically instead of killing the process.
#[derive(Debug)]
pub struct TradingLoop {
    analyzer: MarketAnalyzer,
    interval: Duration,
}

impl TradingLoop {
    /// Create a loop with the default 5 minute interval.
    pub fn new(analyzer: MarketAnalyzer) -> Self {
        Self {
            analyzer,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Override the cycle interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run until the shutdown channel reads `true` or its sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.analyzer.analyze_market().await {
                Ok(decisions) => {
                    for decision in &decisions {
                        tracing::info!(
                            decision = %decision,
                            reasoning = %decision.reasoning,
                            "cycle decision"
                        );
                    }
                }
                Err(error) => {
                    tracing::error!(%error, "analysis cycle failed");
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::info!("trading loop stopped");
    }

    /// Spawn the loop as a background task.
    ///
    /// Dropping the returned [`LoopHandle`] also stops the loop.
    pub fn spawn(self) -> (JoinHandle<()>, LoopHandle) {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(async move { self.run(rx).await });
        (task, LoopHandle { tx })
    }
}

/// Handle for stopping a spawned [`TradingLoop`].
#[derive(Debug)]
pub struct LoopHandle {
    tx: watch::Sender<bool>,
}

impl LoopHandle {
    /// Request shutdown. Idempotent; the loop exits before its next cycle
    /// or immediately if it is sleeping.
    pub fn stop(&self) {
        let _ = self.tx.send(true);
    }
}

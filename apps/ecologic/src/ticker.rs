//! # Pet Decay Ticker
//!
//! The recurring decay timer as an explicit scheduled task with a
//! cancellation handle. The handle is owned by whatever owns the pet
//! and is released deterministically: aborting (or dropping) the
//! ticker guarantees no further tick events reference stale state.
//!
//! The task never mutates state itself; it only delivers events to the
//! owning event loop, preserving the single-writer invariant.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events delivered to the app event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One pet decay tick is due.
    PetTick,
    /// The fact provider resolved.
    Fact(String),
}

/// Cancellation handle for the recurring pet decay task.
#[derive(Debug)]
pub struct PetTicker {
    handle: JoinHandle<()>,
}

impl PetTicker {
    /// Start ticking: one [`AppEvent::PetTick`] per interval.
    ///
    /// The first tick fires one full interval after the start, not
    /// immediately.
    #[must_use]
    pub fn start(interval: Duration, events: mpsc::Sender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            // Consume the immediate first fire of tokio's interval.
            timer.tick().await;
            loop {
                timer.tick().await;
                if events.send(AppEvent::PetTick).await.is_err() {
                    // Event loop gone; stop quietly.
                    return;
                }
            }
        });
        Self { handle }
    }

    /// Stop the ticker. Safe to call once; `Drop` covers the rest.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for PetTicker {
    fn drop(&mut self) {
        // Abort is idempotent; this covers tickers dropped with the
        // dashboard rather than stopped explicitly.
        self.handle.abort();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_at_each_interval() {
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = PetTicker::start(Duration::from_millis(100), tx);
        // Let the task register its interval before moving the clock.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(350)).await;
        // Let the scheduler park so the timer fires and the task runs.
        tokio::task::yield_now().await;
        let mut seen = 0;
        while rx.try_recv().is_ok() {
            seen += 1;
        }
        assert_eq!(seen, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = PetTicker::start(Duration::from_millis(100), tx);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(150)).await;
        ticker.stop();
        // Give the abort a chance to land before advancing further.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(500)).await;

        let mut seen = 0;
        while rx.try_recv().is_ok() {
            seen += 1;
        }
        assert!(seen <= 2, "ticker kept firing after stop: {seen}");
    }
}

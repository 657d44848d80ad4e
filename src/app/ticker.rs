// Dropspot - app/ticker.rs
//
// The simulated-progress ticker: a repeating timer on a background thread.
//
// Architecture:
//   - `ProgressTicker` lives on the UI thread; `run_ticker` runs on a
//     background thread sleeping one interval between ticks.
//   - An `Arc<AtomicBool>` cancel flag allows the UI to stop the ticker.
//   - Each tick is one unit message over an mpsc channel, drained by the UI
//     thread once per frame — one message advances the session exactly once,
//     so a stalled frame replays queued ticks rather than losing them.
//   - The sleep is sub-divided into cancel-check slices so stop requests
//     take effect within TICKER_CANCEL_CHECK_INTERVAL_MS.
//
// The ticker must be stopped on every exit from the uploading phase and on
// widget teardown; `Drop` covers teardown so no stray tick can outlive the
// widget that started it.

use crate::util::constants::TICKER_CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// One firing of the progress timer.
#[derive(Debug, Clone, Copy)]
pub struct Tick;

/// Manages the repeating progress timer on a background thread.
pub struct ProgressTicker {
    /// Channel receiver for the UI to poll ticks.
    pub tick_rx: Option<mpsc::Receiver<Tick>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl ProgressTicker {
    pub fn new() -> Self {
        Self {
            tick_rx: None,
            cancel_flag: None,
        }
    }

    /// Start ticking every `interval_ms`. If a ticker is already running it
    /// is stopped first.
    pub fn start(&mut self, interval_ms: u64) {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.tick_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_ticker(interval_ms, tx, cancel);
        });

        tracing::debug!(interval_ms, "Progress ticker started");
    }

    /// Request the background thread to stop and drop the channel.
    ///
    /// The thread exits within `TICKER_CANCEL_CHECK_INTERVAL_MS`; any tick
    /// it managed to send in the meantime is discarded with the receiver.
    pub fn stop(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
            tracing::debug!("Progress ticker stopped");
        }
        self.cancel_flag = None;
        self.tick_rx = None;
    }

    /// Returns `true` while a ticker thread is active.
    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Drain all pending ticks without blocking. Returns how many fired.
    pub fn poll_ticks(&self) -> usize {
        let mut count = 0;
        if let Some(ref rx) = self.tick_rx {
            while rx.try_recv().is_ok() {
                count += 1;
            }
        }
        count
    }
}

impl Default for ProgressTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background tick loop. Sends one `Tick` per interval until cancelled or
/// the receiver is dropped.
fn run_ticker(interval_ms: u64, tx: mpsc::Sender<Tick>, cancel: Arc<AtomicBool>) {
    // Sub-divide each interval into cancel-check slices.
    let slice_ms = TICKER_CANCEL_CHECK_INTERVAL_MS.min(interval_ms).max(1);
    let slices = (interval_ms / slice_ms).max(1);

    loop {
        for _ in 0..slices {
            std::thread::sleep(Duration::from_millis(slice_ms));
            if cancel.load(Ordering::SeqCst) {
                return;
            }
        }

        if tx.send(Tick).is_err() {
            // Receiver dropped (widget torn down); exit quietly.
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_fires_and_stops() {
        let mut ticker = ProgressTicker::new();
        ticker.start(10);
        assert!(ticker.is_active());

        // Block on the channel rather than sleeping: the first tick proves
        // the thread is alive and ticking.
        let tick = ticker
            .tick_rx
            .as_ref()
            .unwrap()
            .recv_timeout(Duration::from_secs(5));
        assert!(tick.is_ok());

        ticker.stop();
        assert!(!ticker.is_active());
        assert_eq!(ticker.poll_ticks(), 0);
    }

    #[test]
    fn test_restart_replaces_the_previous_ticker() {
        let mut ticker = ProgressTicker::new();
        ticker.start(10);
        ticker.start(10);
        assert!(ticker.is_active());
        ticker.stop();
    }
}

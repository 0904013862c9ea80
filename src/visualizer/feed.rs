//! Background ticker that regenerates the visualizer sample on a fixed period.
//!
//! The ticker is a worker thread that waits on a stop channel with a timeout;
//! each timeout is one tick. `stop` sends on the channel and joins the thread,
//! so once it returns no further tick can touch the shared sample.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::VisualizerSettings;

use super::sample::VisualizerSample;

pub type SampleHandle = Arc<Mutex<VisualizerSample>>;

struct Worker {
    stop_tx: Sender<()>,
    join: JoinHandle<()>,
}

pub struct VisualizerFeed {
    bars: usize,
    interval: Duration,
    samples: SampleHandle,
    ticks: Arc<AtomicU64>,
    worker: Option<Worker>,
}

impl VisualizerFeed {
    /// Create a stopped feed with `bars` silent bars.
    pub fn new(bars: usize, interval: Duration) -> Self {
        Self {
            bars,
            interval,
            samples: Arc::new(Mutex::new(VisualizerSample::silent(bars))),
            ticks: Arc::new(AtomicU64::new(0)),
            worker: None,
        }
    }

    pub fn from_settings(settings: &VisualizerSettings) -> Self {
        Self::new(settings.bars, Duration::from_millis(settings.interval_ms))
    }

    /// Shared handle to the latest sample.
    #[cfg(test)]
    pub fn samples_handle(&self) -> SampleHandle {
        self.samples.clone()
    }

    /// Copy of the latest sample.
    pub fn samples(&self) -> VisualizerSample {
        self.samples
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of regenerations since the feed was created.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Start ticking. Returns `false` if the feed was already running.
    pub fn start(&mut self) -> bool {
        if self.worker.is_some() {
            return false;
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let samples = self.samples.clone();
        let ticks = self.ticks.clone();
        let bars = self.bars;
        let interval = self.interval;

        let join = thread::spawn(move || {
            let mut rng = rand::thread_rng();
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let next = VisualizerSample::generate(&mut rng, bars);
                        match samples.lock() {
                            Ok(mut s) => *s = next,
                            Err(poisoned) => *poisoned.into_inner() = next,
                        }
                        ticks.fetch_add(1, Ordering::Release);
                    }
                    // A stop request or a dropped sender both end the ticker.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.worker = Some(Worker { stop_tx, join });
        log::debug!(
            "visualizer: started ({} bars every {:?})",
            self.bars,
            self.interval
        );
        true
    }

    /// Stop ticking and wait for the worker to exit. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        let Some(worker) = self.worker.take() else {
            return false;
        };

        let _ = worker.stop_tx.send(());
        if worker.join.join().is_err() {
            log::warn!("visualizer: ticker thread panicked");
        }
        log::debug!("visualizer: stopped after {} ticks", self.ticks());
        true
    }
}

impl Drop for VisualizerFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for VisualizerFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualizerFeed")
            .field("bars", &self.bars)
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .field("ticks", &self.ticks())
            .finish()
    }
}

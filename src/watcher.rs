//! Bounded polling for the file a generation is expected to create.
//!
//! The launched generator gives no completion signal, so the watcher probes
//! the expected artifact at a constant interval until it becomes readable or
//! the attempt budget runs out. Probing and waiting are injectable so callers
//! can run the loop without real wall-clock waits.

use crate::config::WatchSettings;
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Checks whether a path exists and can be read.
pub trait Probe {
    fn is_readable(&self, path: &Path) -> bool;
}

impl<F: Fn(&Path) -> bool> Probe for F {
    fn is_readable(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Waits between two probes.
pub trait Delay {
    fn wait(&self, interval: Duration);
}

impl<F: Fn(Duration)> Delay for F {
    fn wait(&self, interval: Duration) {
        self(interval)
    }
}

/// Probes the filesystem by opening the file for reading.
pub struct FsProbe;

impl Probe for FsProbe {
    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && File::open(path).is_ok()
    }
}

/// Blocks the current thread.
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn wait(&self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Result of a watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The file became readable on attempt number `attempts`.
    Arrived { attempts: u32 },
    /// The file never became readable within `attempts` attempts.
    Exhausted { attempts: u32 },
}

pub struct FileArrivalWatcher {
    max_attempts: u32,
    interval: Duration,
    probe: Box<dyn Probe>,
    delay: Box<dyn Delay>,
}

impl FileArrivalWatcher {
    /// Watcher on the real filesystem. A zero budget is raised to one attempt.
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
            probe: Box::new(FsProbe),
            delay: Box::new(ThreadDelay),
        }
    }

    pub fn from_settings(settings: &WatchSettings) -> Self {
        Self::new(settings.max_attempts, settings.interval())
    }

    pub fn with_probe(mut self, probe: impl Probe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// Probes `path` up to `max_attempts` times, waiting `interval` between
    /// two attempts. At most one wait is ever pending and no wait follows the
    /// last attempt.
    ///
    /// An empty path fails with [`Error::EmptyExpectedPath`] before any
    /// attempt is made.
    pub fn await_arrival(&self, path: &Path) -> Result<WatchOutcome> {
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyExpectedPath);
        }

        for attempt in 1..=self.max_attempts {
            if self.probe.is_readable(path) {
                log::debug!("{} is readable after {attempt} attempt(s).", path.display());
                return Ok(WatchOutcome::Arrived { attempts: attempt });
            }
            if attempt < self.max_attempts {
                log::trace!(
                    "{} not readable yet (attempt {attempt}/{}), retrying in {:?}.",
                    path.display(),
                    self.max_attempts,
                    self.interval
                );
                self.delay.wait(self.interval);
            }
        }

        log::debug!("Gave up on {} after {} attempts.", path.display(), self.max_attempts);
        Ok(WatchOutcome::Exhausted { attempts: self.max_attempts })
    }
}

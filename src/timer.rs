//! Level timer and the clock it reads.

use chrono::{DateTime, Utc};
use std::{cell::Cell, rc::Rc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + chrono::Duration::seconds(secs));
    }

    pub fn advance_millis(&self, millis: i64) {
        self.now
            .set(self.now.get() + chrono::Duration::milliseconds(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Whole-second timer for the level in play.
///
/// There is at most one running timer per session; `start` cancels any
/// previous run and `stop` is idempotent.
#[derive(Debug, Clone, Default)]
pub struct LevelTimer {
    started_at: Option<DateTime<Utc>>,
    elapsed_seconds: u64,
    running: bool,
}

impl LevelTimer {
    /// Starts timing from `now`. Returns true if a running timer was cancelled.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        let cancelled = self.stop_at(None);
        self.started_at = Some(now);
        self.elapsed_seconds = 0;
        self.running = true;
        cancelled
    }

    /// Freezes the elapsed time at `now`. Returns false if already stopped.
    pub fn stop(&mut self, now: DateTime<Utc>) -> bool {
        self.stop_at(Some(now))
    }

    /// Cancels without recording further elapsed time.
    pub fn cancel(&mut self) -> bool {
        self.stop_at(None)
    }

    fn stop_at(&mut self, now: Option<DateTime<Utc>>) -> bool {
        if !self.running {
            return false;
        }
        if let Some(now) = now {
            self.elapsed_seconds = self.seconds_since_start(now);
        }
        self.running = false;
        true
    }

    /// Advances the elapsed count. Returns the new value when at least one
    /// more whole second has passed since the last tick.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<u64> {
        if !self.running {
            return None;
        }
        let secs = self.seconds_since_start(now);
        if secs > self.elapsed_seconds {
            self.elapsed_seconds = secs;
            Some(secs)
        } else {
            None
        }
    }

    fn seconds_since_start(&self, now: DateTime<Utc>) -> u64 {
        self.started_at
            .map(|start| (now - start).num_seconds().max(0) as u64)
            .unwrap_or(0)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

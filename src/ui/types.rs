use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use crate::{catalog::Category, session::SessionConfig};

pub const MAX_LOG_LINES: usize = 300;
pub const HINT_FLASH: Duration = Duration::from_millis(2000);
pub const REJECT_FLASH: Duration = Duration::from_millis(500);
pub const TILE_COLUMNS: usize = 8;

/// Shared log buffer for the log panel, oldest lines dropped first.
#[derive(Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        buf.push_back(msg);
        while buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Playing,
    LevelComplete,
    GameComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Hint,
    Rejected,
}

/// Short-lived highlight over some tiles; purely cosmetic.
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub tiles: Vec<usize>,
    pub expires_at: Instant,
}

impl Flash {
    pub fn new(kind: FlashKind, tiles: Vec<usize>, now: Instant) -> Self {
        let duration = match kind {
            FlashKind::Hint => HINT_FLASH,
            FlashKind::Rejected => REJECT_FLASH,
        };
        Self {
            kind,
            tiles,
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Everything the binary hands to the UI at startup.
pub struct LaunchOptions {
    pub categories: Vec<Category>,
    pub config: SessionConfig,
    pub initial_category: Option<String>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub notice: Option<String>,
}

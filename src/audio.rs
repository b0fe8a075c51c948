//! Sound cues derived from session events.

use tracing::{debug, warn};

use crate::session::SessionEvent;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cue {
    TileClick,
    Correct,
    Wrong,
    LevelComplete,
}

impl Cue {
    pub fn for_event(event: &SessionEvent) -> Option<Self> {
        match event {
            SessionEvent::TileToggled { .. } => Some(Cue::TileClick),
            SessionEvent::WordFound { .. } => Some(Cue::Correct),
            SessionEvent::WordRejected { .. } => Some(Cue::Wrong),
            SessionEvent::LevelComplete { .. } => Some(Cue::LevelComplete),
            _ => None,
        }
    }
}

pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> std::io::Result<()>;
}

pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) -> std::io::Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell on `Wrong` and `LevelComplete`. `TileClick` and
/// `Correct` are silent.
pub struct TerminalBell<W: std::io::Write> {
    out: W,
}

impl<W: std::io::Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: std::io::Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> std::io::Result<()> {
        if matches!(cue, Cue::Wrong | Cue::LevelComplete) {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Routes events to a player. Playback failures are logged and dropped.
pub struct Audio {
    player: Box<dyn CuePlayer>,
    failed: bool,
}

impl Audio {
    pub fn new(player: impl CuePlayer + 'static) -> Self {
        Self {
            player: Box::new(player),
            failed: false,
        }
    }

    pub fn silent() -> Self {
        Self::new(Silent)
    }

    pub fn on_event(&mut self, event: &SessionEvent) {
        let Some(cue) = Cue::for_event(event) else {
            return;
        };

        debug!("Playing cue {:?}", cue);
        if let Err(e) = self.player.play(cue)
            && !self.failed
        {
            warn!("Audio unavailable: {}", e);
            self.failed = true;
        }
    }
}

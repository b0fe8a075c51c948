//! The puzzle session engine: tile selection, word validation, level
//! progression, timing and hints for one playthrough.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::{
    content::{Level, validate_levels},
    error::SessionError,
    scoring::{ScoringConfig, star_rating},
    tiles::{Tile, TilePool, TileState},
    timer::{Clock, LevelTimer},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionConfig {
    pub scoring: ScoringConfig,
    /// When the hinted word's first letter has no free tile, point at any
    /// free tile holding one of its letters instead of staying silent.
    pub hint_fallback: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Playing,
    LevelCompleted,
    Complete,
}

/// Outcome of one completed level. Never changed once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResult {
    pub level_ordinal: u32,
    pub elapsed_seconds: u64,
    pub stars: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LevelLoaded {
        level_index: usize,
        level_ordinal: u32,
        tile_count: usize,
    },
    TileToggled {
        index: usize,
        selected: bool,
    },
    SelectionCleared {
        tiles: Vec<usize>,
    },
    WordFound {
        word: String,
        tiles: Vec<usize>,
    },
    WordRejected {
        candidate: String,
        tiles: Vec<usize>,
    },
    LevelComplete {
        level_ordinal: u32,
        stars: u8,
        elapsed_seconds: u64,
    },
    GameComplete {
        history: Vec<LevelResult>,
    },
    TimerTick {
        elapsed_seconds: u64,
    },
    HintGiven {
        tile_index: usize,
    },
}

/// A clue line: the word once found, otherwise one placeholder per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueView {
    pub clue: String,
    pub display: String,
    pub found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub found_count: usize,
    pub total_count: usize,
    pub elapsed_seconds: u64,
    pub star_rating: u8,
}

pub struct PuzzleSession {
    config: SessionConfig,
    clock: Box<dyn Clock>,
    rng: StdRng,
    levels: Vec<Level>,
    current: usize,
    phase: SessionPhase,
    pool: TilePool,
    selection: Vec<usize>,
    // Positions of found entries in the current level's word list.
    found: BTreeSet<usize>,
    used: BTreeSet<usize>,
    timer: LevelTimer,
    star_rating: u8,
    history: Vec<LevelResult>,
    events: Vec<SessionEvent>,
}

impl PuzzleSession {
    pub fn new(config: SessionConfig, clock: impl Clock + 'static) -> Self {
        Self::with_rng(config, clock, StdRng::from_entropy())
    }

    /// Deterministic shuffles and hints for a given seed.
    pub fn with_seed(config: SessionConfig, clock: impl Clock + 'static, seed: u64) -> Self {
        Self::with_rng(config, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, clock: impl Clock + 'static, rng: StdRng) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            rng,
            levels: Vec::new(),
            current: 0,
            phase: SessionPhase::Idle,
            pool: TilePool::default(),
            selection: Vec::new(),
            found: BTreeSet::new(),
            used: BTreeSet::new(),
            timer: LevelTimer::default(),
            star_rating: 0,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Validates `levels`, resets all state and loads the first level.
    pub fn start(&mut self, levels: Vec<Level>) -> Result<(), SessionError> {
        validate_levels(&levels)?;

        for level in &levels {
            let dupes = level.duplicate_words();
            if !dupes.is_empty() {
                warn!(
                    "Level {} repeats words {:?}; each copy is credited separately",
                    level.ordinal, dupes
                );
            }
        }

        self.timer.cancel();
        self.levels = levels;
        self.history.clear();
        self.events.clear();
        info!("Session started with {} level(s)", self.levels.len());

        self.load_level(0);
        Ok(())
    }

    /// Loads the level at `index`, or finishes the session when there is none.
    pub fn load_level(&mut self, index: usize) {
        if self.levels.is_empty() {
            return;
        }

        if self.timer.cancel() {
            debug!("Cancelled timer for level index {}", self.current);
        }

        self.current = index;
        self.selection.clear();
        self.found.clear();
        self.used.clear();
        self.star_rating = 0;

        let Some(level) = self.levels.get(index) else {
            self.pool = TilePool::default();
            self.phase = SessionPhase::Complete;
            info!("All levels complete ({} result(s))", self.history.len());
            self.events.push(SessionEvent::GameComplete {
                history: self.history.clone(),
            });
            return;
        };

        self.pool = TilePool::for_level(level, &mut self.rng);
        self.timer.start(self.clock.now());
        self.phase = SessionPhase::Playing;

        info!(
            "Loaded level {} ({} words, {} tiles)",
            level.ordinal,
            level.words.len(),
            self.pool.len()
        );
        self.events.push(SessionEvent::LevelLoaded {
            level_index: index,
            level_ordinal: level.ordinal,
            tile_count: self.pool.len(),
        });
    }

    /// Toggles a tile in or out of the selection. Used or unknown tiles are
    /// ignored.
    pub fn select_tile(&mut self, index: usize) {
        if self.phase != SessionPhase::Playing {
            return;
        }

        match self.pool.state(index) {
            None | Some(TileState::Used) => return,
            Some(_) => {}
        }

        let selected = if let Some(pos) = self.selection.iter().position(|&i| i == index) {
            self.selection.remove(pos);
            self.pool.set_state(index, TileState::Available);
            false
        } else {
            self.selection.push(index);
            self.pool.set_state(index, TileState::Selected);
            true
        };

        self.events
            .push(SessionEvent::TileToggled { index, selected });
    }

    /// Checks the candidate against the level's unfound words.
    pub fn submit_selection(&mut self) {
        if self.phase != SessionPhase::Playing || self.selection.is_empty() {
            return;
        }

        let candidate = self.candidate();
        let Some(level) = self.levels.get(self.current) else {
            return;
        };

        let matched = level
            .words
            .iter()
            .enumerate()
            .find(|(i, entry)| entry.word == candidate && !self.found.contains(i))
            .map(|(i, _)| i);

        let Some(entry_index) = matched else {
            debug!("Rejected candidate {:?}", candidate);
            self.events.push(SessionEvent::WordRejected {
                candidate,
                tiles: self.selection.clone(),
            });
            return;
        };

        let word_count = level.words.len();
        self.found.insert(entry_index);

        let tiles = std::mem::take(&mut self.selection);
        for &index in &tiles {
            self.used.insert(index);
            self.pool.set_state(index, TileState::Used);
        }

        info!("Found word {} ({}/{})", candidate, self.found.len(), word_count);
        self.events.push(SessionEvent::WordFound {
            word: candidate,
            tiles,
        });

        if self.found.len() == word_count {
            self.complete_level();
        }
    }

    fn complete_level(&mut self) {
        let Some(level) = self.levels.get(self.current) else {
            return;
        };

        self.timer.stop(self.clock.now());
        let elapsed_seconds = self.timer.elapsed_seconds();
        let stars = star_rating(&self.config.scoring, elapsed_seconds, level.words.len());

        self.star_rating = stars;
        self.phase = SessionPhase::LevelCompleted;
        self.history.push(LevelResult {
            level_ordinal: level.ordinal,
            elapsed_seconds,
            stars,
        });

        info!(
            "Level {} complete in {}s with {} star(s)",
            level.ordinal, elapsed_seconds, stars
        );
        self.events.push(SessionEvent::LevelComplete {
            level_ordinal: level.ordinal,
            stars,
            elapsed_seconds,
        });
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }

        let tiles = std::mem::take(&mut self.selection);
        for &index in &tiles {
            self.pool.set_state(index, TileState::Available);
        }

        self.events.push(SessionEvent::SelectionCleared { tiles });
    }

    /// Points at a free tile holding the first letter of a random unfound
    /// word. Does not touch the selection or tile state.
    pub fn request_hint(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let Some(level) = self.levels.get(self.current) else {
            return;
        };

        let unfound: Vec<&str> = level
            .words
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.found.contains(i))
            .map(|(_, entry)| entry.word.as_str())
            .collect();

        let Some(&word) = unfound.choose(&mut self.rng) else {
            return;
        };
        let Some(first) = word.chars().next() else {
            return;
        };

        let mut tile = self.pool.first_free(first, &self.selection);

        if tile.is_none() && self.config.hint_fallback {
            tile = self
                .pool
                .tiles()
                .iter()
                .find(|t| {
                    t.state != TileState::Used
                        && !self.selection.contains(&t.index)
                        && word.contains(t.letter)
                })
                .map(|t| t.index);
        }

        match tile {
            Some(tile_index) => {
                debug!("Hint for {}: tile {}", word, tile_index);
                self.events.push(SessionEvent::HintGiven { tile_index });
            }
            None => debug!("No free tile to hint for {}", word),
        }
    }

    /// Moves on to the next level.
    pub fn advance(&mut self) {
        if matches!(self.phase, SessionPhase::Idle | SessionPhase::Complete) {
            return;
        }
        self.load_level(self.current + 1);
    }

    /// Reloads the current level with a fresh shuffle.
    pub fn replay(&mut self) {
        if matches!(self.phase, SessionPhase::Idle | SessionPhase::Complete) {
            return;
        }
        self.load_level(self.current);
    }

    /// Stops the running level without completing it.
    pub fn teardown(&mut self) {
        if self.timer.cancel() {
            debug!("Cancelled timer on teardown");
        }
        self.phase = SessionPhase::Idle;
        self.pool = TilePool::default();
        self.selection.clear();
        self.found.clear();
        self.used.clear();
        self.star_rating = 0;
    }

    /// Driven by the host loop; emits a tick for each new whole second.
    pub fn tick(&mut self) {
        if let Some(elapsed_seconds) = self.timer.tick(self.clock.now()) {
            self.events
                .push(SessionEvent::TimerTick { elapsed_seconds });
        }
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn tiles(&self) -> &[Tile] {
        self.pool.tiles()
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn candidate(&self) -> String {
        self.selection
            .iter()
            .filter_map(|&i| self.pool.letter(i))
            .collect()
    }

    pub fn used_tiles(&self) -> &BTreeSet<usize> {
        &self.used
    }

    pub fn found_words(&self) -> Vec<&str> {
        self.current_level()
            .map(|level| {
                self.found
                    .iter()
                    .filter_map(|&i| level.words.get(i))
                    .map(|entry| entry.word.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clue_list(&self) -> Vec<ClueView> {
        let Some(level) = self.current_level() else {
            return Vec::new();
        };

        level
            .words
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let found = self.found.contains(&i);
                let display = if found {
                    entry.word.clone()
                } else {
                    vec!["_"; entry.len()].join(" ")
                };
                ClueView {
                    clue: entry.clue.clone(),
                    display,
                    found,
                }
            })
            .collect()
    }

    /// Word and definition pairs for the current level.
    pub fn definitions(&self) -> Vec<(&str, &str)> {
        self.current_level()
            .map(|level| {
                level
                    .words
                    .iter()
                    .map(|e| (e.word.as_str(), e.definition.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            found_count: self.found.len(),
            total_count: self.current_level().map_or(0, |l| l.words.len()),
            elapsed_seconds: self.timer.elapsed_seconds(),
            star_rating: self.star_rating,
        }
    }

    pub fn history(&self) -> &[LevelResult] {
        &self.history
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_level_index(&self) -> usize {
        self.current
    }

    pub fn current_level(&self) -> Option<&Level> {
        match self.phase {
            SessionPhase::Playing | SessionPhase::LevelCompleted => self.levels.get(self.current),
            _ => None,
        }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog,
        content::WordEntry,
        timer::ManualClock,
    };

    fn level(ordinal: u32, words: &[&str]) -> Level {
        Level::new(
            ordinal,
            words
                .iter()
                .map(|w| WordEntry::new(w, &format!("clue for {w}"), &format!("{w} means")))
                .collect(),
        )
    }

    fn three_levels() -> Vec<Level> {
        vec![
            level(1, &["DOG", "CAT", "SUN"]),
            level(2, &["APPLE", "BEACH", "CLOUD"]),
            level(3, &["TREE", "LEAF"]),
        ]
    }

    fn started(levels: Vec<Level>) -> (PuzzleSession, ManualClock) {
        let clock = ManualClock::default();
        let mut session = PuzzleSession::with_seed(SessionConfig::default(), clock.clone(), 11);
        session.start(levels).unwrap();
        session.drain_events();
        (session, clock)
    }

    /// Free tiles spelling `word`, choosing the lowest index for each letter.
    fn tiles_for(session: &PuzzleSession, word: &str) -> Vec<usize> {
        let mut picked: Vec<usize> = Vec::new();
        for c in word.chars() {
            let tile = session
                .tiles()
                .iter()
                .find(|t| t.letter == c && t.state != TileState::Used && !picked.contains(&t.index))
                .unwrap_or_else(|| panic!("no free tile for {c}"));
            picked.push(tile.index);
        }
        picked
    }

    fn spell(session: &mut PuzzleSession, word: &str) {
        for index in tiles_for(session, word) {
            session.select_tile(index);
        }
        session.submit_selection();
    }

    fn tile_order(session: &PuzzleSession) -> Vec<char> {
        session.tiles().iter().map(|t| t.letter).collect()
    }

    #[test]
    fn test_start_rejects_invalid_content() {
        let mut session = PuzzleSession::with_seed(SessionConfig::default(), ManualClock::default(), 1);

        assert!(matches!(
            session.start(vec![]),
            Err(SessionError::InvalidContent(_))
        ));
        assert!(session.start(vec![level(1, &[])]).is_err());
        assert!(session.start(vec![level(1, &["D0G"])]).is_err());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_start_loads_first_level() {
        let clock = ManualClock::default();
        let mut session = PuzzleSession::with_seed(SessionConfig::default(), clock, 5);
        session.start(three_levels()).unwrap();

        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.current_level_index(), 0);
        assert_eq!(session.tiles().len(), 9);
        assert!(session.timer_running());
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::LevelLoaded {
                level_index: 0,
                level_ordinal: 1,
                tile_count: 9
            }]
        );
    }

    #[test]
    fn test_builtin_levels_tile_counts() {
        let levels = catalog::default_levels();
        let (mut session, _) = started(levels.clone());

        for (i, lvl) in levels.iter().enumerate() {
            session.load_level(i);
            assert_eq!(session.tiles().len(), lvl.letter_count());
        }
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let (mut session, _) = started(three_levels());

        session.select_tile(0);
        session.select_tile(4);
        session.select_tile(2);
        let before = session.selection().to_vec();

        session.select_tile(6);
        session.select_tile(6);

        assert_eq!(session.selection(), before.as_slice());
        assert_eq!(session.tiles()[6].state, TileState::Available);
    }

    #[test]
    fn test_deselect_preserves_order() {
        let (mut session, _) = started(three_levels());

        session.select_tile(3);
        session.select_tile(1);
        session.select_tile(5);
        session.select_tile(1);

        assert_eq!(session.selection(), &[3, 5]);
        assert_eq!(session.tiles()[1].state, TileState::Available);
        assert_eq!(session.tiles()[3].state, TileState::Selected);
    }

    #[test]
    fn test_select_emits_toggle_events() {
        let (mut session, _) = started(three_levels());

        session.select_tile(2);
        session.select_tile(2);

        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::TileToggled { index: 2, selected: true },
                SessionEvent::TileToggled { index: 2, selected: false },
            ]
        );
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let (mut session, _) = started(three_levels());

        session.select_tile(99);

        assert!(session.selection().is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_submit_match_retires_tiles() {
        let (mut session, _) = started(three_levels());
        let tiles = tiles_for(&session, "DOG");

        for &i in &tiles {
            session.select_tile(i);
        }
        assert_eq!(session.candidate(), "DOG");
        session.drain_events();

        session.submit_selection();

        assert_eq!(session.found_words(), vec!["DOG"]);
        assert_eq!(session.used_tiles().len(), 3);
        assert!(session.selection().is_empty());
        for &i in &tiles {
            assert!(session.used_tiles().contains(&i));
            assert_eq!(session.tiles()[i].state, TileState::Used);
        }
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::WordFound {
                word: "DOG".into(),
                tiles
            }]
        );
    }

    #[test]
    fn test_used_tile_cannot_be_selected() {
        let (mut session, _) = started(three_levels());
        let tiles = tiles_for(&session, "CAT");
        spell(&mut session, "CAT");
        session.drain_events();

        session.select_tile(tiles[0]);

        assert!(session.selection().is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_submit_mismatch_keeps_selection() {
        let (mut session, _) = started(three_levels());
        let mut tiles = tiles_for(&session, "DOG");
        tiles.reverse();

        for &i in &tiles {
            session.select_tile(i);
        }
        session.drain_events();
        session.submit_selection();

        assert_eq!(session.selection(), tiles.as_slice());
        assert!(session.found_words().is_empty());
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::WordRejected {
                candidate: "GOD".into(),
                tiles
            }]
        );
    }

    #[test]
    fn test_already_found_word_is_rejected() {
        let (mut session, _) = started(vec![level(1, &["AB", "ABAB"])]);
        spell(&mut session, "AB");
        session.drain_events();

        spell(&mut session, "AB");

        assert_eq!(session.found_words(), vec!["AB"]);
        assert_eq!(session.used_tiles().len(), 2);
        assert!(matches!(
            session.drain_events().last(),
            Some(SessionEvent::WordRejected { .. })
        ));
    }

    #[test]
    fn test_repeated_word_credits_each_entry_once() {
        let (mut session, _) = started(vec![level(1, &["GO", "GO"])]);

        spell(&mut session, "GO");
        assert_eq!(session.progress().found_count, 1);
        assert_eq!(session.phase(), SessionPhase::Playing);

        spell(&mut session, "GO");
        assert_eq!(session.progress().found_count, 2);
        assert_eq!(session.phase(), SessionPhase::LevelCompleted);
    }

    #[test]
    fn test_submit_empty_selection_is_noop() {
        let (mut session, _) = started(three_levels());
        session.submit_selection();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_clear_selection() {
        let (mut session, _) = started(three_levels());
        session.select_tile(0);
        session.select_tile(1);
        session.drain_events();

        session.clear_selection();

        assert!(session.selection().is_empty());
        assert_eq!(session.tiles()[0].state, TileState::Available);
        assert_eq!(session.tiles()[1].state, TileState::Available);
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::SelectionCleared { tiles: vec![0, 1] }]
        );

        session.clear_selection();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_level_complete_with_three_stars() {
        let (mut session, clock) = started(three_levels());
        clock.advance_secs(9);

        spell(&mut session, "DOG");
        spell(&mut session, "SUN");
        spell(&mut session, "CAT");

        assert_eq!(session.phase(), SessionPhase::LevelCompleted);
        assert!(!session.timer_running());
        assert_eq!(session.progress().star_rating, 3);
        assert_eq!(session.progress().elapsed_seconds, 9);
        assert_eq!(
            session.history(),
            &[LevelResult {
                level_ordinal: 1,
                elapsed_seconds: 9,
                stars: 3
            }]
        );
        assert_eq!(
            session.drain_events().last(),
            Some(&SessionEvent::LevelComplete {
                level_ordinal: 1,
                stars: 3,
                elapsed_seconds: 9
            })
        );
    }

    #[test]
    fn test_relaxed_scoring_config() {
        let clock = ManualClock::default();
        let config = SessionConfig {
            scoring: ScoringConfig::RELAXED,
            hint_fallback: false,
        };
        let mut session = PuzzleSession::with_seed(config, clock.clone(), 3);
        session.start(three_levels()).unwrap();
        clock.advance_secs(15);

        spell(&mut session, "DOG");
        spell(&mut session, "CAT");
        spell(&mut session, "SUN");

        assert_eq!(session.progress().star_rating, 3);
    }

    #[test]
    fn test_timer_ticks_stop_after_completion() {
        let (mut session, clock) = started(vec![level(1, &["OX"])]);

        clock.advance_secs(2);
        session.tick();
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::TimerTick { elapsed_seconds: 2 }]
        );

        spell(&mut session, "OX");
        session.drain_events();

        clock.advance_secs(5);
        session.tick();
        assert!(session.drain_events().is_empty());
        assert_eq!(session.progress().elapsed_seconds, 2);
    }

    #[test]
    fn test_hint_points_at_first_letter() {
        let (mut session, _) = started(vec![level(1, &["DOG"])]);

        session.request_hint();

        let expected = session
            .tiles()
            .iter()
            .find(|t| t.letter == 'D')
            .map(|t| t.index)
            .unwrap();
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::HintGiven { tile_index: expected }]
        );
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_hint_skips_selected_tiles() {
        let (mut session, _) = started(vec![level(1, &["DOG"])]);
        let d = tiles_for(&session, "D")[0];
        session.select_tile(d);
        session.drain_events();

        session.request_hint();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_hint_fallback_uses_other_letter() {
        let clock = ManualClock::default();
        let config = SessionConfig {
            hint_fallback: true,
            ..SessionConfig::default()
        };
        let mut session = PuzzleSession::with_seed(config, clock, 9);
        session.start(vec![level(1, &["DOG"])]).unwrap();
        let d = tiles_for(&session, "D")[0];
        session.select_tile(d);
        session.drain_events();

        session.request_hint();

        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        let SessionEvent::HintGiven { tile_index } = events[0] else {
            panic!("expected a hint, got {:?}", events[0]);
        };
        assert_ne!(tile_index, d);
        assert_ne!(session.tiles()[tile_index].state, TileState::Used);
    }

    #[test]
    fn test_hint_after_all_found_is_noop() {
        let (mut session, _) = started(vec![level(1, &["OX"])]);
        spell(&mut session, "OX");
        session.drain_events();

        session.request_hint();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_interactions_after_level_complete_are_noops() {
        let (mut session, clock) = started(three_levels());
        spell(&mut session, "DOG");
        spell(&mut session, "CAT");
        spell(&mut session, "SUN");
        assert_eq!(session.phase(), SessionPhase::LevelCompleted);
        session.drain_events();

        session.select_tile(0);
        session.submit_selection();
        session.request_hint();
        clock.advance_secs(2);
        session.tick();

        assert!(session.drain_events().is_empty());
        assert!(session.selection().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_advance_mid_level_skips_without_history() {
        let (mut session, _) = started(three_levels());
        spell(&mut session, "DOG");

        session.advance();

        assert!(session.history().is_empty());
        assert_eq!(session.current_level_index(), 1);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.progress().found_count, 0);
    }

    #[test]
    fn test_loading_past_last_level_completes_game() {
        let (mut session, _) = started(three_levels());

        spell(&mut session, "DOG");
        spell(&mut session, "CAT");
        spell(&mut session, "SUN");
        session.advance();
        session.drain_events();

        session.load_level(3);

        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(session.tiles().is_empty());
        let events = session.drain_events();
        let SessionEvent::GameComplete { history } = &events[0] else {
            panic!("expected game complete, got {:?}", events);
        };
        assert_eq!(history.len(), 1);
        assert!(!session.timer_running());
    }

    #[test]
    fn test_full_playthrough() {
        let (mut session, _) = started(vec![level(1, &["OX"]), level(2, &["AT", "IT"])]);

        spell(&mut session, "OX");
        session.advance();
        spell(&mut session, "IT");
        spell(&mut session, "AT");
        session.advance();

        assert_eq!(session.phase(), SessionPhase::Complete);
        assert_eq!(session.history().len(), 2);
        assert!(matches!(
            session.drain_events().last(),
            Some(SessionEvent::GameComplete { history }) if history.len() == 2
        ));

        session.advance();
        session.replay();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_replay_reshuffles_without_touching_history() {
        let (mut session, _) = started(three_levels());

        spell(&mut session, "DOG");
        spell(&mut session, "CAT");
        spell(&mut session, "SUN");
        session.advance();
        spell(&mut session, "APPLE");
        spell(&mut session, "BEACH");
        spell(&mut session, "CLOUD");
        assert_eq!(session.history().len(), 2);

        let before = tile_order(&session);
        session.replay();

        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.current_level_index(), 1);
        assert_eq!(session.history().len(), 2);
        assert!(session.found_words().is_empty());
        assert!(session.used_tiles().is_empty());
        assert_eq!(session.progress().star_rating, 0);
        assert!(session.tiles().iter().all(|t| t.state == TileState::Available));
        assert_ne!(tile_order(&session), before);

        spell(&mut session, "APPLE");
        spell(&mut session, "BEACH");
        spell(&mut session, "CLOUD");
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[2].level_ordinal, 2);
    }

    #[test]
    fn test_clue_list_patterns() {
        let (mut session, _) = started(vec![level(1, &["DOG", "BIRD"])]);
        spell(&mut session, "DOG");

        let clues = session.clue_list();
        assert_eq!(clues[0].display, "DOG");
        assert!(clues[0].found);
        assert_eq!(clues[1].display, "_ _ _ _");
        assert_eq!(clues[1].clue, "clue for BIRD");
        assert!(!clues[1].found);
    }

    #[test]
    fn test_progress_and_definitions() {
        let (mut session, _) = started(three_levels());
        spell(&mut session, "SUN");

        let progress = session.progress();
        assert_eq!(progress.found_count, 1);
        assert_eq!(progress.total_count, 3);
        assert_eq!(progress.star_rating, 0);

        assert_eq!(session.definitions()[0], ("DOG", "DOG means"));
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let (mut session, clock) = started(three_levels());
        session.select_tile(0);
        session.drain_events();

        session.teardown();
        session.teardown();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.timer_running());
        assert!(session.tiles().is_empty());
        assert!(session.selection().is_empty());

        clock.advance_secs(3);
        session.tick();
        session.select_tile(0);
        session.request_hint();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_interactions_before_start_are_noops() {
        let mut session = PuzzleSession::with_seed(SessionConfig::default(), ManualClock::default(), 0);

        session.select_tile(0);
        session.submit_selection();
        session.clear_selection();
        session.request_hint();
        session.advance();
        session.replay();
        session.load_level(0);
        session.tick();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.drain_events().is_empty());
    }
}

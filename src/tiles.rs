//! Letter tile pool for a single level.

use rand::Rng;

use crate::content::Level;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TileState {
    Available,
    Selected,
    Used,
}

/// One letter in the shuffled pool. `index` is its position in the pool and
/// is the identity used by selection, since letters repeat.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub index: usize,
    pub state: TileState,
}

#[derive(Debug, Clone, Default)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Builds the pool from all words' letters in level order, then shuffles.
    pub fn for_level<R: Rng>(level: &Level, rng: &mut R) -> Self {
        let mut letters = level.letters();
        shuffle(&mut letters, rng);

        let tiles = letters
            .into_iter()
            .enumerate()
            .map(|(index, letter)| Tile {
                letter,
                index,
                state: TileState::Available,
            })
            .collect();

        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<TileState> {
        self.tiles.get(index).map(|t| t.state)
    }

    pub fn set_state(&mut self, index: usize, state: TileState) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.state = state;
        }
    }

    pub fn letter(&self, index: usize) -> Option<char> {
        self.tiles.get(index).map(|t| t.letter)
    }

    /// Lowest-index tile with `letter` that is neither used nor in `exclude`.
    pub fn first_free(&self, letter: char, exclude: &[usize]) -> Option<usize> {
        self.tiles
            .iter()
            .find(|t| {
                t.letter == letter && t.state != TileState::Used && !exclude.contains(&t.index)
            })
            .map(|t| t.index)
    }
}

/// Fisher–Yates: walk from the last index down to 1, swapping each slot with a
/// uniformly chosen slot in `[0, i]`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

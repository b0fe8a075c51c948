//! Level content: data model, validation and loading.

use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::{
    catalog,
    error::{ContentError, SessionError},
};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A target word together with the clue shown while it is hidden and the
/// definition shown once the level is complete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
    pub definition: String,
}

impl WordEntry {
    pub fn new(word: &str, clue: &str, definition: &str) -> Self {
        Self {
            word: word.trim().to_ascii_uppercase(),
            clue: clue.to_string(),
            definition: definition.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Level {
    #[serde(rename = "level")]
    pub ordinal: u32,
    pub words: Vec<WordEntry>,
}

impl Level {
    pub fn new(ordinal: u32, words: Vec<WordEntry>) -> Self {
        Self { ordinal, words }
    }

    /// Total number of letters across all words, i.e. the tile count.
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(WordEntry::len).sum()
    }

    /// Letters of every word concatenated in word order.
    pub fn letters(&self) -> Vec<char> {
        self.words.iter().flat_map(|w| w.word.chars()).collect()
    }

    /// Returns the words that appear more than once in this level.
    pub fn duplicate_words(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = Vec::new();
        for (i, entry) in self.words.iter().enumerate() {
            let repeated = self.words[..i].iter().any(|w| w.word == entry.word);
            if repeated && !dupes.contains(&entry.word.as_str()) {
                dupes.push(&entry.word);
            }
        }
        dupes
    }
}

/// On-disk and over-the-wire level document.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDocument {
    pub levels: Vec<Level>,
}

impl LevelDocument {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalizes every word (trimmed, uppercase) and validates the result.
    pub fn into_levels(self) -> Result<Vec<Level>, ContentError> {
        let levels: Vec<Level> = self
            .levels
            .into_iter()
            .map(|level| Level {
                ordinal: level.ordinal,
                words: level
                    .words
                    .iter()
                    .map(|w| WordEntry::new(&w.word, &w.clue, &w.definition))
                    .collect(),
            })
            .collect();

        validate_levels(&levels)?;
        Ok(levels)
    }
}

/// Checks that a level list can be played.
pub fn validate_levels(levels: &[Level]) -> Result<(), SessionError> {
    if levels.is_empty() {
        return Err(SessionError::InvalidContent("level list is empty".into()));
    }

    for level in levels {
        if level.ordinal == 0 {
            return Err(SessionError::InvalidContent(
                "level ordinals start at 1".into(),
            ));
        }

        if level.words.is_empty() {
            return Err(SessionError::InvalidContent(format!(
                "level {} has no words",
                level.ordinal
            )));
        }

        for entry in &level.words {
            if entry.word.is_empty() {
                return Err(SessionError::InvalidContent(format!(
                    "level {} contains an empty word",
                    level.ordinal
                )));
            }

            if !entry.word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(SessionError::InvalidContent(format!(
                    "level {} word {:?} must be uppercase letters only",
                    level.ordinal, entry.word
                )));
            }
        }
    }

    Ok(())
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads a level list from an http(s) URL or a filesystem path.
pub async fn load_levels(source: &str) -> Result<Vec<Level>, ContentError> {
    let text = if is_url(source) {
        fetch_document(source).await?
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| ContentError::Read {
                path: source.to_string(),
                source: e,
            })?
    };

    let levels = LevelDocument::parse(&text)?.into_levels()?;
    info!("Loaded {} level(s) from {}", levels.len(), source);
    Ok(levels)
}

async fn fetch_document(url: &str) -> Result<String, ContentError> {
    tokio::time::timeout(FETCH_TIMEOUT, fetch_text(url))
        .await
        .map_err(|_| ContentError::Timeout(url.to_string()))?
        .map_err(|e| ContentError::Fetch {
            url: url.to_string(),
            source: e,
        })
}

async fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    reqwest::get(url).await?.error_for_status()?.text().await
}

/// Loads levels from `source`, substituting the built-in default list on any
/// failure. The second value is a notice for the player when the fallback was
/// used.
pub async fn load_levels_or_default(source: &str) -> (Vec<Level>, Option<String>) {
    match load_levels(source).await {
        Ok(levels) => (levels, None),
        Err(e) => {
            warn!("Content load failed, using built-in levels: {}", e);
            (
                catalog::default_levels(),
                Some(format!("Could not load levels ({e}); using built-in levels")),
            )
        }
    }
}

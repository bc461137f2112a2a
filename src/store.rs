//! Persistence of the review deck and high scores behind a small key-value seam.
//!
//! In the browser this is `window.localStorage`; tests and native callers use
//! [`MemoryStore`]. Missing or unreadable values read as empty.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::StoreError;
use crate::session::{GameType, RoundSummary};

pub const MY_SOUNDS_KEY: &str = "soundsInABlenderMySounds";

pub fn high_score_key(game_type: GameType) -> String {
    format!("soundsInABlender{}HighScore", game_type.as_str())
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StoreError> {
        let win = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = win
            .local_storage()
            .map_err(js_error)?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// The stored review deck, oldest first.
pub fn load_deck(store: &impl KeyValueStore) -> Result<Vec<String>, StoreError> {
    let Some(raw) = store.get(MY_SOUNDS_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(deck) => Ok(deck),
        Err(err) => {
            log::warn!("discarding unreadable review deck: {}", err);
            Ok(Vec::new())
        }
    }
}

pub fn load_high_score(store: &impl KeyValueStore, game_type: GameType) -> Result<u32, StoreError> {
    let raw = store.get(&high_score_key(game_type))?;
    Ok(raw
        .and_then(|s| {
            s.trim()
                .parse::<u32>()
                .inspect_err(|err| log::warn!("unreadable high score '{}': {}", s, err))
                .ok()
        })
        .unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverReport {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub deck: Vec<String>,
}

/// Merge a finished round into the stored deck and high score.
pub fn record_game_over(
    store: &mut impl KeyValueStore,
    game_type: GameType,
    summary: &RoundSummary,
) -> Result<GameOverReport, StoreError> {
    let mut deck = load_deck(&*store)?;
    for sound in &summary.incorrect {
        if !deck.contains(sound) {
            deck.push(sound.clone());
        }
    }
    store.set(MY_SOUNDS_KEY, &serde_json::to_string(&deck)?)?;

    let previous = load_high_score(&*store, game_type)?;
    let new_high_score = summary.score > previous;
    if new_high_score {
        store.set(&high_score_key(game_type), &summary.score.to_string())?;
    }

    Ok(GameOverReport {
        score: summary.score,
        high_score: previous.max(summary.score),
        new_high_score,
        deck,
    })
}

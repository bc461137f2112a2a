//! Sounds in a Blender core crate.
//!
//! Phonics flashcards for early readers: single sound cards, blended nonsense words
//! built from the enabled spelling patterns, and multi-syllable words for
//! syllable-type practice. Cards misread during a timed skill check feed the
//! "My Sounds" review deck.
//!
//! Rendering and screen flow live in JS; this crate generates cards, scores rounds and
//! keeps the deck and high scores in local storage.

use log::LevelFilter;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

pub mod deck;
pub mod error;
pub mod generator;
mod logging;
pub mod patterns;
pub mod rng;
pub mod session;
pub mod settings;
pub mod store;

pub use error::{GenerateError, StoreError};
pub use generator::{
    Analysis, Sound, Syllable, TypedWord, Word, compose_typed_word, compose_word, generate_sound,
};
pub use settings::{RoundConfig, ShortVowel, SoundSettings, SyllableTypeSettings, WordSettings};

use deck::ReviewDeck;
use session::{HeldCard, Round, RoundMode, RoundStatus};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

// -----------------------------------------------------------------------------
// Results handed to the UI
// -----------------------------------------------------------------------------

/// Generation result as seen by the UI: a card, or the reason start stays disabled.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok {
        card: T,
    },
    InvalidConfiguration {
        reason: String,
    },
}

impl<T> From<Result<T, GenerateError>> for Outcome<T> {
    fn from(result: Result<T, GenerateError>) -> Self {
        match result {
            Ok(card) => Outcome::Ok { card },
            Err(err) => Outcome::InvalidConfiguration {
                reason: err.to_string(),
            },
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct WordCard {
    word: Word,
    text: String,
}

impl From<Word> for WordCard {
    fn from(word: Word) -> Self {
        Self {
            text: word.text(),
            word,
        }
    }
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("invalid settings: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn game_type_arg(name: &str) -> Result<session::GameType, JsValue> {
    session::GameType::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown game type '{}'", name)))
}

fn store_error(err: StoreError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn generate_word(settings_json: &str) -> Result<String, JsValue> {
    let settings: WordSettings = parse(settings_json)?;
    let outcome: Outcome<WordCard> = compose_word(&settings, &mut rng::fresh_rng())
        .map(WordCard::from)
        .into();
    to_json(&outcome)
}

#[wasm_bindgen]
pub fn generate_sound_card(settings_json: &str) -> Result<String, JsValue> {
    let settings: SoundSettings = parse(settings_json)?;
    to_json(&generate_sound(&settings, &mut rng::fresh_rng()))
}

#[wasm_bindgen]
pub fn generate_syllable_word(settings_json: &str) -> Result<String, JsValue> {
    let settings: SyllableTypeSettings = parse(settings_json)?;
    let outcome: Outcome<TypedWord> = compose_typed_word(&settings, &mut rng::fresh_rng()).into();
    to_json(&outcome)
}

#[wasm_bindgen]
pub fn can_start_words(settings_json: &str) -> Result<bool, JsValue> {
    let settings: WordSettings = parse(settings_json)?;
    Ok(settings.has_vowel_pattern())
}

#[wasm_bindgen]
pub fn can_start_sounds(settings_json: &str) -> Result<bool, JsValue> {
    let settings: SoundSettings = parse(settings_json)?;
    Ok(settings.any_category())
}

/// `[{ "id": "Closed", "name": "Closed (cat, sub)" }, ...]` for the setup screen.
#[wasm_bindgen]
pub fn syllable_type_labels() -> Result<String, JsValue> {
    let labels: Vec<serde_json::Value> = generator::SyllableType::ALL
        .iter()
        .map(|t| serde_json::json!({ "id": t, "name": t.label() }))
        .collect();
    to_json(&labels)
}

#[wasm_bindgen]
pub fn record_game_over(game_type: &str, summary_json: &str) -> Result<String, JsValue> {
    let game_type = game_type_arg(game_type)?;
    let summary: session::RoundSummary = parse(summary_json)?;
    let mut storage = store::BrowserStorage::open().map_err(store_error)?;
    let report = store::record_game_over(&mut storage, game_type, &summary).map_err(store_error)?;
    to_json(&report)
}

/// The stored review deck as shuffled, ready-to-show sound cards.
#[wasm_bindgen]
pub fn load_review_deck() -> Result<String, JsValue> {
    let storage = store::BrowserStorage::open().map_err(store_error)?;
    let mut rng = rng::fresh_rng();
    let deck = ReviewDeck::load(&storage, &mut rng).map_err(store_error)?;
    to_json(&deck.cards(&mut rng))
}

#[wasm_bindgen]
pub fn load_high_score(game_type: &str) -> Result<u32, JsValue> {
    let game_type = game_type_arg(game_type)?;
    let storage = store::BrowserStorage::open().map_err(store_error)?;
    store::load_high_score(&storage, game_type).map_err(store_error)
}

// -----------------------------------------------------------------------------
// Stateful handles
// -----------------------------------------------------------------------------

/// A practice or skill-check round that deals its own cards.
///
/// Each `next_*` call scores the card currently shown (using the marks toggled on it)
/// before dealing the next one.
#[wasm_bindgen]
pub struct GameRound {
    round: Round,
    current: Option<HeldCard>,
    rng: SmallRng,
}

#[wasm_bindgen]
impl GameRound {
    /// `mode` is `"practice"` or `"skillCheck"`; `config_json` is a `RoundConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, config_json: &str) -> Result<GameRound, JsValue> {
        let mode = RoundMode::from_name(mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown round mode '{}'", mode)))?;
        let config: RoundConfig = parse(config_json)?;
        Ok(GameRound {
            round: Round::new(mode, &config),
            current: None,
            rng: rng::fresh_rng(),
        })
    }

    /// One second elapsed; `true` exactly once, when time runs out.
    pub fn tick(&mut self) -> bool {
        self.round.tick() == RoundStatus::TimeUp
    }

    pub fn time_left(&self) -> u32 {
        self.round.time_left()
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    pub fn toggle_mark(&mut self, index: usize) {
        self.round.toggle_mark(index);
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.round.marked().contains(&index)
    }

    /// Same JSON as [`generate_word`]. An invalid configuration deals nothing.
    pub fn next_word(&mut self, settings_json: &str) -> Result<String, JsValue> {
        let settings: WordSettings = parse(settings_json)?;
        let result = compose_word(&settings, &mut self.rng);
        if let Ok(word) = &result {
            self.deal(HeldCard::Word(word.clone()));
        }
        let outcome: Outcome<WordCard> = result.map(WordCard::from).into();
        to_json(&outcome)
    }

    /// Same JSON as [`generate_sound_card`].
    pub fn next_sound(&mut self, settings_json: &str) -> Result<String, JsValue> {
        let settings: SoundSettings = parse(settings_json)?;
        let sound = generate_sound(&settings, &mut self.rng);
        let json = to_json(&sound)?;
        self.deal(HeldCard::Sound(sound));
        Ok(json)
    }

    /// Score the card on screen and return the `RoundSummary` JSON for
    /// [`record_game_over`].
    pub fn finish(self) -> Result<String, JsValue> {
        let GameRound { round, current, .. } = self;
        let summary = match &current {
            Some(card) => round.finish(card.as_card()),
            None => round.summary(),
        };
        to_json(&summary)
    }
}

impl GameRound {
    fn deal(&mut self, card: HeldCard) {
        if let Some(previous) = self.current.replace(card) {
            self.round.advance(previous.as_card());
        }
    }
}

/// The "My Sounds" review deck, cycled one card at a time.
#[wasm_bindgen]
pub struct ReviewSession {
    deck: ReviewDeck,
    rng: SmallRng,
}

#[wasm_bindgen]
impl ReviewSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ReviewSession, JsValue> {
        let storage = store::BrowserStorage::open().map_err(store_error)?;
        let mut rng = rng::fresh_rng();
        let deck = ReviewDeck::load(&storage, &mut rng).map_err(store_error)?;
        Ok(ReviewSession { deck, rng })
    }

    /// The current card as `Sound` JSON; a thumbs-up card when the deck is empty.
    pub fn current(&mut self) -> Result<String, JsValue> {
        to_json(&self.deck.current(&mut self.rng))
    }

    pub fn advance(&mut self) {
        self.deck.advance();
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
}

/// A syllable-type word together with its step-by-step division.
#[wasm_bindgen]
pub struct SyllableSpy {
    word: TypedWord,
    analysis: Analysis,
}

#[wasm_bindgen]
impl SyllableSpy {
    /// Throws when no syllable type is enabled.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<SyllableSpy, JsValue> {
        let settings: SyllableTypeSettings = parse(settings_json)?;
        let word = compose_typed_word(&settings, &mut rng::fresh_rng())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let analysis = Analysis::new(&word);
        Ok(SyllableSpy { word, analysis })
    }

    /// `TypedWord` JSON.
    pub fn word(&self) -> Result<String, JsValue> {
        to_json(&self.word)
    }

    pub fn click(&mut self, index: usize) -> bool {
        self.analysis.click(index)
    }

    pub fn skip(&mut self) {
        self.analysis.skip();
    }

    pub fn is_complete(&self) -> bool {
        self.analysis.is_complete()
    }

    /// `{ "step", "target", "revealed", "split", "complete" }`.
    pub fn state(&self) -> Result<String, JsValue> {
        to_json(&serde_json::json!({
            "step": self.analysis.step(),
            "target": self.analysis.target(),
            "revealed": self.analysis.revealed(),
            "split": self.analysis.is_split(),
            "complete": self.analysis.is_complete(),
        }))
    }
}

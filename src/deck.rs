//! The "My Sounds" review deck built from sounds the learner misread.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::StoreError;
use crate::generator::Sound;
use crate::store::{self, KeyValueStore};

const EMPTY_DECK: &str = "👍";

#[derive(Debug, Clone)]
pub struct ReviewDeck {
    cards: Vec<String>,
    index: usize,
}

impl ReviewDeck {
    /// De-duplicate and shuffle `sounds`.
    pub fn new<R: Rng + ?Sized>(sounds: impl IntoIterator<Item = String>, rng: &mut R) -> Self {
        let mut cards: Vec<String> = Vec::new();
        for s in sounds {
            if !cards.contains(&s) {
                cards.push(s);
            }
        }
        cards.shuffle(rng);
        Self { cards, index: 0 }
    }

    /// The stored "My Sounds" deck, shuffled.
    pub fn load<R: Rng + ?Sized>(
        storage: &impl KeyValueStore,
        rng: &mut R,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(store::load_deck(storage)?, rng))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The current card. Review cards always use the b/d/p/q fonts for those letters
    /// and show the keyword picture for short vowels.
    pub fn current<R: Rng + ?Sized>(&self, rng: &mut R) -> Sound {
        match self.cards.get(self.index) {
            Some(text) => Sound::card(text, true, true, rng),
            None => Sound::plain(EMPTY_DECK),
        }
    }

    /// Every card in deck order, dressed as by [`ReviewDeck::current`].
    pub fn cards<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Sound> {
        self.cards
            .iter()
            .map(|text| Sound::card(text, true, true, rng))
            .collect()
    }

    /// Move to the next card, wrapping to the start.
    pub fn advance(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
        }
    }

    pub fn contains(&self, sound: &str) -> bool {
        self.cards.iter().any(|c| c == sound)
    }
}

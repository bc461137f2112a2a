//! Round bookkeeping: the skill-check countdown, per-card marks and scoring.
//!
//! The host drives [`Round::tick`] from a once-per-second timer and calls
//! [`Round::advance`] whenever the learner moves to the next card.

use serde::{Deserialize, Serialize};

use crate::generator::{Sound, Word};
use crate::settings::RoundConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Words,
    Sounds,
}

impl GameType {
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Words => "words",
            GameType::Sounds => "sounds",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "words" => Some(GameType::Words),
            "sounds" => Some(GameType::Sounds),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundMode {
    Practice,
    SkillCheck,
}

impl RoundMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "practice" => Some(RoundMode::Practice),
            "skillCheck" => Some(RoundMode::SkillCheck),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Running,
    TimeUp,
}

/// The card currently in front of the learner.
#[derive(Clone, Copy, Debug)]
pub enum Card<'a> {
    Word(&'a Word),
    Sound(&'a Sound),
}

/// An owned card, for hosts that keep the current card alongside the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeldCard {
    Word(Word),
    Sound(Sound),
}

impl HeldCard {
    pub fn as_card(&self) -> Card<'_> {
        match self {
            HeldCard::Word(word) => Card::Word(word),
            HeldCard::Sound(sound) => Card::Sound(sound),
        }
    }
}

impl Card<'_> {
    /// Review labels for the marked segment indices, in index order. Word segments are
    /// numbered across all syllables.
    fn labels(&self, marked: &[usize]) -> Vec<String> {
        match self {
            Card::Sound(sound) => vec![sound.text.to_lowercase()],
            Card::Word(word) => {
                let mut labels = Vec::new();
                let mut offset = 0;
                for (si, syllable) in word.syllables().iter().enumerate() {
                    let len = syllable.segments().len();
                    for seg in 0..len {
                        if marked.contains(&(offset + seg)) {
                            labels.extend(word.review_label(si, seg));
                        }
                    }
                    offset += len;
                }
                labels
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub score: u32,
    pub total_seen: u32,
    pub incorrect: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Round {
    mode: RoundMode,
    time_left: u32,
    score: u32,
    total_seen: u32,
    incorrect: Vec<String>,
    marked: Vec<usize>,
}

impl Round {
    /// A skill check always lasts at least one second.
    pub fn new(mode: RoundMode, config: &RoundConfig) -> Self {
        Self {
            mode,
            time_left: config.duration_secs.max(1),
            score: 0,
            total_seen: 0,
            incorrect: Vec::new(),
            marked: Vec::new(),
        }
    }

    pub fn mode(&self) -> RoundMode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_seen(&self) -> u32 {
        self.total_seen
    }

    pub fn marked(&self) -> &[usize] {
        &self.marked
    }

    /// One second elapsed. Returns `TimeUp` exactly once, on the tick that reaches zero.
    pub fn tick(&mut self) -> RoundStatus {
        if self.mode != RoundMode::SkillCheck || self.time_left == 0 {
            return RoundStatus::Running;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            RoundStatus::TimeUp
        } else {
            RoundStatus::Running
        }
    }

    pub fn is_over(&self) -> bool {
        self.mode == RoundMode::SkillCheck && self.time_left == 0
    }

    /// Mark or unmark a segment (or the whole sound card at index 0) as misread.
    /// Practice rounds ignore marks.
    pub fn toggle_mark(&mut self, index: usize) {
        if self.mode != RoundMode::SkillCheck {
            return;
        }
        if let Some(pos) = self.marked.iter().position(|&i| i == index) {
            self.marked.remove(pos);
        } else {
            self.marked.push(index);
        }
    }

    /// Score `card` and clear the marks for the next one.
    pub fn advance(&mut self, card: Card<'_>) {
        if self.mode == RoundMode::SkillCheck {
            if self.marked.is_empty() {
                self.score += 1;
            } else {
                for label in card.labels(&self.marked) {
                    if !self.incorrect.contains(&label) {
                        self.incorrect.push(label);
                    }
                }
            }
            self.total_seen += 1;
        }
        self.marked.clear();
    }

    /// Score the in-flight card and close the round.
    pub fn finish(mut self, card: Card<'_>) -> RoundSummary {
        self.advance(card);
        self.summary()
    }

    /// Close the round without scoring another card.
    pub fn summary(self) -> RoundSummary {
        RoundSummary {
            score: self.score,
            total_seen: self.total_seen,
            incorrect: self.incorrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::compose_word;
    use crate::settings::{ShortVowel, WordSettings};
    use rand::rngs::mock::StepRng;

    fn skill_check(secs: u32) -> Round {
        Round::new(RoundMode::SkillCheck, &RoundConfig { duration_secs: secs })
    }

    fn babe() -> Word {
        let settings = WordSettings {
            silent_e: true,
            selected_short_vowels: vec![ShortVowel::A],
            ..WordSettings::default()
        };
        compose_word(&settings, &mut StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn countdown_reports_time_up_once() {
        let mut round = skill_check(3);
        assert_eq!(round.tick(), RoundStatus::Running);
        assert_eq!(round.tick(), RoundStatus::Running);
        assert_eq!(round.tick(), RoundStatus::TimeUp);
        assert!(round.is_over());
        assert_eq!(round.tick(), RoundStatus::Running);
        assert_eq!(round.time_left(), 0);
    }

    #[test]
    fn zero_length_skill_check_still_times_out() {
        let mut round = skill_check(0);
        assert!(!round.is_over());
        assert_eq!(round.time_left(), 1);
        assert_eq!(round.tick(), RoundStatus::TimeUp);
        assert!(round.is_over());
    }

    #[test]
    fn held_cards_score_like_borrowed_ones() {
        let held = HeldCard::Word(babe());
        let mut round = skill_check(60);
        round.toggle_mark(1);
        round.advance(held.as_card());
        let summary = round.summary();
        assert_eq!(summary.total_seen, 1);
        assert_eq!(summary.incorrect, vec!["a_e"]);
        assert_eq!(RoundMode::from_name("skillCheck"), Some(RoundMode::SkillCheck));
        assert_eq!(RoundMode::from_name("timed"), None);
    }

    #[test]
    fn practice_never_expires_or_scores() {
        let mut round = Round::new(RoundMode::Practice, &RoundConfig::default());
        for _ in 0..120 {
            assert_eq!(round.tick(), RoundStatus::Running);
        }
        round.toggle_mark(0);
        assert!(round.marked().is_empty());
        let word = babe();
        let summary = round.finish(Card::Word(&word));
        assert_eq!(summary.total_seen, 0);
        assert!(summary.incorrect.is_empty());
    }

    #[test]
    fn marks_become_review_labels() {
        let word = babe();
        assert_eq!(word.text(), "babe");
        let mut round = skill_check(60);
        round.advance(Card::Word(&word));
        assert_eq!(round.score(), 1);

        round.toggle_mark(1);
        round.toggle_mark(2);
        round.toggle_mark(2);
        round.advance(Card::Word(&word));
        round.toggle_mark(1);
        let summary = round.finish(Card::Word(&word));
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total_seen, 3);
        assert_eq!(summary.incorrect, vec!["a_e"]);
    }

    #[test]
    fn sound_cards_are_labelled_lowercase() {
        let sound = Sound::plain("B");
        let mut round = skill_check(60);
        round.toggle_mark(0);
        let summary = round.finish(Card::Sound(&sound));
        assert_eq!(summary.incorrect, vec!["b"]);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn word_marks_span_syllables() {
        let settings = WordSettings {
            multisyllable: true,
            selected_short_vowels: vec![ShortVowel::A],
            ..WordSettings::default()
        };
        let word = compose_word(&settings, &mut StepRng::new(0, 0)).unwrap();
        // CVC "bab" followed by complex "bab".
        assert_eq!(word.text(), "babbab");
        let mut round = skill_check(60);
        round.toggle_mark(0);
        round.toggle_mark(4);
        round.advance(Card::Word(&word));
        let summary = round.finish(Card::Word(&word));
        assert_eq!(summary.incorrect, vec!["b", "a"]);
    }
}

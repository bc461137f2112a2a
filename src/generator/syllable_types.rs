//! Words assembled from typed syllable exemplars for syllable-type practice.
//!
//! The learner sees a 3 or 4 syllable word and identifies each syllable's type, so
//! every syllable keeps its [`SyllableType`] alongside its text.

use rand::Rng;
use serde::Serialize;

use crate::error::GenerateError;
use crate::rng::pick;
use crate::settings::SyllableTypeSettings;

/// Attempts per position before that position is skipped.
pub const MAX_POSITION_ATTEMPTS: u32 = 50;

/// Chance of a three-syllable word (otherwise four).
pub const THREE_SYLLABLE_PROBABILITY: f64 = 0.7;

/// Chance the last syllable comes from the dedicated final list.
pub const FINAL_LIST_PROBABILITY: f64 = 0.7;

const TRY_AGAIN: &str = "Try Again";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyllableType {
    Closed,
    Open,
    #[serde(rename = "VCE")]
    Vce,
    #[serde(rename = "R-Controlled")]
    RControlled,
    #[serde(rename = "Vowel Team")]
    VowelTeam,
    #[serde(rename = "Consonant-le")]
    ConsonantLe,
}

impl SyllableType {
    pub const ALL: [SyllableType; 6] = [
        SyllableType::Closed,
        SyllableType::Open,
        SyllableType::Vce,
        SyllableType::RControlled,
        SyllableType::VowelTeam,
        SyllableType::ConsonantLe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SyllableType::Closed => "Closed (cat, sub)",
            SyllableType::Open => "Open (go, pro)",
            SyllableType::Vce => "Vowel-Consonant-e (bike)",
            SyllableType::RControlled => "R-Controlled (car, for)",
            SyllableType::VowelTeam => "Vowel Team (boat, tain)",
            SyllableType::ConsonantLe => "-ble, -cle",
        }
    }

    pub fn exemplars(self) -> &'static Exemplars {
        match self {
            SyllableType::Closed => &CLOSED,
            SyllableType::Open => &OPEN,
            SyllableType::Vce => &VCE,
            SyllableType::RControlled => &R_CONTROLLED,
            SyllableType::VowelTeam => &VOWEL_TEAM,
            SyllableType::ConsonantLe => &CONSONANT_LE,
        }
    }
}

impl SyllableTypeSettings {
    pub fn enabled(&self) -> Vec<SyllableType> {
        let flags = [
            self.closed,
            self.open,
            self.vce,
            self.r_controlled,
            self.vowel_team,
            self.consonant_le,
        ];
        SyllableType::ALL
            .iter()
            .zip(flags)
            .filter_map(|(t, on)| on.then_some(*t))
            .collect()
    }
}

/// Exemplar syllables of one type, split by where they may appear in a word.
#[derive(Debug)]
pub struct Exemplars {
    pub initial: &'static [&'static str],
    pub any: &'static [&'static str],
    pub final_: &'static [&'static str],
}

pub static CLOSED: Exemplars = Exemplars {
    initial: &[
        "sub", "con", "mis", "in", "un", "dis", "ex", "per", "ob", "ad", "mag", "fan", "tas", "tic",
    ],
    any: &[
        "tend", "rupt", "sist", "cept", "ject", "mand", "vent", "dict", "spect", "tract", "net",
        "bot",
    ],
    final_: &[
        "mit", "pel", "fect", "struct", "sert", "port", "pend", "lect", "graph", "sist", "ic", "et",
        "ic",
    ],
};

pub static OPEN: Exemplars = Exemplars {
    initial: &["pro", "re", "de", "pre", "be", "a", "e", "o", "i"],
    any: &["la", "si", "tu", "bra", "cro", "do", "fi", "ho", "cu", "no", "lo", "ma"],
    final_: &["go", "me", "she", "we", "hi", "so", "by", "my", "flu", "cry"],
};

pub static VCE: Exemplars = Exemplars {
    initial: &["lite", "pete", "plode", "spire", "flate", "pose"],
    any: &["flate", "pose", "sume", "pete", "vade", "clude", "mise", "dine", "cope", "rine"],
    final_: &["plete", "scribe", "spire", "flate", "bute", "tude", "cute", "prive", "voke"],
};

pub static R_CONTROLLED: Exemplars = Exemplars {
    initial: &["for", "per", "mar", "sur", "ter", "ar"],
    any: &["ver", "gar", "ther", "lar", "bor", "cur", "tir", "port"],
    final_: &["form", "port", "sert", "vert", "cur", "firm", "burn", "star", "ner"],
};

pub static VOWEL_TEAM: Exemplars = Exemplars {
    initial: &["out", "east", "aim", "aud", "ound", "eat", "float"],
    any: &["tain", "gree", "join", "bout", "peal", "noy", "void", "cau", "flee", "main"],
    final_: &["claim", "peal", "found", "ploy", "nounce", "deem", "main", "gree", "boat"],
};

// Consonant-le only ever closes a word.
pub static CONSONANT_LE: Exemplars = Exemplars {
    initial: &[],
    any: &[],
    final_: &["ble", "cle", "dle", "fle", "gle", "kle", "ple", "tle", "zle", "stle"],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    First,
    Middle,
    Last,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedSyllable {
    pub text: &'static str,
    #[serde(rename = "type")]
    pub syllable_type: SyllableType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypedWord {
    pub full: String,
    pub syllables: Vec<TypedSyllable>,
}

impl TypedWord {
    fn from_syllables(syllables: Vec<TypedSyllable>) -> Self {
        Self {
            full: syllables.iter().map(|s| s.text).collect(),
            syllables,
        }
    }

    /// Shown when no syllable could be drawn for any position.
    pub fn try_again() -> Self {
        Self::from_syllables(vec![TypedSyllable {
            text: TRY_AGAIN,
            syllable_type: SyllableType::Closed,
        }])
    }

    pub fn is_try_again(&self) -> bool {
        self.full == TRY_AGAIN
    }
}

/// Build a 3 or 4 syllable word from the enabled syllable types.
pub fn compose_typed_word<R: Rng + ?Sized>(
    settings: &SyllableTypeSettings,
    rng: &mut R,
) -> Result<TypedWord, GenerateError> {
    let enabled = settings.enabled();
    if enabled.is_empty() {
        return Err(GenerateError::NoSyllableType);
    }

    let count = if rng.gen_bool(THREE_SYLLABLE_PROBABILITY) {
        3
    } else {
        4
    };
    let mut syllables = Vec::with_capacity(count);
    for index in 0..count {
        let position = match index {
            0 => Position::First,
            i if i == count - 1 => Position::Last,
            _ => Position::Middle,
        };
        match draw_at(&enabled, position, rng) {
            Some(s) => syllables.push(s),
            None => log::debug!("no exemplar for position {} of {}", index, count),
        }
    }

    if syllables.is_empty() {
        return Ok(TypedWord::try_again());
    }
    Ok(TypedWord::from_syllables(syllables))
}

fn draw_at<R: Rng + ?Sized>(
    enabled: &[SyllableType],
    position: Position,
    rng: &mut R,
) -> Option<TypedSyllable> {
    for _ in 0..MAX_POSITION_ATTEMPTS {
        let syllable_type = enabled[rng.gen_range(0..enabled.len())];
        let pool = pool_for(syllable_type, position, rng);
        if let Some(text) = pick(rng, pool) {
            return Some(TypedSyllable {
                text,
                syllable_type,
            });
        }
    }
    None
}

fn pool_for<R: Rng + ?Sized>(
    syllable_type: SyllableType,
    position: Position,
    rng: &mut R,
) -> &'static [&'static str] {
    let ex = syllable_type.exemplars();
    match position {
        Position::First if !ex.initial.is_empty() => ex.initial,
        Position::First | Position::Middle => ex.any,
        Position::Last if syllable_type == SyllableType::ConsonantLe => ex.final_,
        Position::Last => {
            if !ex.final_.is_empty() && rng.gen_bool(FINAL_LIST_PROBABILITY) {
                ex.final_
            } else {
                ex.any
            }
        }
    }
}

/// Order in which syllable types are picked out when dividing a word.
pub const DIVISION_ORDER: [SyllableType; 6] = [
    SyllableType::RControlled,
    SyllableType::Vce,
    SyllableType::VowelTeam,
    SyllableType::ConsonantLe,
    SyllableType::Open,
    SyllableType::Closed,
];

/// Step-by-step division of a [`TypedWord`].
///
/// Each step targets one type from [`DIVISION_ORDER`]; only syllables of that type can
/// be revealed. Skipping past the last step reveals whatever is left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(skip)]
    types: Vec<SyllableType>,
    step: usize,
    revealed: Vec<Option<SyllableType>>,
    split: bool,
}

impl Analysis {
    pub fn new(word: &TypedWord) -> Self {
        let types: Vec<SyllableType> = word.syllables.iter().map(|s| s.syllable_type).collect();
        Self {
            revealed: vec![None; types.len()],
            types,
            step: 0,
            split: false,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Type the learner is looking for; `None` once the analysis is complete.
    pub fn target(&self) -> Option<SyllableType> {
        DIVISION_ORDER.get(self.step).copied()
    }

    pub fn revealed(&self) -> &[Option<SyllableType>] {
        &self.revealed
    }

    /// The word is shown split into syllables after the first correct pick.
    pub fn is_split(&self) -> bool {
        self.split
    }

    pub fn is_complete(&self) -> bool {
        self.step >= DIVISION_ORDER.len()
    }

    /// Reveal syllable `index` if it has the target type. Returns whether it was revealed.
    pub fn click(&mut self, index: usize) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        match (self.types.get(index), self.revealed.get(index)) {
            (Some(&t), Some(None)) if t == target => {
                self.revealed[index] = Some(t);
                self.split = true;
                true
            }
            _ => false,
        }
    }

    /// Move on to the next type.
    pub fn skip(&mut self) {
        if self.is_complete() {
            return;
        }
        self.step += 1;
        if self.is_complete() {
            for (slot, t) in self.revealed.iter_mut().zip(&self.types) {
                if slot.is_none() {
                    *slot = Some(*t);
                }
            }
            self.split = true;
        }
    }
}

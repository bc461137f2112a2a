//! Setup-screen settings passed into every generator call.
//!
//! The JS setup screens hand these over as camelCase JSON; any field left out keeps the
//! value the app starts with.

use serde::Deserialize;

use crate::patterns;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortVowel {
    A,
    E,
    I,
    O,
    U,
}

impl ShortVowel {
    pub const ALL: [ShortVowel; 5] = [
        ShortVowel::A,
        ShortVowel::E,
        ShortVowel::I,
        ShortVowel::O,
        ShortVowel::U,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShortVowel::A => "a",
            ShortVowel::E => "e",
            ShortVowel::I => "i",
            ShortVowel::O => "o",
            ShortVowel::U => "u",
        }
    }
}

/// Word-builder toggles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordSettings {
    pub digraphs: bool,
    pub floss: bool,
    pub long_consonants: bool,
    pub initial_blends: bool,
    pub final_blends: bool,
    pub silent_e: bool,
    pub long_vowels: bool,
    pub multisyllable: bool,
    pub use_short_vowels: bool,
    pub selected_short_vowels: Vec<ShortVowel>,
}

impl Default for WordSettings {
    fn default() -> Self {
        Self {
            digraphs: true,
            floss: false,
            long_consonants: false,
            initial_blends: false,
            final_blends: false,
            silent_e: false,
            long_vowels: false,
            multisyllable: false,
            use_short_vowels: true,
            selected_short_vowels: ShortVowel::ALL.to_vec(),
        }
    }
}

impl WordSettings {
    /// Settings with every toggle off and no vowel selected.
    pub fn none() -> Self {
        Self {
            digraphs: false,
            use_short_vowels: false,
            selected_short_vowels: Vec::new(),
            ..Self::default()
        }
    }

    /// Nucleus graphemes the complex syllable may use, in table order.
    pub fn nucleus_pool(&self) -> Vec<&'static str> {
        let mut pool: Vec<&'static str> = Vec::new();
        if self.use_short_vowels {
            for v in &self.selected_short_vowels {
                let s = v.as_str();
                if !pool.contains(&s) {
                    pool.push(s);
                }
            }
        }
        if self.long_vowels {
            pool.extend_from_slice(patterns::LONG_VOWELS);
        }
        pool
    }

    /// Short vowels for the CVC syllable; an empty selection means all five.
    pub fn cvc_vowel_pool(&self) -> Vec<&'static str> {
        if self.selected_short_vowels.is_empty() {
            patterns::SHORT_VOWELS.to_vec()
        } else {
            self.selected_short_vowels.iter().map(|v| v.as_str()).collect()
        }
    }

    /// Whether a word can be generated at all; the start control mirrors this.
    pub fn has_vowel_pattern(&self) -> bool {
        !self.nucleus_pool().is_empty()
    }
}

/// Sound-pack toggles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoundSettings {
    pub bdpq: bool,
    pub consonants: bool,
    pub short_vowels: bool,
    pub common_long_vowels: bool,
    pub r_controlled: bool,
    pub less_common_vowels: bool,
    pub show_vowel_images: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            bdpq: false,
            consonants: true,
            short_vowels: true,
            common_long_vowels: false,
            r_controlled: false,
            less_common_vowels: false,
            show_vowel_images: false,
        }
    }
}

impl SoundSettings {
    pub fn any_category(&self) -> bool {
        self.bdpq
            || self.consonants
            || self.short_vowels
            || self.common_long_vowels
            || self.r_controlled
            || self.less_common_vowels
    }
}

/// Syllable-type practice toggles, one per type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyllableTypeSettings {
    #[serde(rename = "Closed")]
    pub closed: bool,
    #[serde(rename = "Open")]
    pub open: bool,
    #[serde(rename = "VCE")]
    pub vce: bool,
    #[serde(rename = "R-Controlled")]
    pub r_controlled: bool,
    #[serde(rename = "Vowel Team")]
    pub vowel_team: bool,
    #[serde(rename = "Consonant-le")]
    pub consonant_le: bool,
}

impl Default for SyllableTypeSettings {
    fn default() -> Self {
        Self {
            closed: true,
            open: true,
            vce: true,
            r_controlled: true,
            vowel_team: true,
            consonant_le: true,
        }
    }
}

/// Skill-check round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundConfig {
    pub duration_secs: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { duration_secs: 60 }
    }
}

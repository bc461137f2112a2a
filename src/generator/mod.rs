//! Card generators: single sounds, blended words and syllable-type words.
//!
//! Every generator is a pure function of an explicit settings value and a random
//! source. Nothing here holds state between calls; each call yields a fresh card.
//!
//! - [`sound`] -- sound-pack pool assembly and the sound picker
//! - [`syllable`] -- complex syllables (bounded rejection sampling) and CVC syllables
//! - [`syllable_types`] -- typed-exemplar words for syllable-type practice

use rand::Rng;
use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use crate::error::GenerateError;
use crate::patterns;
use crate::settings::WordSettings;

pub mod sound;
pub mod syllable;
pub mod syllable_types;

pub use sound::{FontCategory, Sound, generate_sound, pick_sound, sound_pool};
pub use syllable::{MAX_SYLLABLE_ATTEMPTS, complex_syllable, cvc_syllable};
pub use syllable_types::{
    Analysis, DIVISION_ORDER, SyllableType, TypedSyllable, TypedWord, compose_typed_word,
};

/// One syllable of a blended word. Segments are rendered in order: onset, nucleus,
/// coda, then the silent "e".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syllable {
    pub onset: Option<&'static str>,
    pub nucleus: &'static str,
    pub coda: Option<&'static str>,
    pub silent_e: bool,
}

impl Syllable {
    /// The non-empty segments, 1 to 4 of them.
    pub fn segments(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(4);
        out.extend(self.onset);
        out.push(self.nucleus);
        out.extend(self.coda);
        if self.silent_e {
            out.push(patterns::SILENT_E);
        }
        out
    }

    pub fn text(&self) -> String {
        self.segments().concat()
    }

    pub fn has_long_vowel(&self) -> bool {
        patterns::is_long_vowel(self.nucleus)
    }
}

// Rendered by the UI as a plain array of segment strings.
impl Serialize for Syllable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let segments = self.segments();
        let mut seq = serializer.serialize_seq(Some(segments.len()))?;
        for s in segments {
            seq.serialize_element(s)?;
        }
        seq.end()
    }
}

/// A blended word: one complex syllable, or a CVC syllable followed by one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Word {
    syllables: Vec<Syllable>,
}

impl Word {
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn text(&self) -> String {
        self.syllables.iter().map(Syllable::text).collect()
    }

    pub fn is_multisyllable(&self) -> bool {
        self.syllables.len() > 1
    }

    /// Label recorded in the review deck when a segment is read incorrectly.
    ///
    /// A short vowel closed by a silent "e" is practised as its split digraph ("a_e").
    pub fn review_label(&self, syllable_index: usize, segment_index: usize) -> Option<String> {
        let syllable = self.syllables.get(syllable_index)?;
        let segments = syllable.segments();
        let segment = *segments.get(segment_index)?;
        if syllable.silent_e && segment == syllable.nucleus && patterns::is_short_vowel(segment) {
            Some(format!("{}_e", segment))
        } else {
            Some(segment.to_string())
        }
    }
}

/// Build the next word for the word builder.
pub fn compose_word<R: Rng + ?Sized>(
    settings: &WordSettings,
    rng: &mut R,
) -> Result<Word, GenerateError> {
    let syllables = if settings.multisyllable {
        let first = cvc_syllable(settings, rng);
        vec![first, complex_syllable(settings, rng)?]
    } else {
        vec![complex_syllable(settings, rng)?]
    };
    Ok(Word { syllables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    fn cake() -> Syllable {
        Syllable {
            onset: Some("c"),
            nucleus: "a",
            coda: Some("k"),
            silent_e: true,
        }
    }

    #[test]
    fn segments_skip_missing_parts() {
        let s = Syllable {
            onset: None,
            nucleus: "ee",
            coda: Some("t"),
            silent_e: false,
        };
        assert_eq!(s.segments(), vec!["ee", "t"]);
        assert_eq!(cake().segments(), vec!["c", "a", "k", "e"]);
        assert_eq!(cake().text(), "cake");
    }

    #[test]
    fn word_serializes_as_nested_segment_arrays() {
        let w = Word {
            syllables: vec![cake()],
        };
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"[["c","a","k","e"]]"#);
    }

    #[test]
    fn review_label_marks_split_digraph() {
        let w = Word {
            syllables: vec![cake()],
        };
        assert_eq!(w.review_label(0, 1).as_deref(), Some("a_e"));
        assert_eq!(w.review_label(0, 0).as_deref(), Some("c"));
        assert_eq!(w.review_label(0, 3).as_deref(), Some("e"));
        assert_eq!(w.review_label(0, 4), None);
        assert_eq!(w.review_label(1, 0), None);
    }

    #[test]
    fn multisyllable_word_starts_with_cvc() {
        let settings = WordSettings {
            multisyllable: true,
            ..WordSettings::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let w = compose_word(&settings, &mut rng).unwrap();
            assert!(w.is_multisyllable());
            let first = w.syllables()[0];
            assert!(first.onset.is_some() && first.coda.is_some() && !first.silent_e);
        }
    }

    #[test]
    fn all_toggles_off_is_invalid_configuration() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            compose_word(&WordSettings::none(), &mut rng),
            Err(GenerateError::NoVowelPattern)
        );
        let multi = WordSettings {
            multisyllable: true,
            ..WordSettings::none()
        };
        assert_eq!(
            compose_word(&multi, &mut rng),
            Err(GenerateError::NoVowelPattern)
        );
    }

    #[test]
    fn zero_source_yields_first_entries() {
        // StepRng(0, 0) picks index 0 everywhere and wins every Bernoulli trial.
        let mut rng = StepRng::new(0, 0);
        let w = compose_word(&WordSettings::default(), &mut rng).unwrap();
        assert_eq!(w.text(), "bab");

        let silent = WordSettings {
            silent_e: true,
            ..WordSettings::default()
        };
        let w = compose_word(&silent, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(w.syllables()[0].segments(), vec!["b", "a", "b", "e"]);
    }

    #[test]
    fn same_seed_same_word() {
        let settings = WordSettings {
            floss: true,
            final_blends: true,
            long_vowels: true,
            silent_e: true,
            multisyllable: true,
            ..WordSettings::default()
        };
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                compose_word(&settings, &mut a).unwrap(),
                compose_word(&settings, &mut b).unwrap()
            );
        }
    }
}

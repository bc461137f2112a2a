// Integration tests for pattern-table invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use sounds_blender::generator::SyllableType;
use sounds_blender::patterns::*;

fn assert_unique_lowercase(name: &str, table: &[&str]) {
    let mut seen = HashSet::new();
    for s in table {
        assert!(seen.insert(*s), "duplicate '{}' in {}", s, name);
        assert!(!s.is_empty(), "empty entry in {}", name);
        for c in s.chars() {
            assert!(
                c.is_ascii_lowercase() || c == '_',
                "invalid char '{}' in '{}' ({})",
                c,
                s,
                name
            );
        }
    }
}

#[test]
fn word_builder_tables_are_unique_and_lowercase() {
    for (name, table) in [
        ("CONSONANTS", CONSONANTS),
        ("SHORT_VOWELS", SHORT_VOWELS),
        ("DIGRAPHS", DIGRAPHS),
        ("FLOSS", FLOSS),
        ("LONG_CONSONANTS", LONG_CONSONANTS),
        ("INITIAL_BLENDS", INITIAL_BLENDS),
        ("FINAL_BLENDS", FINAL_BLENDS),
        ("LONG_VOWELS", LONG_VOWELS),
    ] {
        assert_unique_lowercase(name, table);
    }
}

#[test]
fn sound_tables_are_unique_and_lowercase() {
    for (name, table) in [
        ("SOUND_BDPQ", SOUND_BDPQ),
        ("SOUND_CONSONANTS", SOUND_CONSONANTS),
        ("SOUND_SHORT_VOWELS", SOUND_SHORT_VOWELS),
        ("SOUND_COMMON_LONG_VOWELS", SOUND_COMMON_LONG_VOWELS),
        ("SOUND_R_CONTROLLED", SOUND_R_CONTROLLED),
        ("SOUND_LESS_COMMON_VOWELS", SOUND_LESS_COMMON_VOWELS),
    ] {
        assert_unique_lowercase(name, table);
    }
}

#[test]
fn q_only_enters_words_as_qu() {
    assert!(!CONSONANTS.contains(&"q"));
    assert_eq!(QU, "qu");
    assert!(SOUND_CONSONANTS.contains(&"q"));
}

#[test]
fn ng_is_a_digraph_and_exclusions_are_consonants() {
    assert!(DIGRAPHS.contains(&NG));
    for s in CODA_EXCLUDED.iter().chain(FLOSS_VIOLATIONS).chain(RARE_CODAS) {
        assert!(CONSONANTS.contains(s), "'{}' is not a consonant", s);
    }
    assert!(FINAL_BLENDS.contains(&BLEND_EXCLUDED));
    for b in LONG_VOWEL_BLEND_EXCLUDED {
        assert!(FINAL_BLENDS.contains(b));
    }
}

#[test]
fn blocklist_entries_are_lowercase_segments() {
    assert_eq!(BLOCKLIST.len(), 13);
    for entry in BLOCKLIST {
        assert!(entry.len() >= 2 && entry.len() <= 4, "odd blocklist entry {:?}", entry);
        for seg in entry.iter() {
            assert!(!seg.is_empty() && seg.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}

#[test]
fn every_syllable_type_has_final_exemplars() {
    for t in SyllableType::ALL {
        let ex = t.exemplars();
        assert!(!ex.final_.is_empty(), "{:?} has no final exemplars", t);
        for s in ex.initial.iter().chain(ex.any).chain(ex.final_) {
            assert!(s.chars().all(|c| c.is_ascii_lowercase()), "bad exemplar '{}'", s);
        }
    }
    let cle = SyllableType::ConsonantLe.exemplars();
    assert!(cle.initial.is_empty() && cle.any.is_empty());
    assert!(cle.final_.iter().all(|s| s.ends_with("le")));
}

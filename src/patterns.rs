//! Phonics pattern tables shared by every generator.
//!
//! All tables are lowercase grapheme lists. They are read-only for the lifetime of
//! the process; pools handed to the samplers are assembled from them per call.

// -----------------------------------------------------------------------------
// Word-builder segments
// -----------------------------------------------------------------------------

/// Single consonants usable as onset or coda. "q" only appears through [`QU`].
pub const CONSONANTS: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "x", "y",
    "z",
];

pub const QU: &str = "qu";

pub const SHORT_VOWELS: &[&str] = &["a", "e", "i", "o", "u"];

pub const DIGRAPHS: &[&str] = &["sh", "ch", "th", "wh", "ph", "ng"];

/// Coda-only digraph; never offered as an onset.
pub const NG: &str = "ng";

pub const FLOSS: &[&str] = &["ff", "ll", "ss", "zz"];

pub const LONG_CONSONANTS: &[&str] = &["ck", "tch", "dge"];

pub const INITIAL_BLENDS: &[&str] = &[
    "br", "bl", "cl", "cr", "dr", "fl", "fr", "gl", "pr", "pl", "sw", "sm", "spl", "tr",
];

pub const FINAL_BLENDS: &[&str] = &["nt", "rt", "st", "pt", "mp"];

pub const LONG_VOWELS: &[&str] = &["ai", "ee", "ea", "ou"];

pub const SILENT_E: &str = "e";

// -----------------------------------------------------------------------------
// Positional exclusions
// -----------------------------------------------------------------------------

/// Removed from the complex-syllable onset pool ("qu" takes the q slot).
pub const ONSET_EXCLUDED: &[&str] = &["x"];

/// Removed from the CVC onset pool.
pub const CVC_ONSET_EXCLUDED: &[&str] = &["x", "q"];

/// Semivowels and approximants never close a syllable.
pub const CODA_EXCLUDED: &[&str] = &["y", "w", "h", "j", "r"];

/// CVC codas additionally exclude "q".
pub const CVC_CODA_EXCLUDED: &[&str] = &["y", "w", "h", "j", "r", "q"];

/// Bare codas that normally double (floss) after a short vowel.
pub const FLOSS_VIOLATIONS: &[&str] = &["f", "l", "s", "z"];

/// Bare codas excluded regardless of the nucleus.
pub const RARE_CODAS: &[&str] = &["c", "v"];

/// Final blend never offered.
pub const BLEND_EXCLUDED: &str = "rt";

/// Final blends that do not follow a long vowel team.
pub const LONG_VOWEL_BLEND_EXCLUDED: &[&str] = &["rt", "mp", "pt"];

// -----------------------------------------------------------------------------
// Blocklist
// -----------------------------------------------------------------------------

/// Segment sequences that are never emitted. Compared segment by segment.
pub const BLOCKLIST: &[&[&str]] = &[
    &["f", "u", "ck"],
    &["sh", "i", "t"],
    &["c", "o", "ck"],
    &["d", "i", "ck"],
    &["p", "i", "ss"],
    &["c", "u", "nt"],
    &["b", "i", "tch"],
    &["a", "ss"],
    &["s", "l", "u", "t"],
    &["r", "a", "p", "e"],
    &["r", "ai", "p"],
    &["wh", "o", "r", "e"],
    &["f", "u", "x"],
];

pub fn is_blocked(segments: &[&str]) -> bool {
    BLOCKLIST.iter().any(|entry| *entry == segments)
}

// -----------------------------------------------------------------------------
// Sound-pack categories
// -----------------------------------------------------------------------------

/// Visually confusable letters that get their own font pool.
pub const SOUND_BDPQ: &[&str] = &["b", "d", "p", "q"];

pub const SOUND_CONSONANTS: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "w", "x",
    "y", "z",
];

pub const SOUND_SHORT_VOWELS: &[&str] = &["a", "e", "i", "o", "u"];

pub const SOUND_COMMON_LONG_VOWELS: &[&str] = &[
    "ai", "ay", "ee", "ea", "ou", "ow", "igh", "oi", "oy", "a_e", "e_e", "i_e", "o_e", "u_e",
];

pub const SOUND_R_CONTROLLED: &[&str] = &["ar", "er", "ir", "ur", "or"];

pub const SOUND_LESS_COMMON_VOWELS: &[&str] = &["oo", "ea", "ey", "y", "ie", "oe", "ew", "ue"];

/// Keyword picture shown next to a short vowel card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct VowelKeyword {
    pub sound: &'static str,
    pub keyword: &'static str,
    pub image: &'static str,
}

pub const VOWEL_KEYWORDS: &[VowelKeyword] = &[
    VowelKeyword {
        sound: "a",
        keyword: "apple",
        image: "https://i.ibb.co/LDYPNDB2/Apple-a.png",
    },
    VowelKeyword {
        sound: "e",
        keyword: "egg",
        image: "https://i.ibb.co/LdZh8MT9/egg-e.png",
    },
    VowelKeyword {
        sound: "i",
        keyword: "igloo",
        image: "https://i.ibb.co/gLr3rFx4/igloo-i.png",
    },
    VowelKeyword {
        sound: "o",
        keyword: "orange",
        image: "https://i.ibb.co/Q3MPBkJv/orange-o.png",
    },
    VowelKeyword {
        sound: "u",
        keyword: "umbrella",
        image: "https://i.ibb.co/fd1Vtbvd/umbrella-u.png",
    },
];

pub fn vowel_keyword(sound: &str) -> Option<&'static VowelKeyword> {
    VOWEL_KEYWORDS.iter().find(|k| k.sound == sound)
}

// -----------------------------------------------------------------------------
// Card fonts
// -----------------------------------------------------------------------------

pub const FONTS: &[&str] = &[
    "font-poppins",
    "font-nunito",
    "font-lexend",
    "font-comic-neue",
    "font-dyslexiclogic",
];

pub const BDPQ_FONTS: &[&str] = &[
    "font-poppins",
    "font-nunito",
    "font-schoolbell",
    "font-patrick-hand",
    "font-opendyslexic",
    "font-dyslexiclogic",
];

pub const DEFAULT_FONT: &str = "font-poppins";

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

pub fn is_short_vowel(s: &str) -> bool {
    SHORT_VOWELS.contains(&s)
}

pub fn is_long_vowel(s: &str) -> bool {
    LONG_VOWELS.contains(&s)
}

pub fn is_single_consonant(s: &str) -> bool {
    CONSONANTS.contains(&s)
}

/// Copy of `table` without the entries listed in `excluded`.
pub fn without(table: &[&'static str], excluded: &[&str]) -> Vec<&'static str> {
    table.iter().copied().filter(|s| !excluded.contains(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocklist_matches_whole_sequences_only() {
        assert!(is_blocked(&["f", "u", "ck"]));
        assert!(is_blocked(&["r", "ai", "p"]));
        assert!(!is_blocked(&["f", "u", "ckk"]));
        assert!(!is_blocked(&["f", "u"]));
        assert!(!is_blocked(&["fu", "ck"]));
    }

    #[test]
    fn long_and_short_vowels_are_disjoint() {
        for v in LONG_VOWELS {
            assert!(!is_short_vowel(v), "'{}' is both long and short", v);
        }
        for v in SHORT_VOWELS {
            assert!(!is_long_vowel(v));
        }
    }

    #[test]
    fn without_drops_only_listed_entries() {
        let pool = without(CONSONANTS, CODA_EXCLUDED);
        assert_eq!(pool.len(), CONSONANTS.len() - CODA_EXCLUDED.len());
        assert!(!pool.contains(&"y"));
        assert!(pool.contains(&"t"));
    }

    #[test]
    fn every_short_vowel_has_a_keyword() {
        for v in SOUND_SHORT_VOWELS {
            let k = vowel_keyword(v).expect("keyword");
            assert!(k.image.starts_with("https://"));
        }
        assert!(vowel_keyword("ai").is_none());
    }
}

use rand::Rng;
use serde::Serialize;

use crate::patterns::{self, VowelKeyword};
use crate::rng::pick;
use crate::settings::SoundSettings;

const PLACEHOLDER: &str = "...";

/// Which font list a card draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    General,
    Bdpq,
}

impl FontCategory {
    pub fn fonts(self) -> &'static [&'static str] {
        match self {
            FontCategory::General => patterns::FONTS,
            FontCategory::Bdpq => patterns::BDPQ_FONTS,
        }
    }
}

/// A single flashcard sound ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    pub text: String,
    pub font_category: FontCategory,
    pub font: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'static VowelKeyword>,
}

impl Sound {
    /// Card shown when no sound category is enabled.
    pub fn placeholder() -> Self {
        Self::plain(PLACEHOLDER)
    }

    pub(crate) fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font_category: FontCategory::General,
            font: patterns::DEFAULT_FONT,
            keyword: None,
        }
    }

    /// Dress `text` as a card. b/d/p/q only use their own fonts when `bdpq_fonts` is set.
    pub(crate) fn card<R: Rng + ?Sized>(
        text: &str,
        bdpq_fonts: bool,
        show_keyword: bool,
        rng: &mut R,
    ) -> Self {
        let is_bdpq = patterns::SOUND_BDPQ.contains(&text.to_lowercase().as_str());
        let font_category = if bdpq_fonts && is_bdpq {
            FontCategory::Bdpq
        } else {
            FontCategory::General
        };
        let keyword = if show_keyword {
            patterns::vowel_keyword(text)
        } else {
            None
        };
        Self {
            text: text.to_string(),
            font_category,
            font: pick(rng, font_category.fonts()).unwrap_or(patterns::DEFAULT_FONT),
            keyword,
        }
    }
}

/// Union of the enabled sound categories, without duplicates.
pub fn sound_pool(settings: &SoundSettings) -> Vec<&'static str> {
    let categories: [(bool, &[&'static str]); 6] = [
        (settings.bdpq, patterns::SOUND_BDPQ),
        (settings.consonants, patterns::SOUND_CONSONANTS),
        (settings.short_vowels, patterns::SOUND_SHORT_VOWELS),
        (settings.common_long_vowels, patterns::SOUND_COMMON_LONG_VOWELS),
        (settings.r_controlled, patterns::SOUND_R_CONTROLLED),
        (settings.less_common_vowels, patterns::SOUND_LESS_COMMON_VOWELS),
    ];
    let mut pool: Vec<&'static str> = Vec::new();
    for (_, table) in categories.iter().filter(|(enabled, _)| *enabled) {
        for &s in table.iter() {
            if !pool.contains(&s) {
                pool.push(s);
            }
        }
    }
    pool
}

/// Pick one sound from `pool`, or the placeholder card if the pool is empty.
pub fn pick_sound<R: Rng + ?Sized>(
    pool: &[&'static str],
    settings: &SoundSettings,
    rng: &mut R,
) -> Sound {
    match pick(rng, pool) {
        Some(text) => {
            let show_keyword =
                settings.show_vowel_images && patterns::SOUND_SHORT_VOWELS.contains(&text);
            Sound::card(text, settings.bdpq, show_keyword, rng)
        }
        None => Sound::placeholder(),
    }
}

pub fn generate_sound<R: Rng + ?Sized>(settings: &SoundSettings, rng: &mut R) -> Sound {
    pick_sound(&sound_pool(settings), settings, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn only(f: impl FnOnce(&mut SoundSettings)) -> SoundSettings {
        let mut s = SoundSettings {
            consonants: false,
            short_vowels: false,
            ..SoundSettings::default()
        };
        f(&mut s);
        s
    }

    #[test]
    fn pool_removes_duplicates_across_categories() {
        let s = only(|s| {
            s.bdpq = true;
            s.consonants = true;
            s.common_long_vowels = true;
            s.less_common_vowels = true;
        });
        let pool = sound_pool(&s);
        let unique: std::collections::HashSet<_> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len());
        assert_eq!(pool.iter().filter(|p| **p == "ea").count(), 1);
        assert!(pool.contains(&"q") && pool.contains(&"igh"));
    }

    #[test]
    fn empty_pool_gives_placeholder() {
        let s = only(|_| {});
        assert!(sound_pool(&s).is_empty());
        let mut rng = SmallRng::seed_from_u64(0);
        let sound = generate_sound(&s, &mut rng);
        assert_eq!(sound, Sound::placeholder());
        assert_eq!(sound.text, "...");
    }

    #[test]
    fn bdpq_fonts_only_when_toggle_is_on() {
        let mut rng = SmallRng::seed_from_u64(9);
        let on = only(|s| s.bdpq = true);
        for _ in 0..100 {
            let sound = generate_sound(&on, &mut rng);
            assert_eq!(sound.font_category, FontCategory::Bdpq);
            assert!(patterns::BDPQ_FONTS.contains(&sound.font));
        }
        let consonants_only = only(|s| s.consonants = true);
        for _ in 0..100 {
            let sound = generate_sound(&consonants_only, &mut rng);
            assert_eq!(sound.font_category, FontCategory::General);
            assert!(patterns::FONTS.contains(&sound.font));
        }
    }

    #[test]
    fn vowel_images_follow_toggle() {
        let mut rng = SmallRng::seed_from_u64(4);
        let with_images = only(|s| {
            s.short_vowels = true;
            s.show_vowel_images = true;
        });
        let sound = generate_sound(&with_images, &mut rng);
        let keyword = sound.keyword.expect("short vowel keyword");
        assert_eq!(keyword.sound, sound.text);

        let without_images = only(|s| s.short_vowels = true);
        assert!(generate_sound(&without_images, &mut rng).keyword.is_none());

        let json = serde_json::to_string(&Sound::placeholder()).unwrap();
        assert!(!json.contains("keyword"));
        assert!(json.contains(r#""fontCategory":"general""#));
    }
}

use rand::Rng;

use super::Syllable;
use crate::error::GenerateError;
use crate::patterns::{self, without};
use crate::rng::pick;
use crate::settings::WordSettings;

/// Upper bound on candidates drawn for one syllable.
pub const MAX_SYLLABLE_ATTEMPTS: u32 = 100;

/// Chance of closing an eligible short-vowel syllable with a silent "e".
pub const SILENT_E_PROBABILITY: f64 = 0.4;

const FALLBACK_ONSET: &str = "m";
const FALLBACK_CODA: &str = "t";

/// Draw a complex syllable: onset, nucleus and coda conditioned on the enabled
/// patterns, optionally closed by a silent "e".
///
/// Candidates that spell a blocked word or put "u" after "qu" are redrawn. After
/// [`MAX_SYLLABLE_ATTEMPTS`] rejections a fixed "m" + vowel + "t" syllable is returned.
pub fn complex_syllable<R: Rng + ?Sized>(
    settings: &WordSettings,
    rng: &mut R,
) -> Result<Syllable, GenerateError> {
    let nucleus_pool = settings.nucleus_pool();
    if nucleus_pool.is_empty() {
        return Err(GenerateError::NoVowelPattern);
    }
    let onset_pool = onset_pool(settings);

    Ok(first_acceptable(rng, nucleus_pool[0], |rng| {
        let onset = pick(rng, &onset_pool);
        let nucleus = nucleus_pool[rng.gen_range(0..nucleus_pool.len())];
        let (coda, silent_e) = draw_coda(settings, nucleus, rng);
        Syllable {
            onset,
            nucleus,
            coda,
            silent_e,
        }
    }))
}

/// Draw a consonant-vowel-consonant syllable from the restricted pools, under the
/// same rejection rule and fallback as [`complex_syllable`].
pub fn cvc_syllable<R: Rng + ?Sized>(settings: &WordSettings, rng: &mut R) -> Syllable {
    let vowels = settings.cvc_vowel_pool();
    let onsets = without(patterns::CONSONANTS, patterns::CVC_ONSET_EXCLUDED);
    let codas = without(patterns::CONSONANTS, patterns::CVC_CODA_EXCLUDED);

    first_acceptable(rng, vowels[0], |rng| Syllable {
        onset: pick(rng, &onsets),
        nucleus: vowels[rng.gen_range(0..vowels.len())],
        coda: pick(rng, &codas),
        silent_e: false,
    })
}

/// Bounded rejection loop shared by both syllable shapes.
fn first_acceptable<R, F>(rng: &mut R, fallback_nucleus: &'static str, mut draw: F) -> Syllable
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Syllable,
{
    for attempt in 1..=MAX_SYLLABLE_ATTEMPTS {
        let candidate = draw(rng);
        if is_acceptable(&candidate) {
            return candidate;
        }
        log::trace!(
            "rejected syllable {:?} on attempt {}",
            candidate.segments(),
            attempt
        );
    }

    log::warn!(
        "no acceptable syllable after {} attempts, using fallback",
        MAX_SYLLABLE_ATTEMPTS
    );
    Syllable {
        onset: Some(FALLBACK_ONSET),
        nucleus: fallback_nucleus,
        coda: Some(FALLBACK_CODA),
        silent_e: false,
    }
}

fn onset_pool(settings: &WordSettings) -> Vec<&'static str> {
    let mut pool = without(patterns::CONSONANTS, patterns::ONSET_EXCLUDED);
    pool.push(patterns::QU);
    if settings.digraphs {
        pool.extend(without(patterns::DIGRAPHS, &[patterns::NG]));
    }
    if settings.initial_blends {
        pool.extend_from_slice(patterns::INITIAL_BLENDS);
    }
    pool
}

fn coda_pool(settings: &WordSettings, short_nucleus: bool) -> Vec<&'static str> {
    let mut pool = without(patterns::CONSONANTS, patterns::CODA_EXCLUDED);
    if settings.digraphs {
        pool.push(patterns::NG);
    }
    if settings.floss && short_nucleus {
        pool.extend_from_slice(patterns::FLOSS);
    }
    if settings.long_consonants && short_nucleus {
        pool.extend_from_slice(patterns::LONG_CONSONANTS);
    }
    if settings.final_blends {
        let excluded: &[&str] = if short_nucleus {
            &[patterns::BLEND_EXCLUDED]
        } else {
            patterns::LONG_VOWEL_BLEND_EXCLUDED
        };
        pool.extend(without(patterns::FINAL_BLENDS, excluded));
    }
    pool
}

fn draw_coda<R: Rng + ?Sized>(
    settings: &WordSettings,
    nucleus: &'static str,
    rng: &mut R,
) -> (Option<&'static str>, bool) {
    let short_nucleus = !patterns::is_long_vowel(nucleus);
    let pool = coda_pool(settings, short_nucleus);

    if settings.silent_e
        && patterns::is_short_vowel(nucleus)
        && rng.gen_bool(SILENT_E_PROBABILITY)
    {
        let singles: Vec<&'static str> = pool
            .iter()
            .copied()
            .filter(|p| patterns::is_single_consonant(p))
            .collect();
        if let Some(coda) = pick(rng, &singles) {
            return (Some(coda), true);
        }
    }

    let mut excluded: Vec<&str> = patterns::RARE_CODAS.to_vec();
    if short_nucleus {
        excluded.extend_from_slice(patterns::FLOSS_VIOLATIONS);
    }
    let safe = without(&pool, &excluded);
    let coda = if safe.is_empty() {
        pick(rng, &pool)
    } else {
        pick(rng, &safe)
    };
    (coda, false)
}

fn is_acceptable(candidate: &Syllable) -> bool {
    let qu_collision = candidate.onset == Some(patterns::QU) && candidate.nucleus == "u";
    !qu_collision && !patterns::is_blocked(&candidate.segments())
}

//! Random source for the generators.
//!
//! Generators take any `R: Rng` so tests can drive them with seeded or mocked sources;
//! the WASM entry points use [`fresh_rng`].

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn fresh_rng() -> SmallRng {
    let mut seed = [0u8; 32];
    match getrandom::getrandom(&mut seed) {
        Ok(()) => SmallRng::from_seed(seed),
        Err(err) => {
            log::warn!("entropy source failed ({}), seeding from clock", err);
            SmallRng::seed_from_u64(clock_seed())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Uniform pick from a pool of graphemes; `None` for an empty pool.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> Option<&'static str> {
    pool.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_from_empty_pool_is_none() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(pick(&mut rng, &[]), None);
    }

    #[test]
    fn pick_stays_inside_pool() {
        let mut rng = fresh_rng();
        let pool = ["a", "b", "c"];
        for _ in 0..50 {
            let p = pick(&mut rng, &pool).unwrap();
            assert!(pool.contains(&p));
        }
    }
}

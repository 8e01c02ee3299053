use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// One multiplicative random-walk step: the relative change is `drift` plus either
/// `-volatility` or `+volatility`, each with probability one half.
#[inline]
pub fn brownian_step<R: Rng + ?Sized>(price: f64, volatility: f64, drift: f64, rng: &mut R) -> f64 {
    let random_change = if rng.gen_bool(0.5) { volatility } else { -volatility };
    price * (1.0 + drift + random_change)
}

/// Random walk with fixed parameters and its own generator.
pub struct RandomWalk {
    volatility: f64,
    drift: f64,
    rng: Pcg64,
}

impl RandomWalk {
    pub fn seeded(volatility: f64, drift: f64, seed: u64) -> Self {
        Self {
            volatility,
            drift,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(volatility: f64, drift: f64) -> Self {
        Self {
            volatility,
            drift,
            rng: Pcg64::from_entropy(),
        }
    }

    #[inline]
    pub fn step(&mut self, price: f64) -> f64 {
        brownian_step(price, self.volatility, self.drift, &mut self.rng)
    }
}

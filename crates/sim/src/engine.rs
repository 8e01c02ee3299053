use brownian_shared::config::{DegeneratePolicy, SimulationParameters};
use brownian_shared::path::PricePath;

use crate::price_process::RandomWalk;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Price reached {price} on day {day}")]
    DegeneratePrice { day: u32, price: f64 },
}

/// Timer-free simulation state: the growing path plus the process that extends it.
pub struct Simulation {
    params: SimulationParameters,
    policy: DegeneratePolicy,
    process: RandomWalk,
    path: PricePath,
    warned_degenerate: bool,
}

impl Simulation {
    pub fn new(params: SimulationParameters, policy: DegeneratePolicy, process: RandomWalk) -> Self {
        Self {
            path: PricePath::new(params.initial_price()),
            params,
            policy,
            process,
            warned_degenerate: false,
        }
    }

    pub fn seeded(params: SimulationParameters, policy: DegeneratePolicy, seed: u64) -> Self {
        let process = RandomWalk::seeded(params.volatility(), params.drift(), seed);
        Self::new(params, policy, process)
    }

    pub fn from_entropy(params: SimulationParameters, policy: DegeneratePolicy) -> Self {
        let process = RandomWalk::from_entropy(params.volatility(), params.drift());
        Self::new(params, policy, process)
    }

    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    #[inline]
    pub fn path(&self) -> &PricePath {
        &self.path
    }

    /// Day index of the last price in the path.
    #[inline]
    pub fn day(&self) -> u32 {
        (self.path.len() - 1) as u32
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.path.len() >= self.params.days() as usize
    }

    /// Append the next price. Returns `Ok(None)` once the path already holds `days` prices.
    pub fn advance(&mut self) -> Result<Option<f64>, SimError> {
        if self.is_complete() {
            return Ok(None);
        }
        let day = self.day() + 1;
        let raw = self.process.step(self.path.last());

        let price = if raw > 0.0 {
            raw
        } else {
            match self.policy {
                DegeneratePolicy::AllowNegative => {
                    if !self.warned_degenerate {
                        tracing::warn!(day, price = raw, "price is no longer positive");
                        self.warned_degenerate = true;
                    }
                    raw
                }
                DegeneratePolicy::ClampToZero => raw.max(0.0),
                DegeneratePolicy::RejectAndAbort => {
                    return Err(SimError::DegeneratePrice { day, price: raw });
                }
            }
        };

        self.path.push(price);
        tracing::debug!(day, price, "step");
        Ok(Some(price))
    }

    pub fn run_to_completion(mut self) -> Result<PricePath, SimError> {
        while self.advance()?.is_some() {}
        Ok(self.path)
    }

    pub fn into_path(self) -> PricePath {
        self.path
    }
}

/// Whole path for `params` from a fixed seed, without any pacing.
pub fn simulate_path(
    params: SimulationParameters,
    policy: DegeneratePolicy,
    seed: u64,
) -> Result<PricePath, SimError> {
    Simulation::seeded(params, policy, seed).run_to_completion()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(initial: f64, days: i64, vol: f64, drift: f64) -> SimulationParameters {
        SimulationParameters::new(initial, days, vol, drift).unwrap()
    }

    #[test]
    fn test_drift_only_path() {
        let path = simulate_path(params(100.0, 3, 0.0, 0.01), DegeneratePolicy::default(), 0).unwrap();
        let expected = [100.0, 101.0, 102.01];
        assert_eq!(path.len(), 3);
        for (got, want) in path.prices().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_single_day_takes_no_steps() {
        let mut sim = Simulation::seeded(params(50.0, 1, 0.02, 0.0), DegeneratePolicy::default(), 5);
        assert!(sim.is_complete());
        assert_eq!(sim.advance().unwrap(), None);
        assert_eq!(sim.into_path().prices(), &[50.0]);
    }

    #[test]
    fn test_advance_stops_at_days() {
        let mut sim = Simulation::seeded(params(100.0, 4, 0.01, 0.0), DegeneratePolicy::default(), 5);
        let mut steps = 0;
        while sim.advance().unwrap().is_some() {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(sim.day(), 3);
        assert_eq!(sim.advance().unwrap(), None);
        assert_eq!(sim.path().len(), 4);
    }

    #[test]
    fn test_huge_day_count_starts_lazily() {
        let mut sim = Simulation::seeded(params(100.0, u32::MAX as i64, 0.01, 0.0), DegeneratePolicy::default(), 9);
        for _ in 0..3 {
            assert!(sim.advance().unwrap().is_some());
        }
        assert_eq!(sim.path().len(), 4);
        assert_eq!(sim.day(), 3);
        assert!(!sim.is_complete());
    }

    #[test]
    fn test_allow_negative_keeps_raw_value() {
        // 1 + 0 - 1.5 < 0 on a down move, 1 + 0 + 1.5 on an up move
        let path = simulate_path(params(10.0, 40, 1.5, 0.0), DegeneratePolicy::AllowNegative, 11).unwrap();
        assert_eq!(path.len(), 40);
        assert!(path.prices().iter().any(|p| *p < 0.0));
    }

    #[test]
    fn test_clamp_to_zero_floors_and_sticks() {
        let path = simulate_path(params(10.0, 40, 1.5, 0.0), DegeneratePolicy::ClampToZero, 11).unwrap();
        assert!(path.prices().iter().all(|p| *p >= 0.0));
        let first_zero = path.prices().iter().position(|p| *p == 0.0).unwrap();
        assert!(path.prices()[first_zero..].iter().all(|p| *p == 0.0));
    }

    #[test]
    fn test_reject_and_abort_reports_day() {
        let err = simulate_path(params(10.0, 40, 1.5, 0.0), DegeneratePolicy::RejectAndAbort, 11).unwrap_err();
        match err {
            SimError::DegeneratePrice { day, price } => {
                assert!(day >= 1 && day < 40);
                assert!(price <= 0.0);
            }
        }
    }

    #[test]
    fn test_reject_and_abort_passes_healthy_paths() {
        let path = simulate_path(params(100.0, 50, 0.01, 0.001), DegeneratePolicy::RejectAndAbort, 2).unwrap();
        assert_eq!(path.len(), 50);
    }
}

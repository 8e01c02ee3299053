pub mod live;
pub mod plain;

use std::io;
use std::time::Duration;

use anyhow::Context;
use brownian_shared::config::{DegeneratePolicy, Pacing, SimulationParameters, EVENT_WINDOW_MS, STEP_DELAY_MS};
use brownian_sim::Simulation;
use clap::{Args, ValueEnum};

use crate::prompt::{Preset, Prompter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Keep compounding through zero and below
    AllowNegative,
    /// Floor prices at zero
    ClampToZero,
    /// Abort the run on the first non-positive price
    RejectAndAbort,
}

impl From<PolicyArg> for DegeneratePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AllowNegative => DegeneratePolicy::AllowNegative,
            PolicyArg::ClampToZero => DegeneratePolicy::ClampToZero,
            PolicyArg::RejectAndAbort => DegeneratePolicy::RejectAndAbort,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Initial stock price (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub initial_price: Option<f64>,
    /// Number of days to simulate, including the initial day
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,
    /// Per-day move magnitude, e.g. 0.01 for +/-1%
    #[arg(long, allow_negative_numbers = true)]
    pub volatility: Option<f64>,
    /// Per-day deterministic change, e.g. 0.001 for 0.1%
    #[arg(long, allow_negative_numbers = true)]
    pub drift: Option<f64>,
    /// Read volatility and drift as percentages (1 = 1%)
    #[arg(long)]
    pub percent: bool,
    /// Seed for a reproducible path (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pause between simulated days, in milliseconds
    #[arg(long, default_value_t = STEP_DELAY_MS)]
    pub delay_ms: u64,
    /// Input handling window after each redraw, in milliseconds
    #[arg(long, default_value_t = EVENT_WINDOW_MS)]
    pub event_window_ms: u64,
    /// What to do when the price reaches zero or below
    #[arg(long, value_enum, default_value_t = PolicyArg::AllowNegative)]
    pub policy: PolicyArg,
}

impl RunArgs {
    fn preset(&self) -> Preset {
        Preset {
            initial_price: self.initial_price,
            days: self.days,
            volatility: self.volatility,
            drift: self.drift,
        }
    }

    /// Fill in missing parameters from stdin. Any failure here ends the program.
    pub fn acquire_parameters(&self) -> anyhow::Result<SimulationParameters> {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter
            .acquire(self.preset(), self.percent)
            .context("Invalid simulation parameters")
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            step_delay: Duration::from_millis(self.delay_ms),
            event_window: Duration::from_millis(self.event_window_ms),
        }
    }

    pub fn simulation(&self, params: SimulationParameters) -> Simulation {
        let policy = self.policy.into();
        match self.seed {
            Some(seed) => Simulation::seeded(params, policy, seed),
            None => Simulation::from_entropy(params, policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RunArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["brownian"]);
        assert_eq!(cli.args.pacing(), Pacing::default());
        assert_eq!(cli.args.policy, PolicyArg::AllowNegative);
        assert!(cli.args.initial_price.is_none());
    }

    #[test]
    fn test_negative_drift_and_policy() {
        let cli = TestCli::parse_from([
            "brownian",
            "--drift",
            "-0.002",
            "--policy",
            "clamp-to-zero",
            "--delay-ms",
            "0",
        ]);
        assert_eq!(cli.args.drift, Some(-0.002));
        assert_eq!(DegeneratePolicy::from(cli.args.policy), DegeneratePolicy::ClampToZero);
        assert_eq!(cli.args.pacing().step_delay, Duration::ZERO);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let cli = TestCli::parse_from(["brownian", "--seed", "9"]);
        let params = SimulationParameters::new(100.0, 20, 0.02, 0.0).unwrap();
        let a = cli.args.simulation(params).run_to_completion().unwrap();
        let b = cli.args.simulation(params).run_to_completion().unwrap();
        assert_eq!(a, b);
    }
}

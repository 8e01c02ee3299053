use std::time::Duration;

use crate::error::ConfigError;

// Animation cadence
pub const STEP_DELAY_MS: u64 = 5_000;
pub const EVENT_WINDOW_MS: u64 = 10;

/// Process parameters for one run. Only constructible through [`SimulationParameters::new`],
/// so a value of this type always satisfies `days >= 1`, `volatility >= 0` and finiteness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    initial_price: f64,
    days: u32,
    volatility: f64,
    drift: f64,
}

impl SimulationParameters {
    pub fn new(initial_price: f64, days: i64, volatility: f64, drift: f64) -> Result<Self, ConfigError> {
        check_finite("initial price", initial_price)?;
        check_finite("volatility", volatility)?;
        check_finite("drift", drift)?;

        if volatility < 0.0 {
            return Err(ConfigError::NegativeVolatility(volatility));
        }
        let days = u32::try_from(days)
            .ok()
            .filter(|d| *d >= 1)
            .ok_or(ConfigError::InvalidDays(days))?;

        Ok(Self {
            initial_price,
            days,
            volatility,
            drift,
        })
    }

    /// Same as [`SimulationParameters::new`] but volatility and drift are given in percent
    /// (`1.0` meaning 1%).
    pub fn from_percent(initial_price: f64, days: i64, volatility_pct: f64, drift_pct: f64) -> Result<Self, ConfigError> {
        Self::new(initial_price, days, volatility_pct / 100.0, drift_pct / 100.0)
    }

    #[inline]
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    #[inline]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Number of simulated steps; the initial price occupies day 0.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.days - 1
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

/// What to do once the process produces a price at or below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Keep compounding whatever the arithmetic yields.
    #[default]
    AllowNegative,
    /// Floor every price at zero; the path then stays at zero.
    ClampToZero,
    /// Stop the run on the first non-positive price.
    RejectAndAbort,
}

/// Real-time cadence of the live loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Fixed sleep after every step, regardless of how long drawing took.
    pub step_delay: Duration,
    /// How long the renderer may process input after each draw.
    pub event_window: Duration,
}

impl Pacing {
    pub fn immediate() -> Self {
        Self {
            step_delay: Duration::ZERO,
            event_window: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(STEP_DELAY_MS),
            event_window: Duration::from_millis(EVENT_WINDOW_MS),
        }
    }
}

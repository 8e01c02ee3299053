//! Interactive acquisition of the four run parameters.

use std::io::{BufRead, Write};
use std::str::FromStr;

use brownian_shared::config::SimulationParameters;
use brownian_shared::error::ConfigError;

/// Values already supplied on the command line; anything left `None` is prompted for.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preset {
    pub initial_price: Option<f64>,
    pub days: Option<i64>,
    pub volatility: Option<f64>,
    pub drift: Option<f64>,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask in fixed order: initial price, days, volatility, drift. With `percent` set,
    /// volatility and drift are read as percentages.
    pub fn acquire(&mut self, preset: Preset, percent: bool) -> Result<SimulationParameters, ConfigError> {
        let initial_price = match preset.initial_price {
            Some(v) => v,
            None => self.ask("initial price", "Enter initial stock price (e.g., 100): ")?,
        };
        let days = match preset.days {
            Some(v) => v,
            None => self.ask("days", "Enter number of days to simulate (e.g., 100): ")?,
        };

        let (vol_prompt, drift_prompt) = if percent {
            (
                "Enter volatility in percent (e.g., 1 for \u{b1}1%): ",
                "Enter drift in percent (e.g., 0.1 for 0.1% increase per day): ",
            )
        } else {
            (
                "Enter volatility (e.g., 0.01 for \u{b1}1%): ",
                "Enter drift (e.g., 0.001 for 0.1% increase per day): ",
            )
        };
        let volatility = match preset.volatility {
            Some(v) => v,
            None => self.ask("volatility", vol_prompt)?,
        };
        let drift = match preset.drift {
            Some(v) => v,
            None => self.ask("drift", drift_prompt)?,
        };

        if percent {
            SimulationParameters::from_percent(initial_price, days, volatility, drift)
        } else {
            SimulationParameters::new(initial_price, days, volatility, drift)
        }
    }

    fn ask<T: FromStr>(&mut self, field: &'static str, prompt: &str) -> Result<T, ConfigError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConfigError::MissingInput { field });
        }
        let trimmed = line.trim();
        trimmed.parse().map_err(|_| ConfigError::Parse {
            field,
            input: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acquire(input: &str, preset: Preset, percent: bool) -> (Result<SimulationParameters, ConfigError>, String) {
        let mut out = Vec::new();
        let result = Prompter::new(input.as_bytes(), &mut out).acquire(preset, percent);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reads_four_values_in_order() {
        let (params, prompts) = acquire("100\n3\n0\n0.01\n", Preset::default(), false);
        let params = params.unwrap();
        assert_eq!(params.initial_price(), 100.0);
        assert_eq!(params.days(), 3);
        assert_eq!(params.volatility(), 0.0);
        assert_eq!(params.drift(), 0.01);

        let price_at = prompts.find("initial stock price").unwrap();
        let days_at = prompts.find("number of days").unwrap();
        let vol_at = prompts.find("volatility").unwrap();
        let drift_at = prompts.find("drift").unwrap();
        assert!(price_at < days_at && days_at < vol_at && vol_at < drift_at);
    }

    #[test]
    fn test_preset_values_skip_prompts() {
        let preset = Preset {
            initial_price: Some(50.0),
            days: Some(1),
            volatility: None,
            drift: Some(0.0),
        };
        let (params, prompts) = acquire(" 0.02 \n", preset, false);
        assert_eq!(params.unwrap().volatility(), 0.02);
        assert!(!prompts.contains("initial stock price"));
        assert!(prompts.contains("volatility"));
    }

    #[test]
    fn test_percent_inputs() {
        let (params, prompts) = acquire("100\n10\n1\n0.1\n", Preset::default(), true);
        let params = params.unwrap();
        assert!((params.volatility() - 0.01).abs() < 1e-12);
        assert!((params.drift() - 0.001).abs() < 1e-12);
        assert!(prompts.contains("in percent"));
    }

    #[test]
    fn test_non_numeric_input_is_fatal() {
        let (params, _) = acquire("abc\n", Preset::default(), false);
        match params {
            Err(ConfigError::Parse { field, input }) => {
                assert_eq!(field, "initial price");
                assert_eq!(input, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_days_rejected() {
        let (params, _) = acquire("100\n2.5\n", Preset::default(), false);
        assert!(matches!(params, Err(ConfigError::Parse { field: "days", .. })));
    }

    #[test]
    fn test_zero_days_rejected() {
        let (params, _) = acquire("100\n0\n0.01\n0\n", Preset::default(), false);
        assert!(matches!(params, Err(ConfigError::InvalidDays(0))));
    }

    #[test]
    fn test_empty_line_is_a_parse_error() {
        let (params, _) = acquire("\n", Preset::default(), false);
        assert!(matches!(params, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_end_of_input() {
        let (params, _) = acquire("100\n", Preset::default(), false);
        assert!(matches!(params, Err(ConfigError::MissingInput { field: "days" })));
    }
}

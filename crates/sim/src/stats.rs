use brownian_shared::path::PricePath;

/// Summary of a finished (or stopped) path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStats {
    pub days: usize,
    pub initial_price: f64,
    pub final_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Mean per-step log return, `None` when no step had two positive prices.
    pub realised_drift: Option<f64>,
    /// Population standard deviation of per-step log returns.
    pub realised_volatility: Option<f64>,
}

impl PathStats {
    pub fn from_path(path: &PricePath) -> Self {
        let prices = path.prices();
        let (min_price, max_price) = prices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| (lo.min(p), hi.max(p)));

        let returns = log_returns(prices);
        let (realised_drift, realised_volatility) = if returns.is_empty() {
            (None, None)
        } else {
            let n = returns.len() as f64;
            let mean = returns.iter().sum::<f64>() / n;
            let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
            (Some(mean), Some(variance.sqrt()))
        };

        Self {
            days: prices.len(),
            initial_price: path.first(),
            final_price: path.last(),
            min_price,
            max_price,
            realised_drift,
            realised_volatility,
        }
    }

    /// Relative change from first to last price, `None` when the path started at zero.
    pub fn total_return(&self) -> Option<f64> {
        if self.initial_price == 0.0 {
            None
        } else {
            Some(self.final_price / self.initial_price - 1.0)
        }
    }
}

/// Log returns of consecutive positive prices; steps touching a non-positive price are skipped.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(prices: &[f64]) -> PricePath {
        let mut path = PricePath::new(prices[0]);
        for &p in &prices[1..] {
            path.push(p);
        }
        path
    }

    #[test]
    fn test_single_point_has_no_returns() {
        let stats = PathStats::from_path(&PricePath::new(50.0));
        assert_eq!(stats.days, 1);
        assert_eq!(stats.min_price, 50.0);
        assert_eq!(stats.max_price, 50.0);
        assert_eq!(stats.realised_drift, None);
        assert_eq!(stats.total_return(), Some(0.0));
    }

    #[test]
    fn test_constant_growth_has_zero_volatility() {
        let stats = PathStats::from_path(&path_of(&[100.0, 110.0, 121.0]));
        let drift = stats.realised_drift.unwrap();
        assert!((drift - 1.1f64.ln()).abs() < 1e-12);
        assert!(stats.realised_volatility.unwrap() < 1e-12);
        assert!((stats.total_return().unwrap() - 0.21).abs() < 1e-12);
    }

    #[test]
    fn test_alternating_moves() {
        let up = 1.1f64.ln();
        let down = 0.9f64.ln();
        let stats = PathStats::from_path(&path_of(&[100.0, 110.0, 99.0]));
        let mean = (up + down) / 2.0;
        assert!((stats.realised_drift.unwrap() - mean).abs() < 1e-12);
        assert!((stats.realised_volatility.unwrap() - (up - mean).abs()).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_prices_are_skipped() {
        assert_eq!(log_returns(&[10.0, 0.0, 0.0, 5.0]), Vec::<f64>::new());
        assert_eq!(log_returns(&[10.0, -5.0, 10.0, 20.0]).len(), 1);

        let stats = PathStats::from_path(&path_of(&[0.0, 0.0]));
        assert_eq!(stats.total_return(), None);
        assert_eq!(stats.realised_volatility, None);
    }
}

/// Relative margin added above and below the data when fitting the y axis.
pub const Y_MARGIN: f64 = 0.05;

/// Ordered price series of a single run. Starts with the initial price and only ever grows
/// at the end, so it is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    pub fn new(initial_price: f64) -> Self {
        Self {
            prices: vec![initial_price],
        }
    }

    #[inline]
    pub fn push(&mut self, price: f64) {
        self.prices.push(price);
    }

    #[inline]
    pub fn first(&self) -> f64 {
        self.prices[0]
    }

    #[inline]
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Day index of every price, `0..len`, as chart x-values.
    pub fn days_axis(&self) -> Vec<f64> {
        (0..self.prices.len()).map(|i| i as f64).collect()
    }

    /// Trailing `max_points` prices together with the day index of the first one.
    /// `None` (or a window larger than the path) yields the whole path.
    pub fn window(&self, max_points: Option<usize>) -> (usize, &[f64]) {
        let len = self.prices.len();
        let start = match max_points {
            Some(n) if n > 0 && n < len => len - n,
            _ => 0,
        };
        (start, &self.prices[start..])
    }
}

/// Axis limits fitted to the data currently on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl AxisBounds {
    /// Fit limits to `ys`, whose first element sits at day `start`.
    pub fn fit(start: usize, ys: &[f64]) -> Self {
        let x_lo = start as f64;
        let x_hi = (start + ys.len().saturating_sub(1)).max(start + 1) as f64;

        let (lo, hi) = ys
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let y = if lo > hi {
            [-1.0, 1.0]
        } else if lo == hi {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * Y_MARGIN };
            [lo - pad, hi + pad]
        } else {
            let pad = (hi - lo) * Y_MARGIN;
            [lo - pad, hi + pad]
        };

        Self { x: [x_lo, x_hi], y }
    }

    pub fn for_path(path: &PricePath, max_points: Option<usize>) -> Self {
        let (start, ys) = path.window(max_points);
        Self::fit(start, ys)
    }
}

use std::time::Duration;

use brownian_shared::path::{AxisBounds, PricePath};

/// What the user asked for while the renderer was processing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Drawing surface driven by the live loop. Every method is called synchronously from the
/// loop; implementations only read the slices they are handed.
pub trait Renderer {
    /// Create the figure and plot the initial one-point path.
    fn begin(&mut self, path: &PricePath) -> anyhow::Result<()>;

    /// Replace the plotted series with the full current data.
    fn set_data(&mut self, xs: &[f64], ys: &[f64]) -> anyhow::Result<()>;

    /// Apply axis limits fitted to the current data.
    fn set_bounds(&mut self, bounds: AxisBounds) -> anyhow::Result<()>;

    /// Toggle live mode, in which `draw` does not block.
    fn set_interactive(&mut self, on: bool) -> anyhow::Result<()>;

    /// Redraw immediately.
    fn draw(&mut self) -> anyhow::Result<()>;

    /// Handle pending input for up to `window`.
    fn process_events(&mut self, window: Duration) -> anyhow::Result<Control>;

    /// Final render; returns once the user dismisses the display.
    fn block_until_dismissed(&mut self) -> anyhow::Result<()>;
}

/// Real-time pacing between steps.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

use std::io::{self, Write};
use std::time::Duration;

use brownian_shared::path::{AxisBounds, PricePath};
use brownian_sim::{Control, LiveSimulationLoop, Renderer, SleepPacer};

use crate::output;

use super::RunArgs;

pub fn run(args: &RunArgs) -> anyhow::Result<()> {
    let params = args.acquire_parameters()?;
    let simulation = args.simulation(params);

    let start = std::time::Instant::now();
    let report = {
        let renderer = PlainRenderer::new(io::stdout());
        let mut live = LiveSimulationLoop::new(simulation, renderer, SleepPacer, args.pacing());
        live.run()?
    };
    let elapsed = start.elapsed();

    output::print_report(&report, elapsed);
    Ok(())
}

/// Writes the newest point of every snapshot as one line of text.
pub struct PlainRenderer<W> {
    out: W,
    initial_price: f64,
    latest: Option<(f64, f64)>,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            initial_price: 0.0,
            latest: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_latest(&mut self) -> anyhow::Result<()> {
        let Some((day, price)) = self.latest else {
            return Ok(());
        };
        if self.initial_price != 0.0 {
            let change = (price / self.initial_price - 1.0) * 100.0;
            writeln!(self.out, "Day {:>5}  {:>12.4}  ({:+.2}%)", day as u64, price, change)?;
        } else {
            writeln!(self.out, "Day {:>5}  {:>12.4}", day as u64, price)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn begin(&mut self, path: &PricePath) -> anyhow::Result<()> {
        self.initial_price = path.first();
        self.latest = Some((0.0, path.first()));
        self.write_latest()?;
        self.out.flush()?;
        Ok(())
    }

    fn set_data(&mut self, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
        self.latest = xs.last().copied().zip(ys.last().copied());
        Ok(())
    }

    fn set_bounds(&mut self, _bounds: AxisBounds) -> anyhow::Result<()> {
        Ok(())
    }

    fn set_interactive(&mut self, _on: bool) -> anyhow::Result<()> {
        Ok(())
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        self.write_latest()?;
        self.out.flush()?;
        Ok(())
    }

    fn process_events(&mut self, _window: Duration) -> anyhow::Result<Control> {
        Ok(Control::Continue)
    }

    fn block_until_dismissed(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

use brownian_shared::config::Pacing;
use brownian_shared::path::{AxisBounds, PricePath};

use crate::engine::Simulation;
use crate::render::{Control, Pacer, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All `days - 1` steps were simulated.
    Completed,
    /// The renderer reported a stop request before the last step.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub steps: u32,
    pub path: PricePath,
}

/// Drives a [`Simulation`] one step at a time, pushing every new snapshot to a renderer and
/// sleeping a fixed delay between steps.
pub struct LiveSimulationLoop<R, P> {
    simulation: Simulation,
    renderer: R,
    pacer: P,
    pacing: Pacing,
    window: Option<usize>,
    state: LoopState,
}

impl<R: Renderer, P: Pacer> LiveSimulationLoop<R, P> {
    pub fn new(simulation: Simulation, renderer: R, pacer: P, pacing: Pacing) -> Self {
        Self {
            simulation,
            renderer,
            pacer,
            pacing,
            window: None,
            state: LoopState::Initializing,
        }
    }

    /// Only hand the trailing `max_points` prices to the renderer. The path itself keeps
    /// every price.
    pub fn with_window(mut self, max_points: Option<usize>) -> Self {
        self.window = max_points;
        self
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn run(&mut self) -> anyhow::Result<RunReport> {
        if self.state != LoopState::Initializing {
            anyhow::bail!("Simulation loop already ran");
        }

        let params = *self.simulation.params();
        tracing::info!(
            initial_price = params.initial_price(),
            days = params.days(),
            volatility = params.volatility(),
            drift = params.drift(),
            "starting live simulation"
        );

        self.renderer.begin(self.simulation.path())?;
        self.renderer.set_interactive(true)?;

        self.state = LoopState::Running;
        let mut steps = 0u32;
        let mut outcome = RunOutcome::Completed;

        while self.simulation.advance()?.is_some() {
            steps += 1;
            self.publish()?;
            self.renderer.draw()?;

            if self.renderer.process_events(self.pacing.event_window)? == Control::Stop {
                tracing::info!(day = self.simulation.day(), "stop requested");
                outcome = RunOutcome::Stopped;
                break;
            }

            self.pacer.pause(self.pacing.step_delay);
        }

        self.state = LoopState::Finished;
        self.renderer.set_interactive(false)?;
        self.renderer.block_until_dismissed()?;

        tracing::info!(steps, final_price = self.simulation.path().last(), ?outcome, "simulation finished");
        Ok(RunReport {
            outcome,
            steps,
            path: self.simulation.path().clone(),
        })
    }

    fn publish(&mut self) -> anyhow::Result<()> {
        let path = self.simulation.path();
        let (start, ys) = path.window(self.window);
        let xs: Vec<f64> = (start..start + ys.len()).map(|i| i as f64).collect();

        self.renderer.set_data(&xs, ys)?;
        self.renderer.set_bounds(AxisBounds::fit(start, ys))?;
        Ok(())
    }
}

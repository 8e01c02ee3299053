use brownian_sim::{LiveSimulationLoop, SleepPacer};

use crate::output;
use crate::tui::TerminalChart;

use super::RunArgs;

pub fn run(args: &RunArgs, window: Option<usize>) -> anyhow::Result<()> {
    let params = args.acquire_parameters()?;
    let simulation = args.simulation(params);

    let start = std::time::Instant::now();
    let report = {
        let renderer = TerminalChart::new(params);
        let mut live = LiveSimulationLoop::new(simulation, renderer, SleepPacer, args.pacing()).with_window(window);
        live.run()?
    };
    let elapsed = start.elapsed();

    output::print_report(&report, elapsed);
    Ok(())
}

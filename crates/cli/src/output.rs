use std::time::Duration;

use brownian_sim::{PathStats, RunOutcome, RunReport};

pub fn print_report(report: &RunReport, elapsed: Duration) {
    let stats = PathStats::from_path(&report.path);

    println!("\n========================================");
    match report.outcome {
        RunOutcome::Completed => println!("  Run:           completed"),
        RunOutcome::Stopped => println!("  Run:           stopped early"),
    }
    println!("  Days:          {} ({} steps)", stats.days, report.steps);
    println!("  Time:          {:.2}s", elapsed.as_secs_f64());
    println!("  Initial price: {:.4}", stats.initial_price);
    println!("  Final price:   {:.4}", stats.final_price);
    println!("  Low / high:    {:.4} / {:.4}", stats.min_price, stats.max_price);
    match stats.total_return() {
        Some(r) => println!("  Total return:  {:+.2}%", r * 100.0),
        None => println!("  Total return:  n/a"),
    }
    if let (Some(drift), Some(vol)) = (stats.realised_drift, stats.realised_volatility) {
        println!("  Realised drift (log, per day):      {:+.6}", drift);
        println!("  Realised volatility (log, per day): {:.6}", vol);
    }
    println!("========================================");
}

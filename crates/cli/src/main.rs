mod commands;
mod logging;
mod output;
mod prompt;
mod tui;

use clap::{Parser, Subcommand};

use commands::RunArgs;

#[derive(Parser)]
#[command(name = "brownian", about = "Live Brownian motion stock price simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the price path unfold on a terminal chart
    Live {
        #[command(flatten)]
        args: RunArgs,
        /// Only chart the trailing N days
        #[arg(long)]
        window: Option<usize>,
    },
    /// Print one line per simulated day instead of drawing a chart
    Plain {
        #[command(flatten)]
        args: RunArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    match cli.command {
        Commands::Live { args, window } => commands::live::run(&args, window),
        Commands::Plain { args } => commands::plain::run(&args),
    }
}

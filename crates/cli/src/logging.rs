use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::fmt::writer::{EitherWriter, MakeWriter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

// Set while the terminal chart holds the alternate screen.
static SCREEN_OWNED: AtomicBool = AtomicBool::new(false);

/// Mute log output while a full-screen renderer is active. Events emitted in that span
/// are dropped; the chart's status panel carries what the user needs to see.
pub fn set_screen_owned(owned: bool) {
    SCREEN_OWNED.store(owned, Ordering::SeqCst);
}

/// Writes to stderr unless the screen is owned by the chart.
struct StderrUnlessScreenOwned;

impl<'a> MakeWriter<'a> for StderrUnlessScreenOwned {
    type Writer = EitherWriter<io::Stderr, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if SCREEN_OWNED.load(Ordering::SeqCst) {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(StderrUnlessScreenOwned))
        .with(filter)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_muted_while_screen_owned() {
        let make = StderrUnlessScreenOwned;
        set_screen_owned(true);
        assert!(matches!(make.make_writer(), EitherWriter::B(_)));
        set_screen_owned(false);
        assert!(matches!(make.make_writer(), EitherWriter::A(_)));
    }
}

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sparselife::config::Config;
use sparselife::driver;
use sparselife::driver::ThreadClock;
use sparselife::seed;
use sparselife::term::Terminal;

fn main() -> anyhow::Result<()> {
    // Frames go to stdout, so logs have to go somewhere else
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let mut driver = driver::setup(
        seed::default_seed(),
        Terminal::stdout(&config),
        ThreadClock,
        &config,
    );

    driver.run().context("Failed to draw generation")?;

    Ok(())
}

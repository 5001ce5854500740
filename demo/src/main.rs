use anyhow::Result;
use demo::sink::Console;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    demo::run(&mut Console::new(std::io::stdout().lock()))?;
    Ok(())
}

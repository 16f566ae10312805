use anyhow::Result;
use taskman::commands::Cli;
use taskman::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskman=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu()
}

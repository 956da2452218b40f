use tinytodo::commands::Cli;
use tinytodo::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Starts the tracing subscriber in debug mode (`TINYTODO_DEBUG` or `RUST_LOG`).
///
/// The filter is taken from `RUST_LOG` and defaults to `tinytodo=debug`.
fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tinytodo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    Cli::menu()
}

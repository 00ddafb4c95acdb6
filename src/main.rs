use clap::Parser;
use miette::Result;
use tracing::info;

use unusedstrings::{pipeline, ProgressObserver, TerminalReporter};

/// unusedstrings - Find and remove unused string resources in Android projects
#[derive(Parser, Debug)]
#[command(name = "unusedstrings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Android project root
    #[arg(value_name = "PATH")]
    paths: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    info!("unusedstrings v{}", env!("CARGO_PKG_VERSION"));

    let root = pipeline::project_root_from_args(&cli.paths)?;
    let (paths, config) = pipeline::load_project(&root)?;

    let reporter = TerminalReporter::new();
    let mut progress = ProgressObserver::new();
    pipeline::run(&paths, &config, &reporter, &mut progress)?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

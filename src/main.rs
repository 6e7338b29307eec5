use std::env;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vercheck::{check, APP_NAME};

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Check an input version against the CMake project version",
    long_about = None)]
struct Args {
    /// Input version with a 'v' prefix
    #[arg(long)]
    version: String,
    /// Build file holding the project declaration
    #[arg(long, default_value = "CMakeLists.txt")]
    file: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();
    let args = Args::parse();
    let code = match main_int(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };
    std::process::exit(code);
}

fn main_int(args: Args) -> anyhow::Result<i32> {
    tracing::info!(name = APP_NAME, "Starting version check");
    tracing::info!(version = env!("CARGO_APP_VERSION"));
    tracing::info!(file = args.file);
    tracing::info!(input = args.version);
    let cwd = env::current_dir()?;
    tracing::info!(cwd = cwd.display().to_string());

    let outcome = check::run(&args.file, &args.version);
    println!("{}", outcome);
    Ok(outcome.exit_code())
}

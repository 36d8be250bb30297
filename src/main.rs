use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emulator_config::{ensure_config, Bootstrap, DEFAULT_CONFIG_DIR};

#[derive(Parser)]
#[command(name = "emulator-config")]
#[command(version)]
#[command(about = "Generate Firebase emulator rules and firebase.json when none exist")]
struct Cli {
    /// Directory holding firebase.json and the rules files
    #[arg(long, env = "FIREBASE_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "emulator_config=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match ensure_config(&cli.config_dir)? {
        Bootstrap::Existing(_) => {
            tracing::debug!("Existing configuration left untouched");
        }
        Bootstrap::Generated(_) => {
            tracing::info!("Configuration written to {}", cli.config_dir.display());
        }
    }

    Ok(())
}

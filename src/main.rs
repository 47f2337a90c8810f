use anyhow::Result;
use clap::Parser;
use tracing::info;

mod color;
mod config;
mod display;
mod error;
mod geo;
mod map;
mod plot;
mod visualizer;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "polarscope")]
#[command(author, version, about = "Radar-style polar coordinate plotter with map export")]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Directory for exported map documents
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Color scheme: phosphor, amber, ice, monochrome
    #[arg(long)]
    colors: Option<String>,

    /// Sweep tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. The terminal UI owns the screen, so logs go to a
    // file when POLARSCOPE_LOG names one, otherwise to stderr.
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("polarscope=info".parse()?);
    match std::env::var("POLARSCOPE_LOG") {
        Ok(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Load or create config
    let config = match &args.config {
        Some(path) => {
            let mut config = Config::load(path)?;
            config.merge_args(&args);
            config
        }
        None => Config::default_with_args(&args),
    };

    info!("Starting polarscope");

    display::terminal::run(config).await
}

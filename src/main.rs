mod config;
mod error;
mod handlers;
mod models;
mod services;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;

use config::Config;
use handlers::{AnalysisOutcome, CaptureCollector, SessionController};
use models::SessionState;
use services::device::{ConsoleAlerts, FileCamera, StaticPermissions};
use services::GeminiService;

#[derive(Parser)]
#[command(name = "vovo-cafeteira", about = "App da Vovó Cafeteira ☕")]
struct Cli {
    /// Simulate a denied location prompt
    #[arg(long, global = true)]
    deny_location: bool,

    #[arg(long, global = true)]
    deny_photos: bool,

    #[arg(long, global = true)]
    deny_camera: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Describe the coffee in words
    Text { description: String },
    /// Analyze a photo of the coffee (no path = camera dismissed)
    Photo {
        path: Option<PathBuf>,
        #[arg(long)]
        quality: Option<f32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    log::info!("🚀 Starting App da Vovó Cafeteira...");

    let config = Config::from_env()?;
    log::debug!("⚙️ Loaded {:?}", config);

    let gemini = Arc::new(GeminiService::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    ));
    log::info!("✅ Gemini service initialized with model: {}", config.gemini_model);

    let permissions = Arc::new(StaticPermissions {
        location: !cli.deny_location,
        photo_library: !cli.deny_photos,
        camera: !cli.deny_camera,
    });

    let (photo_path, quality) = match &cli.command {
        Command::Photo { path, quality } => (path.clone(), quality.unwrap_or(config.capture_quality)),
        Command::Text { .. } => (None, config.capture_quality),
    };

    let collector = CaptureCollector::new(permissions, Arc::new(FileCamera::new(photo_path)));
    let controller = SessionController::new(collector, gemini, Arc::new(ConsoleAlerts), quality);

    let mut state = SessionState::new();
    controller.start(&mut state).await;

    let outcome = match &cli.command {
        Command::Text { description } => {
            controller.set_draft(&mut state, description);
            controller.analyze_text(&mut state).await
        }
        Command::Photo { .. } => controller.analyze_photo(&mut state).await,
    };

    match outcome {
        AnalysisOutcome::Described(description) => {
            println!("\n{}\n", description);
        }
        AnalysisOutcome::Cancelled => {
            log::info!("📷 Nothing to analyze, camera was dismissed");
        }
        other => {
            log::info!("🛑 Finished without a description: {:?}", other);
        }
    }

    Ok(())
}

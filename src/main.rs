//! Interactive student depression risk predictor.
//!
//! Loads the fitted model, scaler and encoders once, then asks for a
//! student's answers and shows the predicted risk, as many times as the user
//! wants.

use anyhow::{Context, Result};
use clap::Parser;
use inquire::InquireError;
use log::{info, warn};
use std::path::PathBuf;

use sdpredict::artifacts::load_artifacts;
use sdpredict::config::{AppConfig, ConfigOverrides};
use sdpredict::prediction::InferenceSession;
use sdpredict::ui::cli::drivers::{InquireDriver, PromptDriver};
use sdpredict::ui::cli::wizard::collect_profile;
use sdpredict::ui::presenter;

#[derive(Parser, Debug)]
#[command(version, about = "Predict student depression risk from lifestyle answers")]
struct Cli {
    /// JSON config file
    #[arg(long, short = 'c', env = "SDPREDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding model_svm.json, scaler.json and encoder.json
    #[arg(long, short = 'd', env = "SDPREDICT_ARTIFACTS_DIR")]
    artifacts_dir: Option<PathBuf>,

    /// Classifier artifact
    #[arg(long)]
    model: Option<PathBuf>,

    /// Scaler artifact
    #[arg(long)]
    scaler: Option<PathBuf>,

    /// Encoder artifact
    #[arg(long)]
    encoders: Option<PathBuf>,

    /// Fail instead of writing default encoders when the encoder file is missing
    #[arg(long)]
    no_bootstrap: bool,

    /// Run a single prediction and exit
    #[arg(long)]
    once: bool,
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let config = config.apply(ConfigOverrides {
        artifacts_dir: cli.artifacts_dir,
        model: cli.model,
        scaler: cli.scaler,
        encoders: cli.encoders,
        no_bootstrap: cli.no_bootstrap,
    });

    let artifacts = load_artifacts(&config.artifacts, config.bootstrap_encoders)
        .context("cannot serve predictions without the fitted artifacts")?;
    let session = InferenceSession::from(artifacts);
    let driver = InquireDriver;

    println!("{}", presenter::banner());
    loop {
        let profile = collect_profile(&driver)?;
        match session.predict(&profile) {
            Ok(result) => {
                info!("prediction: {} ({})", result.label, result.score);
                println!("\n{}\n", presenter::render(&result));
            }
            Err(e) => {
                warn!("prediction failed: {e}");
                eprintln!("✗ Prediction failed: {e}\n");
            }
        }

        if cli.once || !driver.ask_bool("Run another prediction?", "", true)? {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Err(e) if is_cancellation(&e) => {
            info!("session cancelled");
            Ok(())
        }
        other => other,
    }
}

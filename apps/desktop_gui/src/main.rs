use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use eframe::egui;
use storage::HospitalStore;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::load_settings;
use ui::HospitalApp;

#[derive(Parser, Debug)]
#[command(about = "Front-desk view of the OPD queue, ward beds and inventory")]
struct Args {
    /// Settings file; defaults to ./hospital.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with empty lists instead of the sample hospital data.
    #[arg(long)]
    empty: bool,
    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.empty {
        settings.seed_sample_data = false;
    }

    let store = if settings.seed_sample_data {
        HospitalStore::with_sample_data(Utc::now())
    } else {
        HospitalStore::new()
    };
    tracing::info!(
        patients = store.queue_len(),
        wards = store.wards().len(),
        items = store.inventory().len(),
        "hospital store ready"
    );

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([820.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(HospitalApp::new(settings, store)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("desktop window exited with an error")
}

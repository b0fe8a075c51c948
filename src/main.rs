use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use word_trove::{
    args::Args,
    catalog::{self, Category},
    content::load_levels_or_default,
    ui::{self, LaunchOptions},
};

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("word-trove").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

// The terminal belongs to the UI, so logs go to a file.
fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "word-trove.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging()?;

    let mut categories: Vec<Category> = catalog::builtin().to_vec();
    let mut notice = None;

    if let Some(source) = &args.levels {
        let (levels, load_notice) = load_levels_or_default(source).await;
        notice = load_notice;
        if notice.is_none() {
            categories.insert(
                0,
                Category {
                    id: "custom".into(),
                    title: format!("Custom ({source})"),
                    levels,
                },
            );
        }
    }

    ui::run_ui(LaunchOptions {
        categories,
        config: args.session_config(),
        initial_category: args.category.clone(),
        seed: args.seed,
        mute: args.mute,
        notice,
    })
}

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

use gameshelf::app::{self, Boot};
use gameshelf::config::AppConfig;
use gameshelf::i18n::Catalog;
use gameshelf::models::{CurrentViewer, ProfileBackground};
use gameshelf::profile_store::ProfileFile;
use gameshelf::relative_time::DistanceFormatter;
use gameshelf::routes::HistoryNavigator;
use gameshelf::session::LocalSession;
use gameshelf::settings::Settings;
use gameshelf::ui::Services;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Profile JSON to display (defaults to profile.json in the config directory)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Language tag, e.g. en or pt-BR (overrides settings.json)
    #[arg(short, long)]
    language: Option<String>,

    /// Sign in as this user id before opening the page
    #[arg(long)]
    viewer: Option<String>,

    /// Header gradient for the signed-in viewer, as #rrggbb,#rrggbb
    #[arg(long, requires = "viewer")]
    background: Option<String>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("gameshelf", LevelFilter::Debug)
        .init();
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let config = AppConfig::new()?;

    let background = match &args.background {
        Some(raw) => Some(
            ProfileBackground::parse(raw)
                .with_context(|| format!("invalid --background value: {raw}"))?,
        ),
        None => None,
    };

    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let (settings, session) = rt.block_on(async {
        config.ensure_directories().await?;
        let mut settings = Settings::load(&config.config_dir).await;
        if let Some(language) = &args.language {
            settings.language = language.clone();
            if let Err(e) = settings.save(&config.config_dir).await {
                log::warn!("could not persist language choice: {}", e);
            }
        }

        let session = LocalSession::load(&config.config_dir).await;
        if let Some(id) = &args.viewer {
            session
                .sign_in(CurrentViewer {
                    id: id.clone(),
                    profile_background: background,
                })
                .await
                .context("failed to store session")?;
        }
        anyhow::Ok((settings, session))
    })?;
    drop(rt);

    let profile_path = args.profile.unwrap_or_else(|| config.default_profile_path());
    log::info!("showing {} in {}", profile_path.display(), settings.language);

    let store = ProfileFile::new(profile_path);
    let navigator = Arc::new(HistoryNavigator::default());
    let services = Services {
        translator: Arc::new(Catalog::builtin(&settings.language)),
        relative_time: Arc::new(DistanceFormatter::new(&settings.language)),
        navigator: navigator.clone(),
        session: Arc::new(session),
        updater: Arc::new(store.clone()),
        clock: chrono::Utc::now,
    };

    app::run(Boot {
        store,
        services,
        navigator,
        theme: settings.theme,
    })
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

mod app;
mod format;
mod logging;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod toast;
mod widgets;
mod window_state;

use clap::Parser;

use cineradar_core::config::AppConfig;

#[derive(Parser)]
#[command(name = "cineradar", version, about = "Personal movie and TV watchlist")]
struct Cli {
    /// Backend base URL, overriding the config file
    #[arg(long, env = "CINERADAR_API_URL")]
    api_url: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let config_result = AppConfig::load();
    let mut config = config_result.as_ref().cloned().unwrap_or_default();
    let _log_guard = logging::init(cli.verbose, config.logging.file);
    if let Err(e) = &config_result {
        tracing::warn!(error = %e, path = %AppConfig::config_path().display(), "config unreadable, using defaults");
    }
    if config_result.is_ok() && !AppConfig::config_path().exists() {
        match config.save() {
            Ok(()) => tracing::info!(path = %AppConfig::config_path().display(), "wrote default config"),
            Err(e) => tracing::warn!(error = %e, "failed to write default config"),
        }
    }
    config.override_api_url(cli.api_url);

    let services = match app::Services::new(&config) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!(error = %e, url = %config.api.base_url, "invalid backend configuration");
            eprintln!("cineradar: invalid backend URL {:?}: {e}", config.api.base_url);
            std::process::exit(2);
        }
    };
    tracing::info!(url = %config.api.base_url, "starting");

    let ws = window_state::WindowState::load();
    let mut win = iced::window::Settings {
        size: ws.size(),
        min_size: Some(window_state::MIN_SIZE),
        ..Default::default()
    };
    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(
        move || app::CineRadar::new(config.clone(), services.clone()),
        app::CineRadar::update,
        app::CineRadar::view,
    )
    .title(app::CineRadar::title)
    .subscription(app::CineRadar::subscription)
    .theme(app::CineRadar::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}

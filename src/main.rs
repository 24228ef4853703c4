use clap::Parser;
use eframe::egui;
use std::env;
use std::path::PathBuf;
use textpeek::app::TextPeek;
use textpeek::cli::Cli;
use textpeek::config::Config;
use tracing::{error, info};

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only textpeek's own logs at info unless RUST_LOG says otherwise
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textpeek=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.write_config {
        match Config::create_default() {
            Ok(path) => info!("Config file: {}", path.display()),
            Err(e) => error!("{}", e),
        }
        return Ok(());
    }

    let mut config = Config::load();
    if let Some(theme) = cli.theme {
        config.theme.mode = theme.as_config_str().to_string();
    }
    if cli.show_hidden {
        config.ui.show_hidden = true;
    }

    let start = cli
        .path
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("textpeek"),
        ..Default::default()
    };

    eframe::run_native(
        "textpeek",
        options,
        Box::new(move |cc| Ok(Box::new(TextPeek::new(cc, &config, start)))),
    )
}

use depthclock::ClockApp;
use depthclock::cli::Args;
use depthclock::paths;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();
    let path_config = paths::PathConfig::from_env_and_cli(args.config_dir.clone());
    let log_level = args.log_level();

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = match log_path_opt {
            Some(path) => {
                paths::ensure_parent(path)?;
                path.clone()
            }
            None => {
                paths::ensure_dirs(&path_config)?;
                paths::data_file("depthclock.log", &path_config)
            }
        };

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .init();
    }

    info!("DepthClock v{} starting...", env!("CARGO_PKG_VERSION"));
    debug!("Command-line args: {:?}", args);

    let options = args.launch_options();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DepthClock • double-click: fullscreen • triple-click: settings")
            .with_inner_size([1280.0, 720.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "DepthClock",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ClockApp::new(options)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))?;

    info!("Application exiting");
    Ok(())
}

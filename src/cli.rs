use clap::Parser;
use std::path::PathBuf;

use crate::render::FontChoice;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Layered 3D digital clock
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Start with the settings panel open
    #[arg(short = 's', long = "settings")]
    pub show_settings: bool,

    /// Initial scene tilt around X, degrees (-60..60)
    #[arg(long = "tilt-x", value_name = "DEG", allow_hyphen_values = true)]
    pub tilt_x: Option<f32>,

    /// Initial scene tilt around Y, degrees (-60..60)
    #[arg(long = "tilt-y", value_name = "DEG", allow_hyphen_values = true)]
    pub tilt_y: Option<f32>,

    /// Initial font size in pixels (40..300)
    #[arg(long = "font-size", value_name = "PX")]
    pub font_size: Option<f32>,

    /// Initial font family
    #[arg(long = "font-family", value_enum)]
    pub font_family: Option<FontChoice>,

    /// Enable logging to file (default: depthclock.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom data directory for the log file (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Resolve startup options, falling back to defaults for anything not given.
    pub fn launch_options(&self) -> crate::app::LaunchOptions {
        let defaults = crate::dialogs::prefs::SceneSettings::default();
        let settings = crate::dialogs::prefs::SceneSettings {
            tilt_x: self.tilt_x.unwrap_or(defaults.tilt_x),
            tilt_y: self.tilt_y.unwrap_or(defaults.tilt_y),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_family: self.font_family.unwrap_or(defaults.font_family),
        }
        .clamped();

        crate::app::LaunchOptions {
            settings,
            fullscreen: self.fullscreen,
            show_settings: self.show_settings,
        }
    }

    /// Log level implied by `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["depthclock"]);
        let opts = args.launch_options();
        assert_eq!(opts.settings, crate::dialogs::prefs::SceneSettings::default());
        assert!(!opts.fullscreen);
        assert!(!opts.show_settings);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_scene_flags() {
        let args = Args::parse_from([
            "depthclock",
            "--tilt-x",
            "30",
            "--tilt-y",
            "-15",
            "--font-size",
            "1000",
            "--font-family",
            "proportional",
            "-F",
            "-s",
        ]);
        let opts = args.launch_options();
        assert_eq!(opts.settings.tilt_x, 30.0);
        assert_eq!(opts.settings.tilt_y, -15.0);
        assert_eq!(opts.settings.font_size, 300.0);
        assert_eq!(opts.settings.font_family, FontChoice::Proportional);
        assert!(opts.fullscreen);
        assert!(opts.show_settings);
    }

    #[test]
    fn test_verbosity_and_log() {
        let args = Args::parse_from(["depthclock", "-vv", "--log"]);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        assert_eq!(args.log_file, Some(None));

        let args = Args::parse_from(["depthclock", "-vvvv", "--log", "clock.log"]);
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
        assert_eq!(args.log_file, Some(Some(PathBuf::from("clock.log"))));
    }
}

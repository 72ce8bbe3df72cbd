#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pensionguardian_core::GuardianConfig;

/// Global configuration, set once at startup
static CONFIG: OnceLock<GuardianConfig> = OnceLock::new();

/// Get the active configuration (defaults if startup never set one).
pub fn get_config() -> GuardianConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// PensionGuardian - pension verification desktop app
#[derive(Parser, Debug)]
#[command(name = "pensionguardian-desktop")]
#[command(version = "0.1.0")]
#[command(about = "PensionGuardian - Secure pension verification with simulated biometrics")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file (default: <config dir>/pensionguardian/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default config file location
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pensionguardian")
        .join("config.json")
}

/// An explicit path must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<GuardianConfig> {
    match explicit {
        Some(path) => GuardianConfig::load(path)
            .with_context(|| format!("Failed to read config file {}", path.display())),
        None => {
            let path = default_config_path();
            GuardianConfig::load_or_default(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))
        }
    }
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("{:#}; using built-in defaults", e);
        GuardianConfig::default()
    });
    tracing::info!(timings = ?config.timings, "Starting PensionGuardian");
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("PensionGuardian")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_verbosity_flags() {
        let args = Args::parse_from(["pensionguardian-desktop", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert!(args.config.is_none());

        let args = Args::parse_from(["pensionguardian-desktop", "--config", "/tmp/pg.json"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pg.json")));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "timings": {{ "redirect_delay_ms": 10 }} }}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.timings.redirect_delay_ms, 10);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}

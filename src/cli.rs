// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::FlyConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flycam")]
#[command(about = "Free-fly camera demo", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Mouse sensitivity multiplier (1.0 = 0.001 rad per pixel)
    #[arg(long)]
    pub sensitivity: Option<f64>,

    /// Movement speed in units per second
    #[arg(long)]
    pub speed: Option<f64>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the effective config as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides
    pub fn resolve_config(&self) -> Result<FlyConfig> {
        let mut config = match &self.config {
            Some(path) => FlyConfig::load(path)?,
            None => FlyConfig::default(),
        };

        if let Some(sensitivity) = self.sensitivity {
            config.mouse_sensitivity = sensitivity;
        }
        if let Some(speed) = self.speed {
            config.move_speed = speed;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from(["flycam", "--speed", "4", "--width", "640", "--height", "480"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.move_speed, 4.0);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::parse_from(["flycam"]);
        assert_eq!(cli.resolve_config().unwrap(), FlyConfig::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["flycam", "--sensitivity", "0"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_print_config_flag() {
        let cli = Cli::parse_from(["flycam", "--print-config", "-c", "demo.json"]);
        assert!(cli.print_config);
        assert_eq!(cli.config, Some(PathBuf::from("demo.json")));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

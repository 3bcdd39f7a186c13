//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Output path that selects standard output.
const STDOUT_PATH: &str = "-";

/// Command line configuration for formdoc.
#[derive(Debug, Clone, Parser)]
#[command(name = "formdoc", version, about, long_about = None)]
pub struct Config {
    /// Forms file (JSON, or TOML with a .toml extension)
    pub forms: PathBuf,

    /// Output file, `-` for standard output
    #[arg(short, long, default_value = "customization.md")]
    pub output: PathBuf,

    /// Brokerpak configuration form replacing the built-in one
    #[arg(long)]
    pub brokerpak: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if forms file or brokerpak form file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.forms.is_file() {
            bail!("Forms file does not exist: {}", self.forms.display());
        }

        if let Some(brokerpak) = &self.brokerpak
            && !brokerpak.is_file()
        {
            bail!("Brokerpak form file does not exist: {}", brokerpak.display());
        }

        Ok(())
    }

    /// Returns true when the document goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output == Path::new(STDOUT_PATH)
    }

    /// Returns default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "formdoc=info",
            1 => "formdoc=debug",
            _ => "formdoc=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config(forms: PathBuf) -> Config {
        Config {
            forms,
            output: PathBuf::from("customization.md"),
            brokerpak: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_from_args_defaults() {
        // Act
        let config = Config::try_parse_from(["formdoc", "forms.json"]).unwrap();

        // Assert
        assert_eq!(config.forms, PathBuf::from("forms.json"));
        assert_eq!(config.output, PathBuf::from("customization.md"));
        assert!(config.brokerpak.is_none());
        assert_eq!(config.verbose, 0);
    }

    #[test]
    fn test_parse_from_args_all_options() {
        // Act
        let config = Config::try_parse_from([
            "formdoc",
            "forms.toml",
            "-o",
            "docs/customization.md",
            "--brokerpak",
            "brokerpak.json",
            "-vv",
        ])
        .unwrap();

        // Assert
        assert_eq!(config.output, PathBuf::from("docs/customization.md"));
        assert_eq!(config.brokerpak, Some(PathBuf::from("brokerpak.json")));
        assert_eq!(config.verbose, 2);
        assert_eq!(config.log_filter(), "formdoc=trace");
    }

    #[test]
    fn test_parse_requires_forms() {
        assert!(Config::try_parse_from(["formdoc"]).is_err());
    }

    #[test]
    fn test_validate_existing_forms() {
        // Arrange
        let file = NamedTempFile::new().unwrap();
        let config = config(file.path().to_path_buf());

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing forms file should be valid");
    }

    #[test]
    fn test_validate_missing_forms() {
        // Arrange
        let config = config(PathBuf::from("no/such/forms.json"));

        // Act
        let result = config.validate();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Forms file does not exist")
        );
    }

    #[test]
    fn test_validate_missing_brokerpak() {
        // Arrange
        let file = NamedTempFile::new().unwrap();
        let mut config = config(file.path().to_path_buf());
        config.brokerpak = Some(PathBuf::from("no/such/brokerpak.json"));

        // Act
        let result = config.validate();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Brokerpak form file does not exist")
        );
    }

    #[test]
    fn test_writes_to_stdout() {
        let mut config = config(PathBuf::from("forms.json"));
        assert!(!config.writes_to_stdout());

        config.output = PathBuf::from("-");
        assert!(config.writes_to_stdout());
    }

    #[test]
    fn test_log_filter_levels() {
        let mut config = config(PathBuf::from("forms.json"));
        assert_eq!(config.log_filter(), "formdoc=info");

        config.verbose = 1;
        assert_eq!(config.log_filter(), "formdoc=debug");
    }
}

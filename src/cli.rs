use clap::Parser;
use std::path::PathBuf;

use crate::plot::DEFAULT_MAX_SENTENCES;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Movie title, or an IMDb id such as tt0133093
    #[arg(value_name = "TITLE", required = true, num_args = 1..)]
    pub title: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum number of plot sentences to show
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCES)]
    pub max_sentences: usize,

    /// HTTP timeout in seconds (overrides the configuration file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The title words joined by single spaces.
    pub fn query(&self) -> String {
        self.title
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.query().is_empty() {
            return Err("Enter a movie name.".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Valid levels are: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if self.max_sentences == 0 {
            return Err("max-sentences must be greater than 0".to_string());
        }

        if self.timeout == Some(0) {
            return Err("timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// The spinner would tear through log lines below `warn`.
    pub fn show_progress(&self) -> bool {
        matches!(self.log_level.as_str(), "warn" | "error")
    }

    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("movie-lookup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["Inception"]);
        assert_eq!(args.query(), "Inception");
        assert_eq!(args.log_level, "warn");
        assert_eq!(args.max_sentences, 3);
        assert!(!args.json);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_title_words_are_joined() {
        let args = parse(&["The", "Matrix", "--json", "--max-sentences", "2"]);
        assert_eq!(args.query(), "The Matrix");
        assert!(args.json);
        assert_eq!(args.max_sentences, 2);
    }

    #[test]
    fn test_title_is_required() {
        assert!(CliArgs::try_parse_from(["movie-lookup"]).is_err());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let args = parse(&["   "]);
        assert_eq!(args.validate(), Err("Enter a movie name.".to_string()));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(parse(&["Heat", "-L", "loud"]).validate().is_err());
        assert!(parse(&["Heat", "--max-sentences", "0"]).validate().is_err());
        assert!(parse(&["Heat", "--timeout", "0"]).validate().is_err());
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(parse(&["Heat", "-L", "debug"]).tracing_level(), tracing::Level::DEBUG);
        assert_eq!(parse(&["Heat"]).tracing_level(), tracing::Level::WARN);
        assert!(parse(&["Heat"]).show_progress());
        assert!(!parse(&["Heat", "-L", "info"]).show_progress());
    }
}

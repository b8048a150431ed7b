//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use podsum_engine::{ClientSettings, DEFAULT_BASE_URL};
use podsum_logging::LogDestination;

use crate::shell::ShellConfig;

#[derive(Parser, Debug)]
#[command(name = "podsum")]
#[command(version)]
#[command(about = "Submit podcasts for transcription and read their summaries")]
pub struct Args {
    /// Base URL of the summarization API
    #[arg(long, env = "PODSUM_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Directory that exported transcripts and summaries are written to
    #[arg(long, env = "PODSUM_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Give up on a request after this many seconds
    #[arg(long, default_value_t = 30 * 60)]
    pub request_timeout_secs: u64,

    /// Disable terminal styling
    #[arg(long)]
    pub no_color: bool,

    /// Podcast URL to submit right away
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Args {
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            client: ClientSettings {
                base_url: self.api_url.clone(),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..ClientSettings::default()
            },
            output_dir: self.output_dir.clone(),
            color: !self.no_color,
            initial_url: self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let args = Args::try_parse_from(["podsum"]).unwrap();
        let config = args.shell_config();
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.color);
        assert_eq!(config.initial_url, None);
        assert_eq!(args.log, LogTarget::File);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "podsum",
            "--api-url",
            "http://backend:9000/api",
            "--no-color",
            "--log",
            "both",
            "--request-timeout-secs",
            "5",
            "https://podcasts.example.com/ep",
        ])
        .unwrap();
        let config = args.shell_config();
        assert_eq!(config.client.base_url, "http://backend:9000/api");
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
        assert!(!config.color);
        assert_eq!(
            config.initial_url.as_deref(),
            Some("https://podcasts.example.com/ep")
        );
        assert_eq!(LogDestination::from(args.log), LogDestination::Both);
    }
}

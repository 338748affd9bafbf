//! Command-line interface definitions for Notice Watch.
//!
//! The defaults match the paths the tool has always used, so running the
//! binary with no flags from its working directory behaves like every prior
//! deployment.

use clap::Parser;

/// Command-line arguments for the Notice Watch crawler.
///
/// # Examples
///
/// ```sh
/// # Default paths: ./config.json and ./file.log
/// notice_watch
///
/// # Explicit paths
/// notice_watch -c /etc/notice_watch/config.json -l /var/log/notice_watch.log
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Path to the error log file
    #[arg(short, long, default_value = "file.log")]
    pub log_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["notice_watch"]);

        assert_eq!(cli.config, "config.json");
        assert_eq!(cli.log_file, "file.log");
    }

    #[test]
    fn test_cli_explicit_paths() {
        let cli = Cli::parse_from([
            "notice_watch",
            "--config",
            "/etc/notice_watch/config.json",
            "--log-file",
            "/var/log/notice_watch.log",
        ]);

        assert_eq!(cli.config, "/etc/notice_watch/config.json");
        assert_eq!(cli.log_file, "/var/log/notice_watch.log");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["notice_watch", "-c", "conf.json", "-l", "errors.log"]);

        assert_eq!(cli.config, "conf.json");
        assert_eq!(cli.log_file, "errors.log");
    }
}

//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "contacts", version, about = "Contacts web application")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "CONTACTS_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// RON file holding the contacts.
    #[arg(long, env = "CONTACTS_DATA_FILE", default_value = "./contacts.ron")]
    pub data_file: PathBuf,

    /// Keep contacts in memory only; `--data-file` is ignored.
    #[arg(long, env = "CONTACTS_IN_MEMORY")]
    pub in_memory: bool,

    #[arg(
        long = "log",
        env = "CONTACTS_LOG",
        value_enum,
        default_value_t = LogDestination::Terminal
    )]
    pub log_destination: LogDestination,

    #[arg(long, env = "CONTACTS_LOG_FILE", default_value = "./contacts.log")]
    pub log_file: PathBuf,

    #[arg(long, env = "CONTACTS_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = Config::try_parse_from(["contacts"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.data_file, PathBuf::from("./contacts.ron"));
        assert!(!config.in_memory);
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "contacts",
            "--addr",
            "0.0.0.0:8080",
            "--in-memory",
            "--log",
            "both",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert!(config.in_memory);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(Config::try_parse_from(["contacts", "--addr", "nowhere"]).is_err());
    }
}

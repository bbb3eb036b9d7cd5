use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// Request-handling behavior, selected once at startup and fixed for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Render the parsed request structure back as plain text
    Parse,
    /// Mirror the request headers and body verbatim
    Echo,
    /// Resolve external URIs to internal paths, returning the path only
    Map,
    /// Serve mapped assets from disk and handle the login form
    Full,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Parse => "parse",
            Mode::Echo => "echo",
            Mode::Map => "map",
            Mode::Full => "full",
        };
        f.write_str(s)
    }
}

/// Command-line surface of the server.
#[derive(Debug, Parser)]
#[command(name = "tinyhttpd")]
#[command(about = "A minimal HTTP/1.0 server built on raw TCP streams", long_about = None)]
pub struct Cli {
    /// Listen host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Request-handling mode
    #[arg(long, value_enum, default_value_t = Mode::Full)]
    pub mode: Mode,

    /// Assets root directory (default: ./assets, then ../assets)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Login username
    #[arg(long, default_value = "test")]
    pub user: String,

    /// Login password
    #[arg(long, default_value = "test")]
    pub pass: String,
}

/// Immutable process configuration, built once at startup and shared
/// read-only across connection tasks.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mode: Mode,
    pub asset_root: PathBuf,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Freezes the parsed flags into a config record, resolving the assets
    /// root. An unresolvable root is a fatal startup error.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let asset_root = resolve_asset_root(cli.root.as_deref())?;
        Ok(Self {
            host: cli.host,
            port: cli.port,
            mode: cli.mode,
            asset_root,
            username: cli.user,
            password: cli.pass,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Picks the assets root: an explicit root must exist as a directory,
/// otherwise `assets` in the working directory, then a sibling `../assets`.
pub fn resolve_asset_root(root: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(root) = root {
        if root.is_dir() {
            return Ok(root.to_path_buf());
        }
        anyhow::bail!("provided assets root not found: {}", root.display());
    }

    for candidate in ["assets", "../assets"] {
        let path = Path::new(candidate);
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
    }

    anyhow::bail!("assets directory not found")
}

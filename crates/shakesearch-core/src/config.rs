//! Configuration types for shakesearch.
//!
//! [`Config::load`] layers, lowest priority first: the built-in defaults, an
//! optional TOML file, `SHAKESEARCH__*` environment variables, and finally the
//! conventional `PORT` variable. [`Config::defaults`] returns the built-in
//! defaults without touching the filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host       = "0.0.0.0"
port       = 3001
static_dir = "./static"

[corpus]
path = "completeworks.txt"

[search]
page_size        = 20
context_bytes    = 250
regex_size_limit = 10485760
"#;

/// Config file picked up from the working directory when no path is given.
const DEFAULT_CONFIG_FILE: &str = "shakesearch.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3001 }
fn default_static_dir() -> PathBuf { PathBuf::from("./static") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// `[corpus]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

fn default_corpus_path() -> PathBuf { PathBuf::from("completeworks.txt") }

impl Default for CorpusConfig {
    fn default() -> Self {
        Self { path: default_corpus_path() }
    }
}

/// `[search]` section. Shared by every query the engine serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Maximum snippets per response page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Bytes of surrounding text kept on each side of a match.
    #[serde(default = "default_context_bytes")]
    pub context_bytes: usize,
    /// Upper bound on a compiled query program, in bytes.
    #[serde(default = "default_regex_size_limit")]
    pub regex_size_limit: usize,
}

fn default_page_size() -> usize { 20 }
fn default_context_bytes() -> usize { 250 }
fn default_regex_size_limit() -> usize { crate::pattern::DEFAULT_SIZE_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            context_bytes: default_context_bytes(),
            regex_size_limit: default_regex_size_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist; without one, `shakesearch.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_port(path, std::env::var("PORT").ok())
    }

    /// `port` is the raw `$PORT` value; blank means unset.
    fn load_with_port(path: Option<&Path>, port: Option<String>) -> anyhow::Result<Self> {
        let port = port.filter(|p| !p.trim().is_empty());
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("SHAKESEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Server configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults (`0.0.0.0:9898`, 5 workers, current directory)
//! 2. A YAML file passed with `--config`
//! 3. Environment: `LISTEN` (`host:port`), `DOCROOT_HOST`, `DOCROOT_PORT`,
//!    `DOCROOT_WORKERS`, `DOCROOT_ROOT`
//! 4. Command-line flags
//!
//! ```yaml
//! host: 127.0.0.1
//! port: 8080
//! workers: 8
//! document_root: ./public
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Maximum number of connections handled at once
    pub workers: usize,
    /// Prefix every request path is joined onto; not checked at startup
    pub document_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9898,
            workers: 5,
            document_root: PathBuf::new(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(yaml).context("invalid YAML config")?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("loading config file {}", path.display()))
    }

    /// Overrides fields from environment-style variables.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup("LISTEN") {
            let (host, port) = listen
                .rsplit_once(':')
                .with_context(|| format!("LISTEN must be host:port, got {:?}", listen))?;
            self.host = host.to_string();
            self.port = port
                .parse()
                .with_context(|| format!("invalid port in LISTEN: {:?}", port))?;
        }

        if let Some(host) = lookup("DOCROOT_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("DOCROOT_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("invalid DOCROOT_PORT: {:?}", port))?;
        }
        if let Some(workers) = lookup("DOCROOT_WORKERS") {
            self.workers = workers
                .parse()
                .with_context(|| format!("invalid DOCROOT_WORKERS: {:?}", workers))?;
        }
        if let Some(root) = lookup("DOCROOT_ROOT") {
            self.document_root = PathBuf::from(root);
        }

        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            bail!("workers must be at least 1");
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Command-line flags. Anything left unset keeps the configured value.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "docroot", version, about = "Minimal static file HTTP server")]
pub struct CliArgs {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Server host
    #[arg(short = 's', long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Files path
    #[arg(short = 'r', long = "doc-root", alias = "doc_root")]
    pub doc_root: Option<PathBuf>,
}

impl CliArgs {
    /// Builds the final config: file, then environment, then these flags.
    pub fn resolve<F>(&self, env: F) -> anyhow::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        let cfg = self.apply_to(base.apply_env(env)?);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply_to(&self, mut cfg: Config) -> Config {
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(workers) = self.workers {
            cfg.workers = workers;
        }
        if let Some(root) = &self.doc_root {
            cfg.document_root = root.clone();
        }
        cfg
    }
}

//! Command implementations for the folio CLI

pub mod build;
pub mod check;
pub mod config;
pub mod list;
pub mod render;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_core::{FolioConfig, Site};

pub use build::run_build;
pub use check::run_check;
pub use config::run_config;
pub use list::run_list;
pub use render::run_render;
pub use serve::run_serve;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub content: Option<PathBuf>,
}

impl GlobalOpts {
    /// Effective configuration: file and environment, then `--content`.
    pub fn load_config(&self) -> Result<FolioConfig> {
        let mut config = FolioConfig::load(self.config.as_deref())
            .context("failed to load configuration")?;
        if let Some(content) = self.content.as_ref() {
            config.content.path = Some(content.clone());
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    pub fn load_site(&self) -> Result<Site> {
        self.load_config().and_then(site_from_config)
    }
}

pub fn site_from_config(config: FolioConfig) -> Result<Site> {
    let content = config.content.path.clone();
    Site::from_config(config).with_context(|| match content {
        Some(path) => format!("failed to load site content from {}", path.display()),
        None => "failed to set up site".to_string(),
    })
}

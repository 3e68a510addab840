//! Print the effective configuration

use anyhow::{Context, Result};

use super::GlobalOpts;

pub fn run_config(global: &GlobalOpts) -> Result<()> {
    let config = global.load_config()?;
    let text = config.to_toml().context("failed to render configuration")?;
    print!("{text}");
    Ok(())
}

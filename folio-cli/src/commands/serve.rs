//! Preview server command
//!
//! Renders every page once, then serves them with the static asset directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio_server::{run_server, ServerConfig};

use super::GlobalOpts;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: server.bind from config, 127.0.0.1:4000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Directory served under /static (default: build.static_dir)
    #[arg(long = "static", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(global: &GlobalOpts, args: ServeArgs) -> Result<()> {
    let site = global.load_site()?;

    let config = ServerConfig {
        bind_addr: args.bind.unwrap_or(site.config().server.bind),
        static_dir: args
            .static_dir
            .unwrap_or_else(|| site.config().build.static_dir.clone()),
    };

    tracing::info!("Starting folio preview server on {}", config.bind_addr);

    run_server(&site, config).await.context("Server error")?;

    Ok(())
}

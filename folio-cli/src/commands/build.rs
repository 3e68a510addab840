//! Static export of the whole site

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{build_site, BuildOptions};

use super::GlobalOpts;

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Output directory (default: build.out_dir from config)
    #[arg(long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Static asset directory copied to <out>/static (default: build.static_dir)
    #[arg(long = "static", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Preview operations without writing files
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

pub fn run_build(global: &GlobalOpts, args: BuildArgs) -> Result<()> {
    let site = global.load_site()?;
    let build = &site.config().build;

    let opts = BuildOptions {
        out_dir: args.out.unwrap_or_else(|| build.out_dir.clone()),
        static_dir: args.static_dir.unwrap_or_else(|| build.static_dir.clone()),
        dry_run: args.dry_run,
    };

    let report = build_site(&site, &opts)
        .with_context(|| format!("failed to build site into {}", opts.out_dir.display()))?;

    for path in &report.pages {
        println!("{}", path.display());
    }
    println!(
        "{} {} page(s), {} asset(s) -> {}",
        if opts.dry_run { "Would write" } else { "Wrote" },
        report.pages.len(),
        report.assets_copied,
        opts.out_dir.display()
    );
    Ok(())
}

//! Print one rendered page to stdout

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use folio_core::Page;

use super::GlobalOpts;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PageArg {
    Publications,
    Projects,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Publications => Page::Publications,
            PageArg::Projects => Page::Projects,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Page to render
    #[arg(value_enum)]
    pub page: PageArg,
}

pub fn run_render(global: &GlobalOpts, args: RenderArgs) -> Result<()> {
    let site = global.load_site()?;
    let html = site.render(args.page.into());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}").context("failed to write page to stdout")?;
    Ok(())
}

//! Enumerate the content store

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use folio_core::{Project, Publication};

use super::GlobalOpts;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output JSON instead of a plain listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    publications: &'a [Publication],
    projects: &'a [Project],
}

pub fn run_list(global: &GlobalOpts, args: ListArgs) -> Result<()> {
    let site = global.load_site()?;
    let catalogue = site.catalogue();

    if args.json {
        let listing = Listing {
            publications: catalogue.publications(),
            projects: catalogue.projects(),
        };
        let json =
            serde_json::to_string_pretty(&listing).context("failed to serialize catalogue")?;
        println!("{json}");
        return Ok(());
    }

    println!("Publications ({})", catalogue.publications().len());
    for (idx, publication) in catalogue.publications().iter().enumerate() {
        let marker = if publication.link().is_some() { "↗" } else { " " };
        println!(
            "  {idx:>2} {marker} {} ({}) - {}",
            publication.title, publication.year, publication.conference
        );
    }

    println!("Projects ({})", catalogue.projects().len());
    for (idx, project) in catalogue.projects().iter().enumerate() {
        let marker = if project.href().is_some() { "↗" } else { " " };
        println!("  {idx:>2} {marker} {}", project.title);
    }
    Ok(())
}

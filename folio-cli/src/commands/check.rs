//! Validate configuration and content without rendering to disk

use anyhow::Result;
use folio_core::Page;

use super::GlobalOpts;

pub fn run_check(global: &GlobalOpts) -> Result<()> {
    let site = global.load_site()?;
    let config = site.config();

    let source = config
        .content
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in catalogue".to_string());

    println!("✓ config ok (site: {})", config.site.title);
    println!("✓ analytics container {}", config.analytics.container_id);
    println!("✓ content ok ({source})");
    for page in Page::ALL {
        println!("  {:<13} {} entries", page.slug(), site.catalogue().len_of(page));
    }
    Ok(())
}

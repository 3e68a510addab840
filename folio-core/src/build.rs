//! Static export: write every page to disk and copy assets alongside.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FolioError, Result};
use crate::page::Page;
use crate::site::Site;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    /// Copied to `<out_dir>/static` when it exists.
    pub static_dir: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub assets_copied: usize,
}

/// Output path of `page` under `out_dir`.
pub fn page_path(out_dir: &Path, page: Page) -> PathBuf {
    out_dir.join(page.slug()).join("index.html")
}

pub fn build_site(site: &Site, opts: &BuildOptions) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for (page, html) in site.render_all() {
        let path = page_path(&opts.out_dir, page);
        write_file(&path, &html, opts.dry_run)?;
        report.pages.push(path);

        if page == Page::index() {
            let index = opts.out_dir.join("index.html");
            write_file(&index, &html, opts.dry_run)?;
            report.pages.push(index);
        }
    }

    if opts.static_dir.is_dir() {
        report.assets_copied = copy_assets(
            &opts.static_dir,
            &opts.out_dir.join("static"),
            opts.dry_run,
        )?;
    } else {
        tracing::debug!(dir = %opts.static_dir.display(), "no static directory, skipping assets");
    }

    tracing::info!(
        out = %opts.out_dir.display(),
        pages = report.pages.len(),
        assets = report.assets_copied,
        dry_run = opts.dry_run,
        "site built"
    );
    Ok(report)
}

fn write_file(path: &Path, contents: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        tracing::info!(path = %path.display(), "would write");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FolioError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| FolioError::io(path, e))
}

fn copy_assets(from: &Path, to: &Path, dry_run: bool) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            FolioError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|_| FolioError::config(format!("asset outside {}", from.display())))?;
        let target = to.join(relative);

        if !dry_run {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| FolioError::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| FolioError::io(entry.path(), e))?;
        }
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::config::FolioConfig;
    use tempfile::TempDir;

    fn site() -> Site {
        Site::new(FolioConfig::default(), Catalogue::builtin()).unwrap()
    }

    #[test]
    fn writes_every_page_and_index() {
        let out = TempDir::new().unwrap();
        let opts = BuildOptions {
            out_dir: out.path().to_path_buf(),
            static_dir: out.path().join("missing-static"),
            dry_run: false,
        };

        let report = build_site(&site(), &opts).unwrap();
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.assets_copied, 0);

        let publications = fs::read_to_string(page_path(out.path(), Page::Publications)).unwrap();
        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert_eq!(publications, index);
        assert!(fs::read_to_string(page_path(out.path(), Page::Projects))
            .unwrap()
            .contains("<h1>Projects</h1>"));
    }

    #[test]
    fn copies_static_tree() {
        let src = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("images")).unwrap();
        fs::write(src.path().join("images/Drone.png"), b"png").unwrap();
        fs::write(src.path().join("favicon.ico"), b"ico").unwrap();

        let out = TempDir::new().unwrap();
        let opts = BuildOptions {
            out_dir: out.path().to_path_buf(),
            static_dir: src.path().to_path_buf(),
            dry_run: false,
        };

        let report = build_site(&site(), &opts).unwrap();
        assert_eq!(report.assets_copied, 2);
        assert_eq!(
            fs::read(out.path().join("static/images/Drone.png")).unwrap(),
            b"png"
        );
    }

    #[test]
    fn dry_run_writes_nothing() {
        let out = TempDir::new().unwrap();
        let target = out.path().join("dist");
        let opts = BuildOptions {
            out_dir: target.clone(),
            static_dir: out.path().join("missing"),
            dry_run: true,
        };

        let report = build_site(&site(), &opts).unwrap();
        assert_eq!(report.pages.len(), 3);
        assert!(!target.exists());
    }
}

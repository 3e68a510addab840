use crate::catalogue::Catalogue;
use crate::config::FolioConfig;
use crate::error::Result;
use crate::page::Page;
use crate::render::{self, document, DocumentMeta, TagManager};

/// Configuration, content and analytics bundled for rendering.
#[derive(Debug, Clone)]
pub struct Site {
    config: FolioConfig,
    catalogue: Catalogue,
    tags: TagManager,
}

impl Site {
    pub fn new(config: FolioConfig, catalogue: Catalogue) -> Result<Self> {
        config.validate()?;
        let tags = TagManager::new(config.analytics.container_id.clone())?;
        Ok(Self {
            config,
            catalogue,
            tags,
        })
    }

    /// Build a site from config, loading the content file it names (if any).
    pub fn from_config(config: FolioConfig) -> Result<Self> {
        let catalogue = match config.content.path.as_deref() {
            Some(path) => Catalogue::load(path)?,
            None => Catalogue::builtin(),
        };
        Self::new(config, catalogue)
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Render `page` as a complete HTML document.
    pub fn render(&self, page: Page) -> String {
        let meta = DocumentMeta {
            site_title: &self.config.site.title,
            language: &self.config.site.language,
        };
        let html = document(
            meta,
            page.title(),
            &self.tags,
            render::page_content(&self.catalogue, page),
        )
        .into_string();

        tracing::debug!(
            page = %page,
            entries = self.catalogue.len_of(page),
            bytes = html.len(),
            "rendered page"
        );
        html
    }

    pub fn render_all(&self) -> Vec<(Page, String)> {
        Page::ALL
            .into_iter()
            .map(|page| (page, self.render(page)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::Publication;

    #[test]
    fn renders_builtin_publications_page() {
        let site = Site::new(FolioConfig::default(), Catalogue::builtin()).unwrap();
        let html = site.render(Page::Publications);

        assert!(html.contains("<h1>Publications</h1>"));
        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains("https://doi.org/10.1145/3706599.3719287"));
        assert!(html.contains("GTM-NF82FN4S"));
    }

    #[test]
    fn render_all_covers_every_page() {
        let site = Site::new(FolioConfig::default(), Catalogue::builtin()).unwrap();
        let pages: Vec<_> = site.render_all().into_iter().map(|(p, _)| p).collect();
        assert_eq!(pages, Page::ALL);
    }

    #[test]
    fn rejects_bad_container_id() {
        let mut config = FolioConfig::default();
        config.analytics.container_id = "nope".to_string();
        let err = Site::new(config, Catalogue::builtin()).unwrap_err();
        assert!(matches!(err, FolioError::Config { .. }));
    }

    #[test]
    fn empty_catalogue_still_renders_shell() {
        let catalogue = Catalogue::new(Vec::<Publication>::new(), Vec::new()).unwrap();
        let site = Site::new(FolioConfig::default(), catalogue).unwrap();
        let html = site.render(Page::Projects);
        assert!(html.contains("<h1>Projects</h1>"));
        assert!(html.contains(r#"<div class="projects"></div>"#));
    }
}

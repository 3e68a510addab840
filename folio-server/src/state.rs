//! Application state shared across handlers

use std::collections::HashMap;
use std::sync::Arc;

use folio_core::{Page, Site};

/// Pages rendered once at start-up, shared read-only.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pages: HashMap<Page, String>,
    site_title: String,
}

impl AppState {
    pub fn new(site: &Site) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pages: site.render_all().into_iter().collect(),
                site_title: site.config().site.title.clone(),
            }),
        }
    }

    pub fn page(&self, page: Page) -> Option<&str> {
        self.inner.pages.get(&page).map(String::as_str)
    }

    pub fn site_title(&self) -> &str {
        &self.inner.site_title
    }
}

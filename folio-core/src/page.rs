use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// The catalogue views the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Publications,
    Projects,
}

impl Page {
    /// Every page, in navigation order. The first one doubles as the index.
    pub const ALL: [Page; 2] = [Page::Publications, Page::Projects];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Publications => "publications",
            Page::Projects => "projects",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Publications => "Publications",
            Page::Projects => "Projects",
        }
    }

    pub fn index() -> Page {
        Page::ALL[0]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().trim_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| FolioError::invalid_page(s))
    }
}

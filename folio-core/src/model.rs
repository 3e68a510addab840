use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// One entry on the publications page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Citation-style author list, rendered as-is.
    pub authors: String,
    pub conference: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Publication {
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        conference: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            conference: conference.into(),
            year,
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// The link target, if one is set and non-blank.
    pub fn link(&self) -> Option<&str> {
        non_blank(self.link.as_deref())
    }

    pub fn validate(&self, context: &str) -> Result<()> {
        require("title", &self.title, context)?;
        require("authors", &self.authors, context)?;
        require("conference", &self.conference, context)?;
        Ok(())
    }
}

/// One card on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(
        default,
        rename = "imgSrc",
        alias = "img_src",
        skip_serializing_if = "Option::is_none"
    )]
    pub img_src: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: None,
            img_src: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_image(mut self, img_src: impl Into<String>) -> Self {
        self.img_src = Some(img_src.into());
        self
    }

    pub fn href(&self) -> Option<&str> {
        non_blank(self.href.as_deref())
    }

    pub fn img_src(&self) -> Option<&str> {
        non_blank(self.img_src.as_deref())
    }

    pub fn validate(&self, context: &str) -> Result<()> {
        require("title", &self.title, context)?;
        require("description", &self.description, context)?;
        Ok(())
    }
}

// A present-but-blank optional field renders the same as an absent one.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn require(field: &str, value: &str, context: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::missing_field(field, context));
    }
    Ok(())
}

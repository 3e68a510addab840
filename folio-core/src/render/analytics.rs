//! Google Tag Manager snippets.
//!
//! Injected into every document by the page shell. The record renderers never
//! see this; the container id is fixed per site in configuration.

use maud::{html, Markup, PreEscaped};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FolioError, Result};

pub const DEFAULT_CONTAINER_ID: &str = "GTM-NF82FN4S";

static CONTAINER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GTM-[A-Z0-9]+$").expect("valid container id regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagManager {
    container_id: String,
}

impl TagManager {
    /// The id ends up inside an inline script, so only the documented
    /// `GTM-XXXX` shape is accepted.
    pub fn new(container_id: impl Into<String>) -> Result<Self> {
        let container_id = container_id.into();
        if !CONTAINER_ID.is_match(&container_id) {
            return Err(FolioError::config(format!(
                "invalid Tag Manager container id '{container_id}' (expected GTM-XXXXXXX)"
            )));
        }
        Ok(Self { container_id })
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Bootstrap script for `<head>`.
    pub fn head(&self) -> Markup {
        let script = format!(
            "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\
             new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\
             j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\
             'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
             }})(window,document,'script','dataLayer','{}');",
            self.container_id
        );
        html! {
            script id="gtm-script" { (PreEscaped(script)) }
        }
    }

    /// `<noscript>` fallback for the top of `<body>`.
    pub fn body(&self) -> Markup {
        let src = format!(
            "https://www.googletagmanager.com/ns.html?id={}",
            self.container_id
        );
        html! {
            noscript {
                iframe title="Google Tag Manager" src=(src) height="0" width="0"
                    style="display:none;visibility:hidden" {}
            }
        }
    }
}

impl Default for TagManager {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

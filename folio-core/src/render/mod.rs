//! HTML rendering.
//!
//! Everything here is a pure function from records to `maud::Markup`:
//! - [`fragment`]: one record → one list entry or card
//! - [`layout`]: the shared heading/content shell
//! - [`analytics`]: Tag Manager snippets
//! - [`document`]: the full `<html>` wrapper

pub mod analytics;
pub mod document;
pub mod fragment;
pub mod layout;

use maud::{html, Markup};

use crate::catalogue::Catalogue;
use crate::page::Page;

pub use analytics::TagManager;
pub use document::{document, DocumentMeta};
pub use fragment::{project_card, publication_entry};
pub use layout::list_layout;

/// Render the body of `page`: the list shell around one fragment per record.
pub fn page_content(catalogue: &Catalogue, page: Page) -> Markup {
    let children = match page {
        Page::Publications => html! {
            ul.publications {
                @for (index, publication) in catalogue.publications().iter().enumerate() {
                    (publication_entry(index, publication))
                }
            }
        },
        Page::Projects => html! {
            div.projects {
                @for (index, project) in catalogue.projects().iter().enumerate() {
                    (project_card(index, project))
                }
            }
        },
    };
    list_layout(page.title(), children)
}

use maud::{html, Markup, DOCTYPE};

use super::analytics::TagManager;

/// Site-wide values every document needs.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta<'a> {
    pub site_title: &'a str,
    pub language: &'a str,
}

/// Wrap rendered page content in a complete HTML document.
pub fn document(
    info: DocumentMeta<'_>,
    page_title: &str,
    tags: &TagManager,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(info.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " | " (info.site_title) }
                (tags.head())
            }
            body {
                (tags.body())
                main { (content) }
            }
        }
    }
}

//! Per-record formatting.
//!
//! Each function turns one record into one list entry or card. The index is
//! only used as a stable `data-key`; it carries no meaning.

use maud::{html, Markup};

use crate::model::{Project, Publication};

/// `rel` value for every outbound link.
pub const SAFE_REL: &str = "noopener noreferrer";

/// `<strong>authors</strong> (year). title. <em>conference</em>.`
pub fn publication_entry(index: usize, publication: &Publication) -> Markup {
    html! {
        li data-key=(index) {
            strong { (publication.authors) }
            " (" (publication.year) "). "
            @if let Some(link) = publication.link() {
                a href=(link) target="_blank" rel=(SAFE_REL) { (publication.title) }
            } @else {
                (publication.title)
            }
            ". "
            em { (publication.conference) }
            "."
        }
    }
}

pub fn project_card(index: usize, project: &Project) -> Markup {
    let href = project.href();

    html! {
        div.card data-key=(index) {
            @if let Some(src) = project.img_src() {
                @if let Some(href) = href {
                    a href=(href) target="_blank" rel=(SAFE_REL) aria-label={"Link to " (project.title)} {
                        (card_image(&project.title, src))
                    }
                } @else {
                    (card_image(&project.title, src))
                }
            }
            div.card-body {
                h2 {
                    @if let Some(href) = href {
                        a href=(href) target="_blank" rel=(SAFE_REL) aria-label={"Link to " (project.title)} {
                            (project.title)
                        }
                    } @else {
                        (project.title)
                    }
                }
                p { (project.description) }
                @if let Some(href) = href {
                    a.learn-more href=(href) target="_blank" rel=(SAFE_REL) aria-label={"Link to " (project.title)} {
                        "Learn more →"
                    }
                }
            }
        }
    }
}

fn card_image(title: &str, src: &str) -> Markup {
    html! {
        img alt=(title) src=(src) width="544" height="306";
    }
}

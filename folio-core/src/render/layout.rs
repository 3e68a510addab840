use maud::{html, Markup};

/// Shared page shell: a heading with `title`, a divider, then `children`.
///
/// Contributes no content of its own; `children` is inserted verbatim.
pub fn list_layout(title: &str, children: Markup) -> Markup {
    html! {
        div.page {
            header.page-header {
                h1 { (title) }
            }
            hr;
            section.page-content {
                (children)
            }
        }
    }
}

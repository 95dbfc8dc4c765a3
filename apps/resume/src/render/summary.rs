use maud::html;

use super::markup::inline;
use crate::page::Container;

/// The summary may carry inline formatting (`<strong>`, `<em>`, ...).
pub fn render_summary(container: &mut Container, summary: Option<&str>) {
    container.clear();
    if let Some(summary) = summary {
        container.push_html(html! { (inline(summary)) });
    }
}

use maud::html;

use crate::models::resume::Education;
use crate::page::Container;

pub fn render_education(container: &mut Container, education: &[Education]) {
    container.clear();
    for entry in education {
        container.push_html(html! {
            div class="card" {
                h4 class="text-lg" { (entry.degree) }
                p class="font-semibold" { (entry.institution) }
                p class="date-location" {
                    @if let Some(location) = &entry.location { (location) " | " }
                    (entry.year)
                }
            }
        });
    }
}

use maud::html;

use super::markup::inline;
use crate::models::resume::Job;
use crate::page::Container;

/// One card per job. Responsibilities may carry inline formatting.
pub fn render_experience(container: &mut Container, experience: &[Job]) {
    container.clear();
    for job in experience {
        container.push_html(html! {
            div class="card" {
                h4 { (job.title) }
                p class="font-semibold text-lg text-blue-700" { (job.company) }
                p class="date-location" {
                    @if let Some(location) = &job.location { (location) " | " }
                    (job.dates)
                }
                ul {
                    @for responsibility in &job.responsibilities {
                        li { (inline(responsibility)) }
                    }
                }
            }
        });
    }
}

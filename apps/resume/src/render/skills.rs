use maud::html;

use crate::models::resume::SkillGroup;
use crate::page::Container;

const FALLBACK_ICON: &str = "fas fa-star";

/// One card per skill group, each item as a chip.
pub fn render_skills(container: &mut Container, skills: &[SkillGroup]) {
    container.clear();
    for group in skills {
        let icon = group.icon.as_deref().unwrap_or(FALLBACK_ICON);
        container.push_html(html! {
            div class="card" {
                h3 class="flex items-center" {
                    i class={ (icon) " mr-2 text-blue-600" } {}
                    (group.category)
                }
                p {
                    @for (i, item) in group.items.iter().enumerate() {
                        @if i > 0 { " " }
                        span class="tag" { (item) }
                    }
                }
            }
        });
    }
}

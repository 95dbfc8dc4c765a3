//! The host document the regions are rendered into.

use maud::{html, Markup, DOCTYPE};

use super::{Page, Region, Tone};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const FALLBACK_TITLE: &str = "Resume";

/// Serialises the page into a complete HTML document.
pub fn render_document(page: &Page) -> Markup {
    let title = if page.title().is_empty() {
        FALLBACK_TITLE
    } else {
        page.title()
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
            }
            body class="bg-gray-100 text-gray-800" {
                header class="bg-blue-900 text-white py-6" {
                    div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center" {
                        div id=(Region::HeaderInfo.id()) { (page.render_region(Region::HeaderInfo)) }
                        div id=(Region::HeaderLinks.id()) class="flex space-x-4 text-xl mt-4 md:mt-0" {
                            (page.render_region(Region::HeaderLinks))
                        }
                    }
                }
                main class="container mx-auto px-4 py-8" {
                    (region_div(page, Region::LoadingIndicator, "text-center py-10"))
                    (region_div(page, Region::Content, ""))
                }
                footer class="text-center py-4 text-sm text-gray-500" {
                    "© "
                    span id=(Region::FooterYear.id()) { (page.render_region(Region::FooterYear)) }
                    " "
                    span id=(Region::FooterName.id()) { (page.render_region(Region::FooterName)) }
                }
            }
        }
    }
}

/// A top-level region honouring its hidden flag and tone.
fn region_div(page: &Page, region: Region, class: &str) -> Markup {
    let mut classes = class.to_string();
    if page.is_hidden(region) {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str("hidden");
    }
    let style = match page.tone(region) {
        Tone::Error => Some("color: red"),
        Tone::Normal => None,
    };
    let inner = if region == Region::Content {
        sections(page)
    } else {
        page.render_region(region)
    };

    html! {
        div id=(region.id()) class=(classes) style=[style] { (inner) }
    }
}

fn sections(page: &Page) -> Markup {
    html! {
        (section("summary", "Summary", html! {
            p id=(Region::SummaryText.id()) { (page.render_region(Region::SummaryText)) }
        }))
        (section("skills", "Skills", html! {
            div id=(Region::SkillsGrid.id()) class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                (page.render_region(Region::SkillsGrid))
            }
        }))
        (section("experience", "Experience", html! {
            div id=(Region::ExperienceList.id()) class="space-y-4" {
                (page.render_region(Region::ExperienceList))
            }
        }))
        (section("contributions", "Contributions", html! {
            div id=(Region::ContributionsGrid.id()) class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                (page.render_region(Region::ContributionsGrid))
            }
        }))
        (section("education", "Education", html! {
            div id=(Region::EducationList.id()) class="space-y-4" {
                (page.render_region(Region::EducationList))
            }
        }))
        (section("certifications", "Certifications", html! {
            div id=(Region::CertificationsList.id()) class="flex flex-wrap gap-2" {
                (page.render_region(Region::CertificationsList))
            }
        }))
    }
}

fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section id=(id) class="mb-8" {
            h2 class="text-2xl font-bold mb-4" { (heading) }
            (body)
        }
    }
}

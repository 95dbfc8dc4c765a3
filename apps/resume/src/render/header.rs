use maud::html;

use crate::models::resume::PersonalInfo;
use crate::page::Container;

const LINK_CLASS: &str = "hover:text-blue-300";

/// Writes the name/title heading into `info` and one contact affordance per
/// present field into `links`. Absent fields leave no trace.
pub fn render_personal_info(info: &mut Container, links: &mut Container, person: &PersonalInfo) {
    info.clear();
    info.push_html(html! {
        h1 class="text-3xl font-bold" { (person.name) }
        p class="text-xl text-blue-200" { (person.title) }
    });

    links.clear();
    if let Some(email) = &person.email {
        links.push_html(html! {
            a href={ "mailto:" (email) } title="Email" class=(LINK_CLASS) { i class="fas fa-envelope" {} }
        });
    }
    if let Some(phone) = &person.phone {
        links.push_html(html! {
            a href={ "tel:" (phone) } title="Phone" class=(LINK_CLASS) { i class="fas fa-phone" {} }
        });
    }
    if let Some(location) = &person.location {
        links.push_html(html! {
            span class="text-blue-300 hidden md:inline-block" {
                i class="fas fa-map-marker-alt mr-1" {}
                " " (location)
            }
        });
    }
    for (url, title, icon) in [
        (&person.linkedin, "LinkedIn", "fab fa-linkedin"),
        (&person.github, "GitHub", "fab fa-github"),
        (&person.medium, "Medium Blog", "fab fa-medium"),
    ] {
        if let Some(url) = url {
            links.push_html(html! {
                a href=(url) target="_blank" title=(title) class=(LINK_CLASS) { i class=(icon) {} }
            });
        }
    }
}

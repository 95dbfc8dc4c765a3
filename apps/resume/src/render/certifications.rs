use maud::html;

use crate::models::resume::Certification;
use crate::page::Container;

/// Chip text: `"name (year)"`, or the bare name when there is no year.
pub fn certification_label(cert: &Certification) -> String {
    match &cert.year {
        Some(year) => format!("{} ({year})", cert.name),
        None => cert.name.clone(),
    }
}

pub fn render_certifications(container: &mut Container, certifications: &[Certification]) {
    container.clear();
    for cert in certifications {
        let class = match &cert.tag_class {
            Some(extra) => format!("tag {extra}"),
            None => "tag".to_string(),
        };
        container.push_html(html! {
            span class=(class) { (certification_label(cert)) }
        });
    }
}

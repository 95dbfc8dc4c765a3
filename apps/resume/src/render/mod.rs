//! Section renderers.
//!
//! Each renderer is a function of the container(s) it owns plus one slice of
//! the résumé document. Every renderer clears its container before writing, so
//! re-rendering the same data is a no-op on the final content.

pub mod certifications;
pub mod contributions;
pub mod education;
pub mod experience;
pub mod header;
pub mod markup;
pub mod skills;
pub mod summary;

use std::str::FromStr;
use std::time::Duration;

pub use certifications::render_certifications;
pub use contributions::render_contributions;
pub use education::render_education;
pub use experience::render_experience;
pub use header::render_personal_info;
pub use skills::render_skills;
pub use summary::render_summary;

/// How the Key Projects card lays out its items. Applies to the whole page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectsLayout {
    /// Full-width card with a two-column grid of projects.
    #[default]
    Grid,
    /// Single-width card with projects stacked.
    List,
}

impl FromStr for ProjectsLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ProjectsLayout::Grid),
            "list" => Ok(ProjectsLayout::List),
            other => Err(format!("unknown projects layout '{other}' (expected grid or list)")),
        }
    }
}

/// Settings that apply to one page render.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub projects_layout: ProjectsLayout,
    pub footer_year: i32,
    /// How long the page waits for the blog feed before showing the fallback.
    pub feed_timeout: Duration,
}

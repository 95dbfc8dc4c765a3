//! Contributions: Key Projects, Technical Blog and Public Speaking cards.

use maud::{html, Markup};

use super::markup::display_url;
use super::ProjectsLayout;
use crate::blog::LOADING_POSTS_MESSAGE;
use crate::models::resume::{Blog, Contributions, Project, Talk};
use crate::page::{Container, Node, Region};

const LINK_CLASS: &str = "text-blue-600 hover:underline";

/// Renders up to three cards into `grid`. Each card appears only when it has
/// data.
///
/// `profile_url` is the owner's code-hosting profile, linked from the
/// projects card when present. Returns the blog URL when a blog card was
/// drawn; its posts area is the `Region::BlogPosts` slot and is left to the
/// blog enrichment step.
pub fn render_contributions(
    grid: &mut Container,
    contributions: &Contributions,
    profile_url: Option<&str>,
    layout: ProjectsLayout,
) -> Option<String> {
    grid.clear();

    if !contributions.key_projects.is_empty() {
        grid.push_html(projects_card(&contributions.key_projects, profile_url, layout));
    }

    let blog_url = contributions.blog.as_ref().map(|blog| {
        grid.push(blog_card(blog));
        blog.url.clone()
    });

    if !contributions.speaking.is_empty() {
        grid.push_html(speaking_card(&contributions.speaking));
    }

    blog_url
}

fn projects_card(projects: &[Project], profile_url: Option<&str>, layout: ProjectsLayout) -> Markup {
    let (card_class, items_class) = match layout {
        ProjectsLayout::Grid => ("card md:col-span-2", "grid grid-cols-1 md:grid-cols-2 gap-4 mt-3"),
        ProjectsLayout::List => ("card", "space-y-3 mt-3"),
    };

    html! {
        div class=(card_class) {
            h3 class="flex items-center" {
                i class="fab fa-github mr-2 text-gray-800" {}
                "Key Projects"
            }
            @if let Some(url) = profile_url {
                p class="mb-2" {
                    "Explore projects at: "
                    a href=(url) target="_blank" class={ (LINK_CLASS) " font-semibold" } {
                        (display_url(url))
                    }
                }
            }
            div class=(items_class) {
                @for project in projects {
                    div class="project-item" {
                        h4 class="font-semibold text-blue-700" { (project.name) }
                        p class="text-sm" { (project.description) }
                        @for tag in &project.tags {
                            span class="tag !bg-green-100 !text-green-800 ml-2" { (tag) }
                        }
                        @if let Some(link) = &project.link {
                            a href=(link) target="_blank" class={ (LINK_CLASS) " text-sm" } { "[View Project]" }
                        }
                    }
                }
            }
        }
    }
}

fn blog_card(blog: &Blog) -> Node {
    let header = html! {
        h3 class="flex items-center" {
            i class="fab fa-medium mr-2 text-gray-800" {}
            "Technical Blog"
        }
        p class="mb-2" {
            "Read articles at: "
            a href=(blog.url) target="_blank" class={ (LINK_CLASS) " font-semibold" } {
                (display_url(&blog.url))
            }
        }
        @if let Some(description) = &blog.description {
            p { (description) }
        }
    };

    Node::Block {
        class: "card".to_string(),
        children: vec![Node::Html(header), Node::Slot(Region::BlogPosts)],
    }
}

fn speaking_card(talks: &[Talk]) -> Markup {
    html! {
        div class="card" {
            h3 class="flex items-center" {
                i class="fas fa-microphone-alt mr-2 text-blue-600" {}
                "Public Speaking"
            }
            ul class="list-disc pl-5 mt-2" {
                @for talk in talks {
                    li { strong { (talk.event) ":" } " " (talk.topic) }
                }
            }
        }
    }
}

/// Placeholder shown in the blog posts area until the feed answers.
pub fn blog_posts_placeholder() -> Container {
    let mut container = Container::default();
    container.push_html(html! {
        p class="text-sm text-gray-500" { (LOADING_POSTS_MESSAGE) }
    });
    container
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, tags: &[&str], link: Option<&str>) -> Project {
        Project {
            name: name.to_string(),
            description: format!("{name} description"),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            link: link.map(str::to_string),
        }
    }

    fn full() -> Contributions {
        Contributions {
            key_projects: vec![
                project("atlas", &["rust", "grpc"], Some("https://github.com/ada/atlas")),
                project("beacon", &[], None),
            ],
            blog: Some(Blog {
                url: "https://medium.com/@ada".to_string(),
                description: Some("Notes on systems".to_string()),
            }),
            speaking: vec![Talk {
                event: "RustConf".to_string(),
                topic: "Lifetimes".to_string(),
            }],
        }
    }

    #[test]
    fn test_all_three_cards_in_order() {
        let mut grid = Container::default();
        let blog_url = render_contributions(
            &mut grid,
            &full(),
            Some("https://github.com/ada"),
            ProjectsLayout::Grid,
        );

        assert_eq!(blog_url.as_deref(), Some("https://medium.com/@ada"));
        assert_eq!(grid.len(), 3);
        assert!(matches!(grid.children()[1], Node::Block { .. }));

        let html = grid.to_html();
        let projects = html.find("Key Projects").unwrap();
        let blog = html.find("Technical Blog").unwrap();
        let speaking = html.find("Public Speaking").unwrap();
        assert!(projects < blog && blog < speaking);
        assert!(html.contains(r#"<div id="medium-posts" class="mt-3"></div>"#));
        assert!(html.contains(">medium.com/@ada</a>"));
        assert!(html.contains("<li><strong>RustConf:</strong> Lifetimes</li>"));
    }

    #[test]
    fn test_projects_card_uses_profile_url_and_layout() {
        let mut grid = Container::default();
        render_contributions(&mut grid, &full(), Some("https://github.com/ada"), ProjectsLayout::Grid);
        let html = grid.to_html();
        assert!(html.contains(r#"<div class="card md:col-span-2">"#));
        assert!(html.contains(r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-3">"#));
        assert!(html.contains(r#"href="https://github.com/ada""#));
        assert!(html.contains(">github.com/ada</a>"));
        assert_eq!(html.matches(r#"class="project-item""#).count(), 2);
        assert_eq!(html.matches("[View Project]").count(), 1);
        assert!(html.contains(r#"<span class="tag !bg-green-100 !text-green-800 ml-2">rust</span>"#));

        let mut grid = Container::default();
        render_contributions(&mut grid, &full(), Some("https://github.com/ada"), ProjectsLayout::List);
        let html = grid.to_html();
        assert!(!html.contains("md:col-span-2"));
        assert!(html.contains(r#"<div class="space-y-3 mt-3">"#));
    }

    #[test]
    fn test_projects_card_without_profile_omits_link() {
        let mut grid = Container::default();
        render_contributions(&mut grid, &full(), None, ProjectsLayout::Grid);
        let html = grid.to_html();
        assert!(html.contains("Key Projects"));
        assert!(!html.contains("Explore projects at"));
    }

    #[test]
    fn test_absent_sections_emit_no_cards() {
        let mut grid = Container::with_text("stale");
        let blog_url = render_contributions(
            &mut grid,
            &Contributions::default(),
            Some("https://github.com/ada"),
            ProjectsLayout::Grid,
        );
        assert!(blog_url.is_none());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_only_speaking() {
        let contributions = Contributions {
            speaking: full().speaking,
            ..Contributions::default()
        };
        let mut grid = Container::default();
        assert!(render_contributions(&mut grid, &contributions, None, ProjectsLayout::Grid).is_none());
        assert_eq!(grid.len(), 1);
        assert!(grid.to_html().starts_with(r#"<div class="card"><h3"#));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut grid = Container::default();
        render_contributions(&mut grid, &full(), None, ProjectsLayout::Grid);
        let once = grid.to_html();
        render_contributions(&mut grid, &full(), None, ProjectsLayout::Grid);
        assert_eq!(grid.to_html(), once);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_placeholder_text() {
        assert!(blog_posts_placeholder().to_html().contains(LOADING_POSTS_MESSAGE));
    }
}

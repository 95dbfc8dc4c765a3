//! In-memory page model.
//!
//! A `Page` is a fixed set of named containers (`Region`s) that the section
//! renderers fill. Renderers never see the page itself; they are handed the
//! `Container` they own, so every region has exactly one writer.
//!
//! Content is kept as maud `Markup` fragments. A `Node::Slot` embeds another
//! region inside a fragment list, which is how the blog card carries its
//! asynchronously filled posts area.

pub mod shell;

use std::collections::BTreeMap;

use maud::{html, Markup};

pub const LOADING_MESSAGE: &str = "Loading...";

/// Named containers of the page. `id()` is the element id they render under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    LoadingIndicator,
    Content,
    HeaderInfo,
    HeaderLinks,
    SummaryText,
    SkillsGrid,
    ExperienceList,
    ContributionsGrid,
    BlogPosts,
    EducationList,
    CertificationsList,
    FooterYear,
    FooterName,
}

impl Region {
    /// Regions the host page provides before loading starts.
    pub const FIXED: [Region; 12] = [
        Region::LoadingIndicator,
        Region::Content,
        Region::HeaderInfo,
        Region::HeaderLinks,
        Region::SummaryText,
        Region::SkillsGrid,
        Region::ExperienceList,
        Region::ContributionsGrid,
        Region::EducationList,
        Region::CertificationsList,
        Region::FooterYear,
        Region::FooterName,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Region::LoadingIndicator => "loading-indicator",
            Region::Content => "resume-content",
            Region::HeaderInfo => "header-info",
            Region::HeaderLinks => "header-links",
            Region::SummaryText => "summary-text",
            Region::SkillsGrid => "skills-grid",
            Region::ExperienceList => "experience-list",
            Region::ContributionsGrid => "contributions-grid",
            Region::BlogPosts => "medium-posts",
            Region::EducationList => "education-list",
            Region::CertificationsList => "certifications-list",
            Region::FooterYear => "footer-year",
            Region::FooterName => "footer-name",
        }
    }

    /// Class of the wrapper element when the region is embedded as a slot.
    fn slot_class(self) -> Option<&'static str> {
        match self {
            Region::BlogPosts => Some("mt-3"),
            _ => None,
        }
    }
}

/// Visual state of a container beyond its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Error,
}

#[derive(Debug, Clone)]
pub enum Node {
    Html(Markup),
    /// A `div` with the given class wrapping further nodes.
    Block { class: String, children: Vec<Node> },
    /// Another region rendered in place.
    Slot(Region),
}

impl Node {
    pub fn text(text: &str) -> Self {
        Node::Html(html! { (text) })
    }
}

/// One region's content: its children plus the hidden flag and tone.
#[derive(Debug, Clone, Default)]
pub struct Container {
    children: Vec<Node>,
    hidden: bool,
    tone: Tone,
}

impl Container {
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            children: vec![Node::text(text)],
            ..Self::default()
        }
    }

    /// Drops all children. Renderers call this first so that rendering the
    /// same data twice leaves the same content as rendering it once.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn push_html(&mut self, markup: Markup) {
        self.children.push(Node::Html(markup));
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::text(text)];
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    #[cfg(test)]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[cfg(test)]
    /// Renders the children on their own. Slots come out as empty wrappers.
    pub fn to_html(&self) -> String {
        render_nodes(&self.children, None).into_string()
    }
}

/// The whole page: title plus every region's container.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    regions: BTreeMap<Region, Container>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// A page in its pre-load state: loading indicator visible, content hidden.
    pub fn new() -> Self {
        let mut regions: BTreeMap<Region, Container> = Region::FIXED
            .iter()
            .map(|region| (*region, Container::default()))
            .collect();
        regions.insert(
            Region::LoadingIndicator,
            Container::with_text(LOADING_MESSAGE),
        );
        regions.insert(Region::Content, Container::hidden());

        Self {
            title: String::new(),
            regions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[cfg(test)]
    pub fn region(&self, region: Region) -> Option<&Container> {
        self.regions.get(&region)
    }

    /// Handle to a region's container, creating an empty one for sub-regions
    /// that are not mounted yet.
    pub fn region_mut(&mut self, region: Region) -> &mut Container {
        self.regions.entry(region).or_default()
    }

    /// Two disjoint handles at once, for renderers that own a pair of regions.
    pub fn regions_mut(&mut self, a: Region, b: Region) -> (&mut Container, &mut Container) {
        assert_ne!(a, b, "regions_mut needs two distinct regions");
        self.regions.entry(a).or_default();
        self.regions.entry(b).or_default();

        let mut first = None;
        let mut second = None;
        for (region, container) in self.regions.iter_mut() {
            if *region == a {
                first = Some(container);
            } else if *region == b {
                second = Some(container);
            }
        }
        match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => unreachable!("both regions were inserted above"),
        }
    }

    /// Renders a region's children with slots resolved against this page.
    pub fn render_region(&self, region: Region) -> Markup {
        match self.regions.get(&region) {
            Some(container) => render_nodes(&container.children, Some(self)),
            None => html! {},
        }
    }

    pub fn is_hidden(&self, region: Region) -> bool {
        self.regions
            .get(&region)
            .map(Container::is_hidden)
            .unwrap_or(false)
    }

    pub fn tone(&self, region: Region) -> Tone {
        self.regions
            .get(&region)
            .map(Container::tone)
            .unwrap_or_default()
    }
}

fn render_nodes(nodes: &[Node], page: Option<&Page>) -> Markup {
    html! {
        @for node in nodes {
            (render_node(node, page))
        }
    }
}

fn render_node(node: &Node, page: Option<&Page>) -> Markup {
    match node {
        Node::Html(markup) => markup.clone(),
        Node::Block { class, children } => html! {
            div class=(class) { (render_nodes(children, page)) }
        },
        Node::Slot(region) => {
            let inner = page
                .map(|page| page.render_region(*region))
                .unwrap_or_else(|| html! {});
            html! {
                div id=(region.id()) class=[region.slot_class()] { (inner) }
            }
        }
    }
}

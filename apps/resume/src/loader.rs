//! Document loading and the render pipeline.
//!
//! One attempt per page: fetch the document, then render every section in a
//! fixed order. The blog feed fetch is spawned as soon as the contributions
//! card exists and is joined after the remaining sections are drawn.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tokio::time::{timeout_at, Instant};
use tracing::{error, info};

use crate::blog::{self, BlogPosts, FeedClient};
use crate::models::resume::ResumeDocument;
use crate::page::{Page, Region, Tone};
use crate::render::{self, contributions::blog_posts_placeholder, RenderOptions};

pub const LOAD_ERROR_MESSAGE: &str = "Error loading resume data. Please check the server logs.";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resume JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the résumé document comes from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self) -> Result<ResumeDocument, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Plain GET against a URL; any non-2xx status is a failure.
pub struct HttpDocumentSource {
    client: Client,
    url: String,
}

impl HttpDocumentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self) -> Result<ResumeDocument, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from disk on every fetch.
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch(&self) -> Result<ResumeDocument, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads the document into `page`.
///
/// On failure the content stays hidden and the loading indicator shows
/// `LOAD_ERROR_MESSAGE` in the error tone. The error is logged and returned.
pub async fn load_resume(
    page: &mut Page,
    source: &dyn DocumentSource,
    feed: Arc<dyn FeedClient>,
    options: &RenderOptions,
) -> Result<(), LoadError> {
    let document = match source.fetch().await {
        Ok(document) => document,
        Err(e) => {
            error!("Error loading resume data from {}: {e}", source.describe());
            let indicator = page.region_mut(Region::LoadingIndicator);
            indicator.set_text(LOAD_ERROR_MESSAGE);
            indicator.set_tone(Tone::Error);
            return Err(e);
        }
    };

    page.region_mut(Region::LoadingIndicator).set_hidden(true);
    page.region_mut(Region::Content).set_hidden(false);

    render_document(page, &document, feed, options).await;
    info!("Rendered resume for {}", document.personal_info.name);
    Ok(())
}

async fn render_document(
    page: &mut Page,
    document: &ResumeDocument,
    feed: Arc<dyn FeedClient>,
    options: &RenderOptions,
) {
    let person = &document.personal_info;

    let (info, links) = page.regions_mut(Region::HeaderInfo, Region::HeaderLinks);
    render::render_personal_info(info, links, person);
    render::render_summary(
        page.region_mut(Region::SummaryText),
        document.summary.as_deref(),
    );
    render::render_skills(page.region_mut(Region::SkillsGrid), &document.skills);
    render::render_experience(page.region_mut(Region::ExperienceList), &document.experience);

    let contributions = document.contributions.clone().unwrap_or_default();
    let blog_url = render::render_contributions(
        page.region_mut(Region::ContributionsGrid),
        &contributions,
        person.github.as_deref(),
        options.projects_layout,
    );

    let posts_task = blog_url.map(|url| {
        *page.region_mut(Region::BlogPosts) = blog_posts_placeholder();
        let deadline = Instant::now() + options.feed_timeout;
        let task = tokio::spawn(async move { blog::fetch_latest_posts(feed.as_ref(), &url).await });
        (task, deadline)
    });

    render::render_education(page.region_mut(Region::EducationList), &document.education);
    render::render_certifications(
        page.region_mut(Region::CertificationsList),
        &document.certifications,
    );

    page.region_mut(Region::FooterYear)
        .set_text(&options.footer_year.to_string());
    page.region_mut(Region::FooterName).set_text(&person.name);
    page.set_title(format!("{} - {}", person.name, person.title));

    // The feed gets `feed_timeout` from the moment it was started; past that
    // the posts area falls back and the page is finished without it.
    if let Some((mut task, deadline)) = posts_task {
        let posts = match timeout_at(deadline, &mut task).await {
            Ok(Ok(posts)) => posts,
            Ok(Err(e)) => {
                error!("Blog post task failed: {e}");
                BlogPosts::Unavailable
            }
            Err(_) => {
                task.abort();
                error!(
                    "Error fetching blog posts: no answer within {:?}",
                    options.feed_timeout
                );
                BlogPosts::Unavailable
            }
        };
        blog::render_blog_posts(page.region_mut(Region::BlogPosts), &posts);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::blog::{FeedError, Rss2JsonClient};
    use crate::models::feed::FeedItem;
    use crate::page::Node;
    use crate::render::ProjectsLayout;

    const OPTIONS: RenderOptions = RenderOptions {
        projects_layout: ProjectsLayout::Grid,
        footer_year: 2026,
        feed_timeout: Duration::from_secs(5),
    };

    struct StaticSource(serde_json::Value);

    #[async_trait]
    impl DocumentSource for StaticSource {
        async fn fetch(&self) -> Result<ResumeDocument, LoadError> {
            Ok(serde_json::from_value(self.0.clone())?)
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    /// Feed double: either canned items or a failure, counting calls.
    struct StubFeed {
        items: Option<Vec<FeedItem>>,
        calls: AtomicUsize,
    }

    impl StubFeed {
        fn new(items: Option<Vec<FeedItem>>) -> Arc<Self> {
            Arc::new(Self {
                items,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl FeedClient for StubFeed {
        async fn fetch_items(&self, _feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.items.clone().ok_or(FeedError::Api {
                status: "error".to_string(),
                message: "feed unavailable".to_string(),
            })
        }
    }

    fn document() -> serde_json::Value {
        json!({
            "personalInfo": {
                "name": "Ada Lovelace",
                "title": "Engineer",
                "github": "https://github.com/ada"
            },
            "summary": "Builds <em>engines</em>.",
            "skills": [{"category": "Languages", "items": ["Rust"]}],
            "experience": [{
                "title": "Staff Engineer",
                "company": "Analytical Engines",
                "dates": "2020 - Present",
                "responsibilities": ["Shipped things"]
            }],
            "contributions": {
                "Key Projects": [{"name": "atlas", "description": "maps"}],
                "blog": {"url": "https://medium.com/@ada", "description": "Notes"},
                "speaking": [{"event": "RustConf", "topic": "Lifetimes"}]
            },
            "education": [{"degree": "BSc", "institution": "UCL", "year": 2012}],
            "certifications": [{"name": "A", "year": 2020}, {"name": "B"}]
        })
    }

    fn items(n: u32) -> Vec<FeedItem> {
        (1..=n)
            .map(|i| FeedItem {
                title: format!("Post {i}"),
                link: format!("https://medium.com/@ada/{i}"),
                pub_date: format!("2024-02-{i:02} 12:00:00"),
            })
            .collect()
    }

    fn html(page: &Page, region: Region) -> String {
        page.render_region(region).into_string()
    }

    #[tokio::test]
    async fn test_success_renders_every_section() {
        let mut page = Page::new();
        let feed = StubFeed::new(Some(items(5)));
        load_resume(&mut page, &StaticSource(document()), feed.clone(), &OPTIONS)
            .await
            .unwrap();

        assert!(page.is_hidden(Region::LoadingIndicator));
        assert!(!page.is_hidden(Region::Content));
        assert_eq!(page.title(), "Ada Lovelace - Engineer");
        assert_eq!(html(&page, Region::FooterYear), "2026");
        assert_eq!(html(&page, Region::FooterName), "Ada Lovelace");
        assert_eq!(html(&page, Region::SummaryText), "Builds <em>engines</em>.");
        assert_eq!(page.region(Region::SkillsGrid).unwrap().len(), 1);
        assert_eq!(page.region(Region::ExperienceList).unwrap().len(), 1);
        assert_eq!(page.region(Region::EducationList).unwrap().len(), 1);
        assert_eq!(
            html(&page, Region::CertificationsList),
            r#"<span class="tag">A (2020)</span><span class="tag">B</span>"#
        );

        let contributions = html(&page, Region::ContributionsGrid);
        assert!(contributions.contains(">github.com/ada</a>"));
        assert_eq!(contributions.matches("<li class=\"mb-2").count(), 3);
        assert!(!contributions.contains("Post 4"));
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_feed_failure_only_degrades_posts() {
        let mut page = Page::new();
        load_resume(&mut page, &StaticSource(document()), StubFeed::new(None), &OPTIONS)
            .await
            .unwrap();

        let posts = html(&page, Region::BlogPosts);
        assert!(posts.contains(blog::POSTS_UNAVAILABLE_MESSAGE));

        let grid = page.region(Region::ContributionsGrid).unwrap();
        assert_eq!(grid.len(), 3);
        let contributions = html(&page, Region::ContributionsGrid);
        assert!(contributions.contains("Key Projects"));
        assert!(contributions.contains("<strong>RustConf:</strong> Lifetimes"));
        assert!(contributions.contains(blog::POSTS_UNAVAILABLE_MESSAGE));
    }

    #[tokio::test]
    async fn test_slow_feed_falls_back_without_holding_the_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/api.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok", "items": []}))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let feed = Arc::new(Rss2JsonClient::new(format!("{}/v1/api.json", server.uri())));
        let options = RenderOptions {
            feed_timeout: Duration::from_millis(200),
            ..OPTIONS
        };
        let mut page = Page::new();
        let loaded = tokio::time::timeout(
            Duration::from_secs(5),
            load_resume(&mut page, &StaticSource(document()), feed, &options),
        )
        .await;

        assert!(matches!(loaded, Ok(Ok(()))));
        assert!(html(&page, Region::BlogPosts).contains(blog::POSTS_UNAVAILABLE_MESSAGE));
        assert_eq!(page.title(), "Ada Lovelace - Engineer");
        let contributions = html(&page, Region::ContributionsGrid);
        assert!(contributions.contains("Key Projects"));
        assert!(contributions.contains("<strong>RustConf:</strong> Lifetimes"));
    }

    struct PanickingFeed;

    #[async_trait]
    impl FeedClient for PanickingFeed {
        async fn fetch_items(&self, _feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
            panic!("feed client blew up");
        }
    }

    #[tokio::test]
    async fn test_panicked_feed_task_falls_back() {
        let mut page = Page::new();
        load_resume(&mut page, &StaticSource(document()), Arc::new(PanickingFeed), &OPTIONS)
            .await
            .unwrap();

        assert!(html(&page, Region::BlogPosts).contains(blog::POSTS_UNAVAILABLE_MESSAGE));
        assert_eq!(page.region(Region::ContributionsGrid).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_no_blog_means_no_feed_request() {
        let mut doc = document();
        doc["contributions"]
            .as_object_mut()
            .unwrap()
            .remove("blog");
        let feed = StubFeed::new(Some(items(1)));
        let mut page = Page::new();
        load_resume(&mut page, &StaticSource(doc), feed.clone(), &OPTIONS)
            .await
            .unwrap();

        assert_eq!(feed.calls.load(Ordering::SeqCst), 0);
        assert!(page.region(Region::BlogPosts).is_none());
        let grid = page.region(Region::ContributionsGrid).unwrap();
        assert_eq!(grid.len(), 2);
        assert!(grid.children().iter().all(|n| matches!(n, Node::Html(_))));
    }

    #[tokio::test]
    async fn test_missing_contributions_renders_empty_grid() {
        let mut doc = document();
        doc.as_object_mut().unwrap().remove("contributions");
        let mut page = Page::new();
        load_resume(&mut page, &StaticSource(doc), StubFeed::new(None), &OPTIONS)
            .await
            .unwrap();
        assert!(page.region(Region::ContributionsGrid).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_404_leaves_content_hidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume-data.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpDocumentSource::new(format!("{}/resume-data.json", server.uri()));
        let mut page = Page::new();
        let err = load_resume(&mut page, &source, StubFeed::new(None), &OPTIONS)
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Status(404)));
        assert!(page.is_hidden(Region::Content));
        assert_eq!(html(&page, Region::LoadingIndicator), LOAD_ERROR_MESSAGE);
        assert_eq!(page.tone(Region::LoadingIndicator), Tone::Error);
        assert!(page.region(Region::SkillsGrid).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_source_parses_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume-data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(document()))
            .mount(&server)
            .await;

        let source = HttpDocumentSource::new(format!("{}/resume-data.json", server.uri()));
        let doc = source.fetch().await.unwrap();
        assert_eq!(doc.personal_info.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_load_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let source = HttpDocumentSource::new(server.uri());
        let mut page = Page::new();
        let err = load_resume(&mut page, &source, StubFeed::new(None), &OPTIONS)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(page.is_hidden(Region::Content));
        assert_eq!(html(&page, Region::LoadingIndicator), LOAD_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume-data.json");
        std::fs::write(&path, document().to_string()).unwrap();

        let doc = FileDocumentSource::new(&path).fetch().await.unwrap();
        assert_eq!(doc.certifications.len(), 2);

        let missing = FileDocumentSource::new(dir.path().join("missing.json"));
        assert!(matches!(missing.fetch().await, Err(LoadError::Io { .. })));
    }
}

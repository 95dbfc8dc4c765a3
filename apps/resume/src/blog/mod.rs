//! Blog post enrichment: the latest posts shown inside the blog card.
//!
//! Best effort only. Every failure ends in the fallback message in the posts
//! area and never reaches the rest of the page.

pub mod feed;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use maud::html;
use tracing::{error, info};

use crate::models::feed::FeedItem;
use crate::page::Container;

pub use feed::{FeedClient, FeedError, Rss2JsonClient, DEFAULT_PROXY_URL};

pub const LATEST_POSTS: usize = 3;
pub const LOADING_POSTS_MESSAGE: &str = "Loading latest blog posts...";
pub const NO_POSTS_MESSAGE: &str = "No posts found";
pub const POSTS_UNAVAILABLE_MESSAGE: &str =
    "Unable to load latest blog posts. Please visit the blog directly.";

const MEDIUM_FEED_BASE: &str = "https://medium.com/feed/@";

/// Final state of the posts area.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogPosts {
    Latest(Vec<FeedItem>),
    Empty,
    Unavailable,
}

/// Author handle from a blog URL: the last non-empty path segment, without a
/// leading `@`. `https://medium.com/@ada/` → `ada`.
pub fn author_handle(blog_url: &str) -> Option<&str> {
    let path = match blog_url.split_once("//") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path)?,
        None => blog_url,
    };
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| segment.trim_start_matches('@'))
        .filter(|handle| !handle.is_empty())
}

pub fn feed_url_for(handle: &str) -> String {
    format!("{MEDIUM_FEED_BASE}{handle}")
}

/// Fetches the feed behind `blog_url` and keeps the first `LATEST_POSTS`
/// entries in feed order.
pub async fn fetch_latest_posts(client: &dyn FeedClient, blog_url: &str) -> BlogPosts {
    match try_fetch_latest_posts(client, blog_url).await {
        Ok(items) if items.is_empty() => BlogPosts::Empty,
        Ok(items) => {
            info!("Loaded {} blog posts from {blog_url}", items.len());
            BlogPosts::Latest(items)
        }
        Err(e) => {
            error!("Error fetching blog posts: {e}");
            BlogPosts::Unavailable
        }
    }
}

async fn try_fetch_latest_posts(
    client: &dyn FeedClient,
    blog_url: &str,
) -> Result<Vec<FeedItem>, FeedError> {
    let handle =
        author_handle(blog_url).ok_or_else(|| FeedError::NoHandle(blog_url.to_string()))?;
    let mut items = client.fetch_items(&feed_url_for(handle)).await?;
    items.truncate(LATEST_POSTS);
    Ok(items)
}

pub fn render_blog_posts(container: &mut Container, posts: &BlogPosts) {
    container.clear();
    match posts {
        BlogPosts::Latest(items) => container.push_html(html! {
            ul class="list-none p-0" {
                @for item in items {
                    li class="mb-2 pb-2 border-b border-gray-100" {
                        a href=(item.link) target="_blank" class="text-blue-700 hover:underline font-medium" {
                            (item.title)
                        }
                        p class="text-xs text-gray-500" { (format_pub_date(&item.pub_date)) }
                    }
                }
            }
        }),
        BlogPosts::Empty => container.push_html(html! {
            p class="text-sm text-gray-500" { (NO_POSTS_MESSAGE) }
        }),
        BlogPosts::Unavailable => container.push_html(html! {
            p class="text-sm text-gray-500" { (POSTS_UNAVAILABLE_MESSAGE) }
        }),
    }
}

/// Formats a feed date as `Jan 5, 2024`. Unrecognised input is returned as is.
pub fn format_pub_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

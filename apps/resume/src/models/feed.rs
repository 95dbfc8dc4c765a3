use serde::Deserialize;

/// Payload returned by the feed-to-JSON proxy.
///
/// Only the fields the blog card shows are modelled; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<FeedItem>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

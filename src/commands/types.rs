use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// One repository from the `/users/{user}/repos` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub owner: RepoOwner,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub open_issues_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub message: String,
    pub date: Option<DateTime<Utc>>,
    pub url: String,
}

/// A repository joined with its enrichment sub-fetches. Either side may be
/// missing when its fetch failed; the renderer substitutes placeholders.
#[derive(Debug, Clone)]
pub struct RepoDetail {
    pub repo: RepoSummary,
    pub languages: Option<HashMap<String, u64>>,
    pub latest_commit: Option<CommitInfo>,
}

/// A normalized upload, identical whether it came from the YouTube API
/// or from a proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default, rename = "publishedAt")]
    pub published_at: String,
}

// Raw shapes of the GitHub `commits?per_page=1` response.

#[derive(Debug, Deserialize)]
pub struct CommitEntry {
    pub html_url: String,
    pub commit: CommitBody,
}

#[derive(Debug, Deserialize)]
pub struct CommitBody {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct CommitAuthor {
    pub date: Option<DateTime<Utc>>,
}

// Raw shapes of the two YouTube API calls.

#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
    pub thumbnails: Option<ThumbnailSet>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThumbnailSet {
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// A proxy endpoint either relays the provider response or returns an
/// already-normalized flat list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProxyPayload {
    Provider { items: Vec<PlaylistItem> },
    Flat(Vec<VideoSummary>),
}

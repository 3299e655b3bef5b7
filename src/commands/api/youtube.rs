use log::debug;

use super::{user_agent, ApiError, VideoSource};
use crate::commands::types::{
    ChannelListResponse, PlaylistItem, PlaylistResponse, ProxyPayload, ThumbnailSet, VideoSummary,
};

// Relative proxy paths tried in order when no client-side key is available.
const PROXY_PATHS: [&str; 2] = ["/api/youtube", "/.netlify/functions/youtube"];

pub struct YouTube {
    api_host: String,
    site_origin: String,
    http_client: reqwest::blocking::Client,
}

impl YouTube {
    pub fn new(site_origin: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap();

        YouTube {
            api_host: "https://www.googleapis.com".to_owned(),
            site_origin,
            http_client: client,
        }
    }
}

impl VideoSource for YouTube {
    fn latest_videos(
        &self,
        api_key: &str,
        channel_id: &str,
        want: u32,
    ) -> Result<Vec<VideoSummary>, ApiError> {
        let channel_url = format!(
            "{}/youtube/v3/channels?part=contentDetails&id={}&key={}",
            self.api_host, channel_id, api_key
        );

        let res = self.http_client.get(channel_url).send()?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                context: "YouTube channels",
                status: res.status().as_u16(),
            });
        }

        let channels: ChannelListResponse = res.json()?;
        let uploads = channels
            .items
            .into_iter()
            .next()
            .and_then(|item| item.content_details)
            .and_then(|details| details.related_playlists.uploads)
            .ok_or_else(|| {
                ApiError::Malformed("channel lookup returned no uploads playlist".to_owned())
            })?;

        let playlist_url = format!(
            "{}/youtube/v3/playlistItems?part=snippet&playlistId={}&maxResults={}&key={}",
            self.api_host, uploads, want, api_key
        );

        let res = self.http_client.get(playlist_url).send()?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                context: "YouTube playlistItems",
                status: res.status().as_u16(),
            });
        }

        let playlist: PlaylistResponse = res.json()?;
        Ok(normalize_items(playlist.items))
    }

    fn via_proxy(&self, channel_id: &str, want: u32) -> Result<Vec<VideoSummary>, ApiError> {
        for path in PROXY_PATHS {
            let url = format!(
                "{}{}?channelId={}&maxResults={}",
                self.site_origin, path, channel_id, want
            );

            let res = match self.http_client.get(&url).send() {
                Ok(res) => res,
                Err(err) => {
                    debug!("proxy {}: {}", path, err);
                    continue;
                }
            };
            if !res.status().is_success() {
                debug!("proxy {}: HTTP {}", path, res.status());
                continue;
            }

            let body = match res.text() {
                Ok(body) => body,
                Err(err) => {
                    debug!("proxy {}: {}", path, err);
                    continue;
                }
            };
            match parse_proxy_body(&body) {
                Ok(videos) => return Ok(videos),
                Err(err) => {
                    debug!("proxy {}: {}", path, err);
                    continue;
                }
            }
        }

        Err(ApiError::NoSource)
    }
}

/// Accepts either a provider-shaped `{ items: [...] }` relay or an
/// already-flat list of normalized videos.
pub fn parse_proxy_body(body: &str) -> Result<Vec<VideoSummary>, ApiError> {
    match serde_json::from_str::<ProxyPayload>(body) {
        Ok(ProxyPayload::Provider { items }) => Ok(normalize_items(items)),
        Ok(ProxyPayload::Flat(videos)) => Ok(videos),
        Err(err) => Err(ApiError::Malformed(err.to_string())),
    }
}

pub fn normalize_items(items: Vec<PlaylistItem>) -> Vec<VideoSummary> {
    items.into_iter().filter_map(normalize_item).collect()
}

fn normalize_item(item: PlaylistItem) -> Option<VideoSummary> {
    let snippet = item.snippet?;
    let id = snippet.resource_id.and_then(|resource| resource.video_id)?;
    let thumb = pick_thumbnail(snippet.thumbnails);

    Some(VideoSummary {
        id,
        title: snippet.title,
        description: snippet.description,
        thumb,
        published_at: snippet.published_at,
    })
}

fn pick_thumbnail(set: Option<ThumbnailSet>) -> String {
    match set {
        Some(set) => set
            .medium
            .map(|thumb| thumb.url)
            .or_else(|| set.default.map(|thumb| thumb.url))
            .unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_items, parse_proxy_body, pick_thumbnail};
    use crate::commands::types::{PlaylistResponse, Thumbnail, ThumbnailSet};

    #[test]
    fn test_provider_shape_normalizes() {
        let body = r#"{
            "items": [
                {
                    "snippet": {
                        "resourceId": { "videoId": "abc" },
                        "title": "T",
                        "thumbnails": { "medium": { "url": "u" } }
                    }
                }
            ]
        }"#;

        let videos = parse_proxy_body(body).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "abc");
        assert_eq!(videos[0].title, "T");
        assert_eq!(videos[0].thumb, "u");
        assert_eq!(videos[0].description, "");
        assert_eq!(videos[0].published_at, "");
    }

    #[test]
    fn test_flat_shape_passes_through() {
        let body = r#"[
            {
                "id": "xyz",
                "title": "Already normalized",
                "description": "d",
                "thumb": "t",
                "publishedAt": "2024-03-01T00:00:00Z"
            }
        ]"#;

        let videos = parse_proxy_body(body).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "xyz");
        assert_eq!(videos[0].thumb, "t");
        assert_eq!(videos[0].published_at, "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_unrecognized_shape_is_malformed() {
        assert!(parse_proxy_body(r#"{"error": "nope"}"#).is_err());
        assert!(parse_proxy_body("not json").is_err());
    }

    #[test]
    fn test_items_without_video_id_are_skipped() {
        let playlist: PlaylistResponse = serde_json::from_str(
            r#"{
                "items": [
                    { "snippet": { "title": "no id" } },
                    { "snippet": { "resourceId": { "videoId": "keep" }, "title": "kept" } },
                    {}
                ]
            }"#,
        )
        .unwrap();

        let videos = normalize_items(playlist.items);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "keep");
    }

    #[test]
    fn test_thumbnail_prefers_medium_then_default() {
        let medium = ThumbnailSet {
            medium: Some(Thumbnail { url: "m".to_owned() }),
            default: Some(Thumbnail { url: "d".to_owned() }),
        };
        assert_eq!(pick_thumbnail(Some(medium)), "m");

        let default_only = ThumbnailSet {
            medium: None,
            default: Some(Thumbnail { url: "d".to_owned() }),
        };
        assert_eq!(pick_thumbnail(Some(default_only)), "d");

        let empty = ThumbnailSet {
            medium: None,
            default: None,
        };
        assert_eq!(pick_thumbnail(Some(empty)), "");
        assert_eq!(pick_thumbnail(None), "");
    }
}

use log::warn;

use crate::commands::api::{ApiError, VideoSource};
use crate::commands::config::Config;
use crate::commands::secret;
use crate::commands::types::VideoSummary;
use crate::render;
use crate::terminal::Session;

pub struct Videos {
    api_service: Box<dyn VideoSource>,
    config: Config,
    channel_id: String,
    want: u32,
    session: Session,
}

impl Videos {
    pub fn new(
        api_service: Box<dyn VideoSource>,
        config: Config,
        channel_id: String,
        want: u32,
        session: Session,
    ) -> Self {
        Videos {
            api_service,
            config,
            channel_id,
            want,
            session,
        }
    }

    pub fn execute(&self) {
        let api_key = secret::resolve(&self.config);
        match load(
            self.api_service.as_ref(),
            api_key.as_deref(),
            &self.channel_id,
            self.want,
        ) {
            Ok(videos) => println!("{}", render::render_videos(&videos, self.session.theme)),
            Err(_) => println!("{}", render::youtube_fallback_card()),
        }
    }
}

/// Direct API first when a key is available, then the proxy chain.
/// The only failure that escapes is `NoSource`, after every source has
/// been exhausted.
pub fn load(
    source: &dyn VideoSource,
    api_key: Option<&str>,
    channel_id: &str,
    want: u32,
) -> Result<Vec<VideoSummary>, ApiError> {
    if let Some(key) = api_key {
        match source.latest_videos(key, channel_id, want) {
            Ok(videos) => return Ok(videos),
            Err(err) => warn!("YouTube client fetch failed: {}", err),
        }
    }
    source.via_proxy(channel_id, want)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::load;
    use crate::commands::api::{ApiError, VideoSource};
    use crate::commands::types::VideoSummary;

    struct StubVideos {
        direct_ok: bool,
        proxy_ok: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl StubVideos {
        fn new(direct_ok: bool, proxy_ok: bool) -> Self {
            StubVideos {
                direct_ok,
                proxy_ok,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_owned(),
            title: format!("video {}", id),
            description: String::new(),
            thumb: String::new(),
            published_at: String::new(),
        }
    }

    impl VideoSource for StubVideos {
        fn latest_videos(
            &self,
            _api_key: &str,
            _channel_id: &str,
            _want: u32,
        ) -> Result<Vec<VideoSummary>, ApiError> {
            self.calls.lock().unwrap().push("direct");
            if self.direct_ok {
                Ok(vec![video("direct")])
            } else {
                Err(ApiError::Status {
                    context: "YouTube channels",
                    status: 403,
                })
            }
        }

        fn via_proxy(&self, _channel_id: &str, _want: u32) -> Result<Vec<VideoSummary>, ApiError> {
            self.calls.lock().unwrap().push("proxy");
            if self.proxy_ok {
                Ok(vec![video("proxied")])
            } else {
                Err(ApiError::NoSource)
            }
        }
    }

    #[test]
    fn test_direct_path_wins_with_key() {
        let stub = StubVideos::new(true, true);
        let videos = load(&stub, Some("key"), "UC123", 3).unwrap();

        assert_eq!(videos[0].id, "direct");
        assert_eq!(stub.calls(), vec!["direct"]);
    }

    #[test]
    fn test_no_key_skips_direct_path() {
        let stub = StubVideos::new(true, true);
        let videos = load(&stub, None, "UC123", 3).unwrap();

        assert_eq!(videos[0].id, "proxied");
        assert_eq!(stub.calls(), vec!["proxy"]);
    }

    #[test]
    fn test_direct_failure_falls_through_to_proxy() {
        let stub = StubVideos::new(false, true);
        let videos = load(&stub, Some("key"), "UC123", 3).unwrap();

        assert_eq!(videos[0].id, "proxied");
        assert_eq!(stub.calls(), vec!["direct", "proxy"]);
    }

    #[test]
    fn test_everything_failing_is_no_source() {
        let stub = StubVideos::new(false, false);
        let result = load(&stub, None, "UC123", 3);

        assert!(matches!(result, Err(ApiError::NoSource)));
    }
}

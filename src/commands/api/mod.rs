mod github;
mod youtube;

use std::collections::HashMap;

use thiserror::Error;

use crate::commands::types::{CommitInfo, RepoSummary, VideoSummary};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{context} returned HTTP {status}")]
    Status { context: &'static str, status: u16 },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no video source available")]
    NoSource,
}

pub trait ProjectSource: Send + Sync {
    fn repositories(&self, user: &str, limit: u32) -> Result<Vec<RepoSummary>, ApiError>;
    fn languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>, ApiError>;
    fn latest_commit(&self, owner: &str, repo: &str) -> Result<Option<CommitInfo>, ApiError>;
}

pub trait VideoSource: Send + Sync {
    fn latest_videos(
        &self,
        api_key: &str,
        channel_id: &str,
        want: u32,
    ) -> Result<Vec<VideoSummary>, ApiError>;
    fn via_proxy(&self, channel_id: &str, want: u32) -> Result<Vec<VideoSummary>, ApiError>;
}

fn user_agent() -> String {
    let runtime_version = rustc_version_runtime::version();
    let os_info = os_info::get();
    format!(
        "neon-shell/{version} {runtime_version} {os_info}",
        version = env!("CARGO_PKG_VERSION"),
        runtime_version = runtime_version,
        os_info = os_info,
    )
}

pub use github::GitHub;
pub use youtube::YouTube;

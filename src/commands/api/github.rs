use std::collections::HashMap;

use log::debug;
use reqwest::header;

use super::{user_agent, ApiError, ProjectSource};
use crate::commands::types::{CommitEntry, CommitInfo, RepoSummary};

pub struct GitHub {
    api_host: String,
    http_client: reqwest::blocking::Client,
}

impl GitHub {
    pub fn new() -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent())
            .default_headers(headers)
            .build()
            .unwrap();

        GitHub {
            api_host: "https://api.github.com".to_owned(),
            http_client: client,
        }
    }
}

impl ProjectSource for GitHub {
    fn repositories(&self, user: &str, limit: u32) -> Result<Vec<RepoSummary>, ApiError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_host, user, limit
        );
        debug!("fetching repositories from {}", url);

        let res = self.http_client.get(url).send()?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                context: "GitHub repos",
                status: res.status().as_u16(),
            });
        }
        Ok(res.json()?)
    }

    fn languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>, ApiError> {
        let url = format!("{}/repos/{}/{}/languages", self.api_host, owner, repo);

        let res = self.http_client.get(url).send()?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                context: "GitHub languages",
                status: res.status().as_u16(),
            });
        }
        Ok(res.json()?)
    }

    fn latest_commit(&self, owner: &str, repo: &str) -> Result<Option<CommitInfo>, ApiError> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page=1",
            self.api_host, owner, repo
        );

        let res = self.http_client.get(url).send()?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                context: "GitHub commits",
                status: res.status().as_u16(),
            });
        }

        let entries: Vec<CommitEntry> = res.json()?;
        Ok(entries.into_iter().next().map(|entry| CommitInfo {
            // subject line only; full messages are too long for a card
            message: entry
                .commit
                .message
                .lines()
                .next()
                .unwrap_or_default()
                .to_owned(),
            date: entry.commit.author.and_then(|author| author.date),
            url: entry.html_url,
        }))
    }
}

//! Pure mapping from fetched data to section markup. No network, no
//! mutable state; every API-supplied string is escaped on the way in.

use chrono::{DateTime, Utc};

use crate::commands::types::{RepoDetail, VideoSummary};
use crate::commands::ApiError;
use crate::terminal::ThemeMode;

const CHANNEL_LINK: &str = "https://www.youtube.com/@safe11881";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn theme_class(base: &str, theme: ThemeMode) -> String {
    match theme {
        ThemeMode::Neon => base.to_owned(),
        ThemeMode::Alt => format!("{} alt-theme", base),
    }
}

pub fn render_repositories(list: &[RepoDetail], theme: ThemeMode) -> String {
    let mut html = format!("<div class=\"{}\">", theme_class("projects", theme));

    if list.is_empty() {
        html.push_str("<div class=\"muted small\">No public repos found.</div>");
        html.push_str("</div>");
        return html;
    }

    for detail in list {
        let repo = &detail.repo;
        let description = match &repo.description {
            Some(text) => escape_html(text),
            None => "No description".to_owned(),
        };

        html.push_str("<article class=\"project\">");
        html.push_str(&format!(
            "<h3><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h3>",
            escape_html(&repo.html_url),
            escape_html(&repo.name)
        ));
        html.push_str(&format!("<p class=\"muted\">{}</p>", description));
        html.push_str(&format!(
            "<div class=\"repo-meta\"><span class=\"tag\">{}</span><span class=\"tag\">★ {}</span><span class=\"tag\">Forks: {}</span><span class=\"tag\">Open issues: {}</span></div>",
            language_display(detail),
            repo.stargazers_count,
            repo.forks_count,
            repo.open_issues_count
        ));
        html.push_str(&format!(
            "<div class=\"muted small\">{}</div>",
            commit_line(detail)
        ));
        html.push_str("</article>");
    }

    html.push_str("</div>");
    html
}

/// Up to three languages, largest first.
fn language_display(detail: &RepoDetail) -> String {
    let languages = match &detail.languages {
        Some(languages) if !languages.is_empty() => languages,
        _ => return "—".to_owned(),
    };

    let mut pairs: Vec<(&String, &u64)> = languages.iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    pairs
        .iter()
        .take(3)
        .map(|(name, _)| escape_html(name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn commit_line(detail: &RepoDetail) -> String {
    match &detail.latest_commit {
        Some(commit) => {
            let when = commit
                .date
                .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "—".to_owned());
            format!(
                "Last commit: <a href=\"{}\">\"{}\"</a> ({})",
                escape_html(&commit.url),
                escape_html(&commit.message),
                when
            )
        }
        None => "No recent commit info".to_owned(),
    }
}

pub fn render_videos(list: &[VideoSummary], theme: ThemeMode) -> String {
    let mut html = format!("<div class=\"{}\">", theme_class("media", theme));

    if list.is_empty() {
        html.push_str("<div class=\"muted small\">No videos found.</div>");
        html.push_str("</div>");
        return html;
    }

    for video in list {
        html.push_str("<div class=\"media-card\">");
        html.push_str(&format!(
            "<a href=\"https://www.youtube.com/watch?v={}\" target=\"_blank\" rel=\"noopener\"><img class=\"media-thumb\" src=\"{}\" alt=\"{}\" /></a>",
            escape_html(&video.id),
            escape_html(&video.thumb),
            escape_html(&video.title)
        ));
        html.push_str(&format!(
            "<div class=\"media-info\"><strong>{}</strong><div class=\"muted small\">{}</div>",
            escape_html(&video.title),
            publish_date(video)
        ));
        if !video.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"muted small\">{}</p>",
                escape_html(&video.description)
            ));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    html
}

/// Publication date trimmed to the day; unparseable stamps are shown as-is.
fn publish_date(video: &VideoSummary) -> String {
    match video.published_at.parse::<DateTime<Utc>>() {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => escape_html(&video.published_at),
    }
}

pub fn github_failure_note(err: &ApiError) -> String {
    format!(
        "<div class=\"muted small\">Failed to load GitHub repos: {}</div>",
        escape_html(&err.to_string())
    )
}

pub fn youtube_fallback_card() -> String {
    format!(
        "<div class=\"media-card\"><div class=\"media-info\"><p class=\"muted small\">\
         YouTube videos will appear here when an API key is provided or a server-side \
         proxy is available.</p>\
         <a class=\"social-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Open channel</a>\
         </div></div>",
        CHANNEL_LINK
    )
}

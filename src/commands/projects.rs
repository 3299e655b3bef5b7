use std::sync::Arc;
use std::thread;

use log::trace;

use crate::commands::api::{ApiError, ProjectSource};
use crate::commands::types::RepoDetail;
use crate::render;
use crate::terminal::Session;

// Only the freshest few repositories get the extra per-repo fetches.
const DETAIL_COUNT: usize = 3;

pub struct Projects {
    api_service: Arc<dyn ProjectSource>,
    user: String,
    want: u32,
    session: Session,
}

impl Projects {
    pub fn new(api_service: Arc<dyn ProjectSource>, user: String, want: u32, session: Session) -> Self {
        Projects {
            api_service,
            user,
            want,
            session,
        }
    }

    pub fn execute(&self) {
        match load(self.api_service.clone(), &self.user, self.want) {
            Ok(details) => println!("{}", render::render_repositories(&details, self.session.theme)),
            Err(err) => println!("{}", render::github_failure_note(&err)),
        }
    }
}

/// Fetches up to `want` repositories, re-sorts them newest-first and joins
/// the top few with their language and latest-commit sub-fetches.
///
/// Only the listing fetch can fail the operation. The sub-fetches run on
/// their own threads and settle independently; a failed branch leaves its
/// field as `None` without touching its siblings.
pub fn load(
    source: Arc<dyn ProjectSource>,
    user: &str,
    want: u32,
) -> Result<Vec<RepoDetail>, ApiError> {
    let mut repos = source.repositories(user, want)?;
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(DETAIL_COUNT);

    let mut pending = Vec::with_capacity(repos.len());
    for repo in repos {
        let owner = repo.owner.login.clone();
        let name = repo.name.clone();

        let lang_source = source.clone();
        let (lang_owner, lang_name) = (owner.clone(), name.clone());
        let languages = thread::spawn(move || lang_source.languages(&lang_owner, &lang_name));

        let commit_source = source.clone();
        let commit = thread::spawn(move || commit_source.latest_commit(&owner, &name));

        pending.push((repo, languages, commit));
    }

    let mut details = Vec::with_capacity(pending.len());
    for (repo, languages, commit) in pending {
        let languages = languages.join().ok().and_then(|result| result.ok());
        let latest_commit = commit
            .join()
            .ok()
            .and_then(|result| result.ok())
            .flatten();
        trace!(
            "assembled {} (languages: {}, commit: {})",
            repo.name,
            languages.is_some(),
            latest_commit.is_some()
        );
        details.push(RepoDetail {
            repo,
            languages,
            latest_commit,
        });
    }
    Ok(details)
}

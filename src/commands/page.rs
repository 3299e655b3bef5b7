use std::fs;
use std::io;
use std::sync::Arc;
use std::thread;

use log::error;

use crate::commands::api::{ApiError, ProjectSource, VideoSource};
use crate::commands::config::Config;
use crate::commands::intro::intro_lines;
use crate::commands::{projects, secret, videos};
use crate::render;
use crate::terminal::{Session, Typer};

const REPO_FETCH_COUNT: u32 = 6;
const VIDEO_FETCH_COUNT: u32 = 3;

/// The whole page body in one run: both fetchers on background threads,
/// the intro typing out on the main thread meanwhile. Each section falls
/// back to its static message independently of the other.
pub struct Page {
    github: Arc<dyn ProjectSource>,
    youtube: Box<dyn VideoSource>,
    config: Config,
    out: Option<String>,
    session: Session,
}

impl Page {
    pub fn new(
        github: Arc<dyn ProjectSource>,
        youtube: Box<dyn VideoSource>,
        config: Config,
        out: Option<String>,
        session: Session,
    ) -> Self {
        Page {
            github,
            youtube,
            config,
            out,
            session,
        }
    }

    pub fn execute(self) {
        let theme = self.session.theme;

        let github = self.github;
        let user = self.config.github_user.clone();
        let repo_worker = thread::spawn(move || projects::load(github, &user, REPO_FETCH_COUNT));

        let youtube = self.youtube;
        let api_key = secret::resolve(&self.config);
        let channel = self.config.youtube_channel_id.clone();
        let video_worker = thread::spawn(move || {
            videos::load(
                youtube.as_ref(),
                api_key.as_deref(),
                &channel,
                VIDEO_FETCH_COUNT,
            )
        });

        let typer = Typer::new(intro_lines());
        if let Err(err) = typer.play(&mut io::stdout()) {
            error!("intro playback failed: {}", err);
        }

        let repos = repo_worker
            .join()
            .unwrap_or_else(|_| Err(ApiError::Malformed("repository worker panicked".to_owned())));
        let projects_html = match repos {
            Ok(details) => render::render_repositories(&details, theme),
            Err(err) => render::github_failure_note(&err),
        };

        let uploads = video_worker
            .join()
            .unwrap_or_else(|_| Err(ApiError::NoSource));
        let videos_html = match uploads {
            Ok(list) => render::render_videos(&list, theme),
            Err(_) => render::youtube_fallback_card(),
        };

        let body = format!(
            "<section id=\"projects\">\n<h2>Projects</h2>\n{}\n</section>\n\
             <section id=\"media\">\n<h2>Videos</h2>\n{}\n</section>\n",
            projects_html, videos_html
        );

        match &self.out {
            Some(path) => match fs::write(path, &body) {
                Ok(()) => println!("Page sections written to {}", path),
                Err(err) => error!("cannot write {}: {}", path, err),
            },
            None => println!("{}", body),
        }
    }
}

mod commands;
mod render;
mod terminal;

use std::sync::Arc;

use clap::{AppSettings, Arg, Command};
use commands::{Config, GitHub, Intro, Page, Projects, Shell, Videos, YouTube};
use fern::colors::ColoredLevelConfig;
use log::trace;
use terminal::Session;

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new();

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                colors.color(record.level()),
                message,
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn session_for(matches: &clap::ArgMatches) -> Session {
    let mut session = Session::new();
    if matches.is_present("alt-theme") {
        session.toggle_theme();
    }
    session
}

fn main() {
    let app = Command::new("neon-shell")
        .setting(AppSettings::DeriveDisplayOrder)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("intro").about("Play the typed intro animation"))
        .subcommand(Command::new("shell").about("Open the interactive about terminal"))
        .subcommand(Command::new("mini").about("Open the mini navigation terminal"))
        .subcommand(
            Command::new("projects")
                .about("Fetch GitHub repositories and render the projects section")
                .arg(
                    Arg::new("user")
                        .help("GitHub user to fetch, defaults to the configured one")
                        .takes_value(true)
                        .short('u')
                        .long("user"),
                )
                .arg(
                    Arg::new("count")
                        .help("How many repositories to fetch")
                        .takes_value(true)
                        .short('n')
                        .long("count")
                        .default_value("6"),
                )
                .arg(
                    Arg::new("alt-theme")
                        .help("Render with the alternate theme")
                        .takes_value(false)
                        .long("alt-theme"),
                ),
        )
        .subcommand(
            Command::new("videos")
                .about("Fetch recent uploads and render the videos section")
                .arg(
                    Arg::new("channel")
                        .help("YouTube channel id, defaults to the configured one")
                        .takes_value(true)
                        .short('c')
                        .long("channel"),
                )
                .arg(
                    Arg::new("count")
                        .help("How many videos to fetch")
                        .takes_value(true)
                        .short('n')
                        .long("count")
                        .default_value("3"),
                )
                .arg(
                    Arg::new("alt-theme")
                        .help("Render with the alternate theme")
                        .takes_value(false)
                        .long("alt-theme"),
                ),
        )
        .subcommand(
            Command::new("page")
                .about("Play the intro and render the whole page body")
                .arg(
                    Arg::new("out")
                        .help("Write the section markup to this file instead of stdout")
                        .takes_value(true)
                        .short('o')
                        .long("out"),
                )
                .arg(
                    Arg::new("alt-theme")
                        .help("Render with the alternate theme")
                        .takes_value(false)
                        .long("alt-theme"),
                ),
        )
        .arg(
            Arg::new("log-level")
                .help("can be one of [error|warn|info|debug|trace]")
                .short('l')
                .long("log-level")
                .default_value("error")
                .default_missing_value("trace")
                .global(true)
                .takes_value(true),
        );

    let m = app.get_matches();

    match m.value_of("log-level") {
        Some(log_level) => match log_level {
            "error" => setup_logger(log::LevelFilter::Error).unwrap(),
            "warn" => setup_logger(log::LevelFilter::Warn).unwrap(),
            "info" => setup_logger(log::LevelFilter::Info).unwrap(),
            "debug" => setup_logger(log::LevelFilter::Debug).unwrap(),
            "trace" => setup_logger(log::LevelFilter::Trace).unwrap(),
            _ => unreachable!("unknown log-level"),
        },
        None => setup_logger(log::LevelFilter::Error).unwrap(),
    }

    trace!("neon-shell running");

    match m.subcommand() {
        Some(("intro", _)) => {
            let intro = Intro::new();
            intro.execute();
        }
        Some(("shell", _)) => {
            let shell = Shell::about();
            shell.execute();
        }
        Some(("mini", _)) => {
            let shell = Shell::mini();
            shell.execute();
        }
        Some(("projects", pm)) => {
            let config = Config::new();
            let user = pm
                .value_of("user")
                .map(str::to_owned)
                .unwrap_or_else(|| config.github_user.clone());
            let want = pm.value_of("count").unwrap().parse().unwrap_or(6);
            let api_service = GitHub::new();
            let projects = Projects::new(Arc::new(api_service), user, want, session_for(pm));
            projects.execute();
        }
        Some(("videos", vm)) => {
            let config = Config::new();
            let channel = vm
                .value_of("channel")
                .map(str::to_owned)
                .unwrap_or_else(|| config.youtube_channel_id.clone());
            let want = vm.value_of("count").unwrap().parse().unwrap_or(3);
            let api_service = YouTube::new(config.site_origin.clone());
            let videos = Videos::new(Box::new(api_service), config, channel, want, session_for(vm));
            videos.execute();
        }
        Some(("page", gm)) => {
            let config = Config::new();
            let github = GitHub::new();
            let youtube = YouTube::new(config.site_origin.clone());
            let page = Page::new(
                Arc::new(github),
                Box::new(youtube),
                config,
                gm.value_of("out").map(Into::into),
                session_for(gm),
            );
            page.execute();
        }
        _ => unreachable!(),
    }
}

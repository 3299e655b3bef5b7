use log::warn;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::fs;

const DEFAULT_GITHUB_USER: &str = "safe11811";
const DEFAULT_CHANNEL_ID: &str = "UCdGAezwvTu0T2w83E2RopxA";
const DEFAULT_SITE_ORIGIN: &str = "https://safe11811.netlify.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_user: String,
    pub youtube_channel_id: String,
    // Do NOT put an API key here. Leave it null and inject one at runtime.
    pub youtube_api_key: Option<String>,
    pub site_origin: String,
}

impl Config {
    pub fn new() -> Self {
        let app_dirs = AppDirs::new(None, true).unwrap();
        let config_root = app_dirs.config_dir.join("neon-shell");

        fs::create_dir_all(&config_root).unwrap();

        let config_file = config_root.join("config.json");
        if config_file.exists() {
            match fs::read_to_string(&config_file) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(config) => config,
                    Err(err) => {
                        warn!(
                            "config at {} is unreadable ({}), using defaults",
                            config_file.display(),
                            err
                        );
                        Config::defaults()
                    }
                },
                Err(err) => {
                    warn!("cannot read {}: {}", config_file.display(), err);
                    Config::defaults()
                }
            }
        } else {
            let config = Config::defaults();
            match serde_json::to_string_pretty(&config) {
                Ok(raw) => {
                    if let Err(err) = fs::write(&config_file, raw) {
                        warn!("cannot write {}: {}", config_file.display(), err);
                    }
                }
                Err(err) => warn!("cannot serialize default config: {}", err),
            }
            config
        }
    }

    pub fn defaults() -> Self {
        Config {
            github_user: DEFAULT_GITHUB_USER.to_owned(),
            youtube_channel_id: DEFAULT_CHANNEL_ID.to_owned(),
            youtube_api_key: None,
            site_origin: DEFAULT_SITE_ORIGIN.to_owned(),
        }
    }
}

//! App Configuration
//!
//! Values are baked in at compile time; a CSR bundle has no config file to read.

use leptos::prelude::*;
use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_IMAGE_BASE: &str = "https://picsum.photos/200/300";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Endpoint returning a JSON array of items
    pub api_url: String,
    /// Thumbnail service; `?random={id}` is appended per card
    pub image_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Read `TODO_CARDS_API_URL`, `TODO_CARDS_IMAGE_BASE` and `TODO_CARDS_LOG`
    /// as they were when the bundle was built.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("TODO_CARDS_API_URL"),
            option_env!("TODO_CARDS_IMAGE_BASE"),
            option_env!("TODO_CARDS_LOG"),
        )
    }

    pub fn from_vars(api_url: Option<&str>, image_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        Self {
            api_url: non_empty(api_url).unwrap_or(defaults.api_url),
            image_base: non_empty(image_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.image_base),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

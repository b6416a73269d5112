use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub const DEFAULT_SUBREDDIT: &str = "rust";
pub const DEFAULT_WINDOW: &str = "week";
pub const DEFAULT_WEEKLY_LIMIT: u32 = 7;
const DEFAULT_USER_AGENT: &str = "news-cards/0.1";

/// On-disk shape: everything optional so a partial config.toml works.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub subreddit: Option<String>,
    pub window: Option<String>,
    pub limit: Option<u32>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub subreddit: String,
    pub window: String,
    pub limit: u32,
    pub user_agent: String,
}

pub fn load(config_override: Option<String>) -> Result<RuntimeConfig> {
    if let Some(path_str) = config_override {
        let txt = fs::read_to_string(&path_str)
            .with_context(|| format!("failed to read config: {}", path_str))?;
        let parsed: AppConfig =
            toml::from_str(&txt).with_context(|| format!("failed to parse toml: {}", path_str))?;
        return Ok(resolve(parsed));
    }

    // Default config path, if present
    if let Some(path) = default_config_path() {
        if path.is_file() {
            let txt = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let parsed: AppConfig = toml::from_str(&txt)
                .with_context(|| format!("failed to parse toml: {}", path.display()))?;
            return Ok(resolve(parsed));
        }
    }

    // Built-in defaults
    Ok(resolve(AppConfig::default()))
}

fn resolve(cfg: AppConfig) -> RuntimeConfig {
    RuntimeConfig {
        subreddit: cfg.subreddit.unwrap_or_else(|| DEFAULT_SUBREDDIT.into()),
        window: cfg.window.unwrap_or_else(|| DEFAULT_WINDOW.into()),
        limit: cfg.limit.unwrap_or(DEFAULT_WEEKLY_LIMIT),
        user_agent: cfg.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("news-cards");
        p.push("config.toml");
        return Some(p);
    }
    if let Ok(home) = env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("news-cards");
        p.push("config.toml");
        return Some(p);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let rc = resolve(AppConfig::default());
        assert_eq!(rc.subreddit, DEFAULT_SUBREDDIT);
        assert_eq!(rc.window, DEFAULT_WINDOW);
        assert_eq!(rc.limit, DEFAULT_WEEKLY_LIMIT);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let parsed: AppConfig = toml::from_str("subreddit = \"golang\"\nlimit = 3\n").unwrap();
        let rc = resolve(parsed);
        assert_eq!(rc.subreddit, "golang");
        assert_eq!(rc.limit, 3);
        assert_eq!(rc.window, DEFAULT_WINDOW);
    }
}

use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;

use crate::util::dates;
use crate::Error;

const CONFIG_FILE_NAME: &str = "medalboard.toml";

#[derive(Debug, Deserialize, Clone)]
struct FileConfig {
    pub backend_url: String,
    #[serde(default = "default_refresh_interval_minutes")]
    pub refresh_interval_minutes: f64,
    #[serde(default = "default_stdin_trigger")]
    pub stdin_trigger: bool,
    pub page: FilePageConfig,
    pub log: FileLogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct FilePageConfig {
    pub path: String,
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_heading")]
    pub heading: String,
}

#[derive(Debug, Deserialize, Clone)]
struct FileLogConfig {
    pub level: String,
    pub path: String,
    pub json_path: String,
}

fn default_refresh_interval_minutes() -> f64 {
    5.0
}

fn default_stdin_trigger() -> bool {
    true
}

fn default_container_id() -> String {
    "leaderboard".to_string()
}

fn default_title() -> String {
    "Medal Standings".to_string()
}

fn default_heading() -> String {
    "Medal Standings".to_string()
}

#[derive(Clone, Debug)]
pub struct PageConfig {
    pub path: PathBuf,
    pub container_id: String,
    pub title: String,
    pub heading: String,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub refresh_interval: Duration,
    pub stdin_trigger: bool,
    pub page: PageConfig,
    pub log: LogConfig,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Error> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen('~', &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Loads `medalboard.toml` from the directory holding the executable.
pub fn load_config() -> Result<AppConfig, Error> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join(CONFIG_FILE_NAME),
        None => return Err("failed to determine executable directory".into()),
    };

    if !config_path.is_file() {
        return Err(format!(
            "Config file does not exist or is not a file: {}",
            config_path.display()
        )
        .into());
    }

    let s = fs::read_to_string(&config_path)?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<AppConfig, Error> {
    let cfg: FileConfig = toml::from_str(s)?;

    let backend_url = cfg.backend_url.trim().to_string();
    if backend_url.is_empty() {
        return Err("backend_url must not be empty".into());
    }

    let refresh_interval = refresh_interval(cfg.refresh_interval_minutes)?;

    Ok(AppConfig {
        backend_url,
        refresh_interval,
        stdin_trigger: cfg.stdin_trigger,
        page: build_page_config(cfg.page)?,
        log: build_log_config(cfg.log)?,
    })
}

fn refresh_interval(minutes: f64) -> Result<Duration, Error> {
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(format!(
            "refresh_interval_minutes must be a positive number, got {}",
            minutes
        )
        .into());
    }

    let interval = Duration::try_from_secs_f64(minutes * 60.0)?;
    if interval.is_zero() {
        return Err(format!("refresh_interval_minutes is too small: {}", minutes).into());
    }
    Ok(interval)
}

fn build_page_config(file_page: FilePageConfig) -> Result<PageConfig, Error> {
    let path = expand_tilde(&file_page.path)?;
    if path.exists() && !path.is_file() {
        return Err(format!("Page path exists but is not a file: {}", &file_page.path).into());
    }

    if file_page.container_id.trim().is_empty() {
        return Err("page.container_id must not be empty".into());
    }

    Ok(PageConfig {
        path,
        container_id: file_page.container_id,
        title: file_page.title,
        heading: file_page.heading,
    })
}

fn build_log_config(file_log: FileLogConfig) -> Result<LogConfig, Error> {
    let path = log_file_path(&file_log.path)?;
    let json_path = log_file_path(&file_log.json_path)?;

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn log_file_path(cfg_path: &str) -> Result<PathBuf, Error> {
    let path = log_file_replacements(cfg_path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(format!("Log file directory does not exist: {}", parent.display()).into());
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", cfg_path).into());
    }
    Ok(path)
}

fn log_file_replacements(cfg_path: &str) -> Result<PathBuf, Error> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_toml(dir: &std::path::Path, extra: &str) -> String {
        format!(
            r#"
backend_url = "http://localhost:8787/api/medals"
{extra}

[page]
path = "{dir}/leaderboard.html"

[log]
level = "info"
path = "{dir}/medalboard.{{DATE}}.log"
json_path = "{dir}/medalboard.{{DATE}}.json"
"#,
            dir = dir.display(),
            extra = extra,
        )
    }

    #[test]
    fn test_defaults_are_filled() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = parse_config(&config_toml(dir.path(), "")).unwrap();

        assert_eq!(cfg.backend_url, "http://localhost:8787/api/medals");
        assert_eq!(cfg.refresh_interval, Duration::from_secs(300));
        assert!(cfg.stdin_trigger);
        assert_eq!(cfg.page.container_id, "leaderboard");
        assert_eq!(cfg.page.path, dir.path().join("leaderboard.html"));
    }

    #[test]
    fn test_fractional_interval() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = parse_config(&config_toml(dir.path(), "refresh_interval_minutes = 0.5")).unwrap();

        assert_eq!(cfg.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_log_path_date_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = parse_config(&config_toml(dir.path(), "")).unwrap();

        let file_name = cfg.log.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(!file_name.contains("{DATE}"));
        assert!(file_name.contains(&dates::local_date_yyyy_mm_dd()));
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        let dir = tempfile::tempdir().unwrap();

        assert!(parse_config(&config_toml(dir.path(), "refresh_interval_minutes = 0")).is_err());
        assert!(parse_config(&config_toml(dir.path(), "refresh_interval_minutes = -2")).is_err());
    }

    #[test]
    fn test_rejects_empty_backend_url() {
        let dir = tempfile::tempdir().unwrap();
        let toml = config_toml(dir.path(), "").replace("http://localhost:8787/api/medals", " ");

        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn test_rejects_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let toml = config_toml(dir.path(), "").replace(
            "medalboard.{DATE}.log",
            "missing/medalboard.{DATE}.log",
        );

        assert!(parse_config(&toml).is_err());
    }
}

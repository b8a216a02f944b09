use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::client::NYLAS_API_BASE_URL;
use crate::error::AppResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Settings {
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| NYLAS_API_BASE_URL.to_string())
    }

    /// Token with everything but the last four characters hidden. Short tokens
    /// are hidden entirely.
    pub fn masked_token(&self) -> Option<String> {
        let token = self.access_token()?;
        let len = token.chars().count();
        if len <= 8 {
            return Some("*".repeat(8));
        }

        let tail: String = token.chars().skip(len - 4).collect();
        Some(format!("{}{tail}", "*".repeat(8)))
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_counts_as_missing() {
        let settings = Settings {
            access_token: Some("  ".to_string()),
            api_base_url: None,
        };
        assert_eq!(settings.access_token(), None);
        assert_eq!(settings.api_base_url(), NYLAS_API_BASE_URL);
    }

    #[test]
    fn masks_all_but_the_tail() {
        let settings = Settings {
            access_token: Some("abcdefgh1234".to_string()),
            api_base_url: None,
        };
        assert_eq!(settings.masked_token().as_deref(), Some("********1234"));
    }

    #[test]
    fn short_tokens_are_fully_masked() {
        for token in ["abc", "abcd", "abcdefgh"] {
            let settings = Settings {
                access_token: Some(token.to_string()),
                api_base_url: None,
            };
            let masked = settings.masked_token().unwrap();
            assert_eq!(masked, "********");
            assert!(!masked.contains(token));
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let path = std::env::temp_dir()
            .join(format!("nylas-drafts-settings-{}", std::process::id()))
            .join("default.json");
        let settings = Settings {
            access_token: Some("tok".to_string()),
            api_base_url: Some("http://127.0.0.1:9".to_string()),
        };

        save(path.clone(), &settings).unwrap();
        assert_eq!(load(path.clone()).unwrap(), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("nylas-drafts-does-not-exist/none.json");
        assert_eq!(load(path).unwrap(), Settings::default());
    }
}

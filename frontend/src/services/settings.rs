use log::Level;
use web_sys::window;

const API_BASE_URL_KEY: &str = "fee_admin_api_base_url";

/// Runtime settings for the admin frontend
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,

    /// Level handed to the console logger
    pub log_level: Level,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            log_level: Level::Info,
        }
    }
}

impl AppSettings {
    /// Build settings from the browser environment.
    ///
    /// Local development gets debug logging; `localStorage` may override the
    /// API base URL.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item(API_BASE_URL_KEY) {
                settings = settings.with_api_base_url(&base_url);
            }
        }

        settings
    }

    /// Override the API base URL, ignoring blank values
    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base_url = trimmed.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080");
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn test_api_base_url_override() {
        let settings = AppSettings::default().with_api_base_url("https://admin.example.com/");
        assert_eq!(settings.api_base_url, "https://admin.example.com");

        let settings = AppSettings::default().with_api_base_url("   ");
        assert_eq!(settings.api_base_url, "http://localhost:8080");
    }
}

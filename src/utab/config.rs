const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const BASE_URL_ENV: &str = "UTAB_BASE_URL";

/// Runtime configuration for utab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtabConfig {
    /// Base URL of the upstream user resource
    pub base_url: String,
}

impl Default for UtabConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl UtabConfig {
    /// Load config from the environment, or return defaults
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => Self { base_url },
            _ => Self::default(),
        }
    }

    /// Apply a command-line override on top of the loaded config
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }
}

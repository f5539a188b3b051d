use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDb API key, sent as the `api_key` query parameter
    #[serde(default)]
    pub tmdb_api_key: String,

    /// TMDb REST API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDb image CDN base URL (size segment is appended per feed)
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Language requested from every TMDb endpoint
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Upper bound for a single outbound TMDb call
    #[serde(default = "default_tmdb_timeout_secs")]
    pub tmdb_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

fn default_tmdb_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.tmdb_api_key, "");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb_image_url, "https://image.tmdb.org/t/p");
        assert_eq!(config.tmdb_language, "en-US");
        assert_eq!(config.tmdb_timeout_secs, 10);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_overrides_from_variables() {
        let config = Config::from_vars(vars(&[
            ("TMDB_API_KEY", "secret"),
            ("TMDB_TIMEOUT_SECS", "3"),
            ("PORT", "8080"),
            ("HOST", "0.0.0.0"),
        ]))
        .unwrap();

        assert_eq!(config.tmdb_api_key, "secret");
        assert_eq!(config.tmdb_timeout_secs, 3);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_malformed_port_is_rejected() {
        let result = Config::from_vars(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first if
    /// one is present. `E2E_BASE_URL` overrides the default local address.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let base_url = match std::env::var("E2E_BASE_URL") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => DEFAULT_BASE_URL.to_string(),
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the application root path.
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

use inkwell_client::ClientConfig;
use inkwell_client::config::DEFAULT_API_URL;
use std::path::PathBuf;

pub const DEFAULT_SESSION_FILE: &str = ".blog_session.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api: ClientConfig,
    pub session_file: PathBuf,
}

impl CliConfig {
    /// Flags win over the environment (and `.env`), which wins over defaults.
    pub fn from_env(server: Option<String>, session_file: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();

        let base_url = server
            .or_else(|| std::env::var("BLOG_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        let session_file = session_file
            .or_else(|| std::env::var("BLOG_SESSION_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            api: ClientConfig::new(&base_url),
            session_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_take_precedence() {
        let config = CliConfig::from_env(
            Some("http://blog.local/".into()),
            Some(PathBuf::from("/tmp/session.json")),
        );
        assert_eq!(config.api.base_url, "http://blog.local");
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    }
}

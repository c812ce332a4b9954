pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Where the blog API lives and how its endpoints are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/auth/signin", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/api/auth/signup", self.base_url)
    }

    pub fn posts_url(&self) -> String {
        format!("{}/api/post", self.base_url)
    }

    pub fn post_url(&self, id: &str) -> String {
        format!("{}/api/post/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        let config = ClientConfig::new("https://blog.example.com//");
        assert_eq!(config.base_url, "https://blog.example.com");
        assert_eq!(config.post_url("42"), "https://blog.example.com/api/post/42");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(ClientConfig::new("  ").base_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::default().login_url(), format!("{DEFAULT_API_URL}/api/auth/signin"));
    }

    #[test]
    fn endpoint_layout() {
        let config = ClientConfig::new("http://api");
        assert_eq!(config.register_url(), "http://api/api/auth/signup");
        assert_eq!(config.posts_url(), "http://api/api/post");
    }
}

// Configuration structs

/// GitHub account searched when no `--user` flag is given.
pub const DEFAULT_USER: &str = "parente";

/// Resolved configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub account whose gists are searched.
    pub user: String,

    /// Personal access token for the GitHub API (optional; raises the
    /// unauthenticated rate limit).
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Account to search, honoring precedence: explicit flag > stored config.
    pub fn resolve_user(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string).unwrap_or_else(|| self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.user, DEFAULT_USER);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_explicit_flag_wins() {
        let config = Config {
            user: "stored".to_string(),
            token: None,
        };
        assert_eq!(config.resolve_user(Some("flagged")), "flagged");
        assert_eq!(config.resolve_user(None), "stored");
    }
}

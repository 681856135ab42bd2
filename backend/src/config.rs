//! Site configuration consumed by the policy services.

/// Default cap on front-page news items.
pub const NEWS_COUNT_ON_HOME_PAGE: usize = 10;

/// Default login endpoint path used in redirect outcomes.
pub const LOGIN_PATH: &str = "/auth/login/";

/// Builder-style configuration for the policy core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    news_count_on_home_page: usize,
    login_path: String,
}

impl SiteConfig {
    /// Configuration with the stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            news_count_on_home_page: NEWS_COUNT_ON_HOME_PAGE,
            login_path: LOGIN_PATH.to_owned(),
        }
    }

    /// Override the front-page cap.
    #[must_use]
    pub const fn with_front_page_cap(mut self, cap: usize) -> Self {
        self.news_count_on_home_page = cap;
        self
    }

    /// Override the login endpoint path.
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Cap on front-page news items.
    #[must_use]
    pub const fn news_count_on_home_page(&self) -> usize {
        self.news_count_on_home_page
    }

    /// Login endpoint path for redirect outcomes.
    #[must_use]
    pub fn login_path(&self) -> &str {
        self.login_path.as_str()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_the_configured_constants() {
        let config = SiteConfig::new();
        assert_eq!(config.news_count_on_home_page(), NEWS_COUNT_ON_HOME_PAGE);
        assert_eq!(config.login_path(), LOGIN_PATH);
    }

    #[rstest]
    fn overrides_replace_the_defaults() {
        let config = SiteConfig::new()
            .with_front_page_cap(3)
            .with_login_path("/login/");
        assert_eq!(config.news_count_on_home_page(), 3);
        assert_eq!(config.login_path(), "/login/");
    }
}

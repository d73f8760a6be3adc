//! Access gate configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "gymtracker-session";

/// Thirty days.
const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;

/// Shared-password gate configuration
///
/// The password is required in every environment; there is no built-in
/// fallback value.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared password protecting the API
    #[serde(default)]
    pub app_password: String,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session cookie lifetime in seconds
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
}

impl AuthConfig {
    /// Validate access gate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.app_password.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GYM_TRACKER__AUTH__APP_PASSWORD"));
        }
        let valid_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid_name {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.cookie_max_age_secs == 0 {
            return Err(ValidationError::InvalidCookieMaxAge);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("app_password", &"[REDACTED]")
            .field("cookie_name", &self.cookie_name)
            .field("cookie_max_age_secs", &self.cookie_max_age_secs)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            app_password: String::new(),
            cookie_name: default_cookie_name(),
            cookie_max_age_secs: default_cookie_max_age(),
        }
    }
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

fn default_cookie_max_age() -> u64 {
    DEFAULT_COOKIE_MAX_AGE_SECS
}

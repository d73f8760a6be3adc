//! Session cookie reading and writing.

use http::{header, HeaderMap};

use crate::config::AuthConfig;

/// How the session cookie is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub max_age_secs: u64,
    /// Adds the `Secure` attribute; set in production.
    pub secure: bool,
}

impl CookieSettings {
    pub fn from_config(config: &AuthConfig, secure: bool) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age_secs: config.cookie_max_age_secs,
            secure,
        }
    }

    /// Reads this cookie's value from the request headers.
    pub fn read<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value)
    }

    /// `Set-Cookie` value carrying the session marker.
    pub fn issue(&self, marker: &str) -> String {
        self.render(marker, self.max_age_secs)
    }

    /// `Set-Cookie` value expiring the session cookie.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age_secs: u64) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, value, max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn settings(secure: bool) -> CookieSettings {
        CookieSettings {
            name: "gymtracker-session".to_string(),
            max_age_secs: 2_592_000,
            secure,
        }
    }

    #[test]
    fn issued_cookie_is_http_only_and_lax() {
        let cookie = settings(false).issue("abc");
        assert_eq!(
            cookie,
            "gymtracker-session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=2592000"
        );
    }

    #[test]
    fn secure_flag_is_added_when_enabled() {
        assert!(settings(true).issue("abc").ends_with("; Secure"));
        assert!(!settings(false).issue("abc").contains("Secure"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = settings(false).clear();
        assert!(cookie.starts_with("gymtracker-session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn reads_named_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; gymtracker-session=marker123; lang=en"),
        );
        assert_eq!(settings(false).read(&headers), Some("marker123"));
    }

    #[test]
    fn missing_cookie_reads_as_none() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(settings(false).read(&headers), None);
        assert_eq!(settings(false).read(&HeaderMap::new()), None);
    }
}

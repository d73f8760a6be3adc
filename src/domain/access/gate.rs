//! Single shared-secret access gate.
//!
//! Anyone presenting the configured password gets a session marker; any
//! request carrying that marker is authorized. The marker is an HMAC of a
//! fixed label keyed by the password, so it cannot be forged without the
//! password and it changes whenever the password does.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::AccessError;

/// Label signed to derive the session marker.
const MARKER_LABEL: &[u8] = b"gym-tracker/session/v1";

/// Gate holding the shared secret and the marker derived from it.
pub struct SharedSecretGate {
    secret: Secret<String>,
    marker: String,
}

impl SharedSecretGate {
    /// Creates a gate for the given password.
    ///
    /// # Errors
    ///
    /// - `MissingSecret` if the password is empty or whitespace
    /// - `KeyRejected` if the HMAC key cannot be initialized
    pub fn new(secret: impl Into<String>) -> Result<Self, AccessError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AccessError::MissingSecret);
        }

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|e| AccessError::KeyRejected(e.to_string()))?;
        mac.update(MARKER_LABEL);
        let marker = hex::encode(mac.finalize().into_bytes());

        Ok(Self {
            secret: Secret::new(secret),
            marker,
        })
    }

    /// Returns true if the candidate equals the configured password.
    pub fn check_password(&self, candidate: &str) -> bool {
        constant_time_compare(
            self.secret.expose_secret().as_bytes(),
            candidate.as_bytes(),
        )
    }

    /// Marker issued to clients after a successful login.
    pub fn session_marker(&self) -> &str {
        &self.marker
    }

    /// Returns true if the presented marker is the issued one.
    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        match presented {
            Some(value) => constant_time_compare(self.marker.as_bytes(), value.as_bytes()),
            None => false,
        }
    }

    /// Checks a login attempt and hands back the marker to issue.
    pub fn login(&self, candidate: &str) -> Result<&str, AccessError> {
        if self.check_password(candidate) {
            Ok(self.session_marker())
        } else {
            Err(AccessError::InvalidPassword)
        }
    }
}

impl std::fmt::Debug for SharedSecretGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretGate").finish_non_exhaustive()
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PASSWORD: &str = "test-password";

    fn gate() -> SharedSecretGate {
        SharedSecretGate::new(TEST_PASSWORD).unwrap()
    }

    #[test]
    fn correct_password_is_accepted() {
        assert!(gate().check_password(TEST_PASSWORD));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let gate = gate();
        assert!(!gate.check_password("wrong"));
        assert!(!gate.check_password(""));
        assert!(!gate.check_password("test-password "));
    }

    #[test]
    fn login_returns_marker_only_on_match() {
        let gate = gate();
        assert_eq!(gate.login(TEST_PASSWORD).unwrap(), gate.session_marker());
        assert!(matches!(
            gate.login("nope"),
            Err(AccessError::InvalidPassword)
        ));
    }

    #[test]
    fn issued_marker_is_authorized() {
        let gate = gate();
        let marker = gate.session_marker().to_string();
        assert!(gate.is_authorized(Some(&marker)));
    }

    #[test]
    fn missing_or_foreign_marker_is_not_authorized() {
        let gate = gate();
        assert!(!gate.is_authorized(None));
        assert!(!gate.is_authorized(Some("authenticated")));
        assert!(!gate.is_authorized(Some("")));
    }

    #[test]
    fn marker_does_not_reveal_the_password() {
        let gate = gate();
        assert_ne!(gate.session_marker(), TEST_PASSWORD);
        assert_eq!(gate.session_marker().len(), 64);
    }

    #[test]
    fn marker_changes_with_the_password() {
        let other = SharedSecretGate::new("another-password").unwrap();
        assert_ne!(gate().session_marker(), other.session_marker());
        assert!(!other.is_authorized(Some(gate().session_marker())));
    }

    #[test]
    fn marker_is_stable_for_a_password() {
        let again = SharedSecretGate::new(TEST_PASSWORD).unwrap();
        assert_eq!(gate().session_marker(), again.session_marker());
    }

    #[test]
    fn blank_secret_is_refused() {
        assert!(matches!(
            SharedSecretGate::new("   "),
            Err(AccessError::MissingSecret)
        ));
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", gate());
        assert!(!rendered.contains(TEST_PASSWORD));
    }
}

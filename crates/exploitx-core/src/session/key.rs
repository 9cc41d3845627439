//! Storage key derivation.
//!
//! Emails cannot be used as database path segments directly, so each email is
//! mapped to a key by substituting `.` with `_dot_` and then `@` with `_at_`.

use std::fmt;

const DOT_TOKEN: &str = "_dot_";
const AT_TOKEN: &str = "_at_";

/// Sanitized key derived from an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derives the key for an email. Dot substitution runs first.
    pub fn from_email(email: &str) -> Self {
        Self(email.replace('.', DOT_TOKEN).replace('@', AT_TOKEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the profile record for this key.
    pub fn profile_path(&self) -> String {
        format!("users/{}", self.0)
    }

    /// Path of the score record for this key.
    pub fn score_path(&self) -> String {
        format!("scores/{}", self.0)
    }

    /// Returns true if the email already contains one of the substitution
    /// tokens, in which case its key may collide with another email's key.
    pub fn may_collide(email: &str) -> bool {
        email.contains(DOT_TOKEN) || email.contains(AT_TOKEN)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_replaces_dots_and_at() {
        assert_eq!(
            StorageKey::from_email("a.b@c.com").as_str(),
            "a_dot_b_at_c_com"
        );
    }

    #[test]
    fn test_from_email_is_deterministic() {
        let first = StorageKey::from_email("first.last@uni.ac.in");
        let second = StorageKey::from_email("first.last@uni.ac.in");
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "first_dot_last_at_uni_dot_ac_dot_in");
    }

    #[test]
    fn test_from_email_reapplied_is_stable() {
        let key = StorageKey::from_email("a.b@c.com");
        let again = StorageKey::from_email(key.as_str());
        assert_eq!(key, again);
    }

    #[test]
    fn test_paths() {
        let key = StorageKey::from_email("x@y.z");
        assert_eq!(key.profile_path(), "users/x_at_y_dot_z");
        assert_eq!(key.score_path(), "scores/x_at_y_dot_z");
    }

    #[test]
    fn test_may_collide() {
        assert!(StorageKey::may_collide("a_dot_b@c.com"));
        assert!(StorageKey::may_collide("a_at_b@c.com"));
        assert!(!StorageKey::may_collide("a.b@c.com"));
        // Two distinct emails that map to the same key.
        assert_eq!(
            StorageKey::from_email("a_dot_b@c.com"),
            StorageKey::from_email("a.b@c.com")
        );
    }
}

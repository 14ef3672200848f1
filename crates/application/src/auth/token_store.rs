//! In-memory bearer token storage keyed by role.
//!
//! Tokens are written once by the login phase and read by the phases that
//! follow it. There is no expiry or refresh handling.

use std::collections::HashMap;

use ttml_smoke_domain::Role;

/// Tokens captured from successful logins.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    tokens: HashMap<Role, String>,
}

impl TokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token for a role, replacing any previous one.
    ///
    /// Blank tokens are ignored so a role never ends up "authenticated" with
    /// an empty credential.
    pub fn store(&mut self, role: Role, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.trim().is_empty() {
            return false;
        }
        self.tokens.insert(role, token);
        true
    }

    /// Get the token for a role.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&str> {
        self.tokens.get(&role).map(String::as_str)
    }

    /// Whether a token exists for the role.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.tokens.contains_key(&role)
    }

    /// Clear all tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Get count of stored tokens.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let mut store = TokenStore::new();
        assert!(store.store(Role::Subscriber, "abc"));
        assert_eq!(store.get(Role::Subscriber), Some("abc"));
        assert_eq!(store.get(Role::Employee), None);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_blank_token_ignored() {
        let mut store = TokenStore::new();
        assert!(!store.store(Role::Employee, "  "));
        assert!(!store.contains(Role::Employee));
    }

    #[test]
    fn test_replace_and_clear() {
        let mut store = TokenStore::new();
        store.store(Role::SuperAdmin, "old");
        store.store(Role::SuperAdmin, "new");
        assert_eq!(store.get(Role::SuperAdmin), Some("new"));
        assert_eq!(store.count(), 1);
        store.clear();
        assert!(!store.contains(Role::SuperAdmin));
        assert_eq!(store.count(), 0);
    }
}

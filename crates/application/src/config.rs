//! Suite configuration.
//!
//! The defaults are the values the smoke suite runs with; the builder
//! methods exist so tests can point the suite at a local backend.

use ttml_smoke_domain::{Account, Role};

/// Production site the suite targets.
pub const DEFAULT_BASE_URL: &str = "https://www.talk-to-my-lawyer.com";

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "TalkToMyLawyer-APITester/1.0";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Login endpoint for subscribers and employees.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Login endpoint for the admin roles.
pub const ADMIN_LOGIN_PATH: &str = "/api/auth/admin-login";

const TEST_PASSWORD: &str = "TestPass123!";

/// Configuration of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Base URL every path is appended to.
    pub base_url: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// One account per role.
    pub accounts: Vec<Account>,
}

impl SuiteConfig {
    /// Replaces the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the per-request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Replaces the accounts.
    #[must_use]
    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    /// Returns the account of a role.
    #[must_use]
    pub fn account(&self, role: Role) -> Option<&Account> {
        self.accounts.iter().find(|a| a.role == role)
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            accounts: default_accounts(),
        }
    }
}

/// The four test accounts seeded in the application under test.
#[must_use]
pub fn default_accounts() -> Vec<Account> {
    Role::ALL
        .into_iter()
        .map(|role| {
            let email = match role {
                Role::Subscriber => "test-subscriber@ttml-test.com",
                Role::Employee => "test-employee@ttml-test.com",
                Role::SuperAdmin => "test-superadmin@ttml-test.com",
                Role::AttorneyAdmin => "test-attorney@ttml-test.com",
            };
            let login_path = if role.is_admin() {
                ADMIN_LOGIN_PATH
            } else {
                LOGIN_PATH
            };
            Account::new(role, email, TEST_PASSWORD, login_path)
        })
        .collect()
}

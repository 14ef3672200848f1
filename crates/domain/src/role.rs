//! User roles and their test accounts.

use std::fmt;

use serde::Serialize;

/// A user role of the application under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Paying customer generating letters.
    Subscriber,
    /// Staff member earning commissions on coupons.
    Employee,
    /// System administrator with access to the admin gateway.
    SuperAdmin,
    /// Attorney reviewing letters through the attorney portal.
    AttorneyAdmin,
}

impl Role {
    /// All roles in login order.
    pub const ALL: [Self; 4] = [
        Self::Subscriber,
        Self::Employee,
        Self::SuperAdmin,
        Self::AttorneyAdmin,
    ];

    /// Returns the stable key of this role (e.g. `super_admin`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Subscriber => "subscriber",
            Self::Employee => "employee",
            Self::SuperAdmin => "super_admin",
            Self::AttorneyAdmin => "attorney_admin",
        }
    }

    /// Returns the human-readable name used in check names.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Subscriber => "Subscriber",
            Self::Employee => "Employee",
            Self::SuperAdmin => "Super Admin",
            Self::AttorneyAdmin => "Attorney Admin",
        }
    }

    /// Returns true for roles that sign in through the admin login endpoint.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::AttorneyAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Credentials of one test account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Role the account signs in as.
    pub role: Role,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// API path the credentials are posted to.
    pub login_path: String,
}

impl Account {
    /// Creates a new account.
    #[must_use]
    pub fn new(
        role: Role,
        email: impl Into<String>,
        password: impl Into<String>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            role,
            email: email.into(),
            password: password.into(),
            login_path: login_path.into(),
        }
    }

    /// Returns the JSON payload sent to the login endpoint.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            email: &self.email,
            password: &self.password,
        }
    }
}

/// Body of a login call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    /// Login email.
    pub email: &'a str,
    /// Login password.
    pub password: &'a str,
}

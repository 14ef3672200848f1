//! Test groups in run order.

use std::fmt;

use crate::role::Role;

/// A named group of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Unauthenticated health probes.
    Health,
    /// Login of every role.
    Authentication,
    /// Subscriber endpoints.
    Subscriber,
    /// Employee endpoints.
    Employee,
    /// System admin gateway.
    Admin,
    /// Attorney portal.
    AttorneyAdmin,
    /// Public payment configuration.
    Payment,
    /// Cross-role denial checks.
    AccessControl,
}

impl Phase {
    /// All phases in the order a run executes them.
    pub const ALL: [Self; 8] = [
        Self::Health,
        Self::Authentication,
        Self::Subscriber,
        Self::Employee,
        Self::Admin,
        Self::AttorneyAdmin,
        Self::Payment,
        Self::AccessControl,
    ];

    /// Heading shown when the phase starts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Health => "Health Endpoints",
            Self::Authentication => "Authentication Endpoints",
            Self::Subscriber => "Subscriber Endpoints",
            Self::Employee => "Employee Endpoints",
            Self::Admin => "System Admin Endpoints",
            Self::AttorneyAdmin => "Attorney Admin Endpoints",
            Self::Payment => "Payment Endpoints",
            Self::AccessControl => "Role Access Control",
        }
    }

    /// Icon printed before the heading.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Health => "🔍",
            Self::Authentication => "🔐",
            Self::Subscriber => "👤",
            Self::Employee => "👷",
            Self::Admin => "🔧",
            Self::AttorneyAdmin => "⚖️ ",
            Self::Payment => "💳",
            Self::AccessControl => "🛡️ ",
        }
    }

    /// Short lowercase label, e.g. "attorney admin".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Authentication => "authentication",
            Self::Subscriber => "subscriber",
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::AttorneyAdmin => "attorney admin",
            Self::Payment => "payment",
            Self::AccessControl => "access control",
        }
    }

    /// Role whose token the phase needs, if any.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Health | Self::Authentication | Self::Payment => None,
            Self::Subscriber => Some(Role::Subscriber),
            Self::Employee => Some(Role::Employee),
            Self::Admin => Some(Role::SuperAdmin),
            Self::AttorneyAdmin | Self::AccessControl => Some(Role::AttorneyAdmin),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_order() {
        assert_eq!(Phase::ALL.first(), Some(&Phase::Health));
        assert_eq!(Phase::ALL.last(), Some(&Phase::AccessControl));
        assert_eq!(Phase::ALL[1], Phase::Authentication);
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(Phase::Health.required_role(), None);
        assert_eq!(Phase::Payment.required_role(), None);
        assert_eq!(Phase::Admin.required_role(), Some(Role::SuperAdmin));
        assert_eq!(Phase::AccessControl.required_role(), Some(Role::AttorneyAdmin));
    }
}

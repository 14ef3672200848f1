//! Fixed endpoint lists checked by each phase.

use serde::Serialize;

/// A named GET check against one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointCheck {
    /// Check name shown in the report.
    pub name: &'static str,
    /// API path.
    pub path: &'static str,
}

const fn check(name: &'static str, path: &'static str) -> EndpointCheck {
    EndpointCheck { name, path }
}

/// Unauthenticated health probes.
pub const HEALTH_CHECK: EndpointCheck = check("Health Check", "/api/health");

/// Detailed health probe.
pub const DETAILED_HEALTH_CHECK: EndpointCheck =
    check("Detailed Health Check", "/api/health/detailed");

/// Subscriber pages checked before letter generation.
pub const SUBSCRIBER_CHECKS: [EndpointCheck; 2] = [
    check("Subscriber Dashboard", "/api/dashboard"),
    check("Profile Settings", "/api/profile"),
];

/// Path letters are generated through.
pub const LETTER_GENERATE_PATH: &str = "/api/letters/generate";

/// Path listing the subscriber's letters.
pub const LETTERS_PATH: &str = "/api/letters";

/// Subscription status, checked last in the subscriber phase.
pub const SUBSCRIPTION_CHECK: EndpointCheck = check("Subscription Status", "/api/subscription");

/// Employee dashboard pages.
pub const EMPLOYEE_CHECKS: [EndpointCheck; 3] = [
    check("Employee Commissions Dashboard", "/api/dashboard/commissions"),
    check("Employee Coupons", "/api/dashboard/coupons"),
    check("Employee Settings", "/api/dashboard/employee-settings"),
];

/// Admin gateway endpoints.
pub const ADMIN_CHECKS: [EndpointCheck; 6] = [
    check("Admin Dashboard", "/api/secure-admin-gateway/dashboard"),
    check("Admin Analytics", "/api/secure-admin-gateway/analytics"),
    check("User Management", "/api/secure-admin-gateway/users"),
    check("All Letters", "/api/secure-admin-gateway/letters"),
    check("Coupon Management", "/api/secure-admin-gateway/coupons"),
    check("Commission Management", "/api/secure-admin-gateway/commissions"),
];

/// Attorney portal endpoints.
pub const ATTORNEY_ADMIN_CHECKS: [EndpointCheck; 2] = [
    check("Attorney Review Center", "/api/attorney-portal/review"),
    check("Pending Letters", "/api/attorney-portal/letters/pending"),
];

/// Public payment configuration.
pub const PAYMENT_CHECKS: [EndpointCheck; 2] = [
    check("Stripe Configuration", "/api/stripe/config"),
    check("Subscription Plans", "/api/subscription/plans"),
];

/// Admin-only endpoints an attorney admin must be refused (HTTP 403).
pub const ATTORNEY_DENIED_CHECKS: [EndpointCheck; 2] = [
    check(
        "Attorney Admin Blocked from Analytics",
        "/api/secure-admin-gateway/analytics",
    ),
    check(
        "Attorney Admin Blocked from User Management",
        "/api/secure-admin-gateway/users",
    ),
];

/// Status an endpoint returns when the caller's role is not allowed.
pub const FORBIDDEN: u16 = 403;

/// Path of a single letter.
///
/// The id comes from the backend and is encoded as one path segment, so
/// `/`, `?`, `#` and whitespace cannot change which resource is requested.
#[must_use]
pub fn letter_path(letter_id: &str) -> String {
    format!("{LETTERS_PATH}/{}", urlencoding::encode(letter_id))
}

/// Letter request posted by the subscriber phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterDraft {
    /// Letter template.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Sender name.
    pub sender_name: &'static str,
    /// Sender email.
    pub sender_email: &'static str,
    /// Recipient name.
    pub recipient_name: &'static str,
    /// What went wrong.
    pub issue_description: &'static str,
    /// What the sender wants.
    pub desired_outcome: &'static str,
}

impl Default for LetterDraft {
    fn default() -> Self {
        Self {
            kind: "demand_letter",
            sender_name: "Test User",
            sender_email: "test@example.com",
            recipient_name: "Test Recipient",
            issue_description: "Test issue for API testing",
            desired_outcome: "Test resolution",
        }
    }
}

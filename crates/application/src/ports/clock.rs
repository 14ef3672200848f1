//! Clock port

use chrono::{DateTime, Utc};

/// Source of the start and completion timestamps printed in the report.
///
/// Tests pin it to a fixed instant so summaries compare exactly.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

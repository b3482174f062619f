//! Orchestration layer
//!
//! Wires loaders, services and the report writer into the two batch jobs.
//!
//! ```text
//! secret_santa:  roster_loader -> AssignmentService  -> ReportWriter
//! group_report:  sheet_loader  -> GroupTallyService  -> ReportWriter
//! ```
//!
//! Both jobs are single pass and synchronous. Errors propagate to the caller
//! untouched; nothing is retried.

pub mod group_report;
pub mod secret_santa;

pub use group_report::{run_group_report, GroupSummary};
pub use secret_santa::{run_secret_santa, SantaSummary};

//! # Secret Santa Toolkit
//!
//! Two small batch tools for office admin work.
//!
//! - **secret santa**: reads alternating name/email lines and writes a
//!   randomized gift assignment where nobody draws themselves.
//! - **group tally**: scans a spreadsheet comment column for
//!   `Groups : [code]<I>...</I>[/code]` tags and counts each group.
//!
//! ## Layers
//!
//! ### ① Models
//! - `models/` - `Participant`, `AssignmentMap`, `GroupTally`
//! - `models/loaders` - roster text parsing, spreadsheet column reading
//!
//! ### ② Services
//! - `AssignmentService` - shuffle plus circular pairing
//! - `GroupTallyService` - tag extraction and counting
//! - `ReportWriter` - CSV output
//!
//! ### ③ Orchestration
//! - `orchestrator/secret_santa` and `orchestrator/group_report` run one job each
//!
//! ## Modules

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// re-export common types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Assignment, AssignmentMap, GroupCount, GroupTally, Participant, ReportOrder};
pub use orchestrator::{run_group_report, run_secret_santa, GroupSummary, SantaSummary};
pub use services::{AssignmentService, GroupTallyService, ReportWriter};

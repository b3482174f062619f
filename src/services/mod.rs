pub mod assignment_service;
pub mod group_tally_service;
pub mod report_writer;

pub use assignment_service::AssignmentService;
pub use group_tally_service::GroupTallyService;
pub use report_writer::ReportWriter;

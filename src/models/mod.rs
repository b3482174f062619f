pub mod assignment;
pub mod group_tally;
pub mod loaders;
pub mod participant;

pub use assignment::{Assignment, AssignmentMap};
pub use group_tally::{GroupCount, GroupTally, ReportOrder};
pub use loaders::{load_column, load_roster, parse_roster};
pub use participant::Participant;

pub mod roster_loader;
pub mod sheet_loader;

pub use roster_loader::{load_roster, parse_roster};
pub use sheet_loader::load_column;

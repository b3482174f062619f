//! Group report job: comment column in, group counts CSV out

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_column, GroupCount};
use crate::services::{GroupTallyService, ReportWriter};
use crate::utils::logging;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one group report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub cells_scanned: usize,
    pub rows: Vec<GroupCount>,
    pub output: PathBuf,
}

pub fn run_group_report(config: &Config) -> AppResult<GroupSummary> {
    logging::log_startup("group tally", &config.workbook_input, &config.group_counts_output);

    let cells = load_column(
        Path::new(&config.workbook_input),
        &config.sheet_name,
        &config.column_name,
    )?;
    info!(
        "✓ read {} comments from '{}' / '{}'",
        cells.len(),
        config.sheet_name,
        config.column_name
    );

    let tally = GroupTallyService::new()?.tally_cells(&cells);
    info!("✓ {} group mentions across {} groups", tally.total(), tally.len());
    let rows = tally.report(config.group_order);
    for row in &rows {
        info!("  {:<30} {}", row.name, row.count);
    }

    let output = PathBuf::from(&config.group_counts_output);
    ReportWriter::new().write_group_counts(&output, &rows)?;

    logging::print_final_stats("group counts", rows.len(), &config.group_counts_output);

    Ok(GroupSummary {
        cells_scanned: cells.len(),
        rows,
        output,
    })
}

//! Secret santa job: roster file in, assignment CSV out

use crate::config::Config;
use crate::error::AppResult;
use crate::models::load_roster;
use crate::services::{AssignmentService, ReportWriter};
use crate::utils::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of one secret santa run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SantaSummary {
    pub participants: usize,
    pub output: PathBuf,
}

/// Build the RNG for a run: seeded when configured, fresh entropy otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run_secret_santa(config: &Config) -> AppResult<SantaSummary> {
    logging::log_startup("secret santa", &config.roster_input, &config.assignments_output);

    let participants = load_roster(Path::new(&config.roster_input))?;
    info!("✓ loaded {} participants", participants.len());
    if participants.is_empty() {
        warn!("⚠️ roster is empty, writing header only");
    }

    match config.seed {
        Some(seed) => info!("🎲 using fixed seed {}", seed),
        None => info!("🎲 using random seed"),
    }
    let mut rng = make_rng(config.seed);
    let assignments = AssignmentService::new().assign(&participants, &mut rng);

    let output = PathBuf::from(&config.assignments_output);
    ReportWriter::new().write_assignments(&output, &assignments)?;

    logging::print_final_stats("Secret Santa assignments", assignments.len(), &config.assignments_output);

    Ok(SantaSummary {
        participants: participants.len(),
        output,
    })
}

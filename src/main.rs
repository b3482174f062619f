use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secret_santa_toolkit::utils::logging;
use secret_santa_toolkit::{run_group_report, run_secret_santa, Config, ReportOrder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secret-santa-toolkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Secret santa assignments and spreadsheet group tallies", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true, env = "SANTA_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign everyone a secret child and write the pairs to CSV
    Santa {
        /// Roster file, alternating name and email lines
        #[arg(short, long)]
        input: Option<String>,

        /// Output CSV
        #[arg(short, long)]
        output: Option<String>,

        /// Fixed RNG seed for a repeatable draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Count group tags in a spreadsheet comment column
    Groups {
        /// Workbook (xlsx, xls, ods) or CSV file
        #[arg(short, long)]
        input: Option<String>,

        /// Sheet name, ignored for CSV
        #[arg(long)]
        sheet: Option<String>,

        /// Column holding the comments
        #[arg(long)]
        column: Option<String>,

        /// Output CSV
        #[arg(short, long)]
        output: Option<String>,

        /// Sort rows by count instead of first appearance
        #[arg(long)]
        by_count: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // config: defaults -> TOML -> env -> flags
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.verbose_logging |= cli.verbose;

    logging::init(config.verbose_logging);

    match cli.command {
        Commands::Santa { input, output, seed } => {
            if let Some(input) = input {
                config.roster_input = input;
            }
            if let Some(output) = output {
                config.assignments_output = output;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            run_secret_santa(&config).context("Secret santa run failed")?;
        }
        Commands::Groups {
            input,
            sheet,
            column,
            output,
            by_count,
        } => {
            if let Some(input) = input {
                config.workbook_input = input;
            }
            if let Some(sheet) = sheet {
                config.sheet_name = sheet;
            }
            if let Some(column) = column {
                config.column_name = column;
            }
            if let Some(output) = output {
                config.group_counts_output = output;
            }
            if by_count {
                config.group_order = ReportOrder::ByCount;
            }
            run_group_report(&config).context("Group tally run failed")?;
        }
    }

    Ok(())
}

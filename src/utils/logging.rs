//! Logging helpers
//!
//! Subscriber setup plus the banner lines printed around each job.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when `verbose`.
/// Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Log the job banner with input and output paths
pub fn log_startup(job: &str, input: &str, output: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 starting {}", job);
    info!("📥 input:  {}", input);
    info!("📤 output: {}", output);
    info!("{}", "=".repeat(60));
}

/// Log the closing summary
pub fn print_final_stats(what: &str, rows: usize, output: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "finished at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ {} rows of {} written", rows, what);
    info!("{}", "=".repeat(60));
    info!("saved to: {}", output);
}

/// Truncate long text for log display
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

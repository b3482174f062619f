use crate::error::{AppError, AppResult};
use crate::models::ReportOrder;
use serde::Deserialize;
use std::path::Path;

/// Program configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Roster file with alternating name/email lines
    pub roster_input: String,
    /// CSV file that receives the assignments
    pub assignments_output: String,
    /// Fixed RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
    // --- group tally ---
    pub workbook_input: String,
    pub sheet_name: String,
    pub column_name: String,
    pub group_counts_output: String,
    pub group_order: ReportOrder,
    /// Show debug logs
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_input: "data/employees.txt".to_string(),
            assignments_output: "secret_santa_assignments.csv".to_string(),
            seed: None,
            workbook_input: "coding challenge test.xlsx".to_string(),
            sheet_name: "Input Data sheet".to_string(),
            column_name: "Additional comments".to_string(),
            group_counts_output: "group_counts_output.xlsx".to_string(),
            group_order: ReportOrder::FirstSeen,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::default().overlay_env(|key| std::env::var(key).ok())
    }

    /// Load a TOML file, then overlay the process environment
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_toml_file(path)?.overlay_env(|key| std::env::var(key).ok()),
            None => Self::from_env(),
        }
    }

    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides through `lookup`
    pub fn overlay_env<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ROSTER_INPUT") {
            self.roster_input = v;
        }
        if let Some(v) = lookup("ASSIGNMENTS_OUTPUT") {
            self.assignments_output = v;
        }
        if let Some(v) = lookup("SANTA_SEED") {
            let seed = v
                .trim()
                .parse::<u64>()
                .map_err(|_| AppError::env_var_parse_failed("SANTA_SEED", &v, "u64"))?;
            self.seed = Some(seed);
        }
        if let Some(v) = lookup("WORKBOOK_INPUT") {
            self.workbook_input = v;
        }
        if let Some(v) = lookup("SHEET_NAME") {
            self.sheet_name = v;
        }
        if let Some(v) = lookup("COMMENT_COLUMN") {
            self.column_name = v;
        }
        if let Some(v) = lookup("GROUP_COUNTS_OUTPUT") {
            self.group_counts_output = v;
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = v
                .trim()
                .parse()
                .map_err(|_| AppError::env_var_parse_failed("VERBOSE_LOGGING", &v, "bool"))?;
        }
        Ok(self)
    }
}

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Roster text is malformed
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// File operation failed
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// Workbook or CSV lookup failed
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),
    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Group tag pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Roster format errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// A name line has no email line after it
    #[error("invalid input format: missing email for employee '{name}'")]
    MissingEmail { name: String },
}

/// File operation errors
#[derive(Debug, Error)]
pub enum FileError {
    /// Reading a file failed
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Writing a file failed
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML parsing failed
    #[error("failed to parse TOML {path}: {source}")]
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Spreadsheet lookup errors
#[derive(Debug, Error)]
pub enum SheetError {
    /// Workbook could not be opened
    #[error("cannot open workbook {path}: {message}")]
    OpenFailed { path: String, message: String },
    /// Named sheet is missing
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },
    /// Named column is missing from the header row
    #[error("column '{column}' not found in {path}")]
    ColumnNotFound { path: String, column: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable could not be parsed
    #[error("environment variable {var_name}: value '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== Convenience constructors ==========

impl AppError {
    /// Build a file read error
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Build a file write error
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Build a TOML parse error
    pub fn toml_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// Build an env var parse error
    pub fn env_var_parse_failed(
        var_name: impl Into<String>,
        value: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.into(),
            value: value.into(),
            expected_type: expected_type.into(),
        })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

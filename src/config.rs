use std::path::PathBuf;

/// Fixed relative path the binary writes to.
pub const DEFAULT_OUTPUT: &str = "instructions.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    pub output: PathBuf,
}

impl FormatterConfig {
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::with_output(DEFAULT_OUTPUT)
    }
}

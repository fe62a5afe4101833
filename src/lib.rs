pub mod config;
pub mod error;
pub mod export;
pub mod table;

use crate::config::FormatterConfig;
use crate::error::Result;
use crate::table::InstructionTable;

/// Turns the embedded 6502 mnemonic list into `instructions.csv`.
pub struct Formatter {
    config: FormatterConfig,
    table: InstructionTable,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            table: InstructionTable::builtin(),
        }
    }

    pub fn with_table(config: FormatterConfig, table: InstructionTable) -> Self {
        Self { config, table }
    }

    pub fn table(&self) -> &InstructionTable {
        &self.table
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Returns the number of data rows written.
    pub fn run(&self) -> Result<usize> {
        export::export_to_path(&self.table, &self.config.output)?;
        Ok(self.table.len())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

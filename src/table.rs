use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Mnemonics are the first 3 characters of a line, the rest is the description.
pub const MNEMONIC_LEN: usize = 3;

/// Official NMOS 6502 instruction set, one mnemonic per line.
pub const SOURCE: &str = "\
ADC add with carry\n\
AND and (with accumulator)\n\
ASL arithmetic shift left\n\
BCC branch on carry clear\n\
BCS branch on carry set\n\
BEQ branch on equal (zero set)\n\
BIT bit test\n\
BMI branch on minus (negative set)\n\
BNE branch on not equal (zero clear)\n\
BPL branch on plus (negative clear)\n\
BRK break / interrupt\n\
BVC branch on overflow clear\n\
BVS branch on overflow set\n\
CLC clear carry\n\
CLD clear decimal\n\
CLI clear interrupt disable\n\
CLV clear overflow\n\
CMP compare (with accumulator)\n\
CPX compare with X\n\
CPY compare with Y\n\
DEC decrement\n\
DEX decrement X\n\
DEY decrement Y\n\
EOR exclusive or (with accumulator)\n\
INC increment\n\
INX increment X\n\
INY increment Y\n\
JMP jump\n\
JSR jump subroutine\n\
LDA load accumulator\n\
LDX load X\n\
LDY load Y\n\
LSR logical shift right\n\
NOP no operation\n\
ORA or with accumulator\n\
PHA push accumulator\n\
PHP push processor status (SR)\n\
PLA pull accumulator\n\
PLP pull processor status (SR)\n\
ROL rotate left\n\
ROR rotate right\n\
RTI return from interrupt\n\
RTS return from subroutine\n\
SBC subtract with carry\n\
SEC set carry\n\
SED set decimal\n\
SEI set interrupt disable\n\
STA store accumulator\n\
STX store X\n\
STY store Y\n\
TAX transfer accumulator to X\n\
TAY transfer accumulator to Y\n\
TSX transfer stack pointer to X\n\
TXA transfer X to accumulator\n\
TXS transfer X to stack pointer\n\
TYA transfer Y to accumulator";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionRecord {
    #[serde(rename = "Instruction")]
    pub mnemonic: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl InstructionRecord {
    pub fn new(mnemonic: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            description: description.into(),
        }
    }
}

/// Split one source line into (mnemonic, description).
/// Splits on a char boundary, so a short line yields the whole line as mnemonic
/// and an empty description.
pub fn split_line(line: &str) -> InstructionRecord {
    let split_at = line
        .char_indices()
        .nth(MNEMONIC_LEN)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    let (mnemonic, rest) = line.split_at(split_at);

    InstructionRecord::new(mnemonic, rest.trim())
}

/// Mnemonic -> description mapping that remembers first-insertion order.
///
/// Re-inserting a mnemonic replaces its description but keeps the row where
/// the mnemonic was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionTable {
    records: Vec<InstructionRecord>,
    index: HashMap<String, usize>,
}

impl InstructionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::parse(SOURCE)
    }

    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        let mut lines = 0usize;

        for line in text.trim().split('\n') {
            table.insert(split_line(line));
            lines += 1;
        }

        debug!(lines, mnemonics = table.len(), "parsed instruction table");
        table
    }

    /// Returns true when an earlier description for the same mnemonic was replaced.
    pub fn insert(&mut self, record: InstructionRecord) -> bool {
        match self.index.get(&record.mnemonic) {
            Some(&slot) => {
                let previous = &mut self.records[slot];
                warn!(
                    mnemonic = %record.mnemonic,
                    old = %previous.description,
                    new = %record.description,
                    "duplicate mnemonic, keeping the later description"
                );
                previous.description = record.description;
                true
            }
            None => {
                self.index.insert(record.mnemonic.clone(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.index
            .get(mnemonic)
            .map(|&slot| self.records[slot].description.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstructionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[InstructionRecord] {
        &self.records
    }
}

use std::fmt::{self, Display, Formatter};

use super::arch;

/// The two platform facts the probe prints, resolved at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub word_bit: u32,
    pub word_size: usize
}

impl Report {
    pub fn probe() -> Self { Report { word_bit: arch::WORD_BIT, word_size: arch::WORD_SIZE } }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "LONG_BIT: {}", self.word_bit)?;
        writeln!(f, "sizeof(long): {}", self.word_size)
    }
}

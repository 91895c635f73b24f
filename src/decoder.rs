use serde::{Deserialize, Serialize};

/// Field view of a single SIMP instruction word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decoded {
    pub opcode: u8,
    pub rd: u8,
    pub rs: u8,
    pub rt: u8,
    /// Immediate spans the following word when set.
    pub bigimm: bool,
    /// Sign-extended 8-bit immediate, or the full low word for bigimm forms.
    pub imm: i32,
}

pub trait Decoder {
    fn decode(&self, word: u32) -> Decoded;
}

use crate::decoder::Decoded;
use crate::instructions::{mnemonic, reg_name};

pub fn fmt_decoded(d: &Decoded) -> String {
    format!(
        "{} {}, {}, {}, {}",
        mnemonic(d.opcode),
        reg_name(d.rd),
        reg_name(d.rs),
        reg_name(d.rt),
        d.imm
    )
}

/// Mnemonics in opcode order (0..=21).
pub const OPCODES: &[&str] = &[
    "add", "sub", "mul", "and", "or", "xor", "sll", "sra", "srl", "beq",
    "bne", "blt", "bgt", "ble", "bge", "jal", "lw", "sw", "reti", "in",
    "out", "halt",
];

/// Conventional register names, indexed by the 4-bit register fields.
pub const REGISTERS: &[&str] = &[
    "$zero", "$imm", "$v0", "$a0", "$a1", "$a2", "$a3", "$t0",
    "$t1", "$t2", "$s0", "$s1", "$s2", "$gp", "$sp", "$ra",
];

pub fn mnemonic(opcode: u8) -> String {
    match OPCODES.get(opcode as usize) {
        Some(m) => (*m).to_string(),
        None => format!("OP_{opcode}"),
    }
}

pub fn reg_name(index: u8) -> String {
    match REGISTERS.get(index as usize) {
        Some(r) => (*r).to_string(),
        None => format!("r{index}"),
    }
}

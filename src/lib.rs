pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod listing;

pub mod isa {
    pub mod simp; // SIMP fixed-width educational ISA
}

pub use decoder::{Decoded, Decoder};
pub use listing::{decode_lines, scan, Entry};

use simp_rs::decoder::Decoder;
use simp_rs::disasm::fmt_decoded;
use simp_rs::isa::simp::SimpDecoder;

// Fields: opcode:31..24, rd:23..20, rs:19..16, rt:15..12, bigimm:8, imm8:7..0
fn enc(opcode: u32, rd: u32, rs: u32, rt: u32, bigimm: u32, imm8: u32) -> u32 {
    ((opcode & 0xFF) << 24)
        | ((rd & 0xF) << 20)
        | ((rs & 0xF) << 16)
        | ((rt & 0xF) << 12)
        | ((bigimm & 1) << 8)
        | (imm8 & 0xFF)
}

#[test]
fn disasm_add_sub() {
    let dec = SimpDecoder::new();

    let d = dec.decode(enc(0, 2, 3, 0, 0, 0));
    assert_eq!(fmt_decoded(&d), "add $v0, $a0, $zero, 0");

    let d = dec.decode(enc(1, 7, 8, 9, 0, 5));
    assert_eq!(fmt_decoded(&d), "sub $t0, $t1, $t2, 5");
}

#[test]
fn every_known_opcode_uses_its_mnemonic() {
    let dec = SimpDecoder::new();
    let expected = [
        "add", "sub", "mul", "and", "or", "xor", "sll", "sra", "srl", "beq",
        "bne", "blt", "bgt", "ble", "bge", "jal", "lw", "sw", "reti", "in",
        "out", "halt",
    ];
    for (op, want) in expected.iter().enumerate() {
        let d = dec.decode(enc(op as u32, 0, 0, 0, 0, 0));
        assert_eq!(fmt_decoded(&d), format!("{want} $zero, $zero, $zero, 0"));
    }
}

#[test]
fn unknown_opcode_synthesizes_label() {
    let dec = SimpDecoder::new();
    let d = dec.decode(enc(22, 0, 0, 0, 0, 0));
    assert_eq!(fmt_decoded(&d), "OP_22 $zero, $zero, $zero, 0");

    let d = dec.decode(enc(255, 0, 0, 0, 0, 0));
    assert_eq!(fmt_decoded(&d), "OP_255 $zero, $zero, $zero, 0");
}

#[test]
fn register_names_cover_all_sixteen() {
    let dec = SimpDecoder::new();
    let names = [
        "$zero", "$imm", "$v0", "$a0", "$a1", "$a2", "$a3", "$t0",
        "$t1", "$t2", "$s0", "$s1", "$s2", "$gp", "$sp", "$ra",
    ];
    for (r, want) in names.iter().enumerate() {
        let d = dec.decode(enc(0, r as u32, 0, 0, 0, 0));
        assert!(fmt_decoded(&d).starts_with(&format!("add {want}, ")));
    }
}

#[test]
fn imm8_sign_extension() {
    let dec = SimpDecoder::new();
    assert_eq!(dec.decode(enc(0, 0, 0, 0, 0, 127)).imm, 127);
    assert_eq!(dec.decode(enc(0, 0, 0, 0, 0, 128)).imm, -128);
    assert_eq!(dec.decode(enc(0, 0, 0, 0, 0, 255)).imm, -1);
}

#[test]
fn encode_decode_round_trip() {
    let dec = SimpDecoder::new();
    let d = dec.decode(enc(9, 4, 5, 6, 0, 0x7C));
    assert_eq!(d.opcode, 9);
    assert_eq!((d.rd, d.rs, d.rt), (4, 5, 6));
    assert!(!d.bigimm);
    assert_eq!(d.imm, 124);
    assert_eq!(fmt_decoded(&d), "beq $a1, $a2, $a3, 124");
}

use crate::constants::INSTR_MAX_LEN;
use crate::instructions::{opcode_search, OPCODES};
use crate::operand::OperandKind;

#[test]
fn search_is_case_insensitive() {
    assert_eq!(opcode_search("LD").unwrap().mnemonic, "ld");
    assert_eq!(opcode_search("DjNz").unwrap().mnemonic, "djnz");
}

#[test]
fn search_rejects_unknown_mnemonics() {
    assert!(opcode_search("mov").is_none());
    assert!(opcode_search("").is_none());
}

#[test]
fn every_template_is_consistent() {
    for opcode in OPCODES {
        assert!(!opcode.instrs.is_empty(), "{} has no templates", opcode.mnemonic);
        for instr in opcode.instrs {
            let size = instr.size as usize;
            assert!(size >= 1 && size <= INSTR_MAX_LEN);
            for slot in [instr.op1_off, instr.op2_off].iter().flatten() {
                assert!(
                    (*slot as usize) < size,
                    "{} has an operand slot outside its template",
                    opcode.mnemonic
                );
            }
        }
    }
}

#[test]
fn first_match_wins_for_overlapping_forms() {
    let sub = opcode_search("sub").unwrap();

    // `sub b` and `sub a, b` are distinct table rows with the same bytes.
    let bare = sub.match_operands(OperandKind::B, OperandKind::None).unwrap();
    assert_eq!(bare.template(), [0x90]);
    assert_eq!(bare.op2, OperandKind::None);

    let accumulator = sub.match_operands(OperandKind::A, OperandKind::B).unwrap();
    assert_eq!(accumulator.template(), [0x90]);
    assert_eq!(accumulator.op2, OperandKind::B);
}

#[test]
fn generic_immediate_casts_to_template_kinds() {
    let jp = opcode_search("jp").unwrap();
    let instr = jp.match_operands(OperandKind::Imm, OperandKind::None).unwrap();
    assert_eq!(instr.op1, OperandKind::Imm16);
    assert_eq!(instr.bytes[0], 0xC3);

    let jr = opcode_search("jr").unwrap();
    let instr = jr.match_operands(OperandKind::Imm, OperandKind::None).unwrap();
    assert_eq!(instr.op1, OperandKind::Rel);
    assert_eq!(instr.bytes[0], 0x18);

    let rst = opcode_search("rst").unwrap();
    let instr = rst.match_operands(OperandKind::Imm, OperandKind::None).unwrap();
    assert_eq!(instr.op1, OperandKind::Rst);
}

#[test]
fn generic_immediate_does_not_match_register_templates() {
    let ld = opcode_search("ld").unwrap();
    assert!(ld.match_operands(OperandKind::Imm, OperandKind::A).is_none());
}

#[test]
fn generic_extended_casts_to_port() {
    let input = opcode_search("in").unwrap();
    let instr = input
        .match_operands(OperandKind::A, OperandKind::Ext)
        .unwrap();
    assert_eq!(instr.op2, OperandKind::Port);
    assert_eq!(instr.bytes[0], 0xDB);
}

#[test]
fn extended_load_prefers_the_ext_row() {
    let ld = opcode_search("ld").unwrap();

    let load = ld.match_operands(OperandKind::Hl, OperandKind::Ext).unwrap();
    assert_eq!(load.template(), [0x2A, 0x00, 0x00]);

    let store = ld.match_operands(OperandKind::Ext, OperandKind::Hl).unwrap();
    assert_eq!(store.template(), [0x22, 0x00, 0x00]);
}

#[test]
fn register_load_grid_spot_checks() {
    let ld = opcode_search("ld").unwrap();
    let cases = [
        (OperandKind::B, OperandKind::C, 0x41),
        (OperandKind::C, OperandKind::D, 0x4A),
        (OperandKind::E, OperandKind::H, 0x5C),
        (OperandKind::A, OperandKind::IndHl, 0x7E),
        (OperandKind::IndHl, OperandKind::A, 0x77),
    ];
    for &(op1, op2, byte) in &cases {
        let instr = ld.match_operands(op1, op2).unwrap();
        assert_eq!(instr.template(), [byte]);
    }
}

#[test]
fn index_prefixes_are_not_swapped() {
    let inc = opcode_search("inc").unwrap();
    let ix = inc.match_operands(OperandKind::Ix, OperandKind::None).unwrap();
    assert_eq!(ix.template(), [0xDD, 0x23]);
    let iy = inc.match_operands(OperandKind::Iy, OperandKind::None).unwrap();
    assert_eq!(iy.template(), [0xFD, 0x23]);
}

#[test]
fn push_uses_the_push_encodings() {
    let push = opcode_search("push").unwrap();
    let af = push.match_operands(OperandKind::Af, OperandKind::None).unwrap();
    assert_eq!(af.template(), [0xF5]);
    let bc = push.match_operands(OperandKind::Bc, OperandKind::None).unwrap();
    assert_eq!(bc.template(), [0xC5]);
}

#[test]
fn rotate_register_a_through_cb() {
    // `rlc a` is the two-byte CB form; the one-byte 0x07 is `rlca`.
    let rlc = opcode_search("rlc").unwrap();
    let a = rlc.match_operands(OperandKind::A, OperandKind::None).unwrap();
    assert_eq!(a.template(), [0xCB, 0x07]);

    let rlca = opcode_search("rlca").unwrap();
    let instr = rlca
        .match_operands(OperandKind::None, OperandKind::None)
        .unwrap();
    assert_eq!(instr.template(), [0x07]);
}

#[test]
fn bit_templates_point_at_the_final_opcode_byte() {
    let bit = opcode_search("bit").unwrap();

    let reg = bit.match_operands(OperandKind::Bit, OperandKind::A).unwrap();
    assert_eq!(reg.op1_off, Some(1));
    assert_eq!(reg.template(), [0xCB, 0x47]);

    let indexed = bit
        .match_operands(OperandKind::Bit, OperandKind::IndIx)
        .unwrap();
    assert_eq!(indexed.op1_off, Some(3));
    assert_eq!(indexed.op2_off, Some(2));
    assert_eq!(indexed.template(), [0xDD, 0xCB, 0x00, 0x46]);
}

#[test]
fn restart_and_interrupt_mode_slots() {
    let rst = opcode_search("rst").unwrap().instrs[0];
    assert_eq!(rst.op1_off, Some(0));
    assert_eq!(rst.template(), [0xC7]);

    let im = opcode_search("im").unwrap().instrs[0];
    assert_eq!(im.op1_off, Some(1));
    assert_eq!(im.template(), [0xED, 0x46]);
}

#[test]
fn block_instructions_carry_the_ed_prefix() {
    for (mnemonic, second) in [
        ("ldi", 0xA0u8),
        ("ldir", 0xB0),
        ("ldd", 0xA8),
        ("lddr", 0xB8),
        ("cpi", 0xA1),
        ("otir", 0xB3),
        ("outir", 0xB3),
    ]
    .iter()
    {
        let instr = opcode_search(mnemonic).unwrap().instrs[0];
        assert_eq!(instr.template(), [0xED, *second], "{}", mnemonic);
    }
}

#[test]
fn indirect_register_mapping() {
    assert_eq!(OperandKind::Hl.indirect(), Some(OperandKind::IndHl));
    assert_eq!(OperandKind::C.indirect(), Some(OperandKind::IndC));
    assert_eq!(OperandKind::Ix.indirect(), Some(OperandKind::IndIx));
    assert_eq!(OperandKind::B.indirect(), None);
    assert_eq!(OperandKind::Ixh.indirect(), None);
}

#[test]
fn operand_kind_names_parse() {
    assert_eq!("a".parse::<OperandKind>().unwrap(), OperandKind::A);
    assert_eq!("AF'".parse::<OperandKind>().unwrap(), OperandKind::AfShadow);
    assert_eq!("IXH".parse::<OperandKind>().unwrap(), OperandKind::Ixh);
    assert_eq!("nz".parse::<OperandKind>().unwrap(), OperandKind::Nz);
    assert!("q".parse::<OperandKind>().is_err());
}

use super::{assemble_diagnostics, assemble_text};
use crate::{assemble, Error};

#[test]
fn load_immediate_8() {
    assert_eq!(assemble_text("ld a, 0x42"), [0x3E, 0x42]);
}

#[test]
fn load_immediate_16_is_little_endian() {
    assert_eq!(assemble_text("ld hl, 0x1234"), [0x21, 0x34, 0x12]);
}

#[test]
fn relative_jump_to_own_label() {
    // Displacement is measured from the byte after the instruction.
    assert_eq!(assemble_text("label: jr label"), [0x18, 0xFE]);
}

#[test]
fn relative_jump_with_condition() {
    assert_eq!(assemble_text("jr nz, skip\nskip: nop"), [0x20, 0x00, 0x00]);
}

#[test]
fn djnz_backward() {
    assert_eq!(assemble_text("loop: djnz loop"), [0x10, 0xFE]);
}

#[test]
fn restart_vector_is_ored_into_the_opcode() {
    assert_eq!(assemble_text("rst 0x20"), [0xE7]);
}

#[test]
fn interrupt_modes() {
    assert_eq!(assemble_text("im 0"), [0xED, 0x46]);
    assert_eq!(assemble_text("im 1"), [0xED, 0x56]);
    assert_eq!(assemble_text("im 2"), [0xED, 0x5E]);
}

#[test]
fn forward_jump_is_patched_after_the_first_pass() {
    let input = "start: ld a, 0xFF\njp start";
    assert_eq!(assemble_text(input), [0x3E, 0xFF, 0xC3, 0x00, 0x00]);
}

#[test]
fn forward_reference_to_a_later_address() {
    let input = "jp end\nnop\nend: halt";
    assert_eq!(assemble_text(input), [0xC3, 0x04, 0x00, 0x00, 0x76]);
}

#[test]
fn indexed_displacements() {
    assert_eq!(assemble_text("ld b, (ix+5)"), [0xDD, 0x46, 0x05]);
    assert_eq!(assemble_text("ld b, (ix-2)"), [0xDD, 0x46, 0xFE]);
    assert_eq!(assemble_text("ld (iy+1), a"), [0xFD, 0x77, 0x01]);
    assert_eq!(assemble_text("inc (ix)"), [0xDD, 0x34, 0x00]);
}

#[test]
fn extended_loads_both_directions() {
    assert_eq!(assemble_text("ld hl, (0x1234)"), [0x2A, 0x34, 0x12]);
    assert_eq!(assemble_text("ld (0x1234), hl"), [0x22, 0x34, 0x12]);
    assert_eq!(assemble_text("ld a, (0x5678)"), [0x3A, 0x78, 0x56]);
}

#[test]
fn io_ports() {
    assert_eq!(assemble_text("in a, (0x34)"), [0xDB, 0x34]);
    assert_eq!(assemble_text("out (0x12), a"), [0xD3, 0x12]);
    assert_eq!(assemble_text("in b, (c)"), [0xED, 0x40]);
    assert_eq!(assemble_text("out (c), e"), [0xED, 0x59]);
}

#[test]
fn bit_index_scales_into_the_opcode_byte() {
    assert_eq!(assemble_text("bit 7, a"), [0xCB, 0x7F]);
    assert_eq!(assemble_text("set 1, (hl)"), [0xCB, 0xCE]);
    assert_eq!(assemble_text("res 0, b"), [0xCB, 0x80]);
    assert_eq!(assemble_text("bit 3, (ix+2)"), [0xDD, 0xCB, 0x02, 0x5E]);
}

#[test]
fn bare_and_accumulator_arithmetic_agree() {
    assert_eq!(assemble_text("sub b"), assemble_text("sub a, b"));
    assert_eq!(assemble_text("sub 5"), assemble_text("sub a, 5"));
    assert_eq!(assemble_text("sub 5"), [0xD6, 0x05]);
}

#[test]
fn expression_operands_follow_c_precedence() {
    assert_eq!(assemble_text("ld a, 2+3*4"), [0x3E, 0x0E]);
    // A parenthesized operand is a memory reference, so grouping parens
    // only work inside a larger expression.
    assert_eq!(assemble_text("ld a, 4*(2+3)"), [0x3E, 0x14]);
    assert_eq!(assemble_text("ld a, 0xF0 | 2+1"), [0x3E, 0xF3]);
    assert_eq!(assemble_text("ld a, ~0 & 0x0F"), [0x3E, 0x0F]);
    assert_eq!(assemble_text("ld a, -1 & 0xFF"), [0x3E, 0xFF]);
}

#[test]
fn label_arithmetic_with_an_addend() {
    let input = "ld hl, msg+1\nmsg: nop";
    assert_eq!(assemble_text(input), [0x21, 0x04, 0x00, 0x00]);
}

#[test]
fn pc_marker_is_the_current_address() {
    assert_eq!(assemble_text("jp $"), [0xC3, 0x00, 0x00]);
    assert_eq!(assemble_text("nop\njp $"), [0x00, 0xC3, 0x01, 0x00]);
}

#[test]
fn equates_work_in_both_directions() {
    assert_eq!(assemble_text("val equ 0x42\nld a, val"), [0x3E, 0x42]);
    assert_eq!(assemble_text("ld a, val\nval equ 0x42"), [0x3E, 0x42]);
    assert_eq!(assemble_text("val .equ 0x42\nld a, val"), [0x3E, 0x42]);
}

#[test]
fn org_moves_the_cursor_and_pads_with_zeros() {
    let input = ".org 2\nstart: jp start";
    assert_eq!(assemble_text(input), [0x00, 0x00, 0xC3, 0x02, 0x00]);
}

#[test]
fn data_directives() {
    assert_eq!(assemble_text(".db 1, 2, 0xFF"), [0x01, 0x02, 0xFF]);
    assert_eq!(assemble_text(".db -1"), [0xFF]);
    assert_eq!(
        assemble_text(".dw 0x1234, msg\nmsg: nop"),
        [0x34, 0x12, 0x04, 0x00, 0x00]
    );
    assert_eq!(assemble_text(".ds 4\nnop"), [0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn data_section_is_assembled_separately() {
    let input = ".data\nbytes: .db 1, 2\n.text\nnop";
    let output = assemble(input).unwrap();
    assert_eq!(output.text(), [0x00]);
    assert_eq!(output.data(), [0x01, 0x02]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let input = "; leading comment\n\nnop ; trailing\n\n  halt\n";
    assert_eq!(assemble_text(input), [0x00, 0x76]);
}

#[test]
fn mnemonics_are_case_insensitive() {
    assert_eq!(assemble_text("LD A, 0x42"), [0x3E, 0x42]);
    assert_eq!(assemble_text("Jp 0"), [0xC3, 0x00, 0x00]);
}

#[test]
fn undefined_symbol_is_reported_at_finalize() {
    let diagnostics = assemble_diagnostics("ld a, missing");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 1);
    assert!(diagnostics[0].message.contains("missing"));
}

#[test]
fn relative_jump_out_of_range_is_reported() {
    let diagnostics = assemble_diagnostics("jr far\n.org 200\nfar: nop");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 1);
    assert!(diagnostics[0].message.contains("out of range"));
}

#[test]
fn immediate_out_of_range_is_reported() {
    let diagnostics = assemble_diagnostics("ld a, 300");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("out of range"));
}

#[test]
fn duplicate_label_is_rejected() {
    let diagnostics = assemble_diagnostics("foo: nop\nfoo: nop");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 2);
    assert!(diagnostics[0].message.contains("already defined"));
}

#[test]
fn unknown_mnemonic_is_rejected() {
    let diagnostics = assemble_diagnostics("frob a");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("frob"));
}

#[test]
fn unmatched_operands_are_rejected() {
    let diagnostics = assemble_diagnostics("ld a, hl");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("ld"));
}

#[test]
fn mixed_section_arithmetic_is_reported() {
    let diagnostics = assemble_diagnostics("ld hl, one + two\none: nop\ntwo: nop");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 1);
    assert!(diagnostics[0].message.contains("absolute"));
}

#[test]
fn division_by_zero_is_reported() {
    let diagnostics = assemble_diagnostics("ld a, 1/0");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("division by zero"));
}

#[test]
fn several_diagnostics_in_one_run() {
    let diagnostics = assemble_diagnostics("frob a\nld a, missing");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[1].line, 2);
}

#[test]
fn syntax_errors_are_parse_errors() {
    assert!(matches!(assemble("ld a,"), Err(Error::Parse(_))));
    assert!(matches!(assemble("???"), Err(Error::Parse(_))));
}

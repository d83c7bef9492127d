//! The opcode catalog: every mnemonic with its list of concrete encodings.
//!
//! Each [`Instruction`](struct.Instruction.html) is one template: a base byte
//! pattern, its length, and the offsets at which operand values are laid in.
//! A template whose operand carries no data (a register, a condition flag)
//! has no offset for that operand; the selection of the template itself is
//! the encoding.
//!
//! Template order within a table is part of the encoding contract:
//! [`Opcode::match_operands`](struct.Opcode.html#method.match_operands)
//! returns the first compatible template, so overlapping forms (`sub b`
//! versus `sub a, b`, `jp nn` versus `jp (hl)`) are disambiguated by their
//! position in the table.

use crate::constants::INSTR_MAX_LEN;
use crate::operand::OperandKind;

/// One concrete encoding of a mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Required kind of the first operand.
    pub op1: OperandKind,
    /// Required kind of the second operand.
    pub op2: OperandKind,
    /// Template length in bytes.
    pub size: u8,
    /// Offset into the template at which the first operand's value is
    /// written, if it carries one.
    pub op1_off: Option<u8>,
    /// Offset into the template at which the second operand's value is
    /// written, if it carries one.
    pub op2_off: Option<u8>,
    /// The template's base byte pattern; only the first `size` bytes are
    /// meaningful.
    pub bytes: [u8; INSTR_MAX_LEN],
}

impl Instruction {
    /// The meaningful prefix of the byte pattern.
    pub fn template(&self) -> &[u8] {
        &self.bytes[..self.size as usize]
    }
}

/// The templates registered for one mnemonic.
#[derive(Clone, Copy, Debug)]
pub struct Opcode {
    pub mnemonic: &'static str,
    pub instrs: &'static [Instruction],
}

const fn off(slot: i8) -> Option<u8> {
    if slot < 0 {
        None
    } else {
        Some(slot as u8)
    }
}

const fn template<const N: usize>(src: [u8; N]) -> [u8; INSTR_MAX_LEN] {
    let mut bytes = [0u8; INSTR_MAX_LEN];
    let mut i = 0;
    while i < N {
        bytes[i] = src[i];
        i += 1;
    }
    bytes
}

macro_rules! instr {
    ($op1:ident, $op2:ident, $size:expr, $off1:expr, $off2:expr, [$($byte:expr),+ $(,)?]) => {
        Instruction {
            op1: OperandKind::$op1,
            op2: OperandKind::$op2,
            size: $size,
            op1_off: off($off1),
            op2_off: off($off2),
            bytes: template([$($byte),+]),
        }
    };
}

static LD: &[Instruction] = &[
    instr!(Bc,    Imm16, 3, -1,  1, [0x01, 0x00, 0x00]),
    instr!(De,    Imm16, 3, -1,  1, [0x11, 0x00, 0x00]),
    instr!(Hl,    Imm16, 3, -1,  1, [0x21, 0x00, 0x00]),
    instr!(Sp,    Imm16, 3, -1,  1, [0x31, 0x00, 0x00]),
    instr!(Ix,    Imm16, 4, -1,  2, [0xDD, 0x21, 0x00, 0x00]),
    instr!(Iy,    Imm16, 4, -1,  2, [0xFD, 0x21, 0x00, 0x00]),

    instr!(Bc,    Ext,   4, -1,  2, [0xED, 0x4B, 0x00, 0x00]),
    instr!(De,    Ext,   4, -1,  2, [0xED, 0x5B, 0x00, 0x00]),
    instr!(Hl,    Ext,   3, -1,  1, [0x2A, 0x00, 0x00]),
    instr!(Sp,    Ext,   4, -1,  2, [0xED, 0x7B, 0x00, 0x00]),
    instr!(Ix,    Ext,   4, -1,  2, [0xDD, 0x2A, 0x00, 0x00]),
    instr!(Iy,    Ext,   4, -1,  2, [0xFD, 0x2A, 0x00, 0x00]),

    instr!(Ext,   Bc,    4,  2, -1, [0xED, 0x43, 0x00, 0x00]),
    instr!(Ext,   De,    4,  2, -1, [0xED, 0x53, 0x00, 0x00]),
    instr!(Ext,   Hl,    3,  1, -1, [0x22, 0x00, 0x00]),
    instr!(Ext,   Sp,    4,  2, -1, [0xED, 0x73, 0x00, 0x00]),
    instr!(Ext,   Ix,    4,  2, -1, [0xDD, 0x22, 0x00, 0x00]),
    instr!(Ext,   Iy,    4,  2, -1, [0xFD, 0x22, 0x00, 0x00]),

    instr!(Sp,    Hl,    1, -1, -1, [0xF9]),
    instr!(Sp,    Ix,    2, -1, -1, [0xDD, 0xF9]),
    instr!(Sp,    Iy,    2, -1, -1, [0xFD, 0xF9]),

    instr!(A,     IndBc, 1, -1, -1, [0x0A]),
    instr!(A,     IndDe, 1, -1, -1, [0x1A]),
    instr!(IndBc, A,     1, -1, -1, [0x02]),
    instr!(IndDe, A,     1, -1, -1, [0x12]),

    instr!(A,     Ext,   3, -1,  1, [0x3A, 0x00, 0x00]),
    instr!(Ext,   A,     3,  1, -1, [0x32, 0x00, 0x00]),

    instr!(IndIx, Imm8,  4,  2,  3, [0xDD, 0x36, 0x00, 0x00]),
    instr!(IndIy, Imm8,  4,  2,  3, [0xFD, 0x36, 0x00, 0x00]),

    instr!(B,     Imm8,  2, -1,  1, [0x06, 0x00]),
    instr!(C,     Imm8,  2, -1,  1, [0x0E, 0x00]),
    instr!(D,     Imm8,  2, -1,  1, [0x16, 0x00]),
    instr!(E,     Imm8,  2, -1,  1, [0x1E, 0x00]),
    instr!(H,     Imm8,  2, -1,  1, [0x26, 0x00]),
    instr!(L,     Imm8,  2, -1,  1, [0x2E, 0x00]),
    instr!(IndHl, Imm8,  2, -1,  1, [0x36, 0x00]),
    instr!(A,     Imm8,  2, -1,  1, [0x3E, 0x00]),

    instr!(B,     B,     1, -1, -1, [0x40]),
    instr!(B,     C,     1, -1, -1, [0x41]),
    instr!(B,     D,     1, -1, -1, [0x42]),
    instr!(B,     E,     1, -1, -1, [0x43]),
    instr!(B,     H,     1, -1, -1, [0x44]),
    instr!(B,     L,     1, -1, -1, [0x45]),
    instr!(B,     IndHl, 1, -1, -1, [0x46]),
    instr!(B,     A,     1, -1, -1, [0x47]),

    instr!(C,     B,     1, -1, -1, [0x48]),
    instr!(C,     C,     1, -1, -1, [0x49]),
    instr!(C,     D,     1, -1, -1, [0x4A]),
    instr!(C,     E,     1, -1, -1, [0x4B]),
    instr!(C,     H,     1, -1, -1, [0x4C]),
    instr!(C,     L,     1, -1, -1, [0x4D]),
    instr!(C,     IndHl, 1, -1, -1, [0x4E]),
    instr!(C,     A,     1, -1, -1, [0x4F]),

    instr!(D,     B,     1, -1, -1, [0x50]),
    instr!(D,     C,     1, -1, -1, [0x51]),
    instr!(D,     D,     1, -1, -1, [0x52]),
    instr!(D,     E,     1, -1, -1, [0x53]),
    instr!(D,     H,     1, -1, -1, [0x54]),
    instr!(D,     L,     1, -1, -1, [0x55]),
    instr!(D,     IndHl, 1, -1, -1, [0x56]),
    instr!(D,     A,     1, -1, -1, [0x57]),

    instr!(E,     B,     1, -1, -1, [0x58]),
    instr!(E,     C,     1, -1, -1, [0x59]),
    instr!(E,     D,     1, -1, -1, [0x5A]),
    instr!(E,     E,     1, -1, -1, [0x5B]),
    instr!(E,     H,     1, -1, -1, [0x5C]),
    instr!(E,     L,     1, -1, -1, [0x5D]),
    instr!(E,     IndHl, 1, -1, -1, [0x5E]),
    instr!(E,     A,     1, -1, -1, [0x5F]),

    instr!(H,     B,     1, -1, -1, [0x60]),
    instr!(H,     C,     1, -1, -1, [0x61]),
    instr!(H,     D,     1, -1, -1, [0x62]),
    instr!(H,     E,     1, -1, -1, [0x63]),
    instr!(H,     H,     1, -1, -1, [0x64]),
    instr!(H,     L,     1, -1, -1, [0x65]),
    instr!(H,     IndHl, 1, -1, -1, [0x66]),
    instr!(H,     A,     1, -1, -1, [0x67]),

    instr!(L,     B,     1, -1, -1, [0x68]),
    instr!(L,     C,     1, -1, -1, [0x69]),
    instr!(L,     D,     1, -1, -1, [0x6A]),
    instr!(L,     E,     1, -1, -1, [0x6B]),
    instr!(L,     H,     1, -1, -1, [0x6C]),
    instr!(L,     L,     1, -1, -1, [0x6D]),
    instr!(L,     IndHl, 1, -1, -1, [0x6E]),
    instr!(L,     A,     1, -1, -1, [0x6F]),

    instr!(IndHl, B,     1, -1, -1, [0x70]),
    instr!(IndHl, C,     1, -1, -1, [0x71]),
    instr!(IndHl, D,     1, -1, -1, [0x72]),
    instr!(IndHl, E,     1, -1, -1, [0x73]),
    instr!(IndHl, H,     1, -1, -1, [0x74]),
    instr!(IndHl, L,     1, -1, -1, [0x75]),
    instr!(IndHl, A,     1, -1, -1, [0x77]),

    instr!(A,     B,     1, -1, -1, [0x78]),
    instr!(A,     C,     1, -1, -1, [0x79]),
    instr!(A,     D,     1, -1, -1, [0x7A]),
    instr!(A,     E,     1, -1, -1, [0x7B]),
    instr!(A,     H,     1, -1, -1, [0x7C]),
    instr!(A,     L,     1, -1, -1, [0x7D]),
    instr!(A,     IndHl, 1, -1, -1, [0x7E]),
    instr!(A,     A,     1, -1, -1, [0x7F]),

    instr!(B,     IndIx, 3, -1,  2, [0xDD, 0x46, 0x00]),
    instr!(C,     IndIx, 3, -1,  2, [0xDD, 0x4E, 0x00]),
    instr!(D,     IndIx, 3, -1,  2, [0xDD, 0x56, 0x00]),
    instr!(E,     IndIx, 3, -1,  2, [0xDD, 0x5E, 0x00]),
    instr!(H,     IndIx, 3, -1,  2, [0xDD, 0x66, 0x00]),
    instr!(L,     IndIx, 3, -1,  2, [0xDD, 0x6E, 0x00]),
    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0x7E, 0x00]),

    instr!(IndIx, B,     3,  2, -1, [0xDD, 0x70, 0x00]),
    instr!(IndIx, C,     3,  2, -1, [0xDD, 0x71, 0x00]),
    instr!(IndIx, D,     3,  2, -1, [0xDD, 0x72, 0x00]),
    instr!(IndIx, E,     3,  2, -1, [0xDD, 0x73, 0x00]),
    instr!(IndIx, H,     3,  2, -1, [0xDD, 0x74, 0x00]),
    instr!(IndIx, L,     3,  2, -1, [0xDD, 0x75, 0x00]),
    instr!(IndIx, A,     3,  2, -1, [0xDD, 0x77, 0x00]),

    instr!(B,     IndIy, 3, -1,  2, [0xFD, 0x46, 0x00]),
    instr!(C,     IndIy, 3, -1,  2, [0xFD, 0x4E, 0x00]),
    instr!(D,     IndIy, 3, -1,  2, [0xFD, 0x56, 0x00]),
    instr!(E,     IndIy, 3, -1,  2, [0xFD, 0x5E, 0x00]),
    instr!(H,     IndIy, 3, -1,  2, [0xFD, 0x66, 0x00]),
    instr!(L,     IndIy, 3, -1,  2, [0xFD, 0x6E, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0x7E, 0x00]),

    instr!(IndIy, B,     3,  2, -1, [0xFD, 0x70, 0x00]),
    instr!(IndIy, C,     3,  2, -1, [0xFD, 0x71, 0x00]),
    instr!(IndIy, D,     3,  2, -1, [0xFD, 0x72, 0x00]),
    instr!(IndIy, E,     3,  2, -1, [0xFD, 0x73, 0x00]),
    instr!(IndIy, H,     3,  2, -1, [0xFD, 0x74, 0x00]),
    instr!(IndIy, L,     3,  2, -1, [0xFD, 0x75, 0x00]),
    instr!(IndIy, A,     3,  2, -1, [0xFD, 0x77, 0x00]),

    instr!(A,     I,     2, -1, -1, [0xED, 0x57]),
    instr!(A,     R,     2, -1, -1, [0xED, 0x5F]),
    instr!(I,     A,     2, -1, -1, [0xED, 0x47]),
    instr!(R,     A,     2, -1, -1, [0xED, 0x4F]),

    // Undocumented index-half forms.
    instr!(A,     Ixh,   2, -1, -1, [0xDD, 0x7C]),
    instr!(A,     Ixl,   2, -1, -1, [0xDD, 0x7D]),
    instr!(A,     Iyh,   2, -1, -1, [0xFD, 0x7C]),
    instr!(A,     Iyl,   2, -1, -1, [0xFD, 0x7D]),
    instr!(Ixh,   Imm8,  3, -1,  2, [0xDD, 0x26, 0x00]),
    instr!(Ixl,   Imm8,  3, -1,  2, [0xDD, 0x2E, 0x00]),
    instr!(Iyh,   Imm8,  3, -1,  2, [0xFD, 0x26, 0x00]),
    instr!(Iyl,   Imm8,  3, -1,  2, [0xFD, 0x2E, 0x00]),
];

static PUSH: &[Instruction] = &[
    instr!(Bc,    None,  1, -1, -1, [0xC5]),
    instr!(De,    None,  1, -1, -1, [0xD5]),
    instr!(Hl,    None,  1, -1, -1, [0xE5]),
    instr!(Af,    None,  1, -1, -1, [0xF5]),
    instr!(Ix,    None,  2, -1, -1, [0xDD, 0xE5]),
    instr!(Iy,    None,  2, -1, -1, [0xFD, 0xE5]),
];

static POP: &[Instruction] = &[
    instr!(Bc,    None,  1, -1, -1, [0xC1]),
    instr!(De,    None,  1, -1, -1, [0xD1]),
    instr!(Hl,    None,  1, -1, -1, [0xE1]),
    instr!(Af,    None,  1, -1, -1, [0xF1]),
    instr!(Ix,    None,  2, -1, -1, [0xDD, 0xE1]),
    instr!(Iy,    None,  2, -1, -1, [0xFD, 0xE1]),
];

static EX: &[Instruction] = &[
    instr!(Af,    AfShadow, 1, -1, -1, [0x08]),
    instr!(De,    Hl,    1, -1, -1, [0xEB]),
    instr!(IndSp, Hl,    1, -1, -1, [0xE3]),
    instr!(IndSp, Ix,    2, -1, -1, [0xDD, 0xE3]),
    instr!(IndSp, Iy,    2, -1, -1, [0xFD, 0xE3]),
];

static EXX: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0xD9]),
];

static LDI: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA0]),
];

static LDIR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB0]),
];

static LDD: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA8]),
];

static LDDR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB8]),
];

static CPI: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA1]),
];

static CPIR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB1]),
];

static CPD: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA9]),
];

static CPDR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB9]),
];

static ADD: &[Instruction] = &[
    instr!(A,     B,     1, -1, -1, [0x80]),
    instr!(A,     C,     1, -1, -1, [0x81]),
    instr!(A,     D,     1, -1, -1, [0x82]),
    instr!(A,     E,     1, -1, -1, [0x83]),
    instr!(A,     H,     1, -1, -1, [0x84]),
    instr!(A,     L,     1, -1, -1, [0x85]),
    instr!(A,     IndHl, 1, -1, -1, [0x86]),
    instr!(A,     A,     1, -1, -1, [0x87]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0x86, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0x86, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xC6, 0x00]),

    instr!(Hl,    Bc,    1, -1, -1, [0x09]),
    instr!(Hl,    De,    1, -1, -1, [0x19]),
    instr!(Hl,    Hl,    1, -1, -1, [0x29]),
    instr!(Hl,    Sp,    1, -1, -1, [0x39]),

    instr!(Ix,    Bc,    2, -1, -1, [0xDD, 0x09]),
    instr!(Ix,    De,    2, -1, -1, [0xDD, 0x19]),
    instr!(Ix,    Ix,    2, -1, -1, [0xDD, 0x29]),
    instr!(Ix,    Sp,    2, -1, -1, [0xDD, 0x39]),

    instr!(Iy,    Bc,    2, -1, -1, [0xFD, 0x09]),
    instr!(Iy,    De,    2, -1, -1, [0xFD, 0x19]),
    instr!(Iy,    Iy,    2, -1, -1, [0xFD, 0x29]),
    instr!(Iy,    Sp,    2, -1, -1, [0xFD, 0x39]),
];

static ADC: &[Instruction] = &[
    instr!(A,     B,     1, -1, -1, [0x88]),
    instr!(A,     C,     1, -1, -1, [0x89]),
    instr!(A,     D,     1, -1, -1, [0x8A]),
    instr!(A,     E,     1, -1, -1, [0x8B]),
    instr!(A,     H,     1, -1, -1, [0x8C]),
    instr!(A,     L,     1, -1, -1, [0x8D]),
    instr!(A,     IndHl, 1, -1, -1, [0x8E]),
    instr!(A,     A,     1, -1, -1, [0x8F]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0x8E, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0x8E, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xCE, 0x00]),

    instr!(Hl,    Bc,    2, -1, -1, [0xED, 0x4A]),
    instr!(Hl,    De,    2, -1, -1, [0xED, 0x5A]),
    instr!(Hl,    Hl,    2, -1, -1, [0xED, 0x6A]),
    instr!(Hl,    Sp,    2, -1, -1, [0xED, 0x7A]),
];

static SUB: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0x90]),
    instr!(C,     None,  1, -1, -1, [0x91]),
    instr!(D,     None,  1, -1, -1, [0x92]),
    instr!(E,     None,  1, -1, -1, [0x93]),
    instr!(H,     None,  1, -1, -1, [0x94]),
    instr!(L,     None,  1, -1, -1, [0x95]),
    instr!(IndHl, None,  1, -1, -1, [0x96]),
    instr!(A,     None,  1, -1, -1, [0x97]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0x96, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0x96, 0x00]),

    instr!(Imm8,  None,  2,  1, -1, [0xD6, 0x00]),

    instr!(A,     B,     1, -1, -1, [0x90]),
    instr!(A,     C,     1, -1, -1, [0x91]),
    instr!(A,     D,     1, -1, -1, [0x92]),
    instr!(A,     E,     1, -1, -1, [0x93]),
    instr!(A,     H,     1, -1, -1, [0x94]),
    instr!(A,     L,     1, -1, -1, [0x95]),
    instr!(A,     IndHl, 1, -1, -1, [0x96]),
    instr!(A,     A,     1, -1, -1, [0x97]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0x96, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0x96, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xD6, 0x00]),
];

static SBC: &[Instruction] = &[
    instr!(A,     B,     1, -1, -1, [0x98]),
    instr!(A,     C,     1, -1, -1, [0x99]),
    instr!(A,     D,     1, -1, -1, [0x9A]),
    instr!(A,     E,     1, -1, -1, [0x9B]),
    instr!(A,     H,     1, -1, -1, [0x9C]),
    instr!(A,     L,     1, -1, -1, [0x9D]),
    instr!(A,     IndHl, 1, -1, -1, [0x9E]),
    instr!(A,     A,     1, -1, -1, [0x9F]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0x9E, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0x9E, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xDE, 0x00]),

    instr!(Hl,    Bc,    2, -1, -1, [0xED, 0x42]),
    instr!(Hl,    De,    2, -1, -1, [0xED, 0x52]),
    instr!(Hl,    Hl,    2, -1, -1, [0xED, 0x62]),
    instr!(Hl,    Sp,    2, -1, -1, [0xED, 0x72]),
];

static AND: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0xA0]),
    instr!(C,     None,  1, -1, -1, [0xA1]),
    instr!(D,     None,  1, -1, -1, [0xA2]),
    instr!(E,     None,  1, -1, -1, [0xA3]),
    instr!(H,     None,  1, -1, -1, [0xA4]),
    instr!(L,     None,  1, -1, -1, [0xA5]),
    instr!(IndHl, None,  1, -1, -1, [0xA6]),
    instr!(A,     None,  1, -1, -1, [0xA7]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0xA6, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0xA6, 0x00]),

    instr!(Imm8,  None,  2,  1, -1, [0xE6, 0x00]),

    instr!(A,     B,     1, -1, -1, [0xA0]),
    instr!(A,     C,     1, -1, -1, [0xA1]),
    instr!(A,     D,     1, -1, -1, [0xA2]),
    instr!(A,     E,     1, -1, -1, [0xA3]),
    instr!(A,     H,     1, -1, -1, [0xA4]),
    instr!(A,     L,     1, -1, -1, [0xA5]),
    instr!(A,     IndHl, 1, -1, -1, [0xA6]),
    instr!(A,     A,     1, -1, -1, [0xA7]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0xA6, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0xA6, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xE6, 0x00]),
];

static XOR: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0xA8]),
    instr!(C,     None,  1, -1, -1, [0xA9]),
    instr!(D,     None,  1, -1, -1, [0xAA]),
    instr!(E,     None,  1, -1, -1, [0xAB]),
    instr!(H,     None,  1, -1, -1, [0xAC]),
    instr!(L,     None,  1, -1, -1, [0xAD]),
    instr!(IndHl, None,  1, -1, -1, [0xAE]),
    instr!(A,     None,  1, -1, -1, [0xAF]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0xAE, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0xAE, 0x00]),

    instr!(Imm8,  None,  2,  1, -1, [0xEE, 0x00]),

    instr!(A,     B,     1, -1, -1, [0xA8]),
    instr!(A,     C,     1, -1, -1, [0xA9]),
    instr!(A,     D,     1, -1, -1, [0xAA]),
    instr!(A,     E,     1, -1, -1, [0xAB]),
    instr!(A,     H,     1, -1, -1, [0xAC]),
    instr!(A,     L,     1, -1, -1, [0xAD]),
    instr!(A,     IndHl, 1, -1, -1, [0xAE]),
    instr!(A,     A,     1, -1, -1, [0xAF]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0xAE, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0xAE, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xEE, 0x00]),
];

static OR: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0xB0]),
    instr!(C,     None,  1, -1, -1, [0xB1]),
    instr!(D,     None,  1, -1, -1, [0xB2]),
    instr!(E,     None,  1, -1, -1, [0xB3]),
    instr!(H,     None,  1, -1, -1, [0xB4]),
    instr!(L,     None,  1, -1, -1, [0xB5]),
    instr!(IndHl, None,  1, -1, -1, [0xB6]),
    instr!(A,     None,  1, -1, -1, [0xB7]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0xB6, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0xB6, 0x00]),

    instr!(Imm8,  None,  2,  1, -1, [0xF6, 0x00]),

    instr!(A,     B,     1, -1, -1, [0xB0]),
    instr!(A,     C,     1, -1, -1, [0xB1]),
    instr!(A,     D,     1, -1, -1, [0xB2]),
    instr!(A,     E,     1, -1, -1, [0xB3]),
    instr!(A,     H,     1, -1, -1, [0xB4]),
    instr!(A,     L,     1, -1, -1, [0xB5]),
    instr!(A,     IndHl, 1, -1, -1, [0xB6]),
    instr!(A,     A,     1, -1, -1, [0xB7]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0xB6, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0xB6, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xF6, 0x00]),
];

static CP: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0xB8]),
    instr!(C,     None,  1, -1, -1, [0xB9]),
    instr!(D,     None,  1, -1, -1, [0xBA]),
    instr!(E,     None,  1, -1, -1, [0xBB]),
    instr!(H,     None,  1, -1, -1, [0xBC]),
    instr!(L,     None,  1, -1, -1, [0xBD]),
    instr!(IndHl, None,  1, -1, -1, [0xBE]),
    instr!(A,     None,  1, -1, -1, [0xBF]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0xBE, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0xBE, 0x00]),

    instr!(Imm8,  None,  2,  1, -1, [0xFE, 0x00]),

    instr!(A,     B,     1, -1, -1, [0xB8]),
    instr!(A,     C,     1, -1, -1, [0xB9]),
    instr!(A,     D,     1, -1, -1, [0xBA]),
    instr!(A,     E,     1, -1, -1, [0xBB]),
    instr!(A,     H,     1, -1, -1, [0xBC]),
    instr!(A,     L,     1, -1, -1, [0xBD]),
    instr!(A,     IndHl, 1, -1, -1, [0xBE]),
    instr!(A,     A,     1, -1, -1, [0xBF]),

    instr!(A,     IndIx, 3, -1,  2, [0xDD, 0xBE, 0x00]),
    instr!(A,     IndIy, 3, -1,  2, [0xFD, 0xBE, 0x00]),

    instr!(A,     Imm8,  2, -1,  1, [0xFE, 0x00]),
];

static INC: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0x04]),
    instr!(C,     None,  1, -1, -1, [0x0C]),
    instr!(D,     None,  1, -1, -1, [0x14]),
    instr!(E,     None,  1, -1, -1, [0x1C]),
    instr!(H,     None,  1, -1, -1, [0x24]),
    instr!(L,     None,  1, -1, -1, [0x2C]),
    instr!(IndHl, None,  1, -1, -1, [0x34]),
    instr!(A,     None,  1, -1, -1, [0x3C]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0x34, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0x34, 0x00]),

    instr!(Bc,    None,  1, -1, -1, [0x03]),
    instr!(De,    None,  1, -1, -1, [0x13]),
    instr!(Hl,    None,  1, -1, -1, [0x23]),
    instr!(Sp,    None,  1, -1, -1, [0x33]),

    instr!(Ix,    None,  2, -1, -1, [0xDD, 0x23]),
    instr!(Iy,    None,  2, -1, -1, [0xFD, 0x23]),

    // Undocumented index-half forms.
    instr!(Ixh,   None,  2, -1, -1, [0xDD, 0x24]),
    instr!(Ixl,   None,  2, -1, -1, [0xDD, 0x2C]),
    instr!(Iyh,   None,  2, -1, -1, [0xFD, 0x24]),
    instr!(Iyl,   None,  2, -1, -1, [0xFD, 0x2C]),
];

static DEC: &[Instruction] = &[
    instr!(B,     None,  1, -1, -1, [0x05]),
    instr!(C,     None,  1, -1, -1, [0x0D]),
    instr!(D,     None,  1, -1, -1, [0x15]),
    instr!(E,     None,  1, -1, -1, [0x1D]),
    instr!(H,     None,  1, -1, -1, [0x25]),
    instr!(L,     None,  1, -1, -1, [0x2D]),
    instr!(IndHl, None,  1, -1, -1, [0x35]),
    instr!(A,     None,  1, -1, -1, [0x3D]),

    instr!(IndIx, None,  3,  2, -1, [0xDD, 0x35, 0x00]),
    instr!(IndIy, None,  3,  2, -1, [0xFD, 0x35, 0x00]),

    instr!(Bc,    None,  1, -1, -1, [0x0B]),
    instr!(De,    None,  1, -1, -1, [0x1B]),
    instr!(Hl,    None,  1, -1, -1, [0x2B]),
    instr!(Sp,    None,  1, -1, -1, [0x3B]),

    instr!(Ix,    None,  2, -1, -1, [0xDD, 0x2B]),
    instr!(Iy,    None,  2, -1, -1, [0xFD, 0x2B]),

    // Undocumented index-half forms.
    instr!(Ixh,   None,  2, -1, -1, [0xDD, 0x25]),
    instr!(Ixl,   None,  2, -1, -1, [0xDD, 0x2D]),
    instr!(Iyh,   None,  2, -1, -1, [0xFD, 0x25]),
    instr!(Iyl,   None,  2, -1, -1, [0xFD, 0x2D]),
];

static CPL: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x2F]),
    instr!(A,     None,  1, -1, -1, [0x2F]),
];

static NEG: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0x44]),
    instr!(A,     None,  2, -1, -1, [0xED, 0x44]),
];

static DAA: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x27]),
];

static SCF: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x37]),
];

static CCF: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x3F]),
];

static RLCA: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x07]),
];

static RRCA: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x0F]),
];

static RLA: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x17]),
];

static RRA: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x1F]),
];

static RLC: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x00]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x01]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x02]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x03]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x04]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x05]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x06]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x07]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x06]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x06]),
];

static RRC: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x08]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x09]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x0A]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x0B]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x0C]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x0D]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x0E]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x0F]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x0E]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x0E]),
];

static RL: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x10]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x11]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x12]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x13]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x14]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x15]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x16]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x17]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x16]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x16]),
];

static RR: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x18]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x19]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x1A]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x1B]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x1C]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x1D]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x1E]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x1F]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x1E]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x1E]),
];

static SLA: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x20]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x21]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x22]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x23]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x24]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x25]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x26]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x27]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x26]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x26]),
];

static SRA: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x28]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x29]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x2A]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x2B]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x2C]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x2D]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x2E]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x2F]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x2E]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x2E]),
];

// Undocumented shift; present on every production Z80.
static SLL: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x30]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x31]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x32]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x33]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x34]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x35]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x36]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x37]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x36]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x36]),
];

static SRL: &[Instruction] = &[
    instr!(B,     None,  2, -1, -1, [0xCB, 0x38]),
    instr!(C,     None,  2, -1, -1, [0xCB, 0x39]),
    instr!(D,     None,  2, -1, -1, [0xCB, 0x3A]),
    instr!(E,     None,  2, -1, -1, [0xCB, 0x3B]),
    instr!(H,     None,  2, -1, -1, [0xCB, 0x3C]),
    instr!(L,     None,  2, -1, -1, [0xCB, 0x3D]),
    instr!(IndHl, None,  2, -1, -1, [0xCB, 0x3E]),
    instr!(A,     None,  2, -1, -1, [0xCB, 0x3F]),

    instr!(IndIx, None,  4,  2, -1, [0xDD, 0xCB, 0x00, 0x3E]),
    instr!(IndIy, None,  4,  2, -1, [0xFD, 0xCB, 0x00, 0x3E]),
];

static RRD: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0x67]),
];

static RLD: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0x6F]),
];

// The bit index is OR-ed into the final opcode byte, pre-scaled by 8 so the
// valid patterns are 0x00, 0x08, ..., 0x38.
static BIT: &[Instruction] = &[
    instr!(Bit,   B,     2,  1, -1, [0xCB, 0x40]),
    instr!(Bit,   C,     2,  1, -1, [0xCB, 0x41]),
    instr!(Bit,   D,     2,  1, -1, [0xCB, 0x42]),
    instr!(Bit,   E,     2,  1, -1, [0xCB, 0x43]),
    instr!(Bit,   H,     2,  1, -1, [0xCB, 0x44]),
    instr!(Bit,   L,     2,  1, -1, [0xCB, 0x45]),
    instr!(Bit,   IndHl, 2,  1, -1, [0xCB, 0x46]),
    instr!(Bit,   A,     2,  1, -1, [0xCB, 0x47]),
    instr!(Bit,   IndIx, 4,  3,  2, [0xDD, 0xCB, 0x00, 0x46]),
    instr!(Bit,   IndIy, 4,  3,  2, [0xFD, 0xCB, 0x00, 0x46]),
];

static RES: &[Instruction] = &[
    instr!(Bit,   B,     2,  1, -1, [0xCB, 0x80]),
    instr!(Bit,   C,     2,  1, -1, [0xCB, 0x81]),
    instr!(Bit,   D,     2,  1, -1, [0xCB, 0x82]),
    instr!(Bit,   E,     2,  1, -1, [0xCB, 0x83]),
    instr!(Bit,   H,     2,  1, -1, [0xCB, 0x84]),
    instr!(Bit,   L,     2,  1, -1, [0xCB, 0x85]),
    instr!(Bit,   IndHl, 2,  1, -1, [0xCB, 0x86]),
    instr!(Bit,   A,     2,  1, -1, [0xCB, 0x87]),
    instr!(Bit,   IndIx, 4,  3,  2, [0xDD, 0xCB, 0x00, 0x86]),
    instr!(Bit,   IndIy, 4,  3,  2, [0xFD, 0xCB, 0x00, 0x86]),
];

static SET: &[Instruction] = &[
    instr!(Bit,   B,     2,  1, -1, [0xCB, 0xC0]),
    instr!(Bit,   C,     2,  1, -1, [0xCB, 0xC1]),
    instr!(Bit,   D,     2,  1, -1, [0xCB, 0xC2]),
    instr!(Bit,   E,     2,  1, -1, [0xCB, 0xC3]),
    instr!(Bit,   H,     2,  1, -1, [0xCB, 0xC4]),
    instr!(Bit,   L,     2,  1, -1, [0xCB, 0xC5]),
    instr!(Bit,   IndHl, 2,  1, -1, [0xCB, 0xC6]),
    instr!(Bit,   A,     2,  1, -1, [0xCB, 0xC7]),
    instr!(Bit,   IndIx, 4,  3,  2, [0xDD, 0xCB, 0x00, 0xC6]),
    instr!(Bit,   IndIy, 4,  3,  2, [0xFD, 0xCB, 0x00, 0xC6]),
];

static JP: &[Instruction] = &[
    instr!(Imm16, None,  3,  1, -1, [0xC3, 0x00, 0x00]),
    instr!(Nz,    Imm16, 3, -1,  1, [0xC2, 0x00, 0x00]),
    instr!(Z,     Imm16, 3, -1,  1, [0xCA, 0x00, 0x00]),
    instr!(Nc,    Imm16, 3, -1,  1, [0xD2, 0x00, 0x00]),
    instr!(C,     Imm16, 3, -1,  1, [0xDA, 0x00, 0x00]),
    instr!(Po,    Imm16, 3, -1,  1, [0xE2, 0x00, 0x00]),
    instr!(Pe,    Imm16, 3, -1,  1, [0xEA, 0x00, 0x00]),
    instr!(P,     Imm16, 3, -1,  1, [0xF2, 0x00, 0x00]),
    instr!(M,     Imm16, 3, -1,  1, [0xFA, 0x00, 0x00]),

    instr!(IndHl, None,  1, -1, -1, [0xE9]),
    instr!(Hl,    None,  1, -1, -1, [0xE9]),
    instr!(IndIx, None,  2, -1, -1, [0xDD, 0xE9]),
    instr!(Ix,    None,  2, -1, -1, [0xDD, 0xE9]),
    instr!(IndIy, None,  2, -1, -1, [0xFD, 0xE9]),
    instr!(Iy,    None,  2, -1, -1, [0xFD, 0xE9]),
];

static CALL: &[Instruction] = &[
    instr!(Imm16, None,  3,  1, -1, [0xCD, 0x00, 0x00]),
    instr!(Nz,    Imm16, 3, -1,  1, [0xC4, 0x00, 0x00]),
    instr!(Z,     Imm16, 3, -1,  1, [0xCC, 0x00, 0x00]),
    instr!(Nc,    Imm16, 3, -1,  1, [0xD4, 0x00, 0x00]),
    instr!(C,     Imm16, 3, -1,  1, [0xDC, 0x00, 0x00]),
    instr!(Po,    Imm16, 3, -1,  1, [0xE4, 0x00, 0x00]),
    instr!(Pe,    Imm16, 3, -1,  1, [0xEC, 0x00, 0x00]),
    instr!(P,     Imm16, 3, -1,  1, [0xF4, 0x00, 0x00]),
    instr!(M,     Imm16, 3, -1,  1, [0xFC, 0x00, 0x00]),
];

static RET: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0xC9]),
    instr!(Nz,    None,  1, -1, -1, [0xC0]),
    instr!(Z,     None,  1, -1, -1, [0xC8]),
    instr!(Nc,    None,  1, -1, -1, [0xD0]),
    instr!(C,     None,  1, -1, -1, [0xD8]),
    instr!(Po,    None,  1, -1, -1, [0xE0]),
    instr!(Pe,    None,  1, -1, -1, [0xE8]),
    instr!(P,     None,  1, -1, -1, [0xF0]),
    instr!(M,     None,  1, -1, -1, [0xF8]),
];

static RETI: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0x4D]),
];

static RETN: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0x45]),
];

static JR: &[Instruction] = &[
    instr!(Rel,   None,  2,  1, -1, [0x18, 0x00]),
    instr!(Nz,    Rel,   2, -1,  1, [0x20, 0x00]),
    instr!(Z,     Rel,   2, -1,  1, [0x28, 0x00]),
    instr!(Nc,    Rel,   2, -1,  1, [0x30, 0x00]),
    instr!(C,     Rel,   2, -1,  1, [0x38, 0x00]),
];

static DJNZ: &[Instruction] = &[
    instr!(Rel,   None,  2,  1, -1, [0x10, 0x00]),
];

// The restart vector is OR-ed into the base opcode.
static RST: &[Instruction] = &[
    instr!(Rst,   None,  1,  0, -1, [0xC7]),
];

static IN: &[Instruction] = &[
    instr!(A,     Port,  2, -1,  1, [0xDB, 0x00]),

    instr!(B,     IndC,  2, -1, -1, [0xED, 0x40]),
    instr!(C,     IndC,  2, -1, -1, [0xED, 0x48]),
    instr!(D,     IndC,  2, -1, -1, [0xED, 0x50]),
    instr!(E,     IndC,  2, -1, -1, [0xED, 0x58]),
    instr!(H,     IndC,  2, -1, -1, [0xED, 0x60]),
    instr!(L,     IndC,  2, -1, -1, [0xED, 0x68]),
    instr!(A,     IndC,  2, -1, -1, [0xED, 0x78]),
];

static INI: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA2]),
];

static INIR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB2]),
];

static IND: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xAA]),
];

static INDR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xBA]),
];

static OUT: &[Instruction] = &[
    instr!(Port,  A,     2,  1, -1, [0xD3, 0x00]),

    instr!(IndC,  B,     2, -1, -1, [0xED, 0x41]),
    instr!(IndC,  C,     2, -1, -1, [0xED, 0x49]),
    instr!(IndC,  D,     2, -1, -1, [0xED, 0x51]),
    instr!(IndC,  E,     2, -1, -1, [0xED, 0x59]),
    instr!(IndC,  H,     2, -1, -1, [0xED, 0x61]),
    instr!(IndC,  L,     2, -1, -1, [0xED, 0x69]),
    instr!(IndC,  A,     2, -1, -1, [0xED, 0x79]),
];

static OUTI: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xA3]),
];

static OTIR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xB3]),
];

static OUTD: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xAB]),
];

static OTDR: &[Instruction] = &[
    instr!(None,  None,  2, -1, -1, [0xED, 0xBB]),
];

static NOP: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x00]),
];

static HALT: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0x76]),
];

static DI: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0xF3]),
];

static EI: &[Instruction] = &[
    instr!(None,  None,  1, -1, -1, [0xFB]),
];

// The interrupt mode selects the bits OR-ed into the second byte
// (0x00, 0x10 or 0x18 for modes 0, 1 and 2).
static IM: &[Instruction] = &[
    instr!(Im,    None,  2,  1, -1, [0xED, 0x46]),
];

macro_rules! opcode {
    ($mnemonic:expr, $instrs:ident) => {
        Opcode {
            mnemonic: $mnemonic,
            instrs: $instrs,
        }
    };
}

/// Every registered mnemonic. `outir` and `outdr` are accepted as spellings
/// of `otir` and `otdr`.
pub static OPCODES: &[Opcode] = &[
    opcode!("ld", LD),
    opcode!("push", PUSH),
    opcode!("pop", POP),
    opcode!("ex", EX),
    opcode!("exx", EXX),
    opcode!("ldi", LDI),
    opcode!("ldir", LDIR),
    opcode!("ldd", LDD),
    opcode!("lddr", LDDR),
    opcode!("cpi", CPI),
    opcode!("cpir", CPIR),
    opcode!("cpd", CPD),
    opcode!("cpdr", CPDR),
    opcode!("add", ADD),
    opcode!("adc", ADC),
    opcode!("sub", SUB),
    opcode!("sbc", SBC),
    opcode!("and", AND),
    opcode!("xor", XOR),
    opcode!("or", OR),
    opcode!("cp", CP),
    opcode!("inc", INC),
    opcode!("dec", DEC),
    opcode!("cpl", CPL),
    opcode!("neg", NEG),
    opcode!("daa", DAA),
    opcode!("scf", SCF),
    opcode!("ccf", CCF),
    opcode!("rlca", RLCA),
    opcode!("rlc", RLC),
    opcode!("rrca", RRCA),
    opcode!("rrc", RRC),
    opcode!("rla", RLA),
    opcode!("rl", RL),
    opcode!("rra", RRA),
    opcode!("rr", RR),
    opcode!("sla", SLA),
    opcode!("sra", SRA),
    opcode!("sll", SLL),
    opcode!("srl", SRL),
    opcode!("rrd", RRD),
    opcode!("rld", RLD),
    opcode!("bit", BIT),
    opcode!("res", RES),
    opcode!("set", SET),
    opcode!("jp", JP),
    opcode!("call", CALL),
    opcode!("ret", RET),
    opcode!("reti", RETI),
    opcode!("retn", RETN),
    opcode!("jr", JR),
    opcode!("djnz", DJNZ),
    opcode!("rst", RST),
    opcode!("in", IN),
    opcode!("ini", INI),
    opcode!("inir", INIR),
    opcode!("ind", IND),
    opcode!("indr", INDR),
    opcode!("out", OUT),
    opcode!("outi", OUTI),
    opcode!("otir", OTIR),
    opcode!("outir", OTIR),
    opcode!("outd", OUTD),
    opcode!("otdr", OTDR),
    opcode!("outdr", OTDR),
    opcode!("nop", NOP),
    opcode!("halt", HALT),
    opcode!("di", DI),
    opcode!("ei", EI),
    opcode!("im", IM),
];

/// Looks up a mnemonic, case-insensitively.
pub fn opcode_search(mnemonic: &str) -> Option<&'static Opcode> {
    OPCODES
        .iter()
        .find(|oc| oc.mnemonic.eq_ignore_ascii_case(mnemonic))
}

/// Whether an operand kind supplied by the parser can stand in for the kind
/// a template requires. The parser's generic `Imm` and `Ext` are accepted by
/// every immediate or extended template kind; everything else must match
/// exactly. Range checking is left until relocation resolution.
fn castable(given: OperandKind, required: OperandKind) -> bool {
    match given {
        OperandKind::Imm => required.is_immediate(),
        OperandKind::Ext => required.is_extended(),
        _ => given == required,
    }
}

impl Opcode {
    /// Returns the first template compatible with the given operand kinds.
    pub fn match_operands(
        &self,
        op1: OperandKind,
        op2: OperandKind,
    ) -> Option<&'static Instruction> {
        self.instrs
            .iter()
            .find(|instr| castable(op1, instr.op1) && castable(op2, instr.op2))
    }
}

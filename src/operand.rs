use std::fmt;
use std::str::FromStr;
use util::ParseEnumError;

/// Everything that can appear in an operand position.
///
/// Registers and condition flags are operand kinds of their own: which
/// register an instruction takes is encoded by template selection, not by a
/// value written into the template. The register `c` and the carry flag `c`
/// are deliberately the same kind; the matched template decides which one
/// the byte pattern means.
///
/// `Imm` and `Ext` are the generic kinds produced by the parser for a bare
/// expression and a parenthesized expression respectively. They are narrowed
/// to a concrete kind when matched against a template (see
/// [`Opcode::match_operands`](struct.Opcode.html#method.match_operands)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand.
    None,
    /// Generic immediate, produced by the parser.
    Imm,
    /// 8-bit immediate.
    Imm8,
    /// 16-bit immediate.
    Imm16,
    /// Restart vector (0x00, 0x08, ..., 0x38).
    Rst,
    /// PC-relative target, encoded as a signed displacement from the byte
    /// after the instruction.
    Rel,
    /// Bit index 0-7.
    Bit,
    /// Interrupt mode 0-2.
    Im,
    /// Extended (dereferenced) address, also the generic kind the parser
    /// produces for `(expr)`.
    Ext,
    /// I/O port address.
    Port,

    // 8-bit registers.
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
    R,
    I,
    Ixh,
    Ixl,
    Iyh,
    Iyl,

    // 16-bit registers.
    Af,
    Bc,
    De,
    Hl,
    Ix,
    Iy,
    Sp,

    /// The shadow pair `af'`.
    AfShadow,

    // Register indirections.
    IndA,
    IndC,
    IndBc,
    IndDe,
    IndHl,
    IndSp,
    /// `(ix+d)`.
    IndIx,
    /// `(iy+d)`.
    IndIy,

    // Condition flags. Carry is `C` above.
    Nz,
    Z,
    Nc,
    Po,
    Pe,
    P,
    M,
}

impl OperandKind {
    /// True for the immediate classes a generic `Imm` may stand in for.
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            OperandKind::Imm8
                | OperandKind::Imm16
                | OperandKind::Rst
                | OperandKind::Rel
                | OperandKind::Bit
                | OperandKind::Im
        )
    }

    /// True for the kinds a generic `Ext` may stand in for.
    pub fn is_extended(self) -> bool {
        matches!(self, OperandKind::Ext | OperandKind::Port)
    }

    /// Maps a register kind to its `(reg)` indirection, if one exists.
    pub fn indirect(self) -> Option<OperandKind> {
        match self {
            OperandKind::A => Some(OperandKind::IndA),
            OperandKind::C => Some(OperandKind::IndC),
            OperandKind::Bc => Some(OperandKind::IndBc),
            OperandKind::De => Some(OperandKind::IndDe),
            OperandKind::Hl => Some(OperandKind::IndHl),
            OperandKind::Sp => Some(OperandKind::IndSp),
            OperandKind::Ix => Some(OperandKind::IndIx),
            OperandKind::Iy => Some(OperandKind::IndIy),
            _ => None,
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for OperandKind {
    type Err = ParseEnumError;

    /// Parses a register or condition-flag name, case-insensitively.
    fn from_str(s: &str) -> Result<OperandKind, ParseEnumError> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "a" => OperandKind::A,
            "f" => OperandKind::F,
            "b" => OperandKind::B,
            "c" => OperandKind::C,
            "d" => OperandKind::D,
            "e" => OperandKind::E,
            "h" => OperandKind::H,
            "l" => OperandKind::L,
            "r" => OperandKind::R,
            "i" => OperandKind::I,
            "ixh" => OperandKind::Ixh,
            "ixl" => OperandKind::Ixl,
            "iyh" => OperandKind::Iyh,
            "iyl" => OperandKind::Iyl,
            "af" => OperandKind::Af,
            "bc" => OperandKind::Bc,
            "de" => OperandKind::De,
            "hl" => OperandKind::Hl,
            "ix" => OperandKind::Ix,
            "iy" => OperandKind::Iy,
            "sp" => OperandKind::Sp,
            "af'" => OperandKind::AfShadow,
            "nz" => OperandKind::Nz,
            "z" => OperandKind::Z,
            "nc" => OperandKind::Nc,
            "po" => OperandKind::Po,
            "pe" => OperandKind::Pe,
            "p" => OperandKind::P,
            "m" => OperandKind::M,
            _ => {
                return Err(ParseEnumError {
                    value: s.to_owned(),
                    enum_name: "OperandKind",
                })
            }
        })
    }
}

//! Deferred patches into the output image, resolved after the whole input
//! has been seen.

use crate::expr::Expr;
use crate::section::Section;
use crate::symbols::SymbolId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelocKind {
    /// Signed displacement for `jr` and `djnz`, measured from the byte
    /// after the instruction.
    RelJump,
    /// 8-bit value readable as either signedness.
    Any8,
    U8,
    S8,
    /// 16-bit value readable as either signedness.
    Any16,
    U16,
    S16,
    /// Restart vector OR-ed into the opcode byte.
    Rst,
    /// Interrupt mode selecting the bits OR-ed into the opcode byte.
    Im,
}

/// What a relocation resolves: a bare symbol, or an owned expression tree
/// (deep-cloned when the entry is filed, so the parser's copy stays free to
/// drop).
#[derive(Clone, Debug, PartialEq)]
pub enum RelocPayload {
    Sym(SymbolId),
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelocEnt {
    pub kind: RelocKind,
    /// Section whose image the slot lives in.
    pub sec: Section,
    /// Byte offset of the slot within its section.
    pub offset: u32,
    /// Kind-dependent companion value: the PC after the instruction for
    /// `RelJump`, the addend for a symbol payload, or the template byte the
    /// operand is OR-ed into for `Rst` and `Im`.
    pub bias: i32,
    pub payload: RelocPayload,
    /// Source line, for diagnostics.
    pub line: u32,
}

pub struct RelocTable {
    relocs: Vec<RelocEnt>,
}

impl RelocTable {
    pub fn new() -> RelocTable {
        RelocTable { relocs: Vec::new() }
    }

    pub fn add_sym(
        &mut self,
        kind: RelocKind,
        sec: Section,
        offset: u32,
        bias: i32,
        sym: SymbolId,
        line: u32,
    ) {
        self.relocs.push(RelocEnt {
            kind,
            sec,
            offset,
            bias,
            payload: RelocPayload::Sym(sym),
            line,
        });
    }

    pub fn add_expr(
        &mut self,
        kind: RelocKind,
        sec: Section,
        offset: u32,
        bias: i32,
        expr: &Expr,
        line: u32,
    ) {
        self.relocs.push(RelocEnt {
            kind,
            sec,
            offset,
            bias,
            payload: RelocPayload::Expr(expr.clone()),
            line,
        });
    }

    /// Hands the entries over for resolution, leaving the table empty.
    pub fn take(&mut self) -> Vec<RelocEnt> {
        std::mem::replace(&mut self.relocs, Vec::new())
    }
}

impl Default for RelocTable {
    fn default() -> RelocTable {
        RelocTable::new()
    }
}

/// Whether a resolved value fits the slot for a relocation kind.
pub fn in_range(kind: RelocKind, value: i32) -> bool {
    match kind {
        RelocKind::Any8 => value <= 255 && value >= -128,
        RelocKind::U8 => value <= 255 && value >= 0,
        // The computed displacement must fit a signed byte.
        RelocKind::RelJump | RelocKind::S8 => value <= 127 && value >= -128,
        RelocKind::Any16 => value <= 65535 && value >= -32768,
        RelocKind::U16 => value <= 65535 && value >= 0,
        RelocKind::S16 => value <= 32767 && value >= -32768,
        // Valid restart vectors are 0x00, 0x08, ..., 0x38: only bits 3-5
        // may be set.
        RelocKind::Rst => value & !0x38 == 0,
        RelocKind::Im => value == 0 || value == 1 || value == 2,
    }
}

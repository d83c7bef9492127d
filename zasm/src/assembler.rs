//! Assembler state: the current section, per-section program counters and
//! images, the symbol and relocation tables, and the two passes over them —
//! byte emission while parsing, then relocation resolution.

use crate::error::Diagnostic;
use crate::expr::{BinaryOp, Expr};
use crate::reloc::{in_range, RelocKind, RelocPayload, RelocTable};
use crate::section::Section;
use crate::symbols::{SymbolTable, SymbolType};
use byteorder::ByteOrder;
use std::mem;
use util::Endian;
use z80::constants::INSTR_MAX_LEN;
use z80::{opcode_search, OperandKind};

/// An operand as delivered by the parser: its kind, and the expression
/// carrying its value when the kind has one.
#[derive(Clone, Debug, PartialEq)]
pub struct Operand {
    pub kind: OperandKind,
    pub expr: Option<Expr>,
}

/// Byte image of one section, indexed by program counter. Writing past the
/// current end zero-fills the gap, so `.org` forward of the cursor reserves
/// zeroed space.
struct SectionImage {
    bytes: Vec<u8>,
}

impl SectionImage {
    fn new() -> SectionImage {
        SectionImage { bytes: Vec::new() }
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) {
        let end = offset + data.len();
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(data);
    }

    fn or_at(&mut self, offset: usize, mask: u8) {
        if self.bytes.len() <= offset {
            self.bytes.resize(offset + 1, 0);
        }
        self.bytes[offset] |= mask;
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// The assembled images. The text image is what the CLI prints; the data
/// image is kept alongside it for callers that lay sections out themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    text: Vec<u8>,
    data: Vec<u8>,
}

impl Output {
    pub fn text(&self) -> &[u8] {
        &self.text[..]
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }
}

pub struct Assembler {
    cur_sec: Section,
    /// Each section's program counter is itself an expression tagged with
    /// the section, so `$` and label definitions close over their site.
    /// Advancing wraps the old counter in an addition, which folds straight
    /// back to a constant.
    text_pc: Expr,
    data_pc: Expr,
    abs_pc: Expr,
    symbols: SymbolTable,
    relocs: RelocTable,
    text: SectionImage,
    data: SectionImage,
    abs: SectionImage,
}

impl Assembler {
    pub fn new() -> Assembler {
        Assembler {
            cur_sec: Section::Text,
            text_pc: Expr::constant(Section::Text, 0),
            data_pc: Expr::constant(Section::Data, 0),
            abs_pc: Expr::constant(Section::Abs, 0),
            symbols: SymbolTable::new(),
            relocs: RelocTable::new(),
            text: SectionImage::new(),
            data: SectionImage::new(),
            abs: SectionImage::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn section(&self) -> Section {
        self.cur_sec
    }

    pub fn set_section(&mut self, sec: Section) {
        self.cur_sec = sec;
    }

    fn pc(&self) -> &Expr {
        match self.cur_sec {
            Section::Text => &self.text_pc,
            Section::Data => &self.data_pc,
            _ => &self.abs_pc,
        }
    }

    fn pc_mut(&mut self) -> &mut Expr {
        match self.cur_sec {
            Section::Text => &mut self.text_pc,
            Section::Data => &mut self.data_pc,
            _ => &mut self.abs_pc,
        }
    }

    fn image_mut(&mut self, sec: Section) -> &mut SectionImage {
        match sec {
            Section::Text => &mut self.text,
            Section::Data => &mut self.data,
            _ => &mut self.abs,
        }
    }

    /// A clone of the current program counter, for `$` in expressions.
    pub fn pc_expr(&self) -> Expr {
        self.pc().clone()
    }

    /// The current program counter's numeric value.
    pub fn pc_value(&self) -> Result<i32, String> {
        match *self.pc() {
            Expr::Const { value, .. } => Ok(value),
            _ => Err("program counter is not a constant".to_owned()),
        }
    }

    fn pc_offset(&self) -> Result<u32, String> {
        let value = self.pc_value()?;
        if value < 0 {
            return Err("program counter is negative".to_owned());
        }
        Ok(value as u32)
    }

    pub fn set_pc(&mut self, value: i32) {
        let sec = self.cur_sec;
        *self.pc_mut() = Expr::constant(sec, value);
    }

    /// Sets the current section's program counter from an expression, which
    /// must evaluate to an absolute constant or an address in this section.
    pub fn set_pc_expr(&mut self, mut expr: Expr) -> Result<(), String> {
        expr.eval(&self.symbols).map_err(str::to_owned)?;
        match expr {
            Expr::Const { sec, value } if sec == Section::Abs || sec == self.cur_sec => {
                self.set_pc(value);
                Ok(())
            }
            Expr::Const { .. } => Err("origin address belongs to another section".to_owned()),
            _ => Err("origin address is not defined yet".to_owned()),
        }
    }

    pub fn advance_pc(&mut self, n: u32) {
        let old = mem::replace(self.pc_mut(), Expr::Invalid { msg: "" });
        let new = Expr::binary(
            BinaryOp::Add,
            old,
            Expr::constant(Section::Abs, n as i32),
            &self.symbols,
        );
        *self.pc_mut() = new;
    }

    pub fn define_label(&mut self, name: &str, sec: Section, value: i32) -> Result<(), String> {
        self.symbols
            .define(name, SymbolType::Object, sec, value)
            .map(drop)
            .ok_or_else(|| format!("symbol `{}` is already defined", name))
    }

    /// Defines a symbol from an expression, which must be resolvable at the
    /// point of definition.
    pub fn define_equate(&mut self, name: &str, mut expr: Expr) -> Result<(), String> {
        expr.eval(&self.symbols).map_err(str::to_owned)?;
        match expr {
            Expr::Const { sec, value } => self
                .symbols
                .define(name, SymbolType::Object, sec, value)
                .map(drop)
                .ok_or_else(|| format!("symbol `{}` is already defined", name)),
            _ => Err(format!("`{}` is equated to an unresolved expression", name)),
        }
    }

    /// Writes raw bytes at the current program counter and advances it.
    pub fn emit_bytes(&mut self, data: &[u8]) -> Result<(), String> {
        let offset = self.pc_offset()?;
        let sec = self.cur_sec;
        self.image_mut(sec).write_at(offset as usize, data);
        self.advance_pc(data.len() as u32);
        Ok(())
    }

    /// Emits one data value (`.db`/`.dw` element): lays down the current
    /// constant value when one is known, zero otherwise, and files a
    /// relocation so the slot is patched and range-checked at finalize.
    pub fn emit_value(&mut self, kind: RelocKind, expr: &Expr, line: u32) -> Result<(), String> {
        let offset = self.pc_offset()?;
        let size: usize = if kind == RelocKind::Any16 { 2 } else { 1 };

        self.file_reloc(kind, offset, 0, expr, line);

        let mut buf = [0u8; 2];
        if let Expr::Const { value, .. } = *expr {
            if size == 2 {
                Endian::write_u16(&mut buf, value as u16);
            } else {
                buf[0] = value as u8;
            }
        }
        let sec = self.cur_sec;
        self.image_mut(sec).write_at(offset as usize, &buf[..size]);
        self.advance_pc(size as u32);
        Ok(())
    }

    /// Matches a mnemonic and operand pair against the catalog, writes the
    /// template at the current program counter, and files relocations for
    /// the operand slots.
    pub fn emit_instruction(
        &mut self,
        mnemonic: &str,
        op1: Option<Operand>,
        op2: Option<Operand>,
        line: u32,
    ) -> Result<(), String> {
        let opcode = opcode_search(mnemonic)
            .ok_or_else(|| format!("unknown instruction `{}`", mnemonic))?;
        let kind1 = op1.as_ref().map_or(OperandKind::None, |op| op.kind);
        let kind2 = op2.as_ref().map_or(OperandKind::None, |op| op.kind);
        let instr = opcode
            .match_operands(kind1, kind2)
            .ok_or_else(|| format!("no encoding of `{}` matches its operands", mnemonic))?;

        let offset = self.pc_offset()?;
        let size = instr.size as usize;
        let mut bytes = [0u8; INSTR_MAX_LEN];
        bytes[..size].copy_from_slice(instr.template());

        if let (Some(slot), Some(op)) = (instr.op1_off, op1.as_ref()) {
            self.apply_operand(&mut bytes, size, slot as usize, instr.op1, op, offset, line)?;
        }
        if let (Some(slot), Some(op)) = (instr.op2_off, op2.as_ref()) {
            self.apply_operand(&mut bytes, size, slot as usize, instr.op2, op, offset, line)?;
        }

        let sec = self.cur_sec;
        self.image_mut(sec).write_at(offset as usize, &bytes[..size]);
        self.advance_pc(size as u32);
        Ok(())
    }

    /// Handles one operand slot of a matched template. Slots whose final
    /// value may change once symbols resolve always get a relocation entry;
    /// the 16-bit slots additionally lay down the current best-known value.
    fn apply_operand(
        &mut self,
        bytes: &mut [u8; INSTR_MAX_LEN],
        size: usize,
        slot: usize,
        kind: OperandKind,
        op: &Operand,
        instr_offset: u32,
        line: u32,
    ) -> Result<(), String> {
        // An indexed operand without a written displacement means `(ix+0)`.
        let zero = Expr::constant(Section::Abs, 0);
        let expr = op.expr.as_ref().unwrap_or(&zero);
        let offset = instr_offset + slot as u32;

        match kind {
            OperandKind::Imm8 => {
                self.file_reloc(RelocKind::Any8, offset, 0, expr, line);
                bytes[slot] = 0;
            }
            OperandKind::Port => {
                self.file_reloc(RelocKind::U8, offset, 0, expr, line);
                bytes[slot] = 0;
            }
            OperandKind::Rel => {
                let after = (instr_offset + size as u32) as i32;
                self.file_reloc(RelocKind::RelJump, offset, after, expr, line);
                bytes[slot] = 0;
            }
            OperandKind::IndIx | OperandKind::IndIy => {
                self.file_reloc(RelocKind::S8, offset, 0, expr, line);
                bytes[slot] = 0;
            }
            OperandKind::Ext => {
                self.file_reloc(RelocKind::U16, offset, 0, expr, line);
                if let Expr::Const { value, .. } = *expr {
                    Endian::write_u16(&mut bytes[slot..slot + 2], value as u16);
                }
            }
            OperandKind::Imm16 => {
                self.file_reloc(RelocKind::Any16, offset, 0, expr, line);
                if let Expr::Const { value, .. } = *expr {
                    Endian::write_u16(&mut bytes[slot..slot + 2], value as u16);
                }
            }
            OperandKind::Rst => {
                // The template byte is the base pattern the vector is OR-ed
                // into; leave it in place.
                self.file_reloc(RelocKind::Rst, offset, bytes[slot] as i32, expr, line);
            }
            OperandKind::Im => {
                self.file_reloc(RelocKind::Im, offset, bytes[slot] as i32, expr, line);
            }
            OperandKind::Bit => {
                // Bit indexes are OR-ed in pre-scaled by 8, giving the same
                // 0x00-0x38 patterns as restart vectors.
                let scaled = Expr::binary(
                    BinaryOp::Mul,
                    expr.clone(),
                    Expr::constant(Section::Abs, 8),
                    &self.symbols,
                );
                self.file_reloc(RelocKind::Rst, offset, bytes[slot] as i32, &scaled, line);
            }
            _ => return Err(format!("operand kind {} carries no value", kind)),
        }
        Ok(())
    }

    /// Files a relocation. A bare symbol reference in a plain value slot is
    /// stored as a direct symbol entry with its addend as the bias; anything
    /// else keeps a clone of the whole expression.
    fn file_reloc(&mut self, kind: RelocKind, offset: u32, bias: i32, expr: &Expr, line: u32) {
        let plain_value_slot = matches!(
            kind,
            RelocKind::Any8
                | RelocKind::U8
                | RelocKind::S8
                | RelocKind::Any16
                | RelocKind::U16
                | RelocKind::S16
        );
        match *expr {
            Expr::Sym { sym, addend } if plain_value_slot => {
                self.relocs
                    .add_sym(kind, self.cur_sec, offset, addend, sym, line);
            }
            _ => {
                self.relocs
                    .add_expr(kind, self.cur_sec, offset, bias, expr, line);
            }
        }
    }

    /// The resolution pass: evaluates every pending relocation, range-checks
    /// the result and patches the section images. Entries that fail are
    /// skipped and reported; their slots keep the zero filler.
    pub fn finalize(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for mut ent in self.relocs.take() {
            let target = match ent.payload {
                RelocPayload::Expr(ref mut expr) => {
                    if let Err(msg) = expr.eval(&self.symbols) {
                        diagnostics.push(Diagnostic::new(ent.line, msg.to_owned()));
                        continue;
                    }
                    match *expr {
                        Expr::Const { value, .. } => value,
                        Expr::Sym { sym, .. } => {
                            diagnostics.push(Diagnostic::new(
                                ent.line,
                                format!("unresolved symbol `{}`", self.symbols.get(sym).name),
                            ));
                            continue;
                        }
                        // eval leaves Const, Sym or Invalid; Invalid already
                        // returned an error above.
                        _ => continue,
                    }
                }
                RelocPayload::Sym(sym) => {
                    let ent_sym = self.symbols.get(sym);
                    if ent_sym.sym_type != SymbolType::Object {
                        diagnostics.push(Diagnostic::new(
                            ent.line,
                            format!("unresolved symbol `{}`", ent_sym.name),
                        ));
                        continue;
                    }
                    ent_sym.value
                }
            };

            let value = match ent.kind {
                RelocKind::RelJump => target.wrapping_sub(ent.bias),
                // For Rst and Im the bias is the OR base already present in
                // the image, not an addend.
                RelocKind::Rst | RelocKind::Im => target,
                _ => target.wrapping_add(ent.bias),
            };

            if !in_range(ent.kind, value) {
                diagnostics.push(Diagnostic::new(
                    ent.line,
                    format!("value {} out of range", value),
                ));
                continue;
            }

            let image = self.image_mut(ent.sec);
            let offset = ent.offset as usize;
            match ent.kind {
                RelocKind::RelJump | RelocKind::Any8 | RelocKind::U8 | RelocKind::S8 => {
                    image.write_at(offset, &[value as u8]);
                }
                RelocKind::Any16 | RelocKind::U16 | RelocKind::S16 => {
                    let mut buf = [0u8; 2];
                    Endian::write_u16(&mut buf, value as u16);
                    image.write_at(offset, &buf);
                }
                RelocKind::Rst => {
                    image.or_at(offset, (value & 0xFF) as u8);
                }
                RelocKind::Im => {
                    let mask = match value {
                        0 => 0x00,
                        1 => 0x10,
                        _ => 0x18,
                    };
                    image.or_at(offset, mask);
                }
            }
        }

        diagnostics
    }

    pub fn into_output(self) -> Output {
        Output {
            text: self.text.into_bytes(),
            data: self.data.into_bytes(),
        }
    }
}

impl Default for Assembler {
    fn default() -> Assembler {
        Assembler::new()
    }
}

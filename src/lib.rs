//! Static description of the Zilog Z80 instruction set, as used by the
//! [zasm](../zasm/index.html) assembler.
//!
//! The crate provides three things:
//!
//! - [`OperandKind`](enum.OperandKind.html), the taxonomy of everything that
//!   can appear in an instruction's operand position (registers, condition
//!   flags, register indirections, and the various immediate classes);
//! - [`Instruction`](struct.Instruction.html), one concrete encoding of a
//!   mnemonic: a base byte pattern plus the offsets at which operand values
//!   are written;
//! - the opcode catalog ([`OPCODES`](static.OPCODES.html)) together with
//!   [`opcode_search`](fn.opcode_search.html) and
//!   [`Opcode::match_operands`](struct.Opcode.html#method.match_operands),
//!   which pick the encoding for a mnemonic and operand pair.
//!
//! The catalog holds template bytes only; the assembler decides how operand
//! values are laid into (or OR-ed over) the template's slots.

pub mod constants;
pub mod instructions;
pub mod operand;

pub use instructions::{opcode_search, Instruction, Opcode, OPCODES};
pub use operand::OperandKind;

#[cfg(test)]
mod test;

//! Assembler for the Zilog Z80, as found in Texas Instruments calculators.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which accepts Z80
//! assembly text and returns the assembled byte images. Parsing is
//! implemented with [pest]; a syntax error surfaces as the pretty-printable
//! pest error, while semantic problems are collected as per-line
//! [`Diagnostic`](struct.Diagnostic.html)s so one run can report several.
//!
//! # Source language
//!
//! The input is line oriented. Comments start with a semicolon `;` and run
//! to the end of the line. A line holds an optional `label:`, then an
//! instruction or directive; or an equate `name equ <expr>`.
//!
//! ## Directives
//!
//!  Directive | Description | Example
//! -----------|-------------|--------
//! `.text`    | switch to the text (code) section | `.text`
//! `.data`    | switch to the data section | `.data`
//! `.org`     | set the current section's address | `.org 0x8000`
//! `.db`      | emit bytes (alias `.byte`) | `.db 1, -45, 0xFF`
//! `.dw`      | emit little-endian words (alias `.word`) | `.dw 0x1234, msg`
//! `.ds`      | reserve zeroed bytes (alias `.block`) | `.ds 64`
//!
//! ## Instructions
//!
//! Mnemonics and register names are case-insensitive and follow the Zilog
//! conventions, including indexed operands `(ix+d)`/`(iy+d)`, the I/O forms
//! `in a, (n)` and `out (n), a`, and relative jumps `jr`/`djnz` whose
//! displacement is computed from a label.
//!
//! ## Expressions
//!
//! Operand values are full expressions over integers and symbols with the C
//! operator set `+ - * / % & | ^`, unary `-` and `~`, parentheses, and `$`
//! for the current program counter. Integer literals can be decimal,
//! hexadecimal (`0x`), octal (`0o`) or binary (`0b`). Symbols may be used
//! before they are defined; unresolved operand slots are emitted as zero
//! filler, recorded in a relocation table, and patched once the whole input
//! has been read. Arithmetic on addresses obeys the section rules: adding
//! two addresses from different sections is an error, while address plus
//! absolute constant stays an address.
//!
//! # Example
//!
//! ```text
//! val     equ 0x42
//!
//!         .text
//! start:  ld a, val
//!         ld hl, message
//! loop:   jp loop
//!
//!         .data
//! message: .db 72, 73, 0
//! ```
//!
//! [pest]: https://docs.rs/pest/

mod assembler;
mod error;
mod expr;
mod int_util;
mod parser;
mod reloc;
mod section;
mod statements;
mod symbols;

#[cfg(test)]
mod test;

pub use assembler::{Assembler, Operand, Output};
pub use error::{Diagnostic, Error, Result};
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use parser::Rule;
pub use reloc::{in_range, RelocKind};
pub use section::Section;
pub use symbols::{SymbolId, SymbolTable, SymbolType};

use parser::ZasmParser;
use pest::iterators::Pair;
use pest::Parser;

/// Assembles a whole program and returns the section images.
///
/// All semantic problems found on the way — unknown instructions, duplicate
/// symbols, unresolved or out-of-range relocations — are gathered into
/// [`Error::Assemble`](enum.Error.html); assembly of the remaining input
/// continues past each of them.
pub fn assemble(input: &str) -> Result<Output> {
    let program = parse(input)?;

    let mut asm = Assembler::new();
    let mut diagnostics = statements::process_program(program, &mut asm);
    diagnostics.extend(asm.finalize());

    if diagnostics.is_empty() {
        Ok(asm.into_output())
    } else {
        Err(Error::Assemble(diagnostics))
    }
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(ZasmParser::parse(Rule::program, input)?.next().unwrap())
}

use crate::{Diagnostic, Error};

mod asm;
mod pest;
mod symbols;

pub fn assemble_text(input: &str) -> Vec<u8> {
    crate::assemble(input).unwrap().text().to_vec()
}

pub fn assemble_diagnostics(input: &str) -> Vec<Diagnostic> {
    match crate::assemble(input) {
        Err(Error::Assemble(diagnostics)) => diagnostics,
        other => panic!("expected diagnostics, got {:?}", other),
    }
}

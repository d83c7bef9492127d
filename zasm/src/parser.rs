use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "zasm.pest"]
pub struct ZasmParser;

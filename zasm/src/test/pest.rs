use crate::parser::ZasmParser;
use crate::Rule;
use ::pest::*;

#[test]
fn comment() {
    parses_to! {
        parser: ZasmParser,
        input: "; oai0 9jqp4o5gm66185 dA';:%",
        rule: Rule::COMMENT,
        tokens: []
    };
}

#[test]
fn dec_number() {
    parses_to! {
        parser: ZasmParser,
        input: "4492",
        rule: Rule::number,
        tokens: [number(0, 4, [dec_uint(0, 4)])]
    };
}

#[test]
fn hex_number() {
    parses_to! {
        parser: ZasmParser,
        input: "0xF40a",
        rule: Rule::number,
        tokens: [number(0, 6, [hex_uint(0, 6, [hex_lit(2, 6)])])]
    };
}

#[test]
fn oct_number() {
    parses_to! {
        parser: ZasmParser,
        input: "0o742",
        rule: Rule::number,
        tokens: [number(0, 5, [oct_uint(0, 5, [oct_lit(2, 5)])])]
    };
}

#[test]
fn bin_number() {
    parses_to! {
        parser: ZasmParser,
        input: "0b0101",
        rule: Rule::number,
        tokens: [number(0, 6, [bin_uint(0, 6, [bin_lit(2, 6)])])]
    };
}

#[test]
fn identifier() {
    parses_to! {
        parser: ZasmParser,
        input: "_loop1",
        rule: Rule::identifier,
        tokens: [identifier(0, 6)]
    };
    assert!(ZasmParser::parse(Rule::identifier, "1abc").is_err());
}

#[test]
fn register_names_end_at_word_boundaries() {
    parses_to! {
        parser: ZasmParser,
        input: "af'",
        rule: Rule::register,
        tokens: [register(0, 3)]
    };
    parses_to! {
        parser: ZasmParser,
        input: "IXH",
        rule: Rule::register,
        tokens: [register(0, 3)]
    };
    // "ab" is an identifier, not the register "a".
    assert!(ZasmParser::parse(Rule::register, "ab").is_err());
}

#[test]
fn label() {
    parses_to! {
        parser: ZasmParser,
        input: "loop:",
        rule: Rule::label,
        tokens: [label(0, 5, [identifier(0, 4)])]
    };
}

#[test]
fn bare_instruction() {
    parses_to! {
        parser: ZasmParser,
        input: "exx",
        rule: Rule::instruction,
        tokens: [instruction(0, 3, [mnemonic(0, 3)])]
    };
}

#[test]
fn instruction_with_register_operands() {
    parses_to! {
        parser: ZasmParser,
        input: "ld a, b",
        rule: Rule::instruction,
        tokens: [instruction(0, 7, [
            mnemonic(0, 2),
            operand(3, 4, [register(3, 4)]),
            operand(6, 7, [register(6, 7)])
        ])]
    };
}

#[test]
fn indexed_operands() {
    parses_to! {
        parser: ZasmParser,
        input: "(ix)",
        rule: Rule::indexed,
        tokens: [indexed(0, 4, [index_reg(1, 3)])]
    };
    parses_to! {
        parser: ZasmParser,
        input: "(hl)",
        rule: Rule::indirect,
        tokens: [indirect(0, 4, [register(1, 3)])]
    };
}

#[test]
fn directives() {
    parses_to! {
        parser: ZasmParser,
        input: ".text",
        rule: Rule::dir_text,
        tokens: [dir_text(0, 5)]
    };
    parses_to! {
        parser: ZasmParser,
        input: ".data",
        rule: Rule::dir_data,
        tokens: [dir_data(0, 5)]
    };
}

#[test]
fn expression_tiers() {
    parses_to! {
        parser: ZasmParser,
        input: "42",
        rule: Rule::expr,
        tokens: [expr(0, 2, [
            bit_xor(0, 2, [
                bit_and(0, 2, [
                    additive(0, 2, [
                        multiplicative(0, 2, [
                            unary(0, 2, [
                                primary(0, 2, [
                                    number(0, 2, [dec_uint(0, 2)])
                                ])
                            ])
                        ])
                    ])
                ])
            ])
        ])]
    };
}

//! Walks the parsed program and drives the assembler. Each source line is
//! processed on its own; a line that fails becomes a diagnostic and the walk
//! carries on, so one run can report several problems.

use crate::assembler::{Assembler, Operand};
use crate::error::Diagnostic;
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::int_util::process_number;
use crate::parser::Rule;
use crate::reloc::RelocKind;
use crate::section::Section;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use z80::OperandKind;

type Result<T> = std::result::Result<T, String>;

pub fn process_program(pair: Pair<Rule>, asm: &mut Assembler) -> Vec<Diagnostic> {
    debug_assert_matches!(pair.as_rule(), Rule::program);
    let mut diagnostics = Vec::new();

    for line in pair.into_inner() {
        if line.as_rule() == Rule::EOI {
            break;
        }
        debug_assert_matches!(line.as_rule(), Rule::line);
        let line_no = line.as_span().start_pos().line_col().0 as u32;
        if let Err(message) = process_line(line, line_no, asm) {
            diagnostics.push(Diagnostic::new(line_no, message));
        }
    }

    diagnostics
}

fn process_line(pair: Pair<Rule>, line: u32, asm: &mut Assembler) -> Result<()> {
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::equate => process_equate(item, asm)?,
            Rule::label => {
                let name = item.into_inner().next().unwrap().as_str();
                let sec = asm.section();
                let value = asm.pc_value()?;
                asm.define_label(name, sec, value)?;
            }
            Rule::dir_text => asm.set_section(Section::Text),
            Rule::dir_data => asm.set_section(Section::Data),
            Rule::dir_org => {
                let expr = process_expr(item.into_inner().next().unwrap(), asm)?;
                asm.set_pc_expr(expr)?;
            }
            Rule::dir_byte => process_data(item, RelocKind::Any8, line, asm)?,
            Rule::dir_word => process_data(item, RelocKind::Any16, line, asm)?,
            Rule::dir_space => process_space(item, asm)?,
            Rule::instruction => process_instruction(item, line, asm)?,
            _ => unreachable!(),
        }
    }
    Ok(())
}

fn process_equate(pair: Pair<Rule>, asm: &mut Assembler) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::equate);
    let mut inner = pair.into_inner();
    let name = inner.next().unwrap().as_str();
    inner.next(); // the equ keyword
    let expr = process_expr(inner.next().unwrap(), asm)?;
    asm.define_equate(name, expr)
}

fn process_data(pair: Pair<Rule>, kind: RelocKind, line: u32, asm: &mut Assembler) -> Result<()> {
    let list = pair.into_inner().next().unwrap();
    debug_assert_matches!(list.as_rule(), Rule::expr_list);
    for item in list.into_inner() {
        let expr = process_expr(item, asm)?;
        asm.emit_value(kind, &expr, line)?;
    }
    Ok(())
}

fn process_space(pair: Pair<Rule>, asm: &mut Assembler) -> Result<()> {
    let mut expr = process_expr(pair.into_inner().next().unwrap(), asm)?;
    expr.eval(asm.symbols()).map_err(str::to_owned)?;
    match expr {
        Expr::Const {
            sec: Section::Abs,
            value,
        } if value >= 0 => asm.emit_bytes(&vec![0u8; value as usize]),
        _ => Err("space size must be a non-negative absolute constant".to_owned()),
    }
}

fn process_instruction(pair: Pair<Rule>, line: u32, asm: &mut Assembler) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let mut inner = pair.into_inner();
    let mnemonic = inner.next().unwrap().as_str();
    let op1 = match inner.next() {
        Some(operand) => Some(process_operand(operand, asm)?),
        None => None,
    };
    let op2 = match inner.next() {
        Some(operand) => Some(process_operand(operand, asm)?),
        None => None,
    };
    asm.emit_instruction(mnemonic, op1, op2, line)
}

fn process_operand(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Operand> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::indexed => {
            let mut parts = inner.into_inner();
            let reg = parse_register(&parts.next().unwrap())?;
            let expr = match parts.next() {
                Some(disp) => {
                    let mut disp = disp.into_inner();
                    let negative = disp.next().unwrap().as_str() == "-";
                    let expr = process_expr(disp.next().unwrap(), asm)?;
                    if negative {
                        Expr::unary(UnaryOp::Neg, expr, asm.symbols())
                    } else {
                        expr
                    }
                }
                None => Expr::constant(Section::Abs, 0),
            };
            Ok(Operand {
                kind: reg.indirect().unwrap(),
                expr: Some(expr),
            })
        }
        Rule::indirect => {
            let item = inner.into_inner().next().unwrap();
            match item.as_rule() {
                Rule::register => {
                    let reg = parse_register(&item)?;
                    let kind = reg.indirect().ok_or_else(|| {
                        format!("`{}` cannot be used as an indirect operand", item.as_str())
                    })?;
                    Ok(Operand { kind, expr: None })
                }
                Rule::expr => Ok(Operand {
                    kind: OperandKind::Ext,
                    expr: Some(process_expr(item, asm)?),
                }),
                _ => unreachable!(),
            }
        }
        Rule::register => Ok(Operand {
            kind: parse_register(&inner)?,
            expr: None,
        }),
        Rule::expr => Ok(Operand {
            kind: OperandKind::Imm,
            expr: Some(process_expr(inner, asm)?),
        }),
        _ => unreachable!(),
    }
}

fn parse_register(pair: &Pair<Rule>) -> Result<OperandKind> {
    pair.as_str()
        .parse()
        .map_err(|err: util::ParseEnumError| err.to_string())
}

fn process_expr(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Expr> {
    debug_assert_matches!(pair.as_rule(), Rule::expr);
    process_tier(pair, asm)
}

// expr, bit_xor, bit_and, additive and multiplicative share one shape:
// item (op item)*, folded left to right.
fn process_tier(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Expr> {
    let mut inner = pair.into_inner();
    let mut acc = process_tier_item(inner.next().unwrap(), asm)?;
    while let Some(op) = inner.next() {
        let op = binary_op(op.as_str());
        let rhs = process_tier_item(inner.next().unwrap(), asm)?;
        acc = Expr::binary(op, acc, rhs, asm.symbols());
    }
    Ok(acc)
}

fn process_tier_item(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Expr> {
    match pair.as_rule() {
        Rule::bit_xor | Rule::bit_and | Rule::additive | Rule::multiplicative => {
            process_tier(pair, asm)
        }
        Rule::unary => process_unary(pair, asm),
        _ => unreachable!(),
    }
}

fn process_unary(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Expr> {
    let mut ops = Vec::new();
    let mut expr = None;
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::unary_op => ops.push(if item.as_str() == "-" {
                UnaryOp::Neg
            } else {
                UnaryOp::BitNot
            }),
            Rule::primary => expr = Some(process_primary(item, asm)?),
            _ => unreachable!(),
        }
    }

    // Prefix operators apply innermost first.
    let mut expr = expr.unwrap();
    for &op in ops.iter().rev() {
        expr = Expr::unary(op, expr, asm.symbols());
    }
    Ok(expr)
}

fn process_primary(pair: Pair<Rule>, asm: &mut Assembler) -> Result<Expr> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::number => Ok(Expr::constant(Section::Abs, process_number(inner)?)),
        Rule::pc_mark => Ok(asm.pc_expr()),
        Rule::identifier => {
            let sym = asm.symbols_mut().intern(inner.as_str());
            Ok(Expr::symbol(asm.symbols(), sym))
        }
        Rule::expr => process_tier(inner, asm),
        _ => unreachable!(),
    }
}

fn binary_op(op: &str) -> BinaryOp {
    match op {
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        "%" => BinaryOp::Mod,
        "&" => BinaryOp::And,
        "|" => BinaryOp::Or,
        "^" => BinaryOp::Xor,
        _ => unreachable!(),
    }
}

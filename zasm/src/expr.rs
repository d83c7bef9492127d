//! Expression trees with partial evaluation under the section rules.
//!
//! Builders consume their operand trees; a caller that wants to keep a copy
//! must clone first. Construction already folds whatever it can, so trees
//! only stay trees while they contain symbols that are not yet defined.
//! [`Expr::eval`](enum.Expr.html#method.eval) finishes the job once the
//! symbol table is complete: on success the node becomes a `Const` (or stays
//! an unresolved `Sym`, which is legal mid-assembly); on failure it becomes
//! `Invalid` and keeps the reason.

use crate::section::Section;
use crate::symbols::{SymbolId, SymbolTable, SymbolType};
use std::mem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    BitNot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Xor,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A numeric constant tagged with the section it addresses. Literals and
    /// equated values are `Abs`; a label's address is an offset into `Text`
    /// or `Data`.
    Const { sec: Section, value: i32 },
    /// A reference to a symbol plus a folded-in displacement.
    Sym { sym: SymbolId, addend: i32 },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Left behind by a failed evaluation.
    Invalid { msg: &'static str },
}

/// Result of a one-level fold: fully reduced, or handed back untouched.
enum BinFold {
    Done(Expr),
    Stuck(Expr, Expr),
}

enum UnFold {
    Done(Expr),
    Stuck(Expr),
}

impl Expr {
    pub fn constant(sec: Section, value: i32) -> Expr {
        Expr::Const { sec, value }
    }

    /// A reference to `sym`. Already-defined symbols fold to their constant
    /// value immediately.
    pub fn symbol(symbols: &SymbolTable, sym: SymbolId) -> Expr {
        let mut expr = Expr::Sym { sym, addend: 0 };
        expr.resolve_sym(symbols);
        expr
    }

    /// Builds `op operand`, folding when the operand already reduces to an
    /// absolute constant. A hard error (there are none for the unary
    /// operators today, but the fold reports them uniformly) produces an
    /// `Invalid` node.
    pub fn unary(op: UnaryOp, operand: Expr, symbols: &SymbolTable) -> Expr {
        match fold_unary(op, operand, symbols) {
            Ok(UnFold::Done(expr)) => expr,
            Ok(UnFold::Stuck(operand)) => Expr::Unary {
                op,
                operand: Box::new(operand),
            },
            Err(msg) => Expr::Invalid { msg },
        }
    }

    /// Builds `lhs op rhs`, taking ownership of both operands and folding
    /// one level if both sides already reduce far enough. Errors that no
    /// later symbol definition can fix (mixed sections, division by zero)
    /// produce an `Invalid` node at once; anything else is kept as a tree
    /// for relocation time.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, symbols: &SymbolTable) -> Expr {
        match fold_binary(op, lhs, rhs, symbols) {
            Ok(BinFold::Done(expr)) => expr,
            Ok(BinFold::Stuck(lhs, rhs)) => Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            Err(msg) => Expr::Invalid { msg },
        }
    }

    /// Fully evaluates the tree in place. On success the node is a `Const`,
    /// or an unresolved `Sym` (still a success: the symbol may be external
    /// to this run and callers decide whether that is an error). On failure
    /// the node becomes `Invalid`, its children are dropped, and the message
    /// is returned.
    pub fn eval(&mut self, symbols: &SymbolTable) -> Result<(), &'static str> {
        let expr = mem::replace(self, Expr::Invalid { msg: "" });
        match Expr::eval_tree(expr, symbols) {
            Ok(expr) => {
                *self = expr;
                Ok(())
            }
            Err(msg) => {
                *self = Expr::Invalid { msg };
                Err(msg)
            }
        }
    }

    fn eval_tree(expr: Expr, symbols: &SymbolTable) -> Result<Expr, &'static str> {
        match expr {
            expr @ Expr::Const { .. } => Ok(expr),
            mut expr @ Expr::Sym { .. } => {
                expr.resolve_sym(symbols);
                Ok(expr)
            }
            Expr::Invalid { msg } => Err(msg),
            Expr::Unary { op, operand } => {
                let operand = Expr::eval_tree(*operand, symbols)?;
                match fold_unary(op, operand, symbols)? {
                    UnFold::Done(expr) => Ok(expr),
                    UnFold::Stuck(_) => Err(unary_error(op)),
                }
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = Expr::eval_tree(*lhs, symbols)?;
                let rhs = Expr::eval_tree(*rhs, symbols)?;
                match fold_binary(op, lhs, rhs, symbols)? {
                    BinFold::Done(expr) => Ok(expr),
                    BinFold::Stuck(..) => Err(binary_error(op)),
                }
            }
        }
    }

    /// Replaces a `Sym` node with its constant value if the referent has
    /// been defined. Any other node is left alone.
    fn resolve_sym(&mut self, symbols: &SymbolTable) {
        if let Expr::Sym { sym, addend } = *self {
            let ent = symbols.get(sym);
            if ent.sym_type == SymbolType::Object {
                *self = Expr::Const {
                    sec: ent.sec,
                    value: ent.value.wrapping_add(addend),
                };
            }
        }
    }

    pub fn is_abs(&self) -> bool {
        matches!(
            self,
            Expr::Const {
                sec: Section::Abs,
                ..
            }
        )
    }
}

fn fold_binary(
    op: BinaryOp,
    mut lhs: Expr,
    mut rhs: Expr,
    symbols: &SymbolTable,
) -> Result<BinFold, &'static str> {
    lhs.resolve_sym(symbols);
    rhs.resolve_sym(symbols);

    match op {
        BinaryOp::Add => fold_add(lhs, rhs),
        BinaryOp::Sub => fold_sub(lhs, rhs),
        _ => fold_abs_arith(op, lhs, rhs),
    }
}

/// Constants and symbols can be added in any arrangement as long as at
/// least one side is absolute. Two symbolic sides are handed back: one of
/// them may still resolve before relocation.
fn fold_add(lhs: Expr, rhs: Expr) -> Result<BinFold, &'static str> {
    match (lhs, rhs) {
        (Expr::Const { sec: sa, value: va }, Expr::Const { sec: sb, value: vb }) => {
            if sa != Section::Abs && sb != Section::Abs {
                return Err("addition requires an absolute operand");
            }
            Ok(BinFold::Done(Expr::Const {
                sec: sa.combine(sb),
                value: va.wrapping_add(vb),
            }))
        }
        (
            Expr::Const {
                sec: Section::Abs,
                value,
            },
            Expr::Sym { sym, addend },
        )
        | (
            Expr::Sym { sym, addend },
            Expr::Const {
                sec: Section::Abs,
                value,
            },
        ) => Ok(BinFold::Done(Expr::Sym {
            sym,
            addend: addend.wrapping_add(value),
        })),
        (lhs, rhs) => Ok(BinFold::Stuck(lhs, rhs)),
    }
}

/// The subtrahend must reduce to an absolute constant; the minuend keeps
/// its section. Symbol minus symbol is never reduced here, even within one
/// section.
fn fold_sub(lhs: Expr, rhs: Expr) -> Result<BinFold, &'static str> {
    match (lhs, rhs) {
        (
            Expr::Const { sec, value: va },
            Expr::Const {
                sec: Section::Abs,
                value: vb,
            },
        ) => Ok(BinFold::Done(Expr::Const {
            sec,
            value: va.wrapping_sub(vb),
        })),
        (
            Expr::Sym { sym, addend },
            Expr::Const {
                sec: Section::Abs,
                value: vb,
            },
        ) => Ok(BinFold::Done(Expr::Sym {
            sym,
            addend: addend.wrapping_sub(vb),
        })),
        (lhs, rhs) => Ok(BinFold::Stuck(lhs, rhs)),
    }
}

/// Multiplication, division, modulo and the bitwise operators only work on
/// absolute constants; the result is absolute.
fn fold_abs_arith(op: BinaryOp, lhs: Expr, rhs: Expr) -> Result<BinFold, &'static str> {
    let (va, vb) = match (&lhs, &rhs) {
        (
            Expr::Const {
                sec: Section::Abs,
                value: va,
            },
            Expr::Const {
                sec: Section::Abs,
                value: vb,
            },
        ) => (*va, *vb),
        _ => return Ok(BinFold::Stuck(lhs, rhs)),
    };

    let value = match op {
        BinaryOp::Mul => va.wrapping_mul(vb),
        BinaryOp::Div => {
            if vb == 0 {
                return Err("division by zero");
            }
            va.wrapping_div(vb)
        }
        BinaryOp::Mod => {
            if vb == 0 {
                return Err("modulo by zero");
            }
            va.wrapping_rem(vb)
        }
        BinaryOp::And => va & vb,
        BinaryOp::Or => va | vb,
        BinaryOp::Xor => va ^ vb,
        BinaryOp::Add | BinaryOp::Sub => unreachable!(),
    };

    Ok(BinFold::Done(Expr::Const {
        sec: Section::Abs,
        value,
    }))
}

fn fold_unary(
    op: UnaryOp,
    mut operand: Expr,
    symbols: &SymbolTable,
) -> Result<UnFold, &'static str> {
    operand.resolve_sym(symbols);

    if let Expr::Const {
        sec: Section::Abs,
        value,
    } = operand
    {
        let value = match op {
            UnaryOp::Neg => value.wrapping_neg(),
            UnaryOp::BitNot => !value,
        };
        Ok(UnFold::Done(Expr::Const {
            sec: Section::Abs,
            value,
        }))
    } else {
        Ok(UnFold::Stuck(operand))
    }
}

fn binary_error(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "could not add operands",
        BinaryOp::Sub => "could not subtract operands",
        BinaryOp::Mul => "multiplication requires absolute operands",
        BinaryOp::Div => "division requires absolute operands",
        BinaryOp::Mod => "modulo requires absolute operands",
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => {
            "bitwise operators require absolute operands"
        }
    }
}

fn unary_error(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "negation requires an absolute operand",
        UnaryOp::BitNot => "complement requires an absolute operand",
    }
}

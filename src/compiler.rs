//! Expression classification and code emission.
//!
//! `Compiler` owns its primitive registry, so independent instances can
//! carry different primitive sets. Emission is a single recursive pass:
//! every expression's instructions leave the computed tagged word in the
//! accumulator (`rax`) and touch nothing else the caller relies on.

use sexp::{Atom, Sexp};

use crate::assembly;
use crate::common::{self, Value};
use crate::error::{CompileError, CompileResult};
use crate::primitives::Primitives;
use crate::types::{Instr, ACC};

/// Structural shape of an expression. Classification consults the registry
/// only for membership; arity checking happens at emission.
#[derive(Debug)]
pub enum Classified<'a> {
    /// A literal representable as a single tagged word.
    Immediate(&'a Sexp),
    /// A call whose head names a registered primitive.
    PrimitiveCall { name: &'a str, operands: &'a [Sexp] },
    /// A call-shaped form whose head names nothing in the registry.
    UnknownOperator(&'a str),
    /// No recognizable shape.
    Unrecognized,
}

pub struct Compiler {
    primitives: Primitives,
}

impl Compiler {
    /// A compiler with the built-in primitive set.
    pub fn new() -> Self {
        Compiler::with_primitives(Primitives::default())
    }

    /// A compiler with a caller-assembled primitive set. The registry is
    /// read-only from here on.
    pub fn with_primitives(primitives: Primitives) -> Self {
        Compiler { primitives }
    }

    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    pub fn classify<'a>(&self, expr: &'a Sexp) -> Classified<'a> {
        match expr {
            Sexp::List(items) if !items.is_empty() => match &items[0] {
                Sexp::Atom(Atom::S(name)) if self.primitives.is_primitive(name) => {
                    Classified::PrimitiveCall { name: name.as_str(), operands: &items[1..] }
                }
                Sexp::Atom(Atom::S(name)) => Classified::UnknownOperator(name.as_str()),
                _ => Classified::Unrecognized,
            },
            // Atoms and the empty list are immediate literals; whether the
            // literal is actually encodable is decided at emission.
            _ => Classified::Immediate(expr),
        }
    }

    /// Append the instructions computing `expr` into the accumulator.
    pub fn emit_expr(&self, expr: &Sexp, out: &mut Vec<Instr>) -> CompileResult<()> {
        match self.classify(expr) {
            Classified::Immediate(literal) => {
                let word = encode_immediate(literal)?;
                out.push(Instr::Mov(ACC, word));
                Ok(())
            }
            Classified::PrimitiveCall { name, operands } => {
                let prim = self.primitives.lookup(name)?;
                if prim.arity != operands.len() {
                    return Err(CompileError::ArityMismatch {
                        name: name.to_string(),
                        expected: prim.arity,
                        found: operands.len(),
                    });
                }
                (prim.emit)(self, operands, out)
            }
            Classified::UnknownOperator(name) => {
                Err(CompileError::UnknownPrimitive { name: name.to_string() })
            }
            Classified::Unrecognized => {
                Err(CompileError::UnknownForm { form: expr.to_string() })
            }
        }
    }

    /// Lower one expression to the instruction sequence computing it.
    pub fn compile_expr(&self, expr: &Sexp) -> CompileResult<Vec<Instr>> {
        let mut out = Vec::new();
        self.emit_expr(expr, &mut out)?;
        Ok(out)
    }

    /// Compile a whole program: one top-level expression wrapped as the
    /// `scheme_entry` function, returned as a complete NASM listing.
    pub fn compile_program(&self, expr: &Sexp) -> CompileResult<String> {
        let mut instrs = self.compile_expr(expr)?;
        instrs.push(Instr::Ret);
        Ok(assembly::program_to_string(&instrs))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

/// Encode an immediate literal into its tagged word.
fn encode_immediate(expr: &Sexp) -> CompileResult<i64> {
    let value = match expr {
        Sexp::Atom(Atom::I(n)) => {
            if !common::in_fixnum_range(*n) {
                return Err(CompileError::IntegerOutOfRange { value: *n });
            }
            Value::Fixnum(*n)
        }
        Sexp::Atom(Atom::S(name)) if name == "#t" => Value::Boolean(true),
        Sexp::Atom(Atom::S(name)) if name == "#f" => Value::Boolean(false),
        Sexp::Atom(Atom::S(name)) if name.starts_with("#\\") => char_literal(name)?,
        Sexp::List(items) if items.is_empty() => Value::Nil,
        other => {
            return Err(CompileError::UnsupportedLiteral { literal: other.to_string() })
        }
    };
    Ok(common::encode(value))
}

fn char_literal(name: &str) -> CompileResult<Value> {
    let spelling = &name[2..];
    let c = match spelling {
        "space" => ' ',
        "newline" => '\n',
        "tab" => '\t',
        "return" => '\r',
        _ => {
            let mut chars = spelling.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(CompileError::UnsupportedLiteral {
                        literal: name.to_string(),
                    })
                }
            }
        }
    };
    Ok(Value::Char(c))
}

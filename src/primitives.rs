//! Primitive-operation registry.
//!
//! A primitive is a (name, arity, emit fn) triple. Growing the language by
//! one primitive means one `register` call; the classifier and the
//! recursive emitter never change. The registry is populated while the
//! `Compiler` is being built and is read-only for the rest of its life.

use im::HashMap;
use sexp::Sexp;

use crate::common::FX_SHIFT;
use crate::compiler::Compiler;
use crate::error::{CompileError, CompileResult};
use crate::types::{Instr, ACC};

/// Emits the code for one call to a primitive. Receives the raw operand
/// expressions, not their compiled code, so it controls the order and
/// placement of recursive emission.
pub type EmitFn = fn(&Compiler, &[Sexp], &mut Vec<Instr>) -> CompileResult<()>;

#[derive(Debug, Clone, Copy)]
pub struct Primitive {
    pub arity: usize,
    pub emit: EmitFn,
}

#[derive(Debug, Clone)]
pub struct Primitives {
    table: HashMap<String, Primitive>,
}

impl Primitives {
    /// An empty registry, for callers assembling their own primitive set.
    pub fn empty() -> Self {
        Primitives { table: HashMap::new() }
    }

    /// Insert or overwrite a primitive. Re-registration under the same
    /// name is allowed; the last registration wins.
    pub fn register(&mut self, name: &str, arity: usize, emit: EmitFn) {
        self.table.insert(name.to_string(), Primitive { arity, emit });
    }

    pub fn lookup(&self, name: &str) -> CompileResult<Primitive> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| CompileError::UnknownPrimitive { name: name.to_string() })
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}

impl Default for Primitives {
    /// The built-in primitive set.
    fn default() -> Self {
        let mut prims = Primitives::empty();
        prims.register("$fxadd1", 1, fxadd1);
        prims.register("$fxsub1", 1, fxsub1);
        prims
    }
}

// The tagged representation of fixnum 1. Fixnum tag bits are zero, so a
// plain machine add/sub of this constant on a tagged fixnum yields the
// correctly tagged successor/predecessor with no untagging step.
const TAGGED_ONE: i32 = 1 << FX_SHIFT;

fn fxadd1(compiler: &Compiler, operands: &[Sexp], out: &mut Vec<Instr>) -> CompileResult<()> {
    compiler.emit_expr(&operands[0], out)?;
    out.push(Instr::Add(ACC, TAGGED_ONE));
    Ok(())
}

fn fxsub1(compiler: &Compiler, operands: &[Sexp], out: &mut Vec<Instr>) -> CompileResult<()> {
    compiler.emit_expr(&operands[0], out)?;
    out.push(Instr::Sub(ACC, TAGGED_ONE));
    Ok(())
}

//! Compile-time errors. All are fatal to the current compilation: the
//! compiler either produces a complete listing or reports exactly one of
//! these, with no partial output. Errors detected deep in recursive
//! emission propagate unchanged to the top-level caller.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CompileError {
    #[snafu(display("unsupported literal: {literal}"))]
    UnsupportedLiteral { literal: String },

    #[snafu(display("integer literal out of fixnum range: {value}"))]
    IntegerOutOfRange { value: i64 },

    #[snafu(display("unknown primitive: {name}"))]
    UnknownPrimitive { name: String },

    #[snafu(display("{name} expects {expected} operand(s), got {found}"))]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[snafu(display("unrecognized form: {form}"))]
    UnknownForm { form: String },
}

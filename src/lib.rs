// Library module shared between the compiler binary, the tests, and (by
// mirrored constants) the runtime stub in runtime/start.rs.

pub mod assembly;
pub mod common;
pub mod compiler;
pub mod error;
pub mod primitives;
pub mod types;

pub use assembly::ENTRY_SYMBOL;
pub use common::{decode, encode, format_value, Value};
pub use compiler::{Classified, Compiler};
pub use error::{CompileError, CompileResult};
pub use primitives::{EmitFn, Primitive, Primitives};
pub use types::{Instr, Reg, ACC};

//! Rendering of emitted instructions into NASM-syntax text.

use crate::types::{Instr, Reg};

/// The fixed entry symbol the runtime stub links against.
pub const ENTRY_SYMBOL: &str = "scheme_entry";

pub fn instr_to_string(instr: &Instr) -> String {
    match instr {
        Instr::Mov(reg, val) => format!("mov {}, {}", reg_to_string(reg), val),
        Instr::Add(reg, val) => format!("add {}, {}", reg_to_string(reg), val),
        Instr::Sub(reg, val) => format!("sub {}, {}", reg_to_string(reg), val),
        Instr::Ret => "ret".to_string(),
    }
}

pub fn instrs_to_string(instrs: &[Instr]) -> String {
    let mut result = String::new();
    for instr in instrs {
        result += "  ";
        result += &instr_to_string(instr);
        result += "\n";
    }
    result
}

/// Wrap a function body as a complete translation unit: section and
/// visibility directives for the entry symbol, then the body. The body is
/// expected to end in `ret`.
pub fn program_to_string(instrs: &[Instr]) -> String {
    format!(
        "section .text\nglobal {entry}\n{entry}:\n{body}",
        entry = ENTRY_SYMBOL,
        body = instrs_to_string(instrs)
    )
}

fn reg_to_string(reg: &Reg) -> &str {
    match reg {
        Reg::Rax => "rax",
        Reg::Rbx => "rbx",
        Reg::Rcx => "rcx",
        Reg::Rdx => "rdx",
        Reg::Rsi => "rsi",
        Reg::Rdi => "rdi",
        Reg::Rsp => "rsp",
        Reg::Rbp => "rbp",
    }
}

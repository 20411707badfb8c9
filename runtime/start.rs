// Runtime stub: calls the compiled program and prints the decoded result.
//
// Built standalone by the test harness (rustc runtime/start.rs -L . -o out),
// so the tag constants are mirrored from src/common.rs rather than imported;
// the two must stay in sync.

pub const FX_SHIFT: u32 = 2;
pub const FX_MASK: i64 = 0b11;
pub const FX_TAG: i64 = 0b00;

pub const BOOL_FALSE: i64 = 0x2f;
pub const BOOL_TRUE: i64 = 0x6f;

pub const CHAR_SHIFT: u32 = 8;
pub const CHAR_MASK: i64 = 0xff;
pub const CHAR_TAG: i64 = 0x0f;

pub const NIL: i64 = 0x3f;

#[link(name = "scheme")]
extern "C" {
    // The \x01 here is an undocumented feature of LLVM (which Rust uses) that ensures
    // it does not add an underscore in front of the name, which happens on OSX
    // Courtesy of Max New
    // (https://maxsnew.com/teaching/eecs-483-fa22/hw_adder_assignment.html)
    #[link_name = "\x01scheme_entry"]
    fn scheme_entry() -> i64;
}

fn format_result(word: i64) -> String {
    if word & FX_MASK == FX_TAG {
        return (word >> FX_SHIFT).to_string();
    }
    if word == BOOL_TRUE {
        return "#t".to_string();
    }
    if word == BOOL_FALSE {
        return "#f".to_string();
    }
    if word & CHAR_MASK == CHAR_TAG {
        return match char::from_u32((word >> CHAR_SHIFT) as u32) {
            Some(' ') => "#\\space".to_string(),
            Some('\n') => "#\\newline".to_string(),
            Some('\t') => "#\\tab".to_string(),
            Some('\r') => "#\\return".to_string(),
            Some(c) => format!("#\\{}", c),
            None => format!("#<unknown {:#018x}>", word),
        };
    }
    if word == NIL {
        return "()".to_string();
    }
    format!("#<unknown {:#018x}>", word)
}

fn main() {
    let result = unsafe { scheme_entry() };
    println!("{}", format_result(result));
}

// Test harness: compiles a source string and executes the emitted
// instructions on a model of the target's accumulator, then prints the
// decoded result the way the runtime stub would. Stage-one programs only
// ever move/add/sub immediates in rax, so the model stays tiny.

use krait::{format_value, Compiler, CompileResult, Instr, Reg};

pub fn compile_and_run(src: &str) -> CompileResult<String> {
    let expr = sexp::parse(src).expect("test source must be a well-formed s-expression");
    let compiler = Compiler::new();
    let instrs = compiler.compile_expr(&expr)?;
    Ok(format_value(execute(&instrs)))
}

fn execute(instrs: &[Instr]) -> i64 {
    let mut acc: i64 = 0;
    for instr in instrs {
        match instr {
            Instr::Mov(Reg::Rax, val) => acc = *val,
            Instr::Add(Reg::Rax, val) => acc += i64::from(*val),
            Instr::Sub(Reg::Rax, val) => acc -= i64::from(*val),
            Instr::Ret => break,
            other => panic!("test harness cannot execute {:?}", other),
        }
    }
    acc
}

#[macro_export]
macro_rules! success_tests {
    ($($name:ident: { program: $program:expr, expected: $expected:expr }),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let actual = $crate::infra::compile_and_run($program)
                    .expect("program should compile");
                assert_eq!(actual, $expected);
            }
        )*
    };
}

#[macro_export]
macro_rules! static_error_tests {
    ($($name:ident: { program: $program:expr, error: $error:ident }),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let err = $crate::infra::compile_and_run($program)
                    .expect_err("program should be rejected");
                assert!(
                    matches!(err, krait::CompileError::$error { .. }),
                    "expected {}, got {:?}",
                    stringify!($error),
                    err
                );
            }
        )*
    };
}

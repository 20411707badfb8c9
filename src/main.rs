use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::process::exit;

use krait::Compiler;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <input.scm> <output.s>", args[0]);
        exit(1);
    }

    let in_name = &args[1];
    let out_name = &args[2];

    let mut in_file = File::open(in_name)?;
    let mut in_contents = String::new();
    in_file.read_to_string(&mut in_contents)?;

    let expr = match sexp::parse(&in_contents) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("{}: parse error: {}", in_name, e);
            exit(1);
        }
    };

    let asm_program = match Compiler::new().compile_program(&expr) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("{}: {}", in_name, e);
            exit(1);
        }
    };

    let mut out_file = File::create(out_name)?;
    out_file.write_all(asm_program.as_bytes())?;

    Ok(())
}

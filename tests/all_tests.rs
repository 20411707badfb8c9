mod infra;

success_tests! {
    literal_twelve: { program: "12", expected: "12" },
    literal_zero: { program: "0", expected: "0" },
    literal_negative: { program: "-17", expected: "-17" },
    literal_true: { program: "#t", expected: "#t" },
    literal_false: { program: "#f", expected: "#f" },
    literal_nil: { program: "()", expected: "()" },
    add1_simple: { program: "($fxadd1 12)", expected: "13" },
    add1_negative: { program: "($fxadd1 -1)", expected: "0" },
    sub1_simple: { program: "($fxsub1 12)", expected: "11" },
    sub1_through_zero: { program: "($fxsub1 0)", expected: "-1" },
    add1_sub1_cancel: { program: "($fxsub1 ($fxadd1 0))", expected: "0" },
    deeply_nested: { program: "($fxadd1 ($fxadd1 ($fxadd1 ($fxsub1 39))))", expected: "41" },
}

static_error_tests! {
    unknown_primitive: { program: "(unknown-op 1 2)", error: UnknownPrimitive },
    arity_too_many: { program: "($fxadd1 1 2)", error: ArityMismatch },
    arity_too_few: { program: "($fxsub1)", error: ArityMismatch },
    arity_nested: { program: "($fxadd1 ($fxsub1 1 2))", error: ArityMismatch },
    bare_symbol: { program: "hello", error: UnsupportedLiteral },
    float_literal: { program: "3.5", error: UnsupportedLiteral },
    non_symbol_head: { program: "((1) 2)", error: UnknownForm },
    number_head: { program: "(1 2)", error: UnknownForm },
}

#[test]
fn listing_is_a_complete_translation_unit() {
    let expr = sexp::parse("($fxadd1 12)").unwrap();
    let listing = krait::Compiler::new().compile_program(&expr).unwrap();

    assert!(listing.starts_with("section .text\nglobal scheme_entry\nscheme_entry:\n"));
    assert!(listing.ends_with("  ret\n"));
}

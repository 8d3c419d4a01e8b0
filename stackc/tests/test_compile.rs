use itertools::Itertools;
use stackc::prelude::*;

/// Compile and render one instruction per line.
fn listing(source: &str) -> String {
    match compile_str(source) {
        Ok(code) => code.iter().join("\n"),
        Err(err) => panic!("{}", err),
    }
}

#[test]
fn test_compile_examples() {
    let cases = [
        ("3 + 5", "PUSH 3\nPUSH 5\nADD"),
        ("10 + 2 * 3", "PUSH 10\nPUSH 2\nPUSH 3\nMUL\nADD"),
        ("(7 - 2) / 5", "PUSH 7\nPUSH 2\nSUB\nPUSH 5\nDIV"),
        (
            "(10 + 2) * (5 - 1) / 3",
            "PUSH 10\nPUSH 2\nADD\nPUSH 5\nPUSH 1\nSUB\nMUL\nPUSH 3\nDIV",
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(listing(source), expected, "compiling {:?}", source);
    }
}

#[test]
fn test_sole_literal() {
    for n in [0_i64, 1, 7, 1234, i64::MAX] {
        let code = compile_str(&n.to_string()).unwrap();
        assert_eq!(code, vec![Instruction::Push(n)]);
    }
}

#[test]
fn test_left_associativity() {
    assert_eq!(listing("9 - 4 - 1"), "PUSH 9\nPUSH 4\nSUB\nPUSH 1\nSUB");
    assert_eq!(listing("8 / 4 / 2"), "PUSH 8\nPUSH 4\nDIV\nPUSH 2\nDIV");
}

#[test]
fn test_precedence() {
    assert_eq!(listing("1 + 2 * 3"), "PUSH 1\nPUSH 2\nPUSH 3\nMUL\nADD");
    assert_eq!(listing("1 * 2 + 3"), "PUSH 1\nPUSH 2\nMUL\nPUSH 3\nADD");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(listing("(1 + 2) * 3"), "PUSH 1\nPUSH 2\nADD\nPUSH 3\nMUL");
}

#[test]
fn test_instruction_count() {
    // literals + operators, with the outermost operator last
    let cases = [
        ("1 + 2", 3, Some(OpCode::Add)),
        ("(1 + 2) * (3 - 4)", 7, Some(OpCode::Mul)),
        ("1 * 2 - 3 / 4 + 5", 9, Some(OpCode::Add)),
        ("((1))", 1, None),
    ];

    for (source, count, last) in cases {
        let code = compile_str(source).unwrap();
        assert_eq!(code.len(), count, "compiling {:?}", source);

        let last_op = match code.last() {
            Some(Instruction::Op(op)) => Some(*op),
            _ => None,
        };
        assert_eq!(last_op, last, "compiling {:?}", source);
    }
}

#[test]
fn test_stack_discipline() {
    // Every prefix keeps at least one value on the stack,
    // and the whole program leaves exactly one.
    let code = compile_str("(10 + 2) * (5 - 1) / 3 - 4 * (2 + (1 - 1))").unwrap();
    let mut depth = 0_i32;
    for instr in &code {
        match instr {
            Instruction::Push(_) => depth += 1,
            Instruction::Op(_) => {
                assert!(depth >= 2);
                depth -= 1;
            }
        }
    }
    assert_eq!(depth, 1);
}

#[test]
fn test_idempotent() {
    const CODE: &str = "(10 + 2) * (5 - 1) / 3";
    assert_eq!(compile_str(CODE).unwrap(), compile_str(CODE).unwrap());
}

#[test]
fn test_lexical_error() {
    let err = compile_str("10 + #").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Lexical);
    assert!(err.message.contains('#'));
    assert_eq!(err.position, Some(5));
}

#[test]
fn test_missing_close_paren() {
    let err = compile_str("2 * (3 + 4").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntactic);
    assert!(err.message.contains("')'"));
    assert!(err.message.contains("end of input"));
}

#[test]
fn test_operand_expected() {
    let err = compile_str("2 + * 3").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntactic);
    assert!(err.message.contains("expected a number or '('"));
}

#[test]
fn test_render_error() {
    const CODE: &str = "2 * (3 + 4";
    let err = compile_str(CODE).unwrap_err();
    assert_eq!(
        err.render(CODE),
        "[line 1, column 11] expected ')', found end of input\n2 * (3 + 4\n          ^"
    );
}

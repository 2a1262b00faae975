use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_make() {
    let cases: [(OpCode, &[usize], &[u8]); 3] = [
        (OpCode::Constant, &[65534], &[0x00, 0xFF, 0xFE]),
        (OpCode::Constant, &[1], &[0x00, 0x00, 0x01]),
        (OpCode::Add, &[], &[0x01]),
    ];
    for (op, operands, expected) in cases {
        assert_eq!(make(op, operands).as_bytes(), expected, "{op}");
    }
}

#[test]
fn test_make_pads_missing_operands_and_drops_extras() {
    assert_eq!(make(OpCode::Constant, &[]).as_bytes(), &[0x00, 0x00, 0x00]);
    assert_eq!(make(OpCode::Add, &[7]).as_bytes(), &[0x01]);
    assert_eq!(make(OpCode::Constant, &[0x1_0002]).as_bytes(), &[0x00, 0x00, 0x02]);
}

#[test]
fn test_try_make_rejects_operand_count() {
    assert_eq!(
        try_make(OpCode::Add, &[1]),
        Err(BytecodeError::OperandCountMismatch {
            op: "OpAdd",
            expected: 0,
            got: 1,
        })
    );
    assert_eq!(
        try_make(OpCode::Constant, &[]),
        Err(BytecodeError::OperandCountMismatch {
            op: "OpConstant",
            expected: 1,
            got: 0,
        })
    );
}

#[test]
fn test_try_make_rejects_wide_operand() {
    assert_eq!(
        try_make(OpCode::Constant, &[65536]),
        Err(BytecodeError::OperandTooWide {
            op: "OpConstant",
            operand: 65536,
            width: 2,
        })
    );
    assert_eq!(
        try_make(OpCode::Constant, &[65535]).map(|ins| ins.len()),
        Ok(3)
    );
}

#[test]
fn test_read_operands() {
    let ins = make(OpCode::Constant, &[65535]);
    let def = OpCode::Constant.definition();
    assert_eq!(read_operands(def, &ins.as_bytes()[1..]), Ok((vec![65535], 2)));
}

#[test]
fn test_read_operands_without_operands() {
    let def = OpCode::Add.definition();
    assert_eq!(read_operands(def, &[]), Ok((vec![], 0)));
}

#[test]
fn test_read_operands_truncated() {
    let def = OpCode::Constant.definition();
    assert_eq!(
        read_operands(def, &[0x01]),
        Err(BytecodeError::MissingOperandBytes {
            op: "OpConstant",
            needed: 2,
            available: 1,
        })
    );
}

#[test]
fn test_read_u16() {
    assert_eq!(read_u16(&[0x01, 0x02, 0xFF]), Some(0x0102));
    assert_eq!(read_u16(&[0x01]), None);
    assert_eq!(read_u16(&[]), None);
}

#[test]
fn test_concat_and_append() {
    let mut ins = Instructions::concat([
        make(OpCode::Constant, &[1]),
        make(OpCode::Constant, &[2]),
    ]);
    assert_eq!(ins.len(), 6);

    let at = ins.append(&make(OpCode::Add, &[]));
    assert_eq!(at, 6);
    assert_eq!(ins.as_bytes(), &[0, 0, 1, 0, 0, 2, 1]);
}

#[test]
fn test_disassembly() {
    let ins: Instructions = [
        make(OpCode::Add, &[]),
        make(OpCode::Constant, &[2]),
        make(OpCode::Constant, &[65535]),
    ]
    .into_iter()
    .collect();

    let expected = "0000 OpAdd\n0001 OpConstant 2\n0004 OpConstant 65535\n";
    assert_eq!(ins.to_string(), expected);
}

#[test]
fn test_disassembly_reports_bad_bytes_inline() {
    let ins = Instructions::from(vec![0x01, 0xEE, 0x01, 0x00, 0x00]);
    // The truncated OpConstant starts at offset 3; its operands at 4.
    let expected = "0000 OpAdd\n\
                    0001 ERROR: opcode 238 undefined\n\
                    0002 OpAdd\n\
                    0003 ERROR: instruction truncated at offset 3\n";
    assert_eq!(ins.to_string(), expected);
}

#[test]
fn test_empty_disassembly() {
    assert_eq!(Instructions::new().to_string(), "");
    assert!(Instructions::default().is_empty());
}

//! Text decoder for the comma-separated instruction notation.
//!
//! One instruction per line:
//!
//! ```text
//! ADD,R3,R1,R2        SUB / MUL / DIV take the same operands
//! LD,R1,0x5           immediate is hexadecimal, `0x` optional
//! JUMP,0x1,R1,0x3     compare value, register, branch offset
//! ```
//!
//! Offsets are read as 32-bit two's complement, so `fffffffe` and `-2` are
//! the same offset. Mnemonics are case-insensitive and blank lines are skipped.

use crate::common::error::{DecodeError, DecodeErrorKind};
use crate::common::NUM_REGS;
use crate::isa::instruction::{ArithOp, Instruction};

/// Decodes one line of the instruction notation.
///
/// # Errors
///
/// Returns the reason the line is malformed.
pub fn decode_line(line: &str) -> Result<Instruction, DecodeErrorKind> {
    let mut fields = line.split(',').map(str::trim);
    let mnemonic = fields.next().unwrap_or_default();
    let operands: Vec<&str> = fields.collect();

    let arith = match mnemonic.to_ascii_uppercase().as_str() {
        "ADD" => Some(ArithOp::Add),
        "SUB" => Some(ArithOp::Sub),
        "MUL" => Some(ArithOp::Mul),
        "DIV" => Some(ArithOp::Div),
        "LD" => {
            let [rd, imm] = expect_operands::<2>(mnemonic, &operands)?;
            return Ok(Instruction::Load {
                rd: parse_register(rd)?,
                imm: parse_hex(imm)?,
            });
        }
        "JUMP" => {
            let [imm, rs, offset] = expect_operands::<3>(mnemonic, &operands)?;
            return Ok(Instruction::Jump {
                rs: parse_register(rs)?,
                imm: parse_hex(imm)?,
                offset: parse_offset(offset)?,
            });
        }
        _ => None,
    };

    let Some(op) = arith else {
        return Err(DecodeErrorKind::UnknownMnemonic(mnemonic.to_string()));
    };
    let [rd, rs1, rs2] = expect_operands::<3>(mnemonic, &operands)?;
    Ok(Instruction::Arith {
        op,
        rd: parse_register(rd)?,
        rs1: parse_register(rs1)?,
        rs2: parse_register(rs2)?,
    })
}

/// Decodes a whole program, skipping blank lines.
///
/// # Errors
///
/// Returns the first malformed line together with its 1-based line number.
pub fn decode_program(text: &str) -> Result<Vec<Instruction>, DecodeError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            decode_line(line).map_err(|kind| DecodeError {
                line: line_no,
                text: line.to_string(),
                kind,
            })
        })
        .collect()
}

fn expect_operands<'a, const N: usize>(
    mnemonic: &str,
    operands: &[&'a str],
) -> Result<[&'a str; N], DecodeErrorKind> {
    <[&str; N]>::try_from(operands).map_err(|_| DecodeErrorKind::OperandCount {
        mnemonic: mnemonic.to_string(),
        expected: N,
        found: operands.len(),
    })
}

fn parse_register(field: &str) -> Result<usize, DecodeErrorKind> {
    field
        .strip_prefix(['R', 'r'])
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n < NUM_REGS)
        .ok_or_else(|| DecodeErrorKind::InvalidRegister(field.to_string()))
}

fn strip_hex_prefix(field: &str) -> &str {
    field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field)
}

fn parse_hex(field: &str) -> Result<u32, DecodeErrorKind> {
    u32::from_str_radix(strip_hex_prefix(field), 16)
        .map_err(|_| DecodeErrorKind::InvalidImmediate(field.to_string()))
}

fn parse_offset(field: &str) -> Result<i32, DecodeErrorKind> {
    let (negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field),
    };
    let raw = parse_hex(digits).map_err(|_| DecodeErrorKind::InvalidImmediate(field.to_string()))?;
    let offset = raw as i32;
    Ok(if negative { offset.wrapping_neg() } else { offset })
}

//! Trace record decoding.
//!
//! A record has the shape `" <op> <hexaddr>,<size>"`: one filler column, the
//! operation letter, a space, a hexadecimal address, a comma and a decimal
//! access size. Instruction fetches are written with the `I` in the first
//! column (`"I 0400d7d4,8"`) and are therefore never seen as data operations.
//! Text following the size digits is ignored.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{OP_COLUMN, OPERAND_SEPARATOR};
use crate::common::error::ParseError;

/// Kind of memory operation carried by a trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Instruction fetch (`I`). Ignored by the data cache.
    Instruction,
    /// Data load (`L`).
    Load,
    /// Data store (`S`).
    Store,
    /// Data modify (`M`): a load followed by a store to the same address.
    Modify,
}

impl Operation {
    /// Decodes an operation letter.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::Instruction),
            'L' => Some(Self::Load),
            'S' => Some(Self::Store),
            'M' => Some(Self::Modify),
            _ => None,
        }
    }

    /// Letter used for this operation in trace text.
    pub const fn as_char(self) -> char {
        match self {
            Self::Instruction => 'I',
            Self::Load => 'L',
            Self::Store => 'S',
            Self::Modify => 'M',
        }
    }

    /// Number of data-cache accesses this operation generates.
    pub const fn accesses(self) -> usize {
        match self {
            Self::Instruction => 0,
            Self::Load | Self::Store => 1,
            Self::Modify => 2,
        }
    }

    /// True for the operations the data cache simulates.
    pub const fn is_data(self) -> bool {
        self.accesses() > 0
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One data access decoded from a trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Operation kind; always `Load`, `Store` or `Modify` for parsed records.
    pub op: Operation,
    /// Byte address accessed.
    pub address: u64,
    /// Access width in bytes. Echoed but not used by the model, which assumes
    /// no access straddles two blocks.
    pub size: u32,
}

impl TraceRecord {
    /// Creates a record from its parts.
    pub const fn new(op: Operation, address: u64, size: u32) -> Self {
        Self { op, address, size }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x},{}", self.op, self.address, self.size)
    }
}

impl FromStr for TraceRecord {
    type Err = ParseError;

    /// Parses the operand form `"<op> <hexaddr>,<size>"` without the filler column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim_start().chars();
        let op = chars
            .next()
            .and_then(Operation::from_char)
            .filter(|op| op.is_data())
            .ok_or(ParseError::MissingOperand)?;
        let (address, size) = parse_operand(chars.as_str())?;
        Ok(Self::new(op, address, size))
    }
}

/// Decodes one line of trace text.
///
/// # Returns
///
/// * `Ok(Some(record))` for a well-formed `L`, `S` or `M` record.
/// * `Ok(None)` when the operation column holds anything else, including
///   instruction fetches, blank lines and lines too short to have one.
///
/// # Errors
///
/// Returns a [`ParseError`] when the operation is `L`, `S` or `M` but the
/// `<hexaddr>,<size>` operand does not decode.
pub fn parse_line(line: &str) -> Result<Option<TraceRecord>, ParseError> {
    let Some((op_at, op)) = line
        .char_indices()
        .nth(OP_COLUMN)
        .and_then(|(at, c)| Operation::from_char(c).map(|op| (at, op)))
        .filter(|(_, op)| op.is_data())
    else {
        return Ok(None);
    };

    // The operation letter is ASCII, so the operand starts one byte after it.
    let (address, size) = parse_operand(&line[op_at + 1..])?;
    Ok(Some(TraceRecord::new(op, address, size)))
}

fn parse_operand(operand: &str) -> Result<(u64, u32), ParseError> {
    let operand = operand.trim();
    if operand.is_empty() {
        return Err(ParseError::MissingOperand);
    }
    let (addr_text, size_text) = operand
        .split_once(OPERAND_SEPARATOR)
        .ok_or(ParseError::MissingSize)?;

    let addr_text = addr_text.trim();
    let address = u64::from_str_radix(addr_text, 16)
        .map_err(|_| ParseError::InvalidAddress(addr_text.to_owned()))?;

    // Only the leading digits are the size; anything after them is ignored.
    let size_text = size_text.trim_start();
    let digits_end = size_text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(size_text.len());
    let size = size_text[..digits_end]
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidSize(size_text.trim_end().to_owned()))?;

    Ok((address, size))
}

//! Index resolution for digit sequences.
//!
//! Non-negative indices count from the least-significant digit, negative
//! indices count back from the most-significant one (`-1` is the top digit).
//! Reads past either end see a virtual zero, writes may extend the sequence
//! by exactly one digit, and slice bounds must stay inside `[0, len]`.

use crate::BigNatError;

/// Where a read lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSlot {
    At(usize),
    /// Outside the stored digits; reads as `0`.
    Virtual,
}

/// Where a write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteSlot {
    At(usize),
    /// One past the top digit; the sequence grows by one.
    Append,
}

fn resolve_existing(len: usize, index: isize) -> Option<usize> {
    if index >= 0 {
        let pos = index as usize;
        (pos < len).then_some(pos)
    } else {
        let back = index.unsigned_abs();
        (back <= len).then(|| len - back)
    }
}

pub fn resolve_read(len: usize, index: isize) -> ReadSlot {
    match resolve_existing(len, index) {
        Some(pos) => ReadSlot::At(pos),
        None => ReadSlot::Virtual,
    }
}

pub fn resolve_write(len: usize, index: isize) -> Result<WriteSlot, BigNatError> {
    match resolve_existing(len, index) {
        Some(pos) => Ok(WriteSlot::At(pos)),
        None if index >= 0 && index as usize == len => Ok(WriteSlot::Append),
        None => Err(BigNatError::IndexOutOfRange { index, len }),
    }
}

/// Start bound of a slice. `0..=len` from the bottom, negative from the top.
pub fn resolve_slice_start(len: usize, m: isize) -> Result<usize, BigNatError> {
    let pos = if m >= 0 {
        Some(m as usize).filter(|&pos| pos <= len)
    } else {
        let back = m.unsigned_abs();
        (back <= len).then(|| len - back)
    };
    pos.ok_or(BigNatError::IndexOutOfRange { index: m, len })
}

/// End bound of a slice. Positive from the bottom, zero or negative from the top,
/// so `0` means "up to the end".
pub fn resolve_slice_end(len: usize, n: isize) -> Result<usize, BigNatError> {
    let pos = if n > 0 {
        Some(n as usize).filter(|&pos| pos <= len)
    } else {
        let back = n.unsigned_abs();
        (back <= len).then(|| len - back)
    };
    pos.ok_or(BigNatError::IndexOutOfRange { index: n, len })
}

#[test]
fn test_resolve_read() {
    assert_eq!(resolve_read(3, 0), ReadSlot::At(0));
    assert_eq!(resolve_read(3, 2), ReadSlot::At(2));
    assert_eq!(resolve_read(3, -1), ReadSlot::At(2));
    assert_eq!(resolve_read(3, -3), ReadSlot::At(0));
    assert_eq!(resolve_read(3, 3), ReadSlot::Virtual);
    assert_eq!(resolve_read(3, -4), ReadSlot::Virtual);
    assert_eq!(resolve_read(0, 0), ReadSlot::Virtual);
    assert_eq!(resolve_read(0, -1), ReadSlot::Virtual);
}

#[test]
fn test_resolve_write() {
    assert_eq!(resolve_write(3, 1), Ok(WriteSlot::At(1)));
    assert_eq!(resolve_write(3, -2), Ok(WriteSlot::At(1)));
    assert_eq!(resolve_write(3, 3), Ok(WriteSlot::Append));
    assert_eq!(resolve_write(0, 0), Ok(WriteSlot::Append));
    assert_eq!(
        resolve_write(3, 4),
        Err(BigNatError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert_eq!(
        resolve_write(3, -4),
        Err(BigNatError::IndexOutOfRange { index: -4, len: 3 })
    );
}

#[test]
fn test_resolve_slice_bounds() {
    assert_eq!(resolve_slice_start(4, 0), Ok(0));
    assert_eq!(resolve_slice_start(4, 4), Ok(4));
    assert_eq!(resolve_slice_start(4, -1), Ok(3));
    assert_eq!(resolve_slice_start(4, -4), Ok(0));
    assert!(resolve_slice_start(4, 5).is_err());
    assert!(resolve_slice_start(4, -5).is_err());

    assert_eq!(resolve_slice_end(4, 0), Ok(4));
    assert_eq!(resolve_slice_end(4, 2), Ok(2));
    assert_eq!(resolve_slice_end(4, -1), Ok(3));
    assert_eq!(resolve_slice_end(4, -4), Ok(0));
    assert!(resolve_slice_end(4, 5).is_err());
    assert!(resolve_slice_end(4, -5).is_err());
}

pub const DEFAULT_BASE: u32 = 100;

/// Largest supported base. `(10^9)^2` plus carries still fits in an `i64` digit.
pub const MAX_BASE: u32 = 1_000_000_000;

/// Decimal characters per digit when `base` is a power of ten, `0` otherwise.
pub const fn decimal_width(base: u32) -> usize {
    if base < 10 {
        return 0;
    }
    let mut rest = base;
    let mut width = 0;
    while rest % 10 == 0 {
        rest /= 10;
        width += 1;
    }
    if rest == 1 { width } else { 0 }
}

#[test]
fn test_decimal_width() {
    assert_eq!(decimal_width(10), 1);
    assert_eq!(decimal_width(100), 2);
    assert_eq!(decimal_width(MAX_BASE), 9);
    assert_eq!(decimal_width(2), 0);
    assert_eq!(decimal_width(20), 0);
    assert_eq!(decimal_width(1024), 0);
}

//! # BigNat
//! Immutable arbitrary-precision non-negative integers, stored as base-`BASE` digits
//! with the least-significant digit first. `BASE` defaults to 100.
//! # Example
//! ```
//! use big_nat::BigNat;
//!
//! let a: BigNat = "12345".parse().unwrap();
//! let b = BigNat::from(67u32);
//! assert_eq!((&a + &b).to_string(), "12412");
//! assert_eq!((&a - &b).to_string(), "12278");
//! assert_eq!((&a * &b).to_string(), "827115");
//! assert_eq!(a.checked_div(&b).unwrap().to_string(), "184");
//! assert_eq!(a.checked_rem(&b).unwrap().to_string(), "17");
//! assert_eq!(a.sharp(&b, 1).unwrap().to_string(), "8271");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
};
use std::str::FromStr;

use log::trace;

use crate::big_nat_constants::*;
use crate::index::{
    resolve_read, resolve_slice_end, resolve_slice_start, resolve_write, ReadSlot, WriteSlot,
};
use crate::BigNatError;

#[derive(Clone)]
pub struct BigNat<const BASE: u32 = DEFAULT_BASE> {
    // least-significant first; the empty sequence is zero
    digits: Vec<i64>,
}

/// Splits `digit` into `(carry, remainder)` with `digit == carry * radix + remainder`
/// and `remainder` in `[0, radix)`.
fn split_digit(digit: i64, radix: i64) -> (i64, i64) {
    if digit >= 0 {
        return (digit / radix, digit % radix);
    }
    // `/` and `%` truncate toward zero, so step one more carry down
    let carry = digit / radix - 1;
    let remainder = digit % radix + radix;
    if remainder == radix {
        (carry + 1, 0)
    } else {
        (carry, remainder)
    }
}

// construction
impl<const BASE: u32> BigNat<BASE> {
    const RADIX: i64 = {
        assert!(BASE >= 2 && BASE <= MAX_BASE, "BigNat base must lie in [2, 10^9]");
        BASE as i64
    };
    const WIDTH: usize = decimal_width(BASE);

    pub const fn zero() -> Self {
        BigNat { digits: Vec::new() }
    }

    /// Wraps `digits` as they are. The result is not normalized, so digits may be
    /// negative, `>= BASE`, or padded with top zeros until [`normalize`](Self::normalize) runs.
    pub fn from_raw_digits(digits: Vec<i64>) -> Self {
        BigNat { digits }
    }

    pub fn base() -> u32 {
        Self::RADIX as u32
    }

    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    /// Number of stored digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    fn from_u128(val: u128) -> Self {
        if let Ok(small) = i64::try_from(val) {
            return Self::from_raw_digits(vec![small]).normalize();
        }
        let radix = Self::RADIX as u128;
        let mut rest = val;
        let mut digits = Vec::new();
        while rest > 0 {
            digits.push((rest % radix) as i64);
            rest /= radix;
        }
        Self::from_raw_digits(digits)
    }

    /// Converts back to a native integer, `None` if the value does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        let radix = Self::RADIX as u128;
        self.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(radix)?.checked_add(u128::try_from(d).ok()?)
        })
    }
}

impl<const BASE: u32> Default for BigNat<BASE> {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_unsigned_to_big_nat {
    ($($u: ty),*) => {
    $(
    impl<const BASE: u32> From<$u> for BigNat<BASE> {
        fn from(val: $u) -> Self {
            BigNat::from_u128(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_nat!(u8, u16, u32, u64, usize, u128);

// normalization
impl<const BASE: u32> BigNat<BASE> {
    /// Carries every digit into `[0, BASE)` and strips zero digits from the top.
    ///
    /// Negative digits borrow from the next position. A raw sequence whose
    /// overall value is negative has no representation and saturates to zero.
    pub fn normalize(mut self) -> Self {
        let radix = Self::RADIX;
        let mut i = 0;
        while i < self.digits.len() {
            let digit = self.digits[i];
            if !(0..radix).contains(&digit) {
                let (carry, remainder) = split_digit(digit, radix);
                self.digits[i] = remainder;
                if i + 1 < self.digits.len() {
                    self.digits[i + 1] += carry;
                } else if carry > 0 {
                    self.digits.push(carry);
                } else if carry < 0 {
                    trace!("negative value {:?} saturates to zero", self.digits);
                    return Self::zero();
                }
            }
            i += 1;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self
    }
}

// indexing
impl<const BASE: u32> BigNat<BASE> {
    /// Reads the digit at `index`, counting from the top when negative.
    /// Positions outside the stored digits read as `0`.
    pub fn digit(&self, index: isize) -> i64 {
        match resolve_read(self.digits.len(), index) {
            ReadSlot::At(pos) => self.digits[pos],
            ReadSlot::Virtual => 0,
        }
    }

    /// Returns a copy with the digit at `index` replaced. Writing at `len()`
    /// appends a digit; any other position outside the sequence fails.
    pub fn with_digit(mut self, index: isize, value: i64) -> Result<Self, BigNatError> {
        match resolve_write(self.digits.len(), index)? {
            WriteSlot::At(pos) => self.digits[pos] = value,
            WriteSlot::Append => self.digits.push(value),
        }
        Ok(self)
    }

    /// Digits in the half-open range `[m, n)`. `m` counts from the top when
    /// negative; `n` counts from the top when zero or negative, so `slice(m, 0)`
    /// runs to the end. The result is not normalized.
    pub fn slice(&self, m: isize, n: isize) -> Result<Self, BigNatError> {
        let len = self.digits.len();
        let start = resolve_slice_start(len, m)?;
        let end = resolve_slice_end(len, n)?;
        if start > end {
            return Err(BigNatError::IndexOutOfRange { index: m, len });
        }
        Ok(Self::from_raw_digits(self.digits[start..end].to_vec()))
    }

    /// Concatenates `self` as the low digits and `high` above it, without normalizing.
    pub fn prepend(&self, high: &Self) -> Self {
        let mut digits = Vec::with_capacity(self.digits.len() + high.digits.len());
        digits.extend_from_slice(&self.digits);
        digits.extend_from_slice(&high.digits);
        Self::from_raw_digits(digits)
    }
}

// comparison
impl<const BASE: u32> BigNat<BASE> {
    /// Three-way comparison of normalized values: the longer sequence wins,
    /// equal lengths compare from the top digit down.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }

    /// `1` if `self < other`, `0` if equal, `-1` otherwise.
    pub fn is_smaller_than(&self, other: &Self) -> i8 {
        match self.compare(other) {
            Ordering::Less => 1,
            Ordering::Equal => 0,
            Ordering::Greater => -1,
        }
    }
}

impl<const BASE: u32> PartialEq for BigNat<BASE> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl<const BASE: u32> Eq for BigNat<BASE> {}

impl<const BASE: u32> PartialOrd for BigNat<BASE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<const BASE: u32> Ord for BigNat<BASE> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// addition
impl<const BASE: u32> Add<&BigNat<BASE>> for &BigNat<BASE> {
    type Output = BigNat<BASE>;

    fn add(self, rhs: &BigNat<BASE>) -> Self::Output {
        let radix = BigNat::<BASE>::RADIX;
        let len = self.len().max(rhs.len());
        let mut t = vec![0; len + 1];
        for i in 0..len {
            t[i] += self.digit(i as isize) + rhs.digit(i as isize);
            t[i + 1] += t[i] / radix;
            t[i] %= radix;
        }
        BigNat::from_raw_digits(t).normalize()
    }
}

// subtraction, saturating at zero
impl<const BASE: u32> Sub<&BigNat<BASE>> for &BigNat<BASE> {
    type Output = BigNat<BASE>;

    fn sub(self, rhs: &BigNat<BASE>) -> Self::Output {
        if self < rhs {
            return BigNat::zero();
        }
        let radix = BigNat::<BASE>::RADIX;
        let len = self.len().max(rhs.len());
        let mut t = vec![0; len + 1];
        for i in 0..len {
            t[i] += self.digit(i as isize) - rhs.digit(i as isize);
            if !(0..radix).contains(&t[i]) {
                let (carry, remainder) = split_digit(t[i], radix);
                t[i + 1] += carry;
                t[i] = remainder;
            }
        }
        BigNat::from_raw_digits(t).normalize()
    }
}

// multiplication
impl<const BASE: u32> Mul<&BigNat<BASE>> for &BigNat<BASE> {
    type Output = BigNat<BASE>;

    fn mul(self, rhs: &BigNat<BASE>) -> Self::Output {
        let radix = BigNat::<BASE>::RADIX;
        let (a, b) = (&self.digits, &rhs.digits);
        let mut t = vec![0; a.len() + b.len()];
        for i in 0..a.len() {
            for j in 0..b.len() {
                t[i + j] += a[i] * b[j];
                t[i + j + 1] += t[i + j] / radix;
                t[i + j] %= radix;
            }
        }
        // later partial products can still leave digits >= BASE behind
        BigNat::from_raw_digits(t).normalize()
    }
}

// division
impl<const BASE: u32> BigNat<BASE> {
    /// Schoolbook long division, one quotient digit per step from the top.
    ///
    /// Each step takes the top `divisor.len()` digits of the running dividend
    /// (one more if that window is smaller than the divisor), estimates the
    /// quotient digit from the two or three leading digits, then corrects the
    /// estimate against the exact window.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, BigNatError> {
        if divisor.is_zero() {
            return Err(BigNatError::DivisionByZero);
        }
        let radix = Self::RADIX as i128;
        let width = divisor.len() as isize;
        let divisor_head = divisor.digit(-1) as i128 * radix + divisor.digit(-2) as i128;

        let mut quotient = vec![0; self.len()];
        let mut rest = self.clone();
        while rest >= *divisor {
            let top = rest.slice(-width, 0)?;
            let (window, low, head) = if top >= *divisor {
                let head = top.digit(-1) as i128 * radix + top.digit(-2) as i128;
                (top, rest.slice(0, -width)?, head)
            } else {
                let window = rest.slice(-width - 1, 0)?;
                let head = (window.digit(-1) as i128 * radix + window.digit(-2) as i128) * radix
                    + window.digit(-3) as i128;
                (window, rest.slice(0, -width - 1)?, head)
            };

            let guess = Self::correct_guess(&window, divisor, (head / divisor_head) as i64);
            quotient[low.len()] = guess;
            let remainder = &window - &(divisor * &Self::from(guess as u64));
            rest = low.prepend(&remainder).normalize();
        }
        Ok(Self::from_raw_digits(quotient).normalize())
    }

    /// Moves `guess` to the largest value with `divisor * guess <= window`.
    /// The leading-digit estimate may be off by more than one either way.
    fn correct_guess(window: &Self, divisor: &Self, estimate: i64) -> i64 {
        let mut guess = estimate;
        while *window >= divisor * &Self::from(guess as u64) {
            guess += 1;
        }
        while *window < divisor * &Self::from(guess as u64) {
            guess -= 1;
        }
        if guess != estimate {
            trace!("quotient digit estimate {} corrected to {}", estimate, guess);
        }
        debug_assert!(
            (0..Self::RADIX).contains(&guess),
            "quotient digit {} outside [0, {})",
            guess,
            BASE
        );
        guess
    }

    /// `self - (self / divisor) * divisor`.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, BigNatError> {
        let quotient = self.checked_div(divisor)?;
        Ok(self - &(&quotient * divisor))
    }

    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigNatError> {
        let quotient = self.checked_div(divisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }
}

impl<const BASE: u32> Div<&BigNat<BASE>> for &BigNat<BASE> {
    type Output = BigNat<BASE>;

    fn div(self, rhs: &BigNat<BASE>) -> Self::Output {
        self.checked_div(rhs)
            .unwrap_or_else(|_| panic!("attempt to divide by zero"))
    }
}

impl<const BASE: u32> Rem<&BigNat<BASE>> for &BigNat<BASE> {
    type Output = BigNat<BASE>;

    fn rem(self, rhs: &BigNat<BASE>) -> Self::Output {
        self.checked_rem(rhs)
            .unwrap_or_else(|_| panic!("attempt to calculate the remainder with a divisor of zero"))
    }
}

macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident);* $(;)?) => {
    $(
    impl<const BASE: u32> $imp for BigNat<BASE> {
        type Output = BigNat<BASE>;

        fn $method(self, rhs: Self) -> Self::Output {
            <&BigNat<BASE> as $imp<&BigNat<BASE>>>::$method(&self, &rhs)
        }
    }

    impl<const BASE: u32> $imp<&BigNat<BASE>> for BigNat<BASE> {
        type Output = BigNat<BASE>;

        fn $method(self, rhs: &BigNat<BASE>) -> Self::Output {
            <&BigNat<BASE> as $imp<&BigNat<BASE>>>::$method(&self, rhs)
        }
    }

    impl<const BASE: u32> $imp<BigNat<BASE>> for &BigNat<BASE> {
        type Output = BigNat<BASE>;

        fn $method(self, rhs: BigNat<BASE>) -> Self::Output {
            <&BigNat<BASE> as $imp<&BigNat<BASE>>>::$method(self, &rhs)
        }
    }

    impl<const BASE: u32> $assign_imp for BigNat<BASE> {
        fn $assign_method(&mut self, rhs: Self) {
            *self = <&BigNat<BASE> as $imp<&BigNat<BASE>>>::$method(&*self, &rhs);
        }
    }

    impl<const BASE: u32> $assign_imp<&BigNat<BASE>> for BigNat<BASE> {
        fn $assign_method(&mut self, rhs: &BigNat<BASE>) {
            *self = <&BigNat<BASE> as $imp<&BigNat<BASE>>>::$method(&*self, rhs);
        }
    }
    )*
    };
}
forward_binop!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
);

// sharp
impl<const BASE: u32> BigNat<BASE> {
    /// The product `self * other` with its `m` lowest digits dropped,
    /// i.e. `self * other / BASE^m`. Fails if `m` exceeds the product's length.
    pub fn sharp(&self, other: &Self, m: usize) -> Result<Self, BigNatError> {
        let product = self * other;
        let start = isize::try_from(m).map_err(|_| BigNatError::IndexOutOfRange {
            index: isize::MAX,
            len: product.len(),
        })?;
        product.slice(start, 0)
    }
}

// printing
impl<const BASE: u32> Display for BigNat<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = match self.digits.iter().rposition(|&d| d != 0) {
            Some(top) => top,
            None => return f.write_str("0"),
        };
        if Self::WIDTH == 0 {
            return f.write_str(&self.to_decimal_by_division());
        }
        write!(f, "{}", self.digits[top])?;
        for digit in self.digits[..top].iter().rev() {
            write!(f, "{:0width$}", digit, width = Self::WIDTH)?;
        }
        Ok(())
    }
}

impl<const BASE: u32> Debug for BigNat<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNat<{}>{:?}", BASE, self.digits)
    }
}

impl<const BASE: u32> BigNat<BASE> {
    // bases that are not a power of ten: peel off decimal digits by short division
    fn to_decimal_by_division(&self) -> String {
        let radix = Self::RADIX;
        let mut digits = self.clone().normalize().digits;
        let mut decimal = Vec::new();
        while !digits.is_empty() {
            let mut remainder = 0;
            for d in digits.iter_mut().rev() {
                let current = remainder * radix + *d;
                *d = current / 10;
                remainder = current % 10;
            }
            decimal.push(char::from(b'0' + remainder as u8));
            while digits.last() == Some(&0) {
                digits.pop();
            }
        }
        if decimal.is_empty() {
            return String::from("0");
        }
        decimal.iter().rev().collect()
    }
}

// parsing
impl<const BASE: u32> FromStr for BigNat<BASE> {
    type Err = BigNatError;

    /// Accepts any non-empty run of ASCII decimal digits, leading zeros included.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigNatError::InvalidFormat(text.to_string()));
        }
        if Self::WIDTH == 0 {
            return Ok(Self::from_decimal_horner(text));
        }
        // fixed-width chunks from the right, the leftover head becomes the top digit
        let mut digits = Vec::with_capacity(text.len() / Self::WIDTH + 1);
        let mut end = text.len();
        while end > 0 {
            let start = end.saturating_sub(Self::WIDTH);
            let chunk = &text[start..end];
            let digit = chunk
                .parse::<i64>()
                .map_err(|_| BigNatError::InvalidFormat(text.to_string()))?;
            digits.push(digit);
            end = start;
        }
        Ok(Self::from_raw_digits(digits).normalize())
    }
}

impl<const BASE: u32> TryFrom<&str> for BigNat<BASE> {
    type Error = BigNatError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl<const BASE: u32> BigNat<BASE> {
    fn from_decimal_horner(text: &str) -> Self {
        let radix = Self::RADIX;
        let mut digits: Vec<i64> = Vec::new();
        for b in text.bytes() {
            let mut carry = i64::from(b - b'0');
            for d in digits.iter_mut() {
                let current = *d * 10 + carry;
                *d = current % radix;
                carry = current / radix;
            }
            while carry > 0 {
                digits.push(carry % radix);
                carry /= radix;
            }
        }
        Self::from_raw_digits(digits).normalize()
    }
}

#[cfg(test)]
fn parse<const BASE: u32>(text: &str) -> BigNat<BASE> {
    text.parse().unwrap()
}

#[test]
fn test_from_str() {
    let a: BigNat = parse("00012345");
    assert_eq!(a.digits(), &[45, 23, 1]);
    assert_eq!(a.to_string(), "12345");

    let b: BigNat<10> = parse("907");
    assert_eq!(b.digits(), &[7, 0, 9]);

    let zero: BigNat = parse("0000");
    assert!(zero.digits().is_empty());
    assert_eq!(zero.to_string(), "0");

    let big: BigNat<1_000_000_000> = parse("1234567890123456789");
    assert_eq!(big.digits(), &[123456789, 234567890, 1]);
    assert_eq!(big.to_string(), "1234567890123456789");
}

#[test]
fn test_from_str_rejects_malformed() {
    for text in ["", "12a4", "-5", "+5", " 12", "1_000"] {
        assert_eq!(
            text.parse::<BigNat>(),
            Err(BigNatError::InvalidFormat(text.to_string())),
            "text = {:?}",
            text
        );
    }
}

#[test]
fn test_from_native() {
    assert!(BigNat::<10>::from(0u8).digits().is_empty());
    assert_eq!(BigNat::<10>::from(12345u64).digits(), &[5, 4, 3, 2, 1]);
    assert_eq!(BigNat::<100>::from(12345u32).digits(), &[45, 23, 1]);

    let max = BigNat::<100>::from(u128::MAX);
    assert_eq!(max.to_string(), u128::MAX.to_string());
    assert_eq!(max.to_u128(), Some(u128::MAX));
    let over = &max + &BigNat::from(1u8);
    assert_eq!(over.to_u128(), None);
}

#[test]
fn test_normalize() {
    // 12 - 30 + 100 = 82
    let a = BigNat::<10>::from_raw_digits(vec![12, -3, 1]).normalize();
    assert_eq!(a.digits(), &[2, 8]);

    // a negative multiple of the base borrows exactly
    let b = BigNat::<10>::from_raw_digits(vec![-10, 1]).normalize();
    assert!(b.digits().is_empty());

    let c = BigNat::<10>::from_raw_digits(vec![3, 0, 0]).normalize();
    assert_eq!(c.digits(), &[3]);

    let d = BigNat::<100>::from_raw_digits(vec![250, 99]).normalize();
    assert_eq!(d.digits(), &[50, 1, 1]);

    assert!(BigNat::<10>::from_raw_digits(vec![]).normalize().is_zero());
}

#[test]
fn test_normalize_negative_saturates() {
    assert!(BigNat::<10>::from_raw_digits(vec![-5]).normalize().is_zero());
    // 3 - 50 < 0
    let a = BigNat::<10>::from_raw_digits(vec![3, -5]).normalize();
    assert!(a.is_zero());
    assert_eq!(a.to_string(), "0");
}

#[test]
fn test_split_digit() {
    assert_eq!(split_digit(25, 10), (2, 5));
    assert_eq!(split_digit(-3, 10), (-1, 7));
    assert_eq!(split_digit(-10, 10), (-1, 0));
    assert_eq!(split_digit(-11, 10), (-2, 9));
}

#[test]
fn test_indexing() {
    let a: BigNat<10> = parse("345");
    assert_eq!(a.digit(0), 5);
    assert_eq!(a.digit(2), 3);
    assert_eq!(a.digit(-1), 3);
    assert_eq!(a.digit(-3), 5);
    assert_eq!(a.digit(3), 0);
    assert_eq!(a.digit(-4), 0);

    let b = a.clone().with_digit(-1, 9).unwrap();
    assert_eq!(b.to_string(), "945");
    let c = a.clone().with_digit(3, 1).unwrap();
    assert_eq!(c.to_string(), "1345");
    assert_eq!(
        a.with_digit(4, 1).unwrap_err(),
        BigNatError::IndexOutOfRange { index: 4, len: 3 }
    );
}

#[test]
fn test_slice_and_prepend() {
    let a: BigNat<10> = parse("12345");
    assert_eq!(a.slice(-2, 0).unwrap().to_string(), "12");
    assert_eq!(a.slice(0, -2).unwrap().to_string(), "345");
    assert_eq!(a.slice(1, 3).unwrap().to_string(), "34");
    assert_eq!(a.slice(0, 0).unwrap(), a);
    assert!(a.slice(5, 0).unwrap().is_zero());
    assert!(a.slice(6, 0).is_err());
    assert!(a.slice(0, 6).is_err());
    assert!(a.slice(3, 2).is_err());

    // top zeros of a low slice survive until normalized
    let b: BigNat<10> = parse("1005");
    let low = b.slice(0, -1).unwrap();
    assert_eq!(low.digits(), &[5, 0, 0]);
    assert_eq!(low.normalize().digits(), &[5]);

    let low: BigNat<10> = parse("45");
    let high: BigNat<10> = parse("1");
    assert_eq!(low.prepend(&high).to_string(), "145");
}

#[test]
fn test_compare() {
    let a: BigNat = parse("12345");
    let b: BigNat = parse("12346");
    let c: BigNat = parse("999");
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&c), Ordering::Greater);
    assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    assert!(c < a && a < b);
    assert_eq!(a.is_smaller_than(&b), 1);
    assert_eq!(a.is_smaller_than(&a), 0);
    assert_eq!(b.is_smaller_than(&a), -1);
    assert_eq!(BigNat::<10>::zero(), BigNat::from(0u32));
}

#[test]
fn test_arithmetic_base_10() {
    let a: BigNat<10> = parse("12345");
    let b: BigNat<10> = parse("67");
    assert_eq!((&a + &b).to_string(), "12412");
    assert_eq!((&a - &b).to_string(), "12278");
    assert_eq!((&a * &b).to_string(), "827115");
    assert_eq!((&a / &b).to_string(), "184");
    assert_eq!((&a % &b).to_string(), "17");
}

#[test]
fn test_add_carries_into_new_digit() {
    let a: BigNat = parse("99999999999999999999");
    let b = BigNat::from(1u8);
    assert_eq!((a + b).to_string(), "100000000000000000000");

    let mut c: BigNat<10> = parse("999");
    c += BigNat::from(1u8);
    assert_eq!(c.to_string(), "1000");
}

#[test]
fn test_sub_saturates() {
    let a: BigNat = parse("67");
    let b: BigNat = parse("12345");
    assert!((&a - &b).is_zero());
    assert!((&b - &b).is_zero());
    assert_eq!((&b - &a).to_string(), "12278");

    let c: BigNat<10> = parse("1000");
    assert_eq!((c - BigNat::from(1u8)).to_string(), "999");
}

#[test]
fn test_mul() {
    let a: BigNat = parse("98765432109876543210");
    let b: BigNat = parse("123456789");
    assert_eq!((&a * &b).to_string(), "12193263112482853211126352690");
    assert!((&a * &BigNat::zero()).is_zero());

    let mut c: BigNat<10> = parse("99");
    c *= &BigNat::from(99u8);
    assert_eq!(c.to_string(), "9801");
}

#[test]
fn test_div() {
    let a: BigNat = parse("120");
    let b: BigNat = parse("13");
    assert_eq!((&a / &b).to_string(), "9");

    let a: BigNat = parse("10000000000000000000000000000000000");
    let b: BigNat = parse("1000");
    assert_eq!((&a / &b).to_string(), "10000000000000000000000000000000");

    let a: BigNat = parse("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b: BigNat = parse("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(r.to_string(), "1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949");

    let a: BigNat = parse("12");
    assert!(a.checked_div(&parse("13")).unwrap().is_zero());
}

#[test]
fn test_div_extended_window() {
    // the top two digits of 1000 ("10") are below 99, so the window grows to "100"
    let a: BigNat<10> = parse("1000");
    let b: BigNat<10> = parse("99");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "10");
    assert_eq!(r.to_string(), "10");

    // single-digit divisor under a smaller top digit
    let a: BigNat<10> = parse("1234");
    let b: BigNat<10> = parse("7");
    assert_eq!((&a / &b).to_string(), "176");
    assert_eq!((&a % &b).to_string(), "2");
}

#[test]
fn test_rem() {
    let a: BigNat = parse("12");
    let b: BigNat = parse("8");
    assert_eq!((a % b).to_string(), "4");

    let a: BigNat = parse("10000000000000000");
    let b: BigNat = parse("10");
    assert!(a.checked_rem(&b).unwrap().is_zero());

    let a: BigNat = parse("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b: BigNat = parse("526738495607659438721653478560954837265378495607");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "44532135147185277413589594536286141607822");
    assert_eq!(r.to_string(), "393707270751296419349581795408095683999332705291");
}

#[test]
fn test_div_by_zero() {
    let a: BigNat = parse("12");
    let zero = BigNat::zero();
    assert_eq!(a.checked_div(&zero), Err(BigNatError::DivisionByZero));
    assert_eq!(a.checked_rem(&zero), Err(BigNatError::DivisionByZero));
    assert_eq!(a.div_rem(&zero), Err(BigNatError::DivisionByZero));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_by_zero_panics() {
    let _ = BigNat::<10>::from(5u8) / BigNat::zero();
}

#[test]
fn test_sharp() {
    let a: BigNat = parse("12345");
    let b: BigNat = parse("67");
    // 827115 = [15, 71, 82]
    assert_eq!(a.sharp(&b, 0).unwrap(), &a * &b);
    assert_eq!(a.sharp(&b, 1).unwrap().to_string(), "8271");
    assert!(a.sharp(&b, 3).unwrap().is_zero());
    assert_eq!(
        a.sharp(&b, 4),
        Err(BigNatError::IndexOutOfRange { index: 4, len: 3 })
    );

    let a: BigNat = parse("98765432109876543210");
    let b: BigNat = parse("123456789");
    assert_eq!(a.sharp(&b, 2).unwrap().to_string(), "1219326311248285321112635");

    let zero = BigNat::<10>::zero();
    assert!(zero.sharp(&BigNat::from(7u8), 0).unwrap().is_zero());
}

#[test]
fn test_non_decimal_base() {
    let a: BigNat<16> = parse("255");
    assert_eq!(a.digits(), &[15, 15]);
    assert_eq!(a.to_string(), "255");

    let b: BigNat<7> = parse("2401");
    assert_eq!(b.digits(), &[0, 0, 0, 0, 1]);
    assert_eq!(b.to_string(), "2401");

    let c: BigNat<2> = parse("1000");
    let d: BigNat<2> = parse("7");
    assert_eq!((&c / &d).to_string(), "142");
    assert_eq!((&c % &d).to_string(), "6");
    assert_eq!(BigNat::<16>::zero().to_string(), "0");
}

#[test]
fn test_display_unnormalized() {
    let a = BigNat::<100>::from_raw_digits(vec![5, 0, 7, 0, 0]);
    assert_eq!(a.to_string(), "70005");
    assert_eq!(BigNat::<100>::from_raw_digits(vec![0, 0]).to_string(), "0");
    assert_eq!(format!("{:?}", a.normalize()), "BigNat<100>[5, 0, 7]");
}

//! Big Nat \
//! This crate provides:
//! - [`BigNat`]: Immutable arbitrary-precision non-negative integers kept as digits of a fixed
//!   radix, chosen through a const generic (`BigNat<10>`, `BigNat<100>`, ...). Decimal text
//!   maps onto the digits directly when the radix is a power of ten.
//! - [`BigNat::sharp`]: the product of two values with its lowest `m` digits discarded.
//!
//! Subtraction saturates at zero. Division and remainder report a zero divisor through
//! [`BigNatError::DivisionByZero`] from the `checked_*` methods; the `/` and `%` operators
//! panic instead, like the primitive integer types.

mod big_nat;
mod big_nat_constants;
mod error;
pub mod index;

pub use big_nat::BigNat;
pub use big_nat_constants::{DEFAULT_BASE, MAX_BASE};
pub use error::BigNatError;

#[cfg(test)]
mod tests {
    use crate::BigNat;

    #[test]
    fn it_works() {
        let a: BigNat = "10000000000000".parse().unwrap();
        let b: BigNat = "900000000000".parse().unwrap();
        assert_eq!(BigNat::<100>::base(), 100);
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!(a.sharp(&b, 3).unwrap().to_string(), "9000000000000000000");
    }
}

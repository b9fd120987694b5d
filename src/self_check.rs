//! Randomized comparison of [`BigNat`] against native `u64` arithmetic.

use std::fmt::{self, Display};

use big_nat::{BigNat, BigNatError};
use log::{debug, info};
use rand::Rng;

/// Base the self-check runs in.
pub const CHECK_BASE: u32 = 10;

/// Digits dropped by the `#` check, so the native reference is `a * b / 100`.
pub const SHARP_DIGITS: usize = 2;

type Num = BigNat<CHECK_BASE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub operation: &'static str,
    pub a: u64,
    pub b: u64,
    pub expected: String,
    pub got: String,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={} b={} a{}b={}, but get {}",
            self.a, self.b, self.operation, self.expected, self.got
        )
    }
}

/// Draws `rounds` pairs with `a` in `[0, 100000)` and `b` in `[1, 1000]` and
/// returns every result that disagrees with native arithmetic.
pub fn run<R: Rng + ?Sized>(rounds: usize, rng: &mut R) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for _ in 0..rounds {
        let a: u64 = rng.random_range(0..100_000);
        let b: u64 = rng.random_range(1..=1000);
        mismatches.extend(check_pair(a, b));
    }
    info!("self-check: {} rounds, {} mismatches", rounds, mismatches.len());
    mismatches
}

/// Compares one pair across every operation.
pub fn check_pair(a: u64, b: u64) -> Vec<Mismatch> {
    let (x, y) = (Num::from(a), Num::from(b));
    let shift = u64::from(CHECK_BASE).pow(SHARP_DIGITS as u32);
    let checks: [(&'static str, u64, String); 6] = [
        ("+", a + b, (&x + &y).to_string()),
        ("-", a.saturating_sub(b), (&x - &y).to_string()),
        ("*", a * b, (&x * &y).to_string()),
        ("/", a / b, render(x.checked_div(&y))),
        ("%", a % b, render(x.checked_rem(&y))),
        ("#", a * b / shift, render(truncated_product(&x, &y, SHARP_DIGITS))),
    ];
    checks
        .into_iter()
        .filter(|(_, expected, got)| expected.to_string() != *got)
        .map(|(operation, expected, got)| {
            debug!("mismatch on {} {} {}", a, operation, b);
            Mismatch { operation, a, b, expected: expected.to_string(), got }
        })
        .collect()
}

// a product shorter than m digits is below BASE^m, so the cut leaves zero
fn truncated_product(x: &Num, y: &Num, m: usize) -> Result<Num, BigNatError> {
    match x.sharp(y, m) {
        Err(BigNatError::IndexOutOfRange { .. }) if (x * y).len() < m => Ok(Num::zero()),
        result => result,
    }
}

fn render(result: Result<Num, BigNatError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_check_pair() {
        assert!(check_pair(12345, 67).is_empty());
        assert!(check_pair(0, 1).is_empty());
        assert!(check_pair(3, 3).is_empty());
        assert!(check_pair(99_999, 1000).is_empty());
    }

    #[test]
    fn test_run_seeded() {
        let mut rng = StdRng::seed_from_u64(2016);
        assert!(run(1000, &mut rng).is_empty());
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = Mismatch {
            operation: "+",
            a: 1,
            b: 2,
            expected: "3".to_string(),
            got: "4".to_string(),
        };
        assert_eq!(mismatch.to_string(), "a=1 b=2 a+b=3, but get 4");
    }
}

use big_nat::{BigNat, BigNatError};
use proptest::prelude::*;

fn big<const BASE: u32>(text: &str) -> BigNat<BASE> {
    text.parse().unwrap()
}

fn check_round_trip<const BASE: u32>(v: u64) -> Result<(), TestCaseError> {
    let n = BigNat::<BASE>::from(v);
    prop_assert_eq!(n.to_string(), v.to_string());
    prop_assert_eq!(n.to_string().parse::<BigNat<BASE>>().unwrap(), n);
    Ok(())
}

fn check_add_sub<const BASE: u32>(a: &str, b: &str) -> Result<(), TestCaseError> {
    let (a, b): (BigNat<BASE>, BigNat<BASE>) = (big(a), big(b));
    prop_assert_eq!(&a + &BigNat::zero(), a.clone());
    prop_assert_eq!(&a + &b, &b + &a);
    let difference = &a - &b;
    if a < b {
        prop_assert!(difference.is_zero());
    } else {
        prop_assert_eq!(&difference + &b, a);
    }
    Ok(())
}

fn check_div_identity<const BASE: u32>(a: &str, b: &str) -> Result<(), TestCaseError> {
    let (a, b): (BigNat<BASE>, BigNat<BASE>) = (big(a), big(b));
    let (q, r) = a.div_rem(&b).unwrap();
    prop_assert_eq!(&(&q * &b) + &r, a);
    prop_assert!(r < b);
    Ok(())
}

fn check_sharp<const BASE: u32>(a: &str, b: &str) -> Result<(), TestCaseError> {
    let (a, b): (BigNat<BASE>, BigNat<BASE>) = (big(a), big(b));
    let product = &a * &b;
    prop_assert_eq!(a.sharp(&b, 0).unwrap(), product.clone());
    prop_assert!(a.sharp(&b, product.len()).unwrap().is_zero());
    let past_end = a.sharp(&b, product.len() + 1);
    prop_assert!(
        matches!(past_end, Err(BigNatError::IndexOutOfRange { .. })),
        "past_end = {:?}",
        past_end
    );
    Ok(())
}

proptest! {
    #[test]
    fn native_round_trip(v in any::<u64>()) {
        check_round_trip::<10>(v)?;
        check_round_trip::<100>(v)?;
        check_round_trip::<1_000_000_000>(v)?;
        check_round_trip::<7>(v)?;
    }

    #[test]
    fn leading_zeros_are_dropped(zeros in 0usize..8, v in any::<u64>()) {
        let text = format!("{}{}", "0".repeat(zeros), v);
        prop_assert_eq!(big::<100>(&text).to_string(), v.to_string());
    }

    #[test]
    fn addition_and_saturating_subtraction(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
        check_add_sub::<10>(&a, &b)?;
        check_add_sub::<100>(&a, &b)?;
        check_add_sub::<1000>(&a, &b)?;
    }

    #[test]
    fn multiplication_distributes(a in 0u64..1_000_000, b in 0u64..1_000_000, c in 0u64..1_000_000) {
        let (a, b, c) = (BigNat::<100>::from(a), BigNat::from(b), BigNat::from(c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn division_identity(a in "[0-9]{1,80}", b in "[1-9][0-9]{0,40}") {
        check_div_identity::<10>(&a, &b)?;
        check_div_identity::<100>(&a, &b)?;
        check_div_identity::<1_000_000_000>(&a, &b)?;
        check_div_identity::<3>(&a, &b)?;
    }

    #[test]
    fn sharp_bounds(a in "[0-9]{1,40}", b in "[0-9]{1,40}") {
        check_sharp::<10>(&a, &b)?;
        check_sharp::<100>(&a, &b)?;
    }

    #[test]
    fn division_by_zero_fails(a in "[0-9]{1,40}") {
        let a: BigNat = big(&a);
        prop_assert_eq!(a.checked_div(&BigNat::zero()), Err(BigNatError::DivisionByZero));
        prop_assert_eq!(a.checked_rem(&BigNat::zero()), Err(BigNatError::DivisionByZero));
    }
}

use big_nat::BigNat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn compare_with_native<const BASE: u32>(rng: &mut StdRng, rounds: usize, m: usize) {
    let shift = u64::from(BASE).pow(m as u32);
    for _ in 0..rounds {
        let a: u64 = rng.random_range(0..=u64::from(u32::MAX));
        let b: u64 = rng.random_range(1..=u64::from(u32::MAX));
        let (x, y) = (BigNat::<BASE>::from(a), BigNat::<BASE>::from(b));

        assert_eq!((&x + &y).to_string(), (a + b).to_string(), "{} + {}", a, b);
        assert_eq!((&x - &y).to_string(), a.saturating_sub(b).to_string(), "{} - {}", a, b);
        assert_eq!((&x * &y).to_string(), (a * b).to_string(), "{} * {}", a, b);
        assert_eq!((&x / &y).to_string(), (a / b).to_string(), "{} / {}", a, b);
        assert_eq!((&x % &y).to_string(), (a % b).to_string(), "{} % {}", a, b);
        let sharp = x.sharp(&y, m);
        if (&x * &y).len() >= m {
            assert_eq!(
                sharp.unwrap().to_string(),
                (a * b / shift).to_string(),
                "{} # {} with m = {}",
                a,
                b,
                m
            );
        } else {
            // fewer than m digits in the product: the cut lies outside it
            assert!(sharp.is_err(), "{} # {} with m = {}", a, b, m);
        }
    }
}

#[test]
fn random_pairs_base_10() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    compare_with_native::<10>(&mut rng, 1000, 2);
}

#[test]
fn random_pairs_base_100() {
    let mut rng = StdRng::seed_from_u64(100);
    compare_with_native::<100>(&mut rng, 1000, 2);
}

#[test]
fn random_pairs_base_10000() {
    let mut rng = StdRng::seed_from_u64(10_000);
    compare_with_native::<10000>(&mut rng, 1000, 1);
}

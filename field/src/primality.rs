use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

// The first twelve primes. Miller-Rabin with these witnesses is exact for
// every n < 3.3 * 10^24.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin primality test.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if let Some(small) = n.to_u32() {
        if small < 2 {
            return false;
        }
        if WITNESSES.contains(&small) {
            return true;
        }
    }
    if WITNESSES.iter().any(|&w| (n % w).to_u32() == Some(0)) {
        return false;
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &w in WITNESSES.iter() {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli at startup, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
///
/// Each step computes `C(n, i) = C(n, i - 1) * (n - i + 1) / i`, which is
/// always an exact division.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: usize = 1;
    for i in 1..=k {
        // c * (n - i + 1) is divisible by i; divide by the gcd first to delay overflow.
        let num = n - i + 1;
        let g = gcd(c as u64, i as u64) as usize;
        let (c_red, i_red) = (c / g, i / g);
        c = c_red.checked_mul(num / i_red)?;
    }
    Some(c)
}

/// Number of subsets of an `n`-set with at most `k` elements:
/// `Σ_{i=0}^{k} C(n, i)`, or `None` on overflow.
///
/// Terms are derived from their predecessor, never from factorials.
pub fn binomial_sum(n: usize, k: usize) -> Option<usize> {
    let mut sum: usize = 1;
    let mut term: usize = 1;
    for i in 1..=k.min(n) {
        let g = gcd(term as u64, i as u64) as usize;
        term = (term / g).checked_mul((n - i + 1) / (i / g))?;
        sum = sum.checked_add(term)?;
    }
    Some(sum)
}

/// Greatest common divisor.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

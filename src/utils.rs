//! Assorted utilities and helpers.
//!
//! These are intentionally minimal; the bound oracle is the main consumer.

/// Binomial coefficient `C(n, k)` over `u128`, saturating on overflow.
///
/// Returns 0 for negative arguments or `k > n`, matching the convention the
/// ball-size recursions in [`crate::bounds`] rely on.
#[inline]
pub fn binomial(n: i64, k: i64) -> u128 {
    if n < 0 || k < 0 || k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u128::MAX,
        };
    }
    acc
}

/// Render symbols as a space-separated line, the same layout the trace
/// files use.
pub fn format_symbols(symbols: &[u8]) -> String {
    let mut out = String::with_capacity(symbols.len() * 2);
    for (i, s) in symbols.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&s.to_string());
    }
    out
}

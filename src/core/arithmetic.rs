//! Pure arithmetic for the calculator
//!
//! Every function here is deterministic and does no I/O. Input validation
//! happens at the CLI boundary, so these operate on already-checked values.

/// Add two 32-bit integers with native wraparound semantics.
///
/// Overflow is not guarded: `add(i32::MAX, 1)` wraps to `i32::MIN`, matching
/// the platform integer behavior scripted callers rely on.
#[must_use]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two 32-bit integers in 64-bit precision.
///
/// Widening before the multiplication makes the product of any two `i32`
/// values exact; it cannot overflow an `i64`.
#[must_use]
pub fn multiply(a: i32, b: i32) -> i64 {
    i64::from(a) * i64::from(b)
}

/// Compute the Fibonacci number at `n`, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// Runs iteratively in constant space. Positions above 92 exceed the exact
/// `i64` range and wrap like native 64-bit arithmetic.
#[must_use]
pub fn fibonacci(n: u32) -> i64 {
    if n == 0 {
        return 0;
    }

    let mut prev: i64 = 0;
    let mut curr: i64 = 1;
    for _ in 2..=n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}

/// Sum the squares of all values in 64-bit precision.
///
/// Each square is exact for 32-bit input; the running sum wraps on 64-bit
/// overflow. An empty slice sums to zero.
#[must_use]
pub fn sum_of_squares(values: &[i32]) -> i64 {
    values
        .iter()
        .map(|&v| i64::from(v) * i64::from(v))
        .fold(0, i64::wrapping_add)
}

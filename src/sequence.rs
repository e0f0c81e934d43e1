//! Fibonacci numbers by naive double recursion.
//!
//! `fibonacci` recomputes overlapping subproblems and runs in exponential
//! time. Indices `n <= 1` are returned unchanged, which makes negative input
//! come back as itself.

use std::io::{self, Write};

/// Number of terms printed when no count is configured.
pub const DEFAULT_SEQUENCE_COUNT: u32 = 10;

/// The nth Fibonacci number. The addition wraps on overflow.
pub fn fibonacci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

/// Write `fibonacci(0)` through `fibonacci(count - 1)`, each followed by a
/// single space. No trailing newline.
pub fn write_sequence<W: Write>(out: &mut W, count: u32) -> io::Result<()> {
    for i in 0..count {
        // indices past i32::MAX clamp
        let n = i32::try_from(i).unwrap_or(i32::MAX);
        write!(out, "{} ", fibonacci(n))?;
    }
    Ok(())
}

/// Print the first `count` Fibonacci numbers to stdout.
pub fn print_sequence(count: u32) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_sequence(&mut lock, count)?;
    lock.flush()
}

pub fn sequence_string(count: u32) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sequence(&mut buf, count);
    String::from_utf8_lossy(&buf).into_owned()
}

//! crypto-bmark significant digits formatting.

use std::time::Duration;

/// Significant digits used when reporting timings.
pub const PRECISION: usize = 4;

/// Formats a float number with precision in the sense of number of significant digits.
pub fn precision(float: f64, prec: usize) -> String {
    let a = float.abs();

    let decimals = if a >= 1. {
        // digits before the point eat into the budget
        let n = (1. + a.log10().floor()) as usize;
        prec.saturating_sub(n)
    } else if a > 0. {
        // leading zeros after the point do not count
        let n = -(1. + a.log10().floor()) as usize;
        prec + n
    } else {
        0
    };

    format!("{0:.1$}", float, decimals)
}

/// Formats a duration as milliseconds with [`PRECISION`] significant digits.
pub fn milliseconds(elapsed: Duration) -> String {
    precision(elapsed.as_nanos() as f64 / 1E6, PRECISION)
}

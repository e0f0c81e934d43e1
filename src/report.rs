//! Output of the demo driver: a greeting, the three basic operations on the
//! configured operands, and the parity of the first operand.

use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::DemoConfig;
use crate::math_utils::{average, square_sum};
use crate::utils::{add, is_even, multiply, subtract};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub greeting: String,
    pub a: i32,
    pub b: i32,
    pub sum: i32,
    pub difference: i32,
    pub product: i32,
    pub a_is_even: bool,
    pub square_sum: i32,
    pub average: f64,
}

impl Report {
    pub fn compute(config: &DemoConfig) -> Self {
        let (a, b) = (config.a, config.b);
        debug!(a, b, "computing demo report");
        Self {
            greeting: config.greeting.clone(),
            a,
            b,
            sum: add(a, b),
            difference: subtract(a, b),
            product: multiply(a, b),
            a_is_even: is_even(a),
            square_sum: square_sum(a, b),
            average: average(a, b),
        }
    }

    /// Write the plain-text report. `extended` appends the square-sum and
    /// average lines.
    pub fn write_text<W: Write>(&self, out: &mut W, extended: bool) -> io::Result<()> {
        let (a, b) = (self.a, self.b);
        writeln!(out, "{}", self.greeting)?;
        writeln!(out, "{a} + {b} = {}", self.sum)?;
        writeln!(out, "{a} - {b} = {}", self.difference)?;
        writeln!(out, "{a} * {b} = {}", self.product)?;
        if self.a_is_even {
            writeln!(out, "{a} is even")?;
        } else {
            writeln!(out, "{a} is odd")?;
        }
        if extended {
            writeln!(out, "{a}^2 + {b}^2 = {}", self.square_sum)?;
            writeln!(out, "avg({a}, {b}) = {:.2}", self.average)?;
        }
        Ok(())
    }

    pub fn to_text(&self, extended: bool) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_text(&mut buf, extended);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

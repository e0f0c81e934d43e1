pub mod diagnostics;
pub mod utils;
pub mod math_utils;
pub mod sequence;
pub mod config;
pub mod report;

pub use diagnostics::NumkitError;
pub use math_utils::{average, square_sum};
pub use sequence::{fibonacci, print_sequence, sequence_string, write_sequence};
pub use utils::{add, is_even, multiply, subtract};

use std::io::Write;

use config::DemoConfig;
use report::Report;

/// Output format for the demo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run the demo driver against `config` and write its report to `out`.
pub fn run_demo<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    format: OutputFormat,
    extended: bool,
) -> Result<(), NumkitError> {
    let report = Report::compute(config);
    match format {
        OutputFormat::Text => report.write_text(out, extended)?,
        OutputFormat::Json => {
            let json = report
                .to_json()
                .map_err(|e| NumkitError::io(format!("failed to serialize report: {e}")))?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}

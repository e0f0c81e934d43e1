use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use numkit::config::Config;
use numkit::diagnostics::{render_error, NumkitError};
use numkit::OutputFormat;

/// Indices above this take noticeably long with naive recursion.
const SLOW_FIBONACCI_INDEX: i64 = 40;

fn is_slow_index(n: i64) -> bool {
    n > SLOW_FIBONACCI_INDEX
}

/// A sequence of `count` terms ends at index `count - 1`.
fn is_slow_sequence(count: u32) -> bool {
    count > 0 && is_slow_index(i64::from(count) - 1)
}

#[derive(Parser)]
#[command(name = "numkit", version, about = "Small arithmetic helpers and a Fibonacci printer")]
struct Cli {
    /// Path to a numkit.toml config (defaults to ./numkit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the greeting, basic arithmetic and parity of two operands
    #[command(allow_negative_numbers = true)]
    Demo {
        /// First operand (overrides config)
        #[arg(long)]
        a: Option<i32>,
        /// Second operand (overrides config)
        #[arg(long)]
        b: Option<i32>,
        /// Also print the square sum and average
        #[arg(long)]
        extended: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the first COUNT Fibonacci numbers, space-separated
    Sequence {
        /// Number of terms (defaults to config, then 10)
        count: Option<u32>,
    },
    /// Apply one binary operation to two integers
    #[command(allow_negative_numbers = true)]
    Eval {
        op: Op,
        a: i32,
        b: i32,
    },
    /// Report whether an integer is even or odd
    #[command(allow_negative_numbers = true)]
    Parity {
        n: i32,
    },
    /// Print the nth Fibonacci number
    #[command(allow_negative_numbers = true)]
    Fib {
        n: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Add,
    Subtract,
    Multiply,
    SquareSum,
    Average,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config, NumkitError> {
    let cwd = std::env::current_dir()?;
    Config::discover(explicit, &cwd)
}

fn run(cli: Cli) -> Result<(), NumkitError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let command = cli.command.unwrap_or(Commands::Demo {
        a: None,
        b: None,
        extended: false,
        format: Format::Text,
    });

    match command {
        Commands::Demo { a, b, extended, format } => {
            let mut demo = load_config(cli.config.as_deref())?.demo;
            if let Some(a) = a {
                demo.a = a;
            }
            if let Some(b) = b {
                demo.b = b;
            }
            info!(a = demo.a, b = demo.b, extended, "running demo");
            numkit::run_demo(&mut out, &demo, format.into(), extended)?;
        }
        Commands::Sequence { count } => {
            let count = match count {
                Some(c) => c,
                None => load_config(cli.config.as_deref())?.sequence.count,
            };
            if is_slow_sequence(count) {
                warn!(count, "naive recursion is exponential; this may take a long time");
            }
            info!(count, "printing fibonacci sequence");
            numkit::print_sequence(count)?;
        }
        Commands::Eval { op, a, b } => {
            info!(?op, a, b, "evaluating");
            match op {
                Op::Add => writeln!(out, "{}", numkit::add(a, b))?,
                Op::Subtract => writeln!(out, "{}", numkit::subtract(a, b))?,
                Op::Multiply => writeln!(out, "{}", numkit::multiply(a, b))?,
                Op::SquareSum => writeln!(out, "{}", numkit::square_sum(a, b))?,
                Op::Average => writeln!(out, "{}", numkit::average(a, b))?,
            }
        }
        Commands::Parity { n } => {
            if numkit::is_even(n) {
                writeln!(out, "{n} is even")?;
            } else {
                writeln!(out, "{n} is odd")?;
            }
        }
        Commands::Fib { n } => {
            if is_slow_index(i64::from(n)) {
                warn!(n, "naive recursion is exponential; this may take a long time");
            }
            writeln!(out, "{}", numkit::fibonacci(n))?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        render_error(&err);
        std::process::exit(1);
    }
}

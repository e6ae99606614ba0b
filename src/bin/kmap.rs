//! Karnaugh-map simplifier - Command Line Interface
//!
//! Reads a boolean expression, prints its truth table, map, regions and the
//! simplified function.

use clap::{ArgAction, Parser};
use kmap_logic::{Analysis, KmapError, Reduction, SimplifyOptions, VariableList};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Truth table, Karnaugh map and region-based simplification", long_about = None)]
#[command(version)]
struct Args {
    /// Boolean expression, e.g. "a and not b or c" (read from stdin if omitted)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Variable order, e.g. "cba" (default: sorted names from the expression)
    #[arg(short = 'n', long = "variables")]
    variables: Option<String>,

    /// Collapse regions that cover a whole subcube to their shared literals
    #[arg(short = 'r', long = "reduce")]
    reduce: bool,

    /// Marker appended to complemented variables
    #[arg(short = 'm', long = "marker", default_value_t = '\'')]
    marker: char,

    /// Print only the simplified function
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_expression() -> io::Result<String> {
    print!("Enter the logic function (operators: and, or, not; single-letter variables): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn analyse(args: &Args, input: &str) -> Result<Analysis, KmapError> {
    let options = SimplifyOptions {
        complement_marker: args.marker,
        reduction: if args.reduce {
            Reduction::CommonLiterals
        } else {
            Reduction::None
        },
        ..SimplifyOptions::default()
    };

    match &args.variables {
        Some(order) => {
            let variables = VariableList::parse(order)?;
            Analysis::from_expression_with_variables(input, &variables, &options)
        }
        None => Analysis::from_expression(input, &options),
    }
}

fn print_report(analysis: &Analysis) {
    println!();
    println!("Truth table {}:", analysis.variables());
    print!("{}", analysis.table());

    println!();
    println!("Karnaugh map:");
    print!("{}", analysis.map());

    println!();
    println!("Regions of 1s:");
    for region in analysis.regions() {
        println!("{}", region);
    }

    println!();
    println!("Simplified function:");
    println!("{}", analysis.expression());
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = match &args.expression {
        Some(expr) => expr.clone(),
        None => match read_expression() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading expression: {}", e);
                process::exit(1);
            }
        },
    };

    let analysis = match analyse(&args, &input) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.quiet {
        println!("{}", analysis.expression());
    } else {
        print_report(&analysis);
    }
}

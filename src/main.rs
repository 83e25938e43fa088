//! Ledger reconciliation CLI
//!
//! Reads two headerless transaction CSVs and prints both ledgers sorted,
//! each row tagged `FOUND` or `MISSING`, separated by a blank line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions1.csv transactions2.csv > reconciled.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use coding_exercises::{read_transactions, write_reconciled, ExerciseError, Reconciler, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(ExerciseError::MissingArgument);
    }

    let left = read_transactions(open(&args[1])?)?;
    let right = read_transactions(open(&args[2])?)?;

    let (left, right) = Reconciler::new().reconcile(left, right);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_reconciled(&mut handle, &left)?;
    writeln!(handle)?;
    write_reconciled(&mut handle, &right)?;

    Ok(())
}

fn open(path: &str) -> Result<BufReader<File>> {
    let path = Path::new(path);
    let file = File::open(path).map_err(|e| ExerciseError::from_open(path, e))?;
    Ok(BufReader::new(file))
}

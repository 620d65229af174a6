extern crate clap;
extern crate itertools;
extern crate tracing;
extern crate tracing_subscriber;

use std::io;
use std::io::prelude::*;
use std::process;

use clap::{App, Arg, ArgMatches};

use tracing::{debug, Level};

mod array;
mod containers;
mod error;
mod list;
mod printer;
mod rawarray;
mod tuple;
mod value;

use crate::containers::{Container, ContainerFromSlice};
use crate::error::{ErrorKind, RuntimeError};
use crate::list::List;
use crate::printer::Print;
use crate::tuple::ValueTuple;
use crate::value::Value;

/// Build a tuple and a list over the same three values and print both
fn run_demo<W: Write>(out: &mut W) -> Result<(), RuntimeError> {
    let data_int = Value::Int(42);
    let data_float = Value::Float(3.14);
    let data_char = Value::Char('A');

    let elements = [Some(&data_int), Some(&data_float), Some(&data_char)];

    let tuple = ValueTuple::new("mytuple", &elements)?;
    tuple.print(out)?;

    let list = List::from_slice(&elements)?;
    debug!(
        length = list.length(),
        capacity = list.capacity(),
        "list contents {}",
        printer::debug(&elements)
    );
    list.print(out)?;

    list.release();
    tuple.release();

    Ok(())
}

/// Exit status for a failed run. A closed stdout ends the run quietly.
fn exit_status(err: &RuntimeError) -> i32 {
    match err.error_kind() {
        ErrorKind::BrokenPipe => 0,
        _ if err.is_allocation_failure() => 1,
        _ => 2,
    }
}

/// Map repeated -v flags onto a log level; diagnostics always go to stderr
fn init_logging(matches: &ArgMatches) {
    let level = match matches.occurrences_of("verbose") {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let matches = App::new("tuplist")
        .about("Print a fixed tuple and a growable list of tagged values")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log allocations to stderr; repeat for more detail"),
        )
        .get_matches();

    init_logging(&matches);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_demo(&mut out).unwrap_or_else(|err| {
        if *err.error_kind() != ErrorKind::BrokenPipe {
            eprintln!("Terminated: {}", err);
        }
        process::exit(exit_status(&err));
    });
}

#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::process;

#[derive(Debug)]
enum IoErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Zasm(zasm::Error),
    Io(io::Error, IoErrorContext, String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, name) => writeln!(
                f,
                "{} \"{}\" failed: {}",
                match context {
                    IoErrorContext::ReadInput => "Reading input",
                    IoErrorContext::WriteOutput => "Writing output",
                },
                name,
                err
            ),
            Error::Zasm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use (standard input when omitted)")
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the output file to write to (standard output when omitted)"),
        )
        .get_matches();

    let input = matches.value_of("INPUT");
    let output = matches.value_of("output");

    if let Err(err) = zasm_run(input, output) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn zasm_run(input: Option<&str>, output: Option<&str>) -> Result<(), Error> {
    let source = read_input(input)?;

    let assembled = zasm::assemble(&source).map_err(Error::Zasm)?;
    let line = util::hex_line(assembled.text());

    write_output(output, &line)
}

fn read_input(input: Option<&str>) -> Result<String, Error> {
    let mut source = String::new();
    match input {
        Some(path) => {
            let read_err = |err| {
                Error::Io(err, IoErrorContext::ReadInput, path.to_owned())
            };
            let file = File::open(Path::new(path)).map_err(read_err)?;
            BufReader::new(file)
                .read_to_string(&mut source)
                .map_err(read_err)?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| Error::Io(err, IoErrorContext::ReadInput, "<stdin>".to_owned()))?;
        }
    }
    Ok(source)
}

fn write_output(output: Option<&str>, line: &str) -> Result<(), Error> {
    match output {
        Some(path) => {
            let write_err = |err| {
                Error::Io(err, IoErrorContext::WriteOutput, path.to_owned())
            };
            let file = File::create(Path::new(path)).map_err(write_err)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(line.as_bytes()).map_err(write_err)?;
            writer.flush().map_err(write_err)
        }
        None => io::stdout()
            .write_all(line.as_bytes())
            .map_err(|err| Error::Io(err, IoErrorContext::WriteOutput, "<stdout>".to_owned())),
    }
}

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs;
use std::io::{self, Read};

use crate::adapters::request::{Evaluation, Request};
use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(author, version, about = "CTD sensor conversions: evaluate one transform from a JSON request", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(long, short, help = "Print transform diagnostics to stderr")]
    verbose: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with the transform request; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON transform request (overrides --input)"
    )]
    inputs_json: Option<String>,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn init_logging(args: &Args) {
    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

fn parse_cmd_input_doc(doc: &str) -> Result<Request, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })
}

pub fn parse_request(args: &Args) -> Result<Request, AppError> {
    match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => serde_json::from_str(inputs_json)
            .map_err(|source| AppError::ParseInputsJson { source }),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

pub fn print_output(out: &Evaluation, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("{}: {:.6}", out.transform, out.value);
    }

    Ok(())
}

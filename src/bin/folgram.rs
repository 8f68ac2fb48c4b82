//! folgram CLI
//!
//! Reads a definition file, validates and parses its formula, and writes
//! the derived grammar and the parse tree next to each other in `--out-dir`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use folgram::diagnostics::{DiagnosticsSink, NullSink};
use folgram::errors::LoadError;
use folgram::export::to_dot;
use folgram::parser::DEFAULT_MAX_DEPTH;
use folgram::pipeline::{Pipeline, PipelineOptions};
use folgram::project::{LogFileSink, OutputPaths, read_definition, write_output};

#[derive(Parser)]
#[command(name = "folgram")]
#[command(
    about = "Validate a first-order logic definition file, parse its formula and derive its grammar"
)]
struct Args {
    /// Definition file (.txt)
    input: PathBuf,

    /// Directory for the grammar and parse tree outputs
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Log file receiving one OK/ERR line per run
    #[arg(long, default_value = "logfile.log")]
    log: PathBuf,

    /// Do not append to the log file
    #[arg(long)]
    no_log: bool,

    /// Maximum formula nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Echo the grammar and parse tree to stdout
    #[arg(long)]
    print: bool,

    /// Also write the result as JSON (needs the `serde` feature)
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FOLGRAM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = if args.no_log {
        run(&args, NullSink)
    } else {
        run(&args, LogFileSink::new(&args.log))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: DiagnosticsSink>(args: &Args, sink: S) -> anyhow::Result<()> {
    #[cfg(not(feature = "serde"))]
    if args.json {
        anyhow::bail!("--json requires folgram to be built with the `serde` feature");
    }

    let input_name = input_name(&args.input);
    let options = PipelineOptions::default()
        .with_max_depth(args.max_depth)
        .with_input_name(&input_name);
    let pipeline = Pipeline::new(options, sink);

    // I/O failures outside the pipeline still get their ERR line
    let record = |e: LoadError| {
        let error = folgram::Error::from(e);
        pipeline.record_failure(&error);
        anyhow::Error::from(error)
    };

    let lines = read_definition(&args.input).map_err(record)?;
    let output = pipeline.run_lines(&lines)?;

    let paths = OutputPaths::for_input(&args.input, &args.out_dir, Local::now());
    let report = output.grammar.report(&input_name);
    let dot = to_dot(&output.tree);
    write_output(&paths.grammar, &report).map_err(record)?;
    write_output(&paths.parse_tree, &dot).map_err(record)?;
    info!(
        grammar = %paths.grammar.display(),
        parse_tree = %paths.parse_tree.display(),
        "outputs written"
    );

    #[cfg(feature = "serde")]
    if args.json {
        let json_path = paths.grammar.with_extension("json");
        let json = folgram::export::to_json(&input_name, &output)?;
        write_output(&json_path, &json).map_err(record)?;
    }

    if args.print {
        println!("{report}");
        println!("{}", output.tree);
    }
    println!("{}", folgram::pipeline::SUCCESS_MESSAGE);
    Ok(())
}

fn input_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
